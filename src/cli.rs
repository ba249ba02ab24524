use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "github-trending")]
#[command(about = "List trending GitHub repositories and open them in the browser")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub token, raises the API rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_BASE", default_value = "https://api.github.com")]
    pub api_base: String,

    /// Consider repositories created within this many days
    #[arg(long, default_value_t = 7)]
    pub window_days: u32,

    /// Number of repositories to list (max 100)
    #[arg(long, default_value_t = 25)]
    pub per_page: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a search the way the launcher would
    Search {
        /// Search text, accepted but not used for filtering
        #[arg(default_value = "")]
        query: String,

        /// Print reply events and results as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Open a result id in the default browser
    Open {
        /// Item id as returned by search
        id: String,
    },
}
