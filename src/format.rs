use crate::models::{DisplayItem, RepositoryRecord};

/// Badge color for languages missing from the table.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#e65100";

/// Badge text used when a repository reports no language.
const NO_LANGUAGE: &str = "None";

/// Badge color for a language name, matched case-insensitively.
pub fn language_color(language: &str) -> &'static str {
    match language.to_lowercase().as_str() {
        "c" => "#ff5252",
        "c#" => "#ff4081",
        "c++" => "#e040fb",
        "css" => "#7c4dff",
        "html" => "#303f9f",
        "javascript" => "#1976d2",
        "python" => "#0288d1",
        "java" => "#0097a7",
        "go" => "#00796b",
        "swift" => "#2e7d32",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}

/// Map repository records to launcher items, preserving order.
pub fn format(records: &[RepositoryRecord]) -> Vec<DisplayItem> {
    records.iter().map(format_record).collect()
}

fn format_record(record: &RepositoryRecord) -> DisplayItem {
    let language = match record.language.as_str() {
        "" => NO_LANGUAGE,
        language => language,
    };

    DisplayItem {
        id: record.url.clone(),
        title: format!("<b>{}</b> by {}", record.title, record.owner),
        desc: format!(
            "{} / {} / {}",
            language_badge(language),
            record.star_count,
            record.description
        ),
        icon: None,
    }
}

fn language_badge(language: &str) -> String {
    format!(
        "<span style='border-radius: 5px; background-color: {}; color: #ffffff; padding: 2px'>{}</span>",
        language_color(language),
        language
    )
}

