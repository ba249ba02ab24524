mod common;

use common::record;
use github_trending_plugin::format::{format, language_color, DEFAULT_LANGUAGE_COLOR};

#[test]
fn test_language_color_is_case_insensitive() {
    assert_eq!(language_color("Go"), "#00796b");
    assert_eq!(language_color("GO"), "#00796b");
    assert_eq!(language_color("go"), "#00796b");
    assert_eq!(language_color("c++"), "#e040fb");
    assert_eq!(language_color("C#"), "#ff4081");
    assert_eq!(language_color("JavaScript"), "#1976d2");
}

#[test]
fn test_unknown_language_uses_default() {
    assert_eq!(DEFAULT_LANGUAGE_COLOR, "#e65100");
    assert_eq!(language_color("Brainfuck"), DEFAULT_LANGUAGE_COLOR);
    assert_eq!(language_color("BRAINFUCK"), DEFAULT_LANGUAGE_COLOR);
    assert_eq!(language_color("none"), DEFAULT_LANGUAGE_COLOR);
    assert_eq!(language_color(""), DEFAULT_LANGUAGE_COLOR);
}

#[test]
fn test_empty_language_renders_none_badge() {
    let items = format(&[record("https://github.com/o/t", "")]);

    assert_eq!(items.len(), 1);
    assert!(items[0].desc.contains(">None</span>"));
    assert!(items[0].desc.contains("background-color: #e65100;"));
}

#[test]
fn test_unknown_language_badge_keeps_original_name() {
    let items = format(&[record("https://github.com/o/t", "Brainfuck")]);

    assert!(items[0].desc.starts_with(
        "<span style='border-radius: 5px; background-color: #e65100; color: #ffffff; padding: 2px'>Brainfuck</span>"
    ));
    assert!(items[0].desc.ends_with(" / 5 / d"));
}

#[test]
fn test_format_maps_every_record_in_order() {
    let items = format(&[
        record("https://github.com/o/first", "Go"),
        record("https://github.com/o/second", "Swift"),
    ]);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "https://github.com/o/first");
    assert_eq!(items[1].id, "https://github.com/o/second");
    assert_eq!(items[1].title, "<b>t</b> by o");
    assert!(items[1].desc.contains("#2e7d32"));
    assert!(items.iter().all(|item| item.icon.is_none()));
}

#[test]
fn test_format_empty_input() {
    assert!(format(&[]).is_empty());
}
