use chrono::NaiveDate;

use press_app::carver::{CARVER_QUOTE, PRINCIPLES_TEXT};
use press_app::principles::{render, render_bytes};
use press_core::PressConfig;
use press_docs::normalize::{is_normalized, to_ascii};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
}

#[test]
fn quote_normalization_is_idempotent() {
    let once = to_ascii(CARVER_QUOTE);
    assert!(is_normalized(&once));
    assert_eq!(to_ascii(&once), once);
    assert!(once.starts_with("\"It is not the style"));
    assert!(once.ends_with("measures success.\""));
}

#[test]
fn normalization_touches_only_mapped_characters() {
    let original = "service that measures success\u{201D} \u{2014} G.W.C.";
    let normalized = to_ascii(original);
    assert_eq!(normalized, "service that measures success\" - G.W.C.");
    assert_eq!(original.chars().count(), normalized.chars().count());
}

#[test]
fn principles_text_is_already_ascii() {
    assert_eq!(to_ascii(PRINCIPLES_TEXT), PRINCIPLES_TEXT);
}

#[test]
fn same_day_renders_are_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let first = PressConfig {
        pdf_path: tmp.path().join("first.pdf"),
        ..PressConfig::default()
    };
    let second = PressConfig {
        pdf_path: tmp.path().join("second.pdf"),
        ..PressConfig::default()
    };

    render(&first, date(15)).unwrap();
    render(&second, date(15)).unwrap();
    assert_eq!(
        std::fs::read(&first.pdf_path).unwrap(),
        std::fs::read(&second.pdf_path).unwrap()
    );
}

#[test]
fn renders_differ_only_in_footer_date() {
    let a = String::from_utf8(render_bytes(date(15)).unwrap()).unwrap();
    let b = String::from_utf8(render_bytes(date(16)).unwrap()).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.replace("2026-10-15", "2026-10-16"), b);
}

#[test]
fn render_overwrites_existing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = PressConfig {
        pdf_path: tmp.path().join("sheet.pdf"),
        ..PressConfig::default()
    };
    std::fs::write(&config.pdf_path, "old").unwrap();

    let path = render(&config, date(15)).unwrap();
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
}
