use super::*;

#[test]
fn format_clock_time_extracts_hours_and_minutes() {
    assert_eq!(format_clock_time("2025-06-01T10:42:07Z"), "10:42");
}

#[test]
fn format_clock_time_passes_through_short_values() {
    assert_eq!(format_clock_time("now"), "now");
}

#[test]
fn format_token_count_small_values_verbatim() {
    assert_eq!(format_token_count(842), "842");
}

#[test]
fn format_token_count_thousands_abbreviated() {
    assert_eq!(format_token_count(1_234), "1.2k");
    assert_eq!(format_token_count(15_000), "15.0k");
}

#[test]
fn format_processing_time_tenths_of_seconds() {
    assert_eq!(format_processing_time(950), "0.9s");
    assert_eq!(format_processing_time(12_340), "12.3s");
}
