//! Display formatting helpers for message metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Clock portion (`HH:MM`) of an ISO 8601 timestamp, or the raw string when
/// it is too short to carry one.
#[must_use]
pub fn format_clock_time(iso_timestamp: &str) -> String {
    iso_timestamp
        .get(11..16)
        .map_or_else(|| iso_timestamp.to_owned(), |clock| clock.to_owned())
}

/// Compact token count: `842`, `1.2k`.
#[must_use]
pub fn format_token_count(tokens: i64) -> String {
    if tokens < 1_000 {
        tokens.to_string()
    } else {
        #[allow(clippy::cast_precision_loss)]
        let thousands = tokens as f64 / 1_000.0;
        format!("{thousands:.1}k")
    }
}

/// Processing time in whole-tenth seconds: `0.9s`, `12.3s`.
#[must_use]
pub fn format_processing_time(ms: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let seconds = ms as f64 / 1_000.0;
    format!("{seconds:.1}s")
}
