//! Background task URL extraction.
//!
//! At the end of an upload the scanner prints where the server will report
//! on processing, e.g.
//!
//! ```text
//! INFO: More about the report processing at http://localhost:9000/api/ce/task?id=AXz
//! ```
//!
//! Older scanners use `INFO  - ` instead of `INFO: `.

/// Markers preceding the task URL, in the order they are checked.
pub const REPORT_URL_MARKERS: [&str; 2] = [
    "INFO: More about the report processing at",
    "INFO  - More about the report processing at",
];

/// Returns the task URL printed last in `lines`.
///
/// `None` means the log does not reference a background task, either
/// because no marker was found or because the last marker is not followed
/// by anything.
pub fn extract_report_url<I, S>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut url = String::new();
    for line in lines {
        let line = line.as_ref();
        for marker in REPORT_URL_MARKERS {
            if let Some((_, rest)) = line.split_once(marker) {
                url = after_marker(rest, marker).trim().to_string();
            }
        }
    }
    (!url.is_empty()).then_some(url)
}

// A repeated marker ends the URL.
fn after_marker<'a>(rest: &'a str, marker: &str) -> &'a str {
    rest.split_once(marker).map_or(rest, |(head, _)| head)
}
