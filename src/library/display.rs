use std::time::Duration;

/// Format a duration as `m:ss`, or `--:--` when unknown.
pub fn format_duration(d: Option<Duration>) -> String {
    match d {
        Some(d) => {
            let secs = d.as_secs();
            format!("{}:{:02}", secs / 60, secs % 60)
        }
        None => "--:--".to_string(),
    }
}

pub fn artist_or_unknown(artist: Option<&str>) -> &str {
    artist
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown")
}
