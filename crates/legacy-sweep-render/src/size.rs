const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with binary (1024-based) scaling and one decimal place.
///
/// Anything of 1024 GB or more is expressed in TB, however large.
pub fn format_size(num_bytes: u64) -> String {
    let mut size = num_bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}
