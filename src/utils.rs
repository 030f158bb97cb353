/*!
 * Utility functions for treeclip
 */

/// Format a byte count with one decimal place and a unit suffix, e.g.
/// `0.0B`, `1.5KB`, `3.2MB`.
pub fn format_file_size(size: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = size as f64;
    if size >= GB {
        format!("{:.1}GB", size / GB)
    } else if size >= MB {
        format!("{:.1}MB", size / MB)
    } else if size >= KB {
        format!("{:.1}KB", size / KB)
    } else {
        format!("{:.1}B", size)
    }
}
