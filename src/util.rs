//! Utility functions for issuemark

/// Formats byte count in kilobytes with exactly two decimal places
///
/// Never scales to larger units: downstream parsers of work item
/// descriptions expect the `KB` suffix for every attachment. The quotient
/// `bytes / 1024` is rounded half up on its exact value using integer
/// arithmetic, so output never depends on float formatting.
///
/// # Arguments
///
/// * `bytes`: File size in bytes
///
/// # Returns
///
/// Formatted string like "0.50 KB" or "102.40 KB"
pub fn format_size_kb(bytes: u64) -> String {
    let hundredths = (u128::from(bytes) * 100 + 512) / 1024;
    format!("{}.{:02} KB", hundredths / 100, hundredths % 100)
}

/// Formats byte count as human readable file size
///
/// Scales through B, KB, MB and GB using binary prefixes, keeping at most
/// two decimal places and trimming trailing zeros ("1.5 KB", "2 MB").
/// Used for the tables of user story descriptions.
///
/// # Arguments
///
/// * `bytes`: File size in bytes
///
/// # Returns
///
/// Formatted string like "512 B", "1.5 KB", or "2 MB"
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut divisor: u128 = 1;
    let mut order = 0;
    while u128::from(bytes) >= divisor * 1024 && order < UNITS.len() - 1 {
        divisor *= 1024;
        order += 1;
    }

    let hundredths = (u128::from(bytes) * 100 + divisor / 2) / divisor;
    let whole = hundredths / 100;
    let fraction = hundredths % 100;

    if fraction == 0 {
        format!("{} {}", whole, UNITS[order])
    } else if fraction % 10 == 0 {
        format!("{}.{} {}", whole, fraction / 10, UNITS[order])
    } else {
        format!("{}.{:02} {}", whole, fraction, UNITS[order])
    }
}

/// Returns text unchanged when it has visible content
pub fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
