use contracts::shared::number_format::format_thousands;

/// Response size for the request log; `"-"` when the body length is unknown.
pub fn format_size(len: Option<usize>) -> String {
    match len {
        Some(n) => format!("{} B", format_thousands(n as u64)),
        None => "-".to_string(),
    }
}
