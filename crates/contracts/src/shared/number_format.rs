/// Dot-separated thousands, as shown in the dashboard and the host logs:
/// `1234567` -> `"1.234.567"`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(100_000), "100.000");
        assert_eq!(format_thousands(1_234_567), "1.234.567");
        assert_eq!(format_thousands(u64::MAX), "18.446.744.073.709.551.615");
    }
}
