/// Format milliseconds as "MM:SS.HH" (hundredths). Minutes are not wrapped
/// into hours and grow past two digits as needed.
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let m = total_secs / 60;
    let s = total_secs % 60;
    let cs = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", m, s, cs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00.00");
        assert_eq!(format_elapsed(9), "00:00.00");
        assert_eq!(format_elapsed(61_234), "01:01.23");
        assert_eq!(format_elapsed(59_999), "00:59.99");
    }

    #[test]
    fn test_format_elapsed_unbounded_minutes() {
        assert_eq!(format_elapsed(3_600_000), "60:00.00");
        assert_eq!(format_elapsed(6_000_000), "100:00.00");
    }
}
