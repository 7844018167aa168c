//! Elapsed-time formatting for progress logs.

use std::time::Duration;

/// Formats a duration as `MMminSSsecMMms`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hard_route::timing::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(61_005)), "01min01sec05ms");
/// ```
pub fn format_duration(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let minutes = millis / 60_000;
    let seconds = (millis / 1000) % 60;
    let rest = millis % 1000;
    format!("{minutes:02}min{seconds:02}sec{rest:02}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "00min00sec00ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "00min00sec999ms");
        assert_eq!(
            format_duration(Duration::from_millis(125_250)),
            "02min05sec250ms"
        );
    }
}
