//! `M:SS` rendering of remaining time

/// Render remaining seconds as `M:SS`.
///
/// Whole seconds are taken by rounding down and negative values clamp to
/// zero. Minutes are not wrapped into hours, so one hour reads `60:00`.
///
/// Rounding down, not up: 0.4 s reads `0:00` and 59.9 s reads `0:59`. A
/// fresh reset therefore shows `2:59` within the first refresh, and `0:00`
/// holds steady through the final second before the expiry blink starts.
/// NaN and infinities render as `0:00`.
pub fn format_remaining(seconds: f64) -> String {
    let whole = if seconds.is_finite() {
        seconds.floor().max(0.0)
    } else {
        0.0
    };
    let total = whole as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
