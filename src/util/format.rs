//! Display formatting for scores, progress and durations

use std::time::Duration;

/// Format a whole percentage
///
/// # Examples
/// ```
/// use pybrix_trainer::util::format::format_percentage;
///
/// assert_eq!(format_percentage(87), "87%");
/// ```
pub fn format_percentage(percentage: u32) -> String {
    format!("{}%", percentage)
}

/// Format a score as "score / total"
pub fn format_score(score: usize, total: usize) -> String {
    format!("{} / {}", score, total)
}

/// Progress line shown above each question
///
/// # Examples
/// ```
/// use pybrix_trainer::util::format::progress_label;
///
/// assert_eq!(progress_label(3, 23), "Question 3 of 23");
/// ```
pub fn progress_label(number: usize, total: usize) -> String {
    format!("Question {} of {}", number, total)
}

/// Human-readable duration truncated to whole seconds
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use pybrix_trainer::util::format::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_millis(192_400)), "3m 12s");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let whole = Duration::from_secs(elapsed.as_secs());
    if whole.is_zero() {
        return "under a second".to_string();
    }
    humantime::format_duration(whole).to_string()
}
