//! Presence checks shared by record validations.

/// Returns `true` when a value is missing, empty, or only whitespace.
///
/// ```
/// use jungle_core::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some("")));
/// assert!(is_blank(Some("   ")));
/// assert!(!is_blank(Some("testing")));
/// ```
#[must_use]
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}
