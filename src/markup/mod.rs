use once_cell::sync::Lazy;
use regex::Regex;

// Models wrap the document in a markdown fence despite being told not to.
static OPENING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*```html\s*").expect("valid opening fence regex"));
static CLOSING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*```\s*$").expect("valid closing fence regex"));

/// Removes an opening ```` ```html ```` marker and a trailing ```` ``` ````, then trims.
pub fn strip_code_fence(text: &str) -> String {
    let without_open = OPENING_FENCE.replace(text, "");
    let without_close = CLOSING_FENCE.replace(&without_open, "");
    without_close.trim().to_string()
}
