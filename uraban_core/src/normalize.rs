use lazy_static::lazy_static;
use regex::Regex;

/// Display name substituted when a poster leaves the name field blank.
pub const ANONYMOUS_NAME: &str = "Anonymous";

lazy_static! {
    static ref EXCESS_NEWLINES: Regex = Regex::new(r"\n{3,}").expect("newline pattern");
}

/// Cleans a post body before it is handed to the store: runs of three or
/// more newlines collapse to a single paragraph break and surrounding
/// whitespace is trimmed. Applying it twice is a no-op. Callers treat an
/// empty result as "nothing to submit".
pub fn normalize(raw: &str) -> String {
    EXCESS_NEWLINES.replace_all(raw, "\n\n").trim().to_string()
}

/// Trimmed poster name, falling back to the anonymous placeholder.
pub fn poster_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
