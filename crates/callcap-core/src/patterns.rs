//! Extraction rules: one table and one compiled matcher per field or signal
//!
//! Digit and letter classes are ASCII (`[0-9]`, `[A-Za-z]`): `\d` would also
//! accept Devanagari and other Unicode digits. The name lead-ins are
//! word-bounded and need whitespace before the name, so `"hi amit"` is not
//! read as `i am` + `"it"`.

use regex::Regex;
use std::sync::OnceLock;

pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// India mobile: optional +91 prefix, then 10 digits starting 6-9
pub const PHONE_PATTERN: &str = r"(?:\+?91[- ]?)?[6-9][0-9]{9}\b";

/// Tax ID: 5 letters, 4 digits, 1 letter
pub const PAN_PATTERN: &str = r"\b[A-Za-z]{5}[0-9]{4}[A-Za-z]\b";

/// Tried in order within a turn; group 1 is the name
pub const NAME_PATTERNS: &[&str] = &[
    r"(?i)\bmy name is\s+([^,.!?\n]{1,40})",
    r"(?i)\bi am\s+([^,.!?\n]{1,40})",
    r"(?i)\bthis is\s+([^,.!?\n]{1,40})",
];

/// Group 2 is the identifier
pub const FAN_PATTERN: &str = r"(?i)fan\s*(id|number|details|model)\b[:\-]?\s*([A-Za-z0-9\-]{3,})";

/// Regex fragments signalling a failed capture attempt
pub const RETRY_PATTERNS: &[&str] = &[
    "could you repeat",
    "say again",
    "didn't catch",
    "pardon",
    "invalid",
    "not clear",
    "unclear",
    "silence",
    "sorry[, ]? i",
    "please repeat",
    "repeat that",
    "again please",
    "can you repeat",
];

/// Agent phrasings that ask the customer to confirm captured details
pub const CONFIRMATION_ASKS: &[&str] = &[
    "please confirm",
    "can you confirm",
    "is this correct",
    "does this look correct",
    "kindly confirm",
    "confirm the details",
];

/// Customer replies that count as a positive confirmation
pub const AFFIRMATIONS: &[&str] = &[
    "yes",
    "yeah",
    "yep",
    "correct",
    "that's right",
    "confirm",
    "ok",
    "okay",
    "haan",
    "ha",
    "theek",
    "bilkul",
];

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static PAN_RE: OnceLock<Regex> = OnceLock::new();
static NAME_RES: OnceLock<Vec<Regex>> = OnceLock::new();
static FAN_RE: OnceLock<Regex> = OnceLock::new();
static RETRY_RE: OnceLock<Regex> = OnceLock::new();
static CONFIRMATION_ASK_RE: OnceLock<Regex> = OnceLock::new();
static AFFIRMATION_RE: OnceLock<Regex> = OnceLock::new();

pub fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

pub fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(PHONE_PATTERN).unwrap())
}

pub fn pan_re() -> &'static Regex {
    PAN_RE.get_or_init(|| Regex::new(PAN_PATTERN).unwrap())
}

pub fn name_res() -> &'static [Regex] {
    NAME_RES.get_or_init(|| {
        NAME_PATTERNS
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect()
    })
}

pub fn fan_re() -> &'static Regex {
    FAN_RE.get_or_init(|| Regex::new(FAN_PATTERN).unwrap())
}

pub fn retry_re() -> &'static Regex {
    RETRY_RE.get_or_init(|| {
        Regex::new(&format!("(?i)(?:{})", RETRY_PATTERNS.join("|"))).unwrap()
    })
}

pub fn confirmation_ask_re() -> &'static Regex {
    CONFIRMATION_ASK_RE.get_or_init(|| Regex::new(&literal_alternation(CONFIRMATION_ASKS, false)).unwrap())
}

pub fn affirmation_re() -> &'static Regex {
    AFFIRMATION_RE.get_or_init(|| Regex::new(&literal_alternation(AFFIRMATIONS, true)).unwrap())
}

fn literal_alternation(phrases: &[&str], word_bounded: bool) -> String {
    let body = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    if word_bounded {
        format!(r"(?i)\b(?:{body})\b")
    } else {
        format!("(?i)(?:{body})")
    }
}
