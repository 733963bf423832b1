//! Pure input checks shared by the auth and upload flows.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

const MIN_PASSWORD_CHARS: usize = 8;
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

const STRENGTH_LABELS: [&str; 6] = ["", "Weak", "Fair", "Good", "Strong", "Very Strong"];

/// Requires a scheme and a host; relative references and `mailto:`-style
/// URIs without an authority are rejected.
pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).map(|url| url.has_host()).unwrap_or(false)
}

pub fn is_valid_email(raw: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(raw))
}

pub fn is_valid_phone(raw: &str) -> bool {
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CharClasses {
    lower: bool,
    upper: bool,
    digit: bool,
    other: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut seen, c| {
            if c.is_ascii_lowercase() {
                seen.lower = true;
            } else if c.is_ascii_uppercase() {
                seen.upper = true;
            } else if c.is_ascii_digit() {
                seen.digit = true;
            } else {
                seen.other = true;
            }
            seen
        })
    }
}

fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
    pub fn score(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        STRENGTH_LABELS[usize::from(self.0)]
    }
}

pub fn password_strength_score(password: &str) -> u8 {
    password_strength(password).score()
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let classes = CharClasses::of(password);
    let score = [
        long_enough(password),
        classes.lower,
        classes.upper,
        classes.digit,
        classes.other,
    ]
    .into_iter()
    .filter(|rule| *rule)
    .count();
    // Five rules, so the count always indexes STRENGTH_LABELS.
    PasswordStrength(score as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    /// Confirm field is empty; nothing to show yet.
    Neutral,
    Match,
    Mismatch,
}

impl PasswordMatch {
    pub fn message(self) -> &'static str {
        match self {
            PasswordMatch::Neutral => "",
            PasswordMatch::Match => "✓ Passwords match",
            PasswordMatch::Mismatch => "✗ Passwords do not match",
        }
    }
}

pub fn passwords_match(password: &str, confirm: &str) -> PasswordMatch {
    if confirm.is_empty() {
        PasswordMatch::Neutral
    } else if password == confirm {
        PasswordMatch::Match
    } else {
        PasswordMatch::Mismatch
    }
}

/// Submission rule: a special character adds to the displayed strength but
/// is not required here.
pub fn is_strong_password_for_submit(password: &str) -> bool {
    let classes = CharClasses::of(password);
    long_enough(password) && classes.lower && classes.upper && classes.digit
}
