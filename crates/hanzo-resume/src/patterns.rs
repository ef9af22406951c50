//! Regex matchers for URLs, emails and phone numbers

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

// `$-_` is a range (0x24..=0x5F) and covers `/ : ; = ? A-Z` among others.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9]|[$-_@.&+]|[!*\(\),]|%[0-9a-fA-F]{2})+")
        .expect("url pattern is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("phone pattern is valid")
});

/// All URL matches in order of appearance, duplicates included
pub fn find_urls(text: &str) -> Vec<&str> {
    URL_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Unique email addresses
pub fn find_emails(text: &str) -> BTreeSet<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Unique phone numbers, each the full matched text
pub fn find_phones(text: &str) -> BTreeSet<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of whitespace-delimited tokens
pub fn word_count(text: &str) -> usize {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
