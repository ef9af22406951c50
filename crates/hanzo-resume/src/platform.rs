//! Platform classification for discovered links

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse origin service of a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    GitHub,
    #[serde(rename = "Twitter/X")]
    TwitterX,
    Portfolio,
    Medium,
    #[serde(rename = "Stack Overflow")]
    StackOverflow,
    Behance,
    Dribbble,
    /// No known platform matched
    #[serde(rename = "URL")]
    Url,
}

/// Ordered keyword table. The first entry with a matching fragment wins,
/// so a github.com page with "portfolio" in its path stays GitHub.
const PLATFORM_KEYWORDS: &[(Platform, &[&str])] = &[
    (Platform::LinkedIn, &["linkedin.com"]),
    (Platform::GitHub, &["github.com"]),
    (Platform::TwitterX, &["twitter.com", "x.com"]),
    (Platform::Portfolio, &["portfolio", "personal"]),
    (Platform::Medium, &["medium.com"]),
    (Platform::StackOverflow, &["stackoverflow.com"]),
    (Platform::Behance, &["behance.net"]),
    (Platform::Dribbble, &["dribbble.com"]),
];

impl Platform {
    /// Classify a URL by case-insensitive substring match
    pub fn classify(url: &str) -> Self {
        let url_lower = url.to_lowercase();
        PLATFORM_KEYWORDS
            .iter()
            .find(|(_, fragments)| fragments.iter().any(|f| url_lower.contains(f)))
            .map(|(platform, _)| *platform)
            .unwrap_or(Platform::Url)
    }

    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::GitHub => "GitHub",
            Platform::TwitterX => "Twitter/X",
            Platform::Portfolio => "Portfolio",
            Platform::Medium => "Medium",
            Platform::StackOverflow => "Stack Overflow",
            Platform::Behance => "Behance",
            Platform::Dribbble => "Dribbble",
            Platform::Url => "URL",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
