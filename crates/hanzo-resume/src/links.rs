//! Classified links and order-preserving deduplication

use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A URL together with its platform label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkUrl {
    pub platform: Platform,
    pub url: String,
}

impl LinkUrl {
    /// Build a link and classify it
    pub fn classify(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            platform: Platform::classify(&url),
            url,
        }
    }

    /// Build a link with no platform label
    pub fn unclassified(url: impl Into<String>) -> Self {
        Self {
            platform: Platform::Url,
            url: url.into(),
        }
    }
}

/// Keep the first link for every distinct URL string, preserving order.
/// Keys are compared exactly (case-sensitive, no normalization).
pub fn dedup_links(links: impl IntoIterator<Item = LinkUrl>) -> Vec<LinkUrl> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.url.clone()))
        .collect()
}

/// Merge format-native links with text-harvested ones. Native links come
/// first, so they win when both sources carry the same URL.
pub fn merge_links(native: Vec<LinkUrl>, harvested: Vec<LinkUrl>) -> Vec<LinkUrl> {
    dedup_links(native.into_iter().chain(harvested))
}
