//! Hashtag extraction / 话题标签提取
//!
//! A hashtag is `#` followed by a run of word characters (letters of any
//! script, digits, underscore). Names are kept without the `#`; the store
//! keeps them with it.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Normalized hashtag names / 标签名集合
pub type HashtagSet = BTreeSet<String>;

/// Prefix carried by stored hashtag values
pub const HASHTAG_PREFIX: char = '#';

static HASHTAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\w+)").expect("hashtag pattern is valid"));

/// Extract the distinct hashtag names in `text` / 提取文本中的标签
///
/// Matches are left-to-right and non-overlapping; punctuation or whitespace
/// ends a name, so `#Spring-Boot` yields `Spring`. Case is preserved.
pub fn extract(text: Option<&str>) -> HashtagSet {
    let Some(text) = text else {
        return HashtagSet::new();
    };

    HASHTAG_PATTERN
        .captures_iter(text.trim())
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `java` -> `#java`
pub fn to_stored(name: &str) -> String {
    format!("{}{}", HASHTAG_PREFIX, name)
}

/// `#java` -> `java`; values without the prefix are returned unchanged
pub fn from_stored(value: &str) -> &str {
    value.strip_prefix(HASHTAG_PREFIX).unwrap_or(value)
}
