//! Non-ASCII character scan
//!
//! Collects every character above code point 127 in a document together
//! with its occurrence count. Run after the punctuation pass to confirm
//! nothing non-ASCII is left in exported content.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

/// Every character above code point 127, sorted, with occurrence counts.
pub fn non_ascii_chars(text: &str) -> BTreeMap<char, usize> {
    let mut found = BTreeMap::new();
    for ch in text.chars() {
        if ch as u32 > 127 {
            *found.entry(ch).or_insert(0) += 1;
        }
    }
    found
}

/// One out-of-range character found by a scan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanEntry {
    pub character: char,
    pub codepoint: String,
    pub count: usize,
}

/// Machine-readable result of scanning one file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub path: String,
    pub characters: Vec<ScanEntry>,
}

impl ScanReport {
    /// Scan `text` (read from `path`) for characters above code point 127.
    pub fn new(path: &Path, text: &str) -> Self {
        let characters = non_ascii_chars(text)
            .into_iter()
            .map(|(ch, count)| ScanEntry {
                character: ch,
                codepoint: format!("U+{:04X}", ch as u32),
                count,
            })
            .collect();
        ScanReport {
            path: path.display().to_string(),
            characters,
        }
    }

    /// True when nothing above code point 127 was found.
    pub fn is_clean(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_only_text_is_clean() {
        assert!(non_ascii_chars("plain ascii, nothing else.").is_empty());
        assert!(ScanReport::new(Path::new("a.html"), "plain").is_clean());
    }

    #[test]
    fn characters_are_sorted_and_counted() {
        let found = non_ascii_chars("\u{2019}a\u{2014}b\u{2019}");
        let entries: Vec<(char, usize)> = found.into_iter().collect();
        assert_eq!(entries, vec![('\u{2014}', 1), ('\u{2019}', 2)]);
    }

    #[test]
    fn report_formats_codepoints() {
        let report = ScanReport::new(Path::new("a.html"), "\u{2014}");
        assert_eq!(report.characters[0].codepoint, "U+2014");
        assert_eq!(report.characters[0].count, 1);
    }
}
