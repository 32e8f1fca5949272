//! File-backed IPA lookup over open-dict-data ipa-dict files.
//!
//! The [ipa-dict](https://github.com/open-dict-data/ipa-dict) project
//! publishes per-variety pronunciation tables as plain text, one entry per
//! line:
//!
//! ```text
//! # comment
//! design\t/dɪˈzaɪn/
//! read\t/ˈrid/, /ˈrɛd/
//! ```
//!
//! [`IpaDict`] loads one or more varieties (e.g. `en_UK`, `en_US`) from a
//! data directory into memory and serves lookups from there; no I/O
//! happens after loading. Whole phrases missing from the table fall back
//! to joining the per-word first candidates.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vocab_rs::lookup::IpaDict;
//! use vocab_rs::parser::WordListParser;
//!
//! let mut dict = IpaDict::new("data");
//! dict.load_variety("en_UK")?;
//! dict.load_variety("en_US")?;
//!
//! let parser = WordListParser::with_lookup(dict);
//! let entries = parser.parse_text("1. design: (v) thiết kế");
//! # Ok::<(), vocab_rs::lookup::IpaDictError>(())
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::PronunciationLookup;

/// Errors from loading or exporting ipa-dict data.
#[derive(thiserror::Error, Debug)]
pub enum IpaDictError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid pronunciation JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(
        "No pronunciation data for {variety:?} at {path}. \
         Download it from https://github.com/open-dict-data/ipa-dict"
    )]
    VarietyNotFound { variety: String, path: String },
    #[error("Malformed entry at {path}:{line}: expected `word<TAB>pronunciation`")]
    MalformedEntry { path: String, line: usize },
}

/// In-memory pronunciation table built from ipa-dict files.
///
/// Words are keyed lowercase; candidates keep the order they were loaded
/// in, so earlier-loaded varieties win the "first candidate" slot.
pub struct IpaDict {
    data_dir: PathBuf,
    pronunciations: HashMap<String, Vec<String>>,
    loaded_varieties: Vec<String>,
}

impl IpaDict {
    /// Create an empty dictionary reading from `data_dir`. No I/O happens
    /// until [`load_variety`](Self::load_variety) is called.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            pronunciations: HashMap::new(),
            loaded_varieties: Vec::new(),
        }
    }

    /// Load `<data_dir>/<variety>.txt` (e.g. `en_US`) into the table.
    ///
    /// Blank lines and `#` comments are skipped. Comma-separated
    /// alternates on one line become separate candidates.
    pub fn load_variety(&mut self, variety: &str) -> Result<(), IpaDictError> {
        let path = self.data_dir.join(format!("{variety}.txt"));
        if !path.exists() {
            return Err(IpaDictError::VarietyNotFound {
                variety: variety.to_string(),
                path: path.display().to_string(),
            });
        }

        log::info!("Loading ipa-dict variety {variety} from {}", path.display());
        let contents = fs::read_to_string(&path)?;
        let mut added = 0usize;
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, candidates) =
                line.split_once('\t')
                    .ok_or_else(|| IpaDictError::MalformedEntry {
                        path: path.display().to_string(),
                        line: index + 1,
                    })?;
            let entry = self.pronunciations.entry(word.to_lowercase()).or_default();
            for candidate in candidates.split(',') {
                entry.push(candidate.trim().to_string());
                added += 1;
            }
        }
        log::debug!("Loaded {added} pronunciations for {variety}");

        self.loaded_varieties.push(variety.to_string());
        Ok(())
    }

    /// Add or update a custom pronunciation. Duplicates are ignored.
    pub fn add_pronunciation(&mut self, text: &str, pronunciation: &str) {
        let entry = self.pronunciations.entry(text.to_lowercase()).or_default();
        if !entry.iter().any(|existing| existing == pronunciation) {
            entry.push(pronunciation.to_string());
        }
    }

    /// Write the whole table to `path` in the ipa-dict input format
    /// (`word<TAB>pronunciation`, one candidate per line, sorted by word).
    pub fn export_to(&self, path: &Path) -> Result<(), IpaDictError> {
        let mut words: Vec<&String> = self.pronunciations.keys().collect();
        words.sort();
        let mut out = String::new();
        for word in words {
            for pronunciation in &self.pronunciations[word] {
                out.push_str(word);
                out.push('\t');
                out.push_str(pronunciation);
                out.push('\n');
            }
        }
        fs::write(path, out)?;
        Ok(())
    }

    /// Merge pronunciations from a JSON file of the shape
    /// `{"word": ["/pron/", ...], ...}`.
    pub fn import_json(&mut self, path: &Path) -> Result<(), IpaDictError> {
        let contents = fs::read_to_string(path)?;
        let imported: HashMap<String, Vec<String>> = serde_json::from_str(&contents)?;
        for (word, candidates) in imported {
            self.pronunciations
                .entry(word.to_lowercase())
                .or_default()
                .extend(candidates);
        }
        Ok(())
    }

    /// Variety codes loaded so far, in load order.
    pub fn varieties(&self) -> &[String] {
        &self.loaded_varieties
    }

    /// Number of distinct words in the table.
    pub fn word_count(&self) -> usize {
        self.pronunciations.len()
    }
}

impl PronunciationLookup for IpaDict {
    /// Case-insensitive lookup. A direct hit returns all candidates; a
    /// multi-word phrase with no direct entry falls back to the per-word
    /// first candidates joined with spaces (slashes dropped, since the
    /// joined text is no longer a single dictionary citation). Any missing
    /// word makes the phrase a miss.
    fn lookup(&self, word: &str) -> Vec<String> {
        let text = word.to_lowercase();
        if let Some(found) = self.pronunciations.get(&text) {
            return found.clone();
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() > 1 {
            let mut parts = Vec::with_capacity(words.len());
            for single in &words {
                match self.pronunciations.get(*single).and_then(|c| c.first()) {
                    Some(first) => parts.push(first.trim_matches('/').to_string()),
                    None => return Vec::new(),
                }
            }
            return vec![parts.join(" ")];
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{IpaDict, IpaDictError};
    use crate::PronunciationLookup;

    fn dict_with(file: &str, contents: &str) -> (tempfile::TempDir, IpaDict) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(file), contents).unwrap();
        let dict = IpaDict::new(dir.path());
        (dir, dict)
    }

    #[test]
    fn loads_variety_and_looks_up_case_insensitively() {
        let (_dir, mut dict) = dict_with("en_US.txt", "Design\t/dɪˈzaɪn/\n");
        dict.load_variety("en_US").unwrap();

        assert_eq!(dict.lookup("design"), vec!["/dɪˈzaɪn/"]);
        assert_eq!(dict.lookup("DESIGN"), vec!["/dɪˈzaɪn/"]);
        assert_eq!(dict.varieties(), &["en_US".to_string()]);
    }

    #[test]
    fn splits_comma_separated_alternates() {
        let (_dir, mut dict) = dict_with("en_US.txt", "read\t/ˈrid/, /ˈrɛd/\n");
        dict.load_variety("en_US").unwrap();
        assert_eq!(dict.lookup("read"), vec!["/ˈrid/", "/ˈrɛd/"]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let (_dir, mut dict) = dict_with(
            "en_US.txt",
            "# header comment\n\ndesign\t/dɪˈzaɪn/\n\n# trailer\n",
        );
        dict.load_variety("en_US").unwrap();
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn missing_variety_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = IpaDict::new(dir.path());
        let err = dict.load_variety("en_XX").unwrap_err();
        assert!(matches!(err, IpaDictError::VarietyNotFound { .. }));
    }

    #[test]
    fn malformed_entry_reports_line_number() {
        let (_dir, mut dict) = dict_with("en_US.txt", "design\t/dɪˈzaɪn/\nno tab here\n");
        let err = dict.load_variety("en_US").unwrap_err();
        match err {
            IpaDictError::MalformedEntry { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn earlier_loaded_variety_wins_first_slot() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en_UK.txt"), "colour\t/ˈkʌl.ər/\n").unwrap();
        fs::write(dir.path().join("en_US.txt"), "colour\t/ˈkʌlɚ/\n").unwrap();
        let mut dict = IpaDict::new(dir.path());
        dict.load_variety("en_UK").unwrap();
        dict.load_variety("en_US").unwrap();

        assert_eq!(dict.first("colour").as_deref(), Some("/ˈkʌl.ər/"));
        assert_eq!(dict.lookup("colour").len(), 2);
    }

    #[test]
    fn combines_phrase_from_per_word_entries() {
        let (_dir, mut dict) = dict_with(
            "en_US.txt",
            "climate\t/ˈklaɪmət/\nchange\t/tʃeɪndʒ/\n",
        );
        dict.load_variety("en_US").unwrap();
        assert_eq!(dict.lookup("climate change"), vec!["ˈklaɪmət tʃeɪndʒ"]);
    }

    #[test]
    fn phrase_with_missing_word_is_a_miss() {
        let (_dir, mut dict) = dict_with("en_US.txt", "climate\t/ˈklaɪmət/\n");
        dict.load_variety("en_US").unwrap();
        assert!(dict.lookup("climate change").is_empty());
    }

    #[test]
    fn add_pronunciation_deduplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = IpaDict::new(dir.path());
        dict.add_pronunciation("Gadget", "/ˈɡædʒɪt/");
        dict.add_pronunciation("gadget", "/ˈɡædʒɪt/");
        assert_eq!(dict.lookup("gadget"), vec!["/ˈɡædʒɪt/"]);
    }

    #[test]
    fn export_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = IpaDict::new(dir.path());
        dict.add_pronunciation("design", "/dɪˈzaɪn/");
        dict.add_pronunciation("read", "/ˈrid/");
        dict.export_to(&dir.path().join("custom.txt")).unwrap();

        let mut reloaded = IpaDict::new(dir.path());
        reloaded.load_variety("custom").unwrap();
        assert_eq!(reloaded.lookup("design"), vec!["/dɪˈzaɪn/"]);
        assert_eq!(reloaded.lookup("read"), vec!["/ˈrid/"]);
    }

    #[test]
    fn import_json_merges_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("custom.json");
        fs::write(&json_path, r#"{"Design": ["/dɪˈzaɪn/"]}"#).unwrap();

        let mut dict = IpaDict::new(dir.path());
        dict.add_pronunciation("design", "/ˈdiːzaɪn/");
        dict.import_json(&json_path).unwrap();
        assert_eq!(dict.lookup("design"), vec!["/ˈdiːzaɪn/", "/dɪˈzaɪn/"]);
    }
}
