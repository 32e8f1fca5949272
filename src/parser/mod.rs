//! Vocabulary word-list parsing.
//!
//! Turns free-form word-list text into ordered [`WordEntry`] records. One
//! vocabulary item per non-blank line, in either of these shapes:
//!
//! ```text
//! 1. design: (v) thiết kế
//! 2. buy - bought - bought: (v) mua
//!
//! # Or without numbers:
//! rainforest: (n) rừng mưa nhiệt đới /ˈreɪnfɒrɪst/
//! climate change: biến đổi khí hậu /ˈklaɪmət tʃeɪndʒ/
//! ```
//!
//! # Line grammar
//!
//! | Segment | Form | Notes |
//! |---|---|---|
//! | number | `<digits>.` | optional; defaults to the 1-based position among non-blank lines |
//! | headword | text up to `:` | `" - "` separators mark an irregular verb chain |
//! | word type | `(<tag>)` | optional; lowercase letters |
//! | meaning | text up to `/` | required non-empty after trimming |
//! | pronunciation | `/<ipa>/` | optional; used verbatim (normalized) when present |
//!
//! When a line carries no pronunciation, the parser consults its
//! [`PronunciationLookup`] sources in order and takes the first non-empty
//! result. Lookup misses are not errors; the entry simply keeps no
//! pronunciation. Malformed lines are [`FormatError`]s: [`parse_line`]
//! reports them, [`parse_text`] logs a warning and moves on.
//!
//! [`parse_line`]: WordListParser::parse_line
//! [`parse_text`]: WordListParser::parse_text

mod normalize;

pub use normalize::{normalize_pronunciation, STRESS_MARK};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{PronunciationLookup, WordEntry};

/// One word-list line, in segments: optional `number.`, headword, `:`,
/// optional `(tag)`, meaning, optional `/pronunciation/`.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)\.\s+)?([^:]+):\s*(?:\(([a-z]+)\))?\s*([^/]+)(?:/([^/]+)/)?\s*$")
        .unwrap()
});

/// A single line did not match the word-list grammar.
///
/// Never fatal to a batch: [`WordListParser::parse_text`] skips the
/// offending line and keeps going.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("line does not match the `word: meaning` format: {0:?}")]
    InvalidLine(String),
    #[error("line has no meaning after the colon: {0:?}")]
    EmptyMeaning(String),
    #[error("list number is out of range: {0:?}")]
    InvalidNumber(String),
}

/// Parser for vocabulary word lists.
///
/// Holds an ordered set of [`PronunciationLookup`] sources used to fill in
/// IPA for lines that do not carry their own. Parsing itself performs no
/// I/O and keeps no mutable state, so a parser can be shared across
/// threads as long as its lookup sources tolerate concurrent reads.
///
/// ```rust
/// use vocab_rs::parser::WordListParser;
///
/// let parser = WordListParser::new();
/// let entry = parser.parse_line("1. design: (v) thiết kế", None).unwrap();
///
/// assert_eq!(entry.number, Some(1));
/// assert_eq!(entry.word, "design");
/// assert_eq!(entry.word_type.as_deref(), Some("v"));
/// assert_eq!(entry.meaning, "thiết kế");
/// ```
#[derive(Default)]
pub struct WordListParser {
    lookups: Vec<Box<dyn PronunciationLookup>>,
}

impl WordListParser {
    /// Create a parser with no pronunciation sources.
    pub fn new() -> Self {
        Self {
            lookups: Vec::new(),
        }
    }

    /// Create a parser with a single pronunciation source.
    pub fn with_lookup(lookup: impl PronunciationLookup + 'static) -> Self {
        let mut parser = Self::new();
        parser.add_lookup(lookup);
        parser
    }

    /// Append a pronunciation source. Sources are consulted in insertion
    /// order; the first one returning a non-empty result wins.
    pub fn add_lookup(&mut self, lookup: impl PronunciationLookup + 'static) {
        self.lookups.push(Box::new(lookup));
    }

    /// Parse a single word-list line.
    ///
    /// `fallback_number` is used when the line carries no explicit
    /// `<digits>.` prefix; [`parse_text`](Self::parse_text) passes the
    /// 1-based position among non-blank lines.
    pub fn parse_line(
        &self,
        line: &str,
        fallback_number: Option<u32>,
    ) -> Result<WordEntry, FormatError> {
        let line = line.trim();
        let caps = LINE_PATTERN
            .captures(line)
            .ok_or_else(|| FormatError::InvalidLine(line.to_string()))?;

        let number = match caps.get(1) {
            Some(digits) => Some(
                digits
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| FormatError::InvalidNumber(digits.as_str().to_string()))?,
            ),
            None => fallback_number,
        };
        let word = caps[2].trim().to_string();
        let word_type = caps.get(3).map(|tag| tag.as_str().to_string());
        let meaning = caps[4].trim().to_string();
        if meaning.is_empty() {
            return Err(FormatError::EmptyMeaning(line.to_string()));
        }
        let inline = caps
            .get(5)
            .map(|pron| normalize_pronunciation(pron.as_str().trim()));

        if word.contains(" - ") {
            let forms: Vec<String> = word.split(" - ").map(|form| form.trim().to_string()).collect();
            let pronunciation = inline.or_else(|| self.chain_pronunciation(&forms));
            Ok(WordEntry {
                number,
                word,
                word_type,
                meaning,
                pronunciation,
                irregular_forms: Some(forms),
            })
        } else {
            let pronunciation = inline.or_else(|| self.first_pronunciation(&word));
            Ok(WordEntry {
                number,
                word,
                word_type,
                meaning,
                pronunciation,
                irregular_forms: None,
            })
        }
    }

    /// Parse a whole word-list text.
    ///
    /// Blank lines are skipped and do not count toward fallback numbering.
    /// A malformed line is logged and dropped; it never aborts the batch.
    pub fn parse_text(&self, text: &str) -> Vec<WordEntry> {
        let mut entries = Vec::new();
        let mut position: u32 = 0;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            position += 1;
            match self.parse_line(line, Some(position)) {
                Ok(entry) => entries.push(entry),
                Err(err) => log::warn!("skipping invalid line {position}: {err}"),
            }
        }
        entries
    }

    /// First normalized pronunciation for `word` across the lookup
    /// sources, in source order.
    fn first_pronunciation(&self, word: &str) -> Option<String> {
        for source in &self.lookups {
            if let Some(first) = source.first(word) {
                return Some(normalize_pronunciation(&first));
            }
        }
        None
    }

    /// Pronunciation for an irregular verb chain: per-form first results
    /// joined with `"-"` in form order. Forms with no result are skipped;
    /// all-miss yields `None`.
    fn chain_pronunciation(&self, forms: &[String]) -> Option<String> {
        let found: Vec<String> = forms
            .iter()
            .filter_map(|form| self.first_pronunciation(form))
            .collect();
        if found.is_empty() {
            None
        } else {
            Some(found.join("-"))
        }
    }
}

/// Render entries back into numbered word-list text, one canonical line
/// per entry (`1. word: (type) meaning /pron/`). This is the round-trip
/// preview the surrounding tool shows for editing; entries are renumbered
/// by position.
pub fn format_word_list(entries: &[WordEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {}", index + 1, entry.to_line()))
        .collect::<Vec<_>>()
        .join("\n")
}
