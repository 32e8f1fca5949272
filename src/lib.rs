//! # vocab-rs
//!
//! A Rust library for parsing vocabulary word lists into structured
//! flashcard entries.
//!
//! ## Features
//!
//! - **Word-list parsing**: Free-form lines like `1. design: (v) thiết kế`
//!   become structured [`WordEntry`] records with numbering, word type,
//!   meaning and IPA pronunciation
//! - **Irregular verb chains**: `buy - bought - bought` headwords are kept
//!   as an ordered list of surface forms
//! - **Pluggable pronunciation lookup**: Missing IPA is filled in from any
//!   [`PronunciationLookup`] source; a file backend for the open-dict-data
//!   ipa-dict files ships behind the `ipa-dict` feature
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! vocab-rs = "0.2"
//! ```
//!
//! ```rust
//! use vocab_rs::parser::WordListParser;
//!
//! let parser = WordListParser::new();
//! let entries = parser.parse_text(
//!     "1. design: (v) thiết kế\n\
//!      rainforest: rừng mưa nhiệt đới /ˈreɪnfɒrɪst/",
//! );
//!
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].word, "design");
//! assert_eq!(entries[1].pronunciation.as_deref(), Some("ˈreɪnfɒrɪst"));
//! ```

pub mod lookup;
pub mod parser;

use serde::{Deserialize, Serialize};

/// One parsed vocabulary item.
///
/// Entries are produced by [`parser::WordListParser`] from one input line
/// each and are immutable afterwards; downstream rendering consumes them
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Explicit list index from the input line, or the 1-based position
    /// among non-blank lines when the line carried no number.
    pub number: Option<u32>,
    /// The headword. For an irregular verb chain this is the full
    /// hyphen-joined text (e.g. `"buy - bought - bought"`).
    pub word: String,
    /// Short word-class tag from the parenthetical annotation
    /// (e.g. `"v"`, `"n"`), if present.
    pub word_type: Option<String>,
    /// Translation or definition. Never empty.
    pub meaning: String,
    /// Normalized IPA without enclosing slashes, if known.
    pub pronunciation: Option<String>,
    /// Ordered surface forms of an irregular verb (base, past,
    /// participle), present only when the headword used `" - "`
    /// separators.
    pub irregular_forms: Option<Vec<String>>,
}

impl WordEntry {
    /// True when this entry is an irregular verb chain.
    pub fn is_irregular(&self) -> bool {
        self.irregular_forms.is_some()
    }

    /// Render the canonical single-line form of this entry:
    /// `"<word>: (<type>) <meaning> /<pronunciation>/"`, with the optional
    /// segments omitted when absent. Re-parsing the result reproduces the
    /// entry (minus its number, which the line does not carry).
    pub fn to_line(&self) -> String {
        let mut line = format!("{}:", self.word);
        if let Some(word_type) = &self.word_type {
            line.push_str(&format!(" ({word_type})"));
        }
        line.push(' ');
        line.push_str(&self.meaning);
        if let Some(pronunciation) = &self.pronunciation {
            line.push_str(&format!(" /{pronunciation}/"));
        }
        line
    }
}

/// A source of IPA pronunciations for words and phrases.
///
/// This is the parser's only collaborator. Implementations may be backed by
/// a dictionary file, a network service or an in-memory cache; the parser
/// treats every call as a plain blocking lookup. Matching is expected to be
/// case-insensitive on the word.
///
/// An empty result means "not found" and is never an error: the entry
/// simply keeps no pronunciation.
pub trait PronunciationLookup {
    /// Return all candidate pronunciations for `word`, best first.
    fn lookup(&self, word: &str) -> Vec<String>;

    /// Return only the best candidate, if any.
    fn first(&self, word: &str) -> Option<String> {
        self.lookup(word).into_iter().next()
    }
}
