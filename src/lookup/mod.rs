//! Pronunciation lookup backends.
//!
//! This module contains implementations of the
//! [`PronunciationLookup`](crate::PronunciationLookup) trait.
//!
//! # Available Backends
//!
//! Enable backends via Cargo features:
//! - `ipa-dict` - open-dict-data ipa-dict files (plain text, tab-separated)

#[cfg(feature = "ipa-dict")]
pub mod ipa_dict;

#[cfg(feature = "ipa-dict")]
pub use ipa_dict::{IpaDict, IpaDictError};
