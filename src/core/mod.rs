//! Belarusian Cyrillic <-> Łacinka transliteration

pub mod alphabet;
pub mod forward;
pub mod reverse;

pub use alphabet::{Consonant, Letter, LetterClass, Vowel};
pub use forward::{convert_all, cyrillic_to_lacinka};
pub use reverse::{lacinka_to_cyrillic, revert_all};
