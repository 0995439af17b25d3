//! Word-list partitioning for the letter-guessing game
//!
//! 1. **Bucketing**: keep words of one fixed letter count, deduplicated
//! 2. **Uniqueness split**: distinct-letter words vs. words with a repeat
//! 3. **Ask/accept merge**: frequency-rated words become secret answers or
//!    plain guesses

pub mod bucket;
pub mod merge;

pub use bucket::{has_distinct_letters, letter_count, UniquenessSplit, WordBucket};
pub use merge::{
    merge_ask_accept, AskAcceptLists, MergeInput, BONUS_ACCEPT_WORDS, DEFAULT_ASK_THRESHOLD,
};
