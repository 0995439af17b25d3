//! Ask/accept merge
//!
//! `ask` holds the secret-answer candidates, `accept` every valid guess:
//!
//! - accept = repeat ∪ {rated: count <= threshold or denied} ∪ forms ∪ bonus
//! - ask    = {rated: count > threshold and not denied}
//!
//! A denied word moves to `accept` instead of being dropped. Inflected forms
//! are merged into `accept` as they are, so `ask` and `accept` may share words.

use std::collections::{BTreeSet, HashSet};

use crate::rating::FrequencyRecord;
use crate::wordlist::bucket::WordBucket;

/// Minimum corpus occurrences (exclusive) for a secret answer
pub const DEFAULT_ASK_THRESHOLD: u64 = 90;

/// Hand-picked words that are always valid guesses
pub const BONUS_ACCEPT_WORDS: [&str; 2] = ["kniha", "slova"];

/// Inputs of the merge step
#[derive(Debug, Clone)]
pub struct MergeInput<'a> {
    /// words with a repeated letter
    pub repeat: &'a WordBucket,
    /// rated distinct-letter words
    pub rated: &'a [FrequencyRecord],
    /// words never used as secrets (matched on either spelling)
    pub denylist: &'a HashSet<String>,
    /// all known inflected forms of the target length
    pub forms: &'a WordBucket,
    /// always accepted
    pub bonus: &'a [String],
    pub threshold: u64,
}

/// Final game lists, both sorted and deduplicated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AskAcceptLists {
    pub ask: BTreeSet<String>,
    pub accept: BTreeSet<String>,
}

fn is_denied(record: &FrequencyRecord, denylist: &HashSet<String>) -> bool {
    denylist.contains(&record.latin) || denylist.contains(&record.cyrillic)
}

/// Build the ask and accept lists
pub fn merge_ask_accept(input: &MergeInput<'_>) -> AskAcceptLists {
    let mut lists = AskAcceptLists::default();

    lists.accept.extend(input.repeat.iter().map(str::to_string));

    for record in input.rated {
        if record.count > input.threshold && !is_denied(record, input.denylist) {
            lists.ask.insert(record.latin.clone());
        } else {
            log::debug!(
                "accept only: {} ({}, count {})",
                record.latin,
                record.cyrillic,
                record.count
            );
            lists.accept.insert(record.latin.clone());
        }
    }

    lists.accept.extend(input.forms.iter().map(str::to_string));
    lists.accept.extend(input.bonus.iter().cloned());

    log::info!(
        "merged {} ask / {} accept words",
        lists.ask.len(),
        lists.accept.len()
    );
    lists
}
