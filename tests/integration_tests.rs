//! Integration tests - transliteration properties and word-list partitioning

use std::collections::HashSet;

use lacinka::core::{Consonant, Vowel};
use lacinka::rating::FrequencyRecord;
use lacinka::wordlist::{MergeInput, DEFAULT_ASK_THRESHOLD};
use lacinka::{cyrillic_to_lacinka, lacinka_to_cyrillic, merge_ask_accept, WordBucket};

fn lat(word: &str) -> String {
    cyrillic_to_lacinka(word).unwrap()
}

fn cyr(word: &str) -> String {
    lacinka_to_cyrillic(word).unwrap()
}

/// Words that come back unchanged from a forward/reverse round trip
const ROUND_TRIP_WORDS: [&str; 18] = [
    "яма", "бяроза", "зьвер", "сям'я", "аб'ём", "вераб'і", "хата", "мая", "ўюн", "паўэю",
    "цень", "дзьмуць", "шыя", "сьнег", "сьюды", "жыччо", "па-ё", "піяніна",
];

#[test]
fn test_rule_order_regressions() {
    assert_eq!(lat("яма"), "jama");
    assert_eq!(lat("бяроза"), "biaroza");
    assert_eq!(lat("зьвер"), "źvier");
    assert_eq!(lat("цень"), "cień");
}

#[test]
fn test_reverse_examples() {
    assert_eq!(cyr("ja"), "я");
    assert_eq!(cyr("bia"), "бя");
}

#[test]
fn test_single_letter_round_trip() {
    for v in Vowel::ALL {
        let letter = v.to_cyrillic().to_string();
        assert_eq!(cyr(&lat(&letter)), letter);
    }
    for c in Consonant::ALL {
        let letter = c.to_cyrillic().to_string();
        assert_eq!(cyr(&lat(&letter)), letter);
    }
}

#[test]
fn test_word_round_trip() {
    for word in ROUND_TRIP_WORDS {
        assert_eq!(cyr(&lat(word)), word, "round trip of '{}'", word);
    }
}

#[test]
fn test_round_trip_exceptions() {
    // й between a consonant and a vowel comes back as an apostrophe
    assert_eq!(lat("бйа"), "bja");
    assert_eq!(cyr("bja"), "б'я");
    // і before a plain vowel reads back as softness
    assert_eq!(lat("біатлон"), "biatlon");
    assert_eq!(cyr("biatlon"), "бятлон");
}

fn cyrillic_nuclei(word: &str) -> usize {
    word.chars()
        .filter(|&c| Vowel::from_cyrillic(c).is_some())
        .count()
}

/// Latin vowels, not counting an `i` that only marks softness/glide
fn latin_nuclei(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let is_vowel = |c: char| Vowel::plain_from_latin(c).is_some();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            is_vowel(c) && !(c == 'i' && chars.get(i + 1).copied().is_some_and(is_vowel))
        })
        .count()
}

#[test]
fn test_syllable_nuclei_preserved() {
    for word in ROUND_TRIP_WORDS {
        let latin = lat(word);
        assert_eq!(
            cyrillic_nuclei(word),
            latin_nuclei(&latin),
            "'{}' -> '{}'",
            word,
            latin
        );
    }
    // iotation can make the word longer
    assert!(lat("яма").chars().count() > "яма".chars().count());
}

#[test]
fn test_idempotence() {
    for word in ROUND_TRIP_WORDS {
        assert_eq!(lat(word), lat(word));
        let latin = lat(word);
        assert_eq!(cyr(&latin), cyr(&latin));
    }
}

#[test]
fn test_uniqueness_split() {
    let bucket = WordBucket::collect(5, ["слова", "сцена", "хатка", "яма"]);
    assert_eq!(bucket.len(), 3);

    let split = bucket.split_by_uniqueness();
    assert!(split.distinct.contains("сцена"));
    assert!(split.distinct.contains("слова"));
    assert!(split.repeat.contains("хатка"));
    for word in split.distinct.iter() {
        assert_eq!(word.chars().collect::<HashSet<_>>().len(), 5);
    }
}

#[test]
fn test_ask_accept_merge() {
    let repeat = WordBucket::collect(5, ["chata"]);
    let forms = WordBucket::new(5);
    let rated = vec![FrequencyRecord::new("horad", "горад", 95)];

    let no_deny = HashSet::new();
    let lists = merge_ask_accept(&MergeInput {
        repeat: &repeat,
        rated: &rated,
        denylist: &no_deny,
        forms: &forms,
        bonus: &[],
        threshold: DEFAULT_ASK_THRESHOLD,
    });
    assert!(lists.ask.contains("horad"));
    assert!(!lists.accept.contains("horad"));

    let deny: HashSet<String> = ["horad".to_string()].into_iter().collect();
    let lists = merge_ask_accept(&MergeInput {
        repeat: &repeat,
        rated: &rated,
        denylist: &deny,
        forms: &forms,
        bonus: &[],
        threshold: DEFAULT_ASK_THRESHOLD,
    });
    assert!(!lists.ask.contains("horad"));
    assert!(lists.accept.contains("horad"));
}

#[test]
fn test_forward_output_feeds_buckets() {
    let latin: Vec<String> = ["хата", "горад", "бяроза", "зьвер"]
        .iter()
        .map(|w| lat(w))
        .collect();
    let split = WordBucket::collect(5, &latin).split_by_uniqueness();
    assert!(split.distinct.contains("horad"));
    assert!(split.distinct.contains("źvier"));
    assert!(split.repeat.contains("chata"));
    assert!(!split.distinct.contains("biaroza"));
}
