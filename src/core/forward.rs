//! Cyrillic -> Łacinka transliterator
//!
//! Every letter is classified once, then a single left-to-right pass decides
//! each letter from its own class and its neighbours:
//!
//! 1. iotated vowel at the start, after an apostrophe, after a vowel, after ў
//!    or after a hyphen -> `j` + base vowel (the apostrophe is consumed)
//! 2. any other iotated vowel (after a consonant or ь) -> `i` + base vowel
//! 3. plain vowels -> one Latin letter (`'і` is `ji`)
//! 4. ц н з л с + ь -> ć ń ź ĺ ś (ь is consumed)
//! 5. other consonants -> consonant table (х -> `ch`)
//!
//! Glide decisions look at the *source* neighbour, so the precedence of the
//! context rules over the "after consonant" rule is structural.

use crate::core::alphabet::{Consonant, Letter, LetterClass, Vowel};
use crate::error::{Error, Result};

/// What is written in front of a vowel's base letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Onset {
    None,
    /// full /j/ glide
    Glide,
    /// softness of the preceding consonant
    Softness,
}

fn onset(prev: Option<Letter>, vowel: Vowel) -> Onset {
    let iotated = Letter::Vowel(vowel).class() == LetterClass::IotatedVowel;
    match prev.map(|p| (p, p.class())) {
        // ў is spelled as a consonant but iotates like a vowel
        Some((Letter::Consonant(Consonant::ShortU), _)) if iotated => Onset::Glide,
        None | Some((_, LetterClass::PlainVowel | LetterClass::IotatedVowel)) if iotated => {
            Onset::Glide
        }
        Some((Letter::Apostrophe | Letter::Hyphen, LetterClass::Other)) if iotated => Onset::Glide,
        Some((_, LetterClass::PlainConsonant | LetterClass::PalatalizableConsonant)) if iotated => {
            Onset::Softness
        }
        Some((Letter::SoftSign, LetterClass::Other)) if iotated => Onset::Softness,
        Some((Letter::Apostrophe, _)) if vowel == Vowel::I => Onset::Glide,
        _ => Onset::None,
    }
}

/// Split a word into alphabet letters; anything outside the alphabet is fatal
pub fn classify(word: &str) -> Result<Vec<Letter>> {
    word.chars()
        .map(|c| {
            Letter::from_cyrillic(c).ok_or_else(|| Error::UnknownCharacter {
                ch: c,
                word: word.to_string(),
            })
        })
        .collect()
}

/// Convert one lowercase Cyrillic word to Łacinka
///
/// # Examples
/// ```
/// use lacinka::cyrillic_to_lacinka;
/// assert_eq!(cyrillic_to_lacinka("яма").unwrap(), "jama");
/// assert_eq!(cyrillic_to_lacinka("зьвер").unwrap(), "źvier");
/// ```
pub fn cyrillic_to_lacinka(word: &str) -> Result<String> {
    let letters = classify(word)?;
    let mut output = String::with_capacity(word.len() + 4);
    let mut prev: Option<Letter> = None;
    let mut i = 0;

    while i < letters.len() {
        let letter = letters[i];
        match (letter, letter.class()) {
            (Letter::Vowel(vowel), _) => {
                match onset(prev, vowel) {
                    Onset::Glide => output.push('j'),
                    Onset::Softness => output.push('i'),
                    Onset::None => {}
                }
                output.push(vowel.base_latin());
            }
            (Letter::Consonant(consonant), LetterClass::PalatalizableConsonant)
                if letters.get(i + 1) == Some(&Letter::SoftSign) =>
            {
                if let Some(latin) = consonant.palatalized() {
                    output.push(latin);
                }
                // ь stays the effective left neighbour of what follows
                prev = Some(Letter::SoftSign);
                i += 2;
                continue;
            }
            (Letter::Consonant(consonant), _) => output.push_str(consonant.latin()),
            (Letter::SoftSign, _) => {
                // only ц н з л с may carry ь; anything else has no mapping
                return Err(Error::UnknownCharacter {
                    ch: 'ь',
                    word: word.to_string(),
                });
            }
            // elided; a following vowel sees it through `prev`
            (Letter::Apostrophe, _) => {}
            (Letter::Hyphen, _) => output.push('-'),
        }
        prev = Some(letter);
        i += 1;
    }

    // apostrophes and hyphens alone are not a word
    if output.is_empty() || output.chars().all(|c| c == '-') {
        if let Some(ch) = word.chars().next() {
            return Err(Error::UnknownCharacter {
                ch,
                word: word.to_string(),
            });
        }
    }

    Ok(output)
}

/// Convert a batch of words, preserving order; the first bad word aborts
pub fn convert_all<I, S>(words: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| cyrillic_to_lacinka(w.as_ref()))
        .collect()
}
