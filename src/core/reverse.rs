//! Łacinka -> Cyrillic reverse transliterator
//!
//! Best-effort inverse of `forward`. Rules, in precedence order at every
//! position:
//!
//! 1. consonant + `j` + vowel -> apostrophe + iotated vowel (`bja` -> `б'я`)
//! 2. `j`/`i` + vowel -> iotated vowel alone (`ja` -> `я`, `bia` -> `бя`)
//! 3. plain vowels -> plain Cyrillic vowels
//! 4. `ch` -> х
//! 5. other consonants -> consonant table
//! 6. ć ń ź ĺ ś -> consonant + ь
//!
//! Rule 1 re-inserts an apostrophe whenever a consonant precedes `j` + vowel.
//! That is exact for words whose apostrophe produced the `j`, but a source
//! spelling with й between a consonant and a vowel comes back with an
//! apostrophe instead (`бйа` -> `bja` -> `б'я`).

use crate::core::alphabet::{Consonant, Vowel};
use crate::error::{Error, Result};

/// Left neighbour that makes a following `j` + vowel a separated glide.
/// ŭ is excluded: a vowel after ў is always a plain glide.
fn is_separating_consonant(c: char) -> bool {
    c != 'ŭ' && (Consonant::from_latin(c).is_some() || Consonant::from_palatalized(c).is_some())
}

/// Cyrillic vowel written for a glide/softness marker + `next`.
/// `i` only has a separated form (`'і`), never a merged one.
fn separated_vowel(next: char) -> Option<Vowel> {
    Vowel::iotated_from_latin(next).or(if next == 'i' { Some(Vowel::I) } else { None })
}

/// Convert one Łacinka word back to Cyrillic
///
/// # Examples
/// ```
/// use lacinka::lacinka_to_cyrillic;
/// assert_eq!(lacinka_to_cyrillic("ja").unwrap(), "я");
/// assert_eq!(lacinka_to_cyrillic("bia").unwrap(), "бя");
/// ```
pub fn lacinka_to_cyrillic(word: &str) -> Result<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut output = String::with_capacity(word.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();

        // 1. consonant + j + vowel
        if c == 'j' && prev.is_some_and(is_separating_consonant) {
            if let Some(vowel) = next.and_then(separated_vowel) {
                output.push('\'');
                output.push(vowel.to_cyrillic());
                i += 2;
                continue;
            }
        }

        // 2. j/i + vowel
        if c == 'j' || c == 'i' {
            if let Some(vowel) = next.and_then(Vowel::iotated_from_latin) {
                output.push(vowel.to_cyrillic());
                i += 2;
                continue;
            }
        }

        // 3. plain vowel
        if let Some(vowel) = Vowel::plain_from_latin(c) {
            output.push(vowel.to_cyrillic());
            i += 1;
            continue;
        }

        // 4. ch digraph
        if c == 'c' && next == Some('h') {
            output.push(Consonant::Kha.to_cyrillic());
            i += 2;
            continue;
        }

        // 5. plain consonant
        if let Some(consonant) = Consonant::from_latin(c) {
            output.push(consonant.to_cyrillic());
            i += 1;
            continue;
        }

        // 6. palatalized consonant
        if let Some(consonant) = Consonant::from_palatalized(c) {
            output.push(consonant.to_cyrillic());
            output.push('ь');
            i += 1;
            continue;
        }

        if c == '-' {
            output.push('-');
            i += 1;
            continue;
        }

        return Err(Error::UnknownCharacter {
            ch: c,
            word: word.to_string(),
        });
    }

    Ok(output)
}

/// Convert a batch of words, preserving order; the first bad word aborts
pub fn revert_all<I, S>(words: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| lacinka_to_cyrillic(w.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyr(word: &str) -> String {
        lacinka_to_cyrillic(word).unwrap()
    }

    #[test]
    fn test_glide_and_softness() {
        assert_eq!(cyr("ja"), "я");
        assert_eq!(cyr("bia"), "бя");
        assert_eq!(cyr("jama"), "яма");
        assert_eq!(cyr("maja"), "мая");
        assert_eq!(cyr("lies"), "лес");
        assert_eq!(cyr("miod"), "мёд");
    }

    #[test]
    fn test_apostrophe_reinsertion() {
        assert_eq!(cyr("siamja"), "сям'я");
        assert_eq!(cyr("abjom"), "аб'ём");
        assert_eq!(cyr("vierabji"), "вераб'і");
        // after ŭ the glide is plain
        assert_eq!(cyr("paŭja"), "паўя");
    }

    #[test]
    fn test_apostrophe_heuristic_diverges_for_short_i() {
        // й between a consonant and a vowel is read back as an apostrophe
        assert_eq!(cyr("bja"), "б'я");
        // j before a consonant stays й
        assert_eq!(cyr("maj"), "май");
        assert_eq!(cyr("bojka"), "бойка");
    }

    #[test]
    fn test_j_before_y_is_short_i() {
        assert_eq!(cyr("jy"), "йы");
    }

    #[test]
    fn test_plain_i() {
        assert_eq!(cyr("lis"), "ліс");
        assert_eq!(cyr("ii"), "іі");
    }

    #[test]
    fn test_kha_digraph() {
        assert_eq!(cyr("chata"), "хата");
        assert_eq!(cyr("moch"), "мох");
        assert_eq!(cyr("cukar"), "цукар");
    }

    #[test]
    fn test_palatalized() {
        assert_eq!(cyr("źvier"), "зьвер");
        assert_eq!(cyr("cień"), "цень");
        assert_eq!(cyr("dźmuć"), "дзьмуць");
    }

    #[test]
    fn test_hyphen() {
        assert_eq!(cyr("pa-jo"), "па-ё");
    }

    #[test]
    fn test_unknown_character() {
        let err = lacinka_to_cyrillic("ław").unwrap_err();
        assert!(matches!(err, Error::UnknownCharacter { ch: 'ł', .. }));
        let err = lacinka_to_cyrillic("wq").unwrap_err();
        assert!(matches!(err, Error::UnknownCharacter { ch: 'w', .. }));
    }

    #[test]
    fn test_revert_all() {
        assert_eq!(revert_all(["ja", "bia"]).unwrap(), vec!["я", "бя"]);
    }
}
