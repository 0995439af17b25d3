//! File-to-file stages of the word-list pipeline
//!
//! corpus `.txt` -> `convert` -> `.lac.txt` -> `build_buckets` ->
//! `N.different.*` / `N.repeat.lac.txt` -> `rate_distinct` ->
//! `N.different.rate.txt` -> `merge_lists` -> `N.ask.txt` / `N.accept.txt`

use std::collections::HashSet;
use std::io;

use crate::config::PipelineConfig;
use crate::core::{convert_all, revert_all};
use crate::corpus::read_corpus_words;
use crate::error::Result;
use crate::rating::{rate_words, RatingCache, RatingService};
use crate::storage::{read_lines, read_lines_or_empty, write_lines};
use crate::wordlist::{merge_ask_accept, AskAcceptLists, MergeInput, UniquenessSplit, WordBucket};

/// Transliterate `<stem>.txt` into `<stem>.lac.txt`, line for line
pub fn convert_corpus(config: &PipelineConfig, stem: &str) -> Result<usize> {
    let words = read_corpus_words(&config.corpus_path(stem))?;
    let latin = convert_all(&words)?;
    write_lines(&config.lacinka_path(stem), &latin)?;
    log::info!("{}: {} words transliterated", stem, latin.len());
    Ok(latin.len())
}

fn bucket_from_stems(config: &PipelineConfig, stems: &[String]) -> Result<WordBucket> {
    let mut bucket = WordBucket::new(config.word_len);
    for stem in stems {
        bucket.extend(read_lines(&config.lacinka_path(stem))?);
    }
    Ok(bucket)
}

/// Bucket the Łacinka lists of `stems` and write the uniqueness split.
/// Distinct words also get their reverse-transliterated Cyrillic list for
/// review and rating.
pub fn build_buckets(config: &PipelineConfig, stems: &[String]) -> Result<UniquenessSplit> {
    let bucket = bucket_from_stems(config, stems)?;
    let split = bucket.split_by_uniqueness();

    let distinct: Vec<&str> = split.distinct.iter().collect();
    let cyrillic = revert_all(&distinct)?;

    write_lines(&config.distinct_lacinka_path(), &distinct)?;
    write_lines(&config.distinct_cyrillic_path(), &cyrillic)?;
    write_lines(&config.repeat_lacinka_path(), split.repeat.iter())?;

    log::info!(
        "{} words of length {}: {} distinct, {} repeat",
        bucket.len(),
        config.word_len,
        split.distinct.len(),
        split.repeat.len()
    );
    Ok(split)
}

/// Rate the distinct-letter words that are not in the rating cache yet.
/// The cache is saved once at the end, even when the batch aborts.
pub fn rate_distinct<S>(config: &PipelineConfig, service: &mut S) -> Result<usize>
where
    S: RatingService + ?Sized,
{
    let latin = read_lines(&config.distinct_lacinka_path())?;
    let cyrillic = read_lines(&config.distinct_cyrillic_path())?;
    if latin.len() != cyrillic.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} Łacinka vs {} Cyrillic distinct words",
                latin.len(),
                cyrillic.len()
            ),
        )
        .into());
    }

    let rating_path = config.rating_path();
    let mut cache = RatingCache::load(&rating_path)?;
    let result = rate_words(service, &mut cache, latin.iter().zip(cyrillic.iter()));
    cache.save(&rating_path)?;
    result
}

/// Merge ratings, repeats, the denylist and inflected forms into the final
/// ask/accept lists
pub fn merge_lists(config: &PipelineConfig, form_stems: &[String]) -> Result<AskAcceptLists> {
    let repeat = WordBucket::collect(config.word_len, read_lines(&config.repeat_lacinka_path())?);
    let denylist: HashSet<String> = read_lines_or_empty(&config.denylist_path())?
        .into_iter()
        .collect();
    let cache = RatingCache::load(&config.rating_path())?;
    let forms = bucket_from_stems(config, form_stems)?;

    let lists = merge_ask_accept(&MergeInput {
        repeat: &repeat,
        rated: cache.records(),
        denylist: &denylist,
        forms: &forms,
        bonus: &config.bonus_accept_words,
        threshold: config.ask_threshold,
    });

    write_lines(&config.ask_path(), &lists.ask)?;
    write_lines(&config.accept_path(), &lists.accept)?;
    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    struct CountingService;

    impl RatingService for CountingService {
        // count = number of letters * 30, so 5-letter words land in ask
        fn occurrences(&mut self, cyrillic: &str) -> Result<u64> {
            Ok(cyrillic.chars().count() as u64 * 30)
        }
    }

    fn config_in(dir: &std::path::Path) -> PipelineConfig {
        PipelineConfig {
            data_dir: dir.to_path_buf(),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_full_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(
            config.corpus_path("nouns"),
            "ха+та\nгорад\nбяроза\nзьвер\nслова\n",
        )
        .unwrap();
        fs::write(config.denylist_path(), "słova\nslova\n").unwrap();

        assert_eq!(convert_corpus(&config, "nouns").unwrap(), 5);
        assert_eq!(
            fs::read_to_string(config.lacinka_path("nouns")).unwrap(),
            "chata\nhorad\nbiaroza\nźvier\nslova\n"
        );

        let stems = vec!["nouns".to_string()];
        let split = build_buckets(&config, &stems).unwrap();
        assert!(split.distinct.contains("horad"));
        assert!(split.distinct.contains("źvier"));
        assert!(split.repeat.contains("chata"));
        assert_eq!(
            fs::read_to_string(config.distinct_cyrillic_path()).unwrap(),
            "горад\nслова\nзьвер\n"
        );

        assert_eq!(rate_distinct(&config, &mut CountingService).unwrap(), 3);
        // second run finds everything cached
        assert_eq!(rate_distinct(&config, &mut CountingService).unwrap(), 0);

        let lists = merge_lists(&config, &stems).unwrap();
        assert!(lists.ask.contains("horad"));
        assert!(lists.ask.contains("źvier"));
        assert!(!lists.ask.contains("slova"));
        assert!(lists.accept.contains("slova"));
        assert!(lists.accept.contains("chata"));
        assert!(lists.accept.contains("kniha"));
        assert_eq!(
            fs::read_to_string(config.ask_path()).unwrap(),
            "horad\nźvier\n"
        );
    }

    #[test]
    fn test_convert_rejects_unknown_letters() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(config.corpus_path("verbs"), "ісці\nшчыт\nщит\n").unwrap();
        let err = convert_corpus(&config, "verbs").unwrap_err();
        assert!(matches!(err, Error::UnknownCharacter { ch: 'щ', .. }));
        assert!(!config.lacinka_path("verbs").exists());
    }

    #[test]
    fn test_rating_abort_keeps_earlier_ratings() {
        struct FailOnSecond(usize);
        impl RatingService for FailOnSecond {
            fn occurrences(&mut self, _cyrillic: &str) -> Result<u64> {
                self.0 += 1;
                if self.0 > 1 {
                    return Err(Error::RatingService("500".into()));
                }
                Ok(7)
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_lines(&config.distinct_lacinka_path(), ["horad", "źvier"]).unwrap();
        write_lines(&config.distinct_cyrillic_path(), ["горад", "зьвер"]).unwrap();

        let result = rate_distinct(&config, &mut FailOnSecond(0));
        assert!(matches!(result, Err(Error::RatingService(_))));
        assert_eq!(
            fs::read_to_string(config.rating_path()).unwrap(),
            "horad горад 7\n"
        );
    }

    #[test]
    fn test_rating_requires_paired_lists() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_lines(&config.distinct_lacinka_path(), ["horad", "źvier"]).unwrap();
        write_lines(&config.distinct_cyrillic_path(), ["горад"]).unwrap();
        assert!(matches!(
            rate_distinct(&config, &mut CountingService),
            Err(Error::Io(_))
        ));
    }
}
