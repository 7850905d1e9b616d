//! Word lists backing the people and place generators.
//!
//! The lists ship inside the crate and are parsed once, on first use. A
//! directory of replacement lists can be named in [`Settings`]; any file
//! that cannot be read there falls back to the embedded copy, and a list
//! that ends up empty falls back to generated capitalised words.
//!
//! ```text
//! <resources_dir>/
//!   names.txt
//!   cities.txt
//!   states.txt
//!   countries.txt
//! ```

use crate::strings::random_letters;
use fabricate_core::{Generator, Settings};
use once_cell::sync::Lazy;
use rand::Rng;
use std::fs;
use std::path::Path;
use std::sync::Arc;

static EMBEDDED: Lazy<WordLists> = Lazy::new(|| WordLists {
    names: Arc::new(parse_lines(include_str!("../resources/people/names.txt"))),
    cities: Arc::new(parse_lines(include_str!("../resources/places/cities.txt"))),
    states: Arc::new(parse_lines(include_str!("../resources/places/states.txt"))),
    countries: Arc::new(parse_lines(include_str!("../resources/places/countries.txt"))),
});

/// In-memory, ordered word lists.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    names: Arc<Vec<String>>,
    cities: Arc<Vec<String>>,
    states: Arc<Vec<String>>,
    countries: Arc<Vec<String>>,
}

impl WordLists {
    /// The lists compiled into the crate.
    pub fn embedded() -> &'static WordLists {
        &EMBEDDED
    }

    /// Lists from `settings.resources_dir`, or the embedded lists.
    pub fn from_settings(settings: &Settings) -> WordLists {
        match &settings.resources_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded().clone(),
        }
    }

    /// Read lists from `dir`, file by file.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> WordLists {
        let dir = dir.as_ref();
        let embedded = Self::embedded();

        WordLists {
            names: read_or(dir, "names.txt", &embedded.names),
            cities: read_or(dir, "cities.txt", &embedded.cities),
            states: read_or(dir, "states.txt", &embedded.states),
            countries: read_or(dir, "countries.txt", &embedded.countries),
        }
    }

    /// Build lists directly, mostly useful in tests.
    pub fn new(
        names: Vec<String>,
        cities: Vec<String>,
        states: Vec<String>,
        countries: Vec<String>,
    ) -> WordLists {
        WordLists {
            names: Arc::new(names),
            cities: Arc::new(cities),
            states: Arc::new(states),
            countries: Arc::new(countries),
        }
    }

    pub fn names(&self) -> Generator<String> {
        words_or_fallback(&self.names, "names")
    }

    pub fn cities(&self) -> Generator<String> {
        words_or_fallback(&self.cities, "cities")
    }

    pub fn states(&self) -> Generator<String> {
        words_or_fallback(&self.states, "states")
    }

    pub fn countries(&self) -> Generator<String> {
        words_or_fallback(&self.countries, "countries")
    }
}

/// Split newline-delimited content into trimmed, non-empty lines.
/// Lines starting with `#` are comments.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn read_or(dir: &Path, file: &str, fallback: &Arc<Vec<String>>) -> Arc<Vec<String>> {
    let path = dir.join(file);
    match fs::read_to_string(&path) {
        Ok(content) => {
            let lines = parse_lines(&content);
            tracing::trace!("Read {} lines from {}", lines.len(), path.display());
            Arc::new(lines)
        }
        Err(e) => {
            tracing::warn!(
                "Could not read word list {}: {}, using the embedded list",
                path.display(),
                e
            );
            Arc::clone(fallback)
        }
    }
}

fn words_or_fallback(words: &Arc<Vec<String>>, what: &str) -> Generator<String> {
    if words.is_empty() {
        tracing::warn!("Word list for {} is empty, generating words instead", what);
        return capitalized_words();
    }

    let words = Arc::clone(words);
    Generator::new(move || {
        let index = rand::thread_rng().gen_range(0..words.len());
        words[index].clone()
    })
}

/// A capital letter followed by 1 to 14 lowercase letters.
pub fn capitalized_words() -> Generator<String> {
    Generator::new(|| {
        let mut rng = rand::thread_rng();
        let length = rng.gen_range(2..16);
        let word = random_letters(&mut rng, length);

        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_lowercase(),
            None => word,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_lines() {
        let lines = parse_lines("Paris\n\n  Lyon  \n# comment\nNice\n");
        assert_eq!(lines, vec!["Paris", "Lyon", "Nice"]);
    }

    #[test]
    fn test_embedded_lists_are_populated() {
        let lists = WordLists::embedded();
        assert!(!lists.names.is_empty());
        assert!(!lists.cities.is_empty());
        assert_eq!(lists.states.len(), 50);
        assert!(lists.countries.iter().any(|c| c == "Canada"));
    }

    #[test]
    fn test_from_dir_falls_back_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut cities = fs::File::create(dir.path().join("cities.txt")).unwrap();
        writeln!(cities, "Springfield").unwrap();
        writeln!(cities, "Shelbyville").unwrap();

        let lists = WordLists::from_dir(dir.path());
        assert_eq!(lists.cities.len(), 2);
        // states.txt is missing, so the embedded list is used
        assert_eq!(lists.states.len(), 50);

        let generator = lists.cities();
        for _ in 0..20 {
            let city = generator.get();
            assert!(city == "Springfield" || city == "Shelbyville");
        }
    }

    #[test]
    fn test_empty_list_falls_back_to_generated_words() {
        let lists = WordLists::new(vec![], vec![], vec![], vec![]);
        let generator = lists.countries();

        for _ in 0..50 {
            let word = generator.get();
            assert!((2..16).contains(&word.len()));
            assert!(word.chars().next().unwrap().is_ascii_uppercase());
            assert!(word.chars().skip(1).all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_from_settings_without_dir() {
        let lists = WordLists::from_settings(&Settings::default());
        assert_eq!(lists.cities.len(), WordLists::embedded().cities.len());
    }
}
