//! Stop-word sets excluded before similarity scoring.
//!
//! The built-in list is Turkish. A replacement list can be loaded from a
//! newline-delimited file; an unreadable file degrades to an empty set.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

/// Turkish stop-words (53 entries).
const TURKISH: &[&str] = &[
    "acaba", "ama", "aslında", "az", "bazı", "belki", "biri", "birkaç", "birşey", "biz", "bu",
    "çok", "çünkü", "da", "daha", "de", "defa", "diye", "eğer", "en", "gibi", "hem", "hep",
    "hepsi", "her", "hiç", "için", "ile", "ise", "kez", "ki", "kim", "mı", "mu", "mü", "nasıl",
    "ne", "neden", "nerde", "nerede", "nereye", "niçin", "niye", "o", "sanki", "şey", "siz",
    "şu", "tüm", "ve", "veya", "ya", "yani",
];

/// An immutable set of lower-cased stop-words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn turkish() -> Self {
        Self::from_words(TURKISH.iter().copied())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load one word per line. Blank lines and `#` comments are skipped.
    ///
    /// Never fails: an unreadable file logs a warning and yields an empty set.
    pub fn load_or_empty(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let set = Self::from_words(
                    contents
                        .lines()
                        .map(str::trim)
                        .filter(|l| !l.starts_with('#')),
                );
                info!(path = %path.display(), count = set.len(), "loaded stop-words");
                set
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "stop-words unavailable; similarity will use an empty set"
                );
                Self::empty()
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn turkish_list_is_complete() {
        let sw = StopWords::turkish();
        assert_eq!(sw.len(), 53);
        assert!(sw.contains("ve"));
        assert!(sw.contains("çok"));
        assert!(!sw.contains("proje"));
    }

    #[test]
    fn from_words_lowercases_and_skips_blank() {
        let sw = StopWords::from_words(["The", " a ", ""]);
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("the"));
        assert!(sw.contains("a"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# english subset").unwrap();
        writeln!(file, "the").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "and").unwrap();

        let sw = StopWords::load_or_empty(file.path());
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("and"));
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let sw = StopWords::load_or_empty(Path::new("/nonexistent/tonlama/stopwords.txt"));
        assert!(sw.is_empty());
    }
}
