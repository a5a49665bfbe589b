//! Fixed English linguistic resources: stopword set and lemmatization data.
//!
//! Both resources are data files embedded at compile time and parsed once at
//! startup. They are snapshots of standard corpora (the NLTK English stopword
//! list and the WordNet irregular-noun table) and are treated as opaque data,
//! not something this crate computes.

use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};

const STOPWORDS_EN: &str = include_str!("../../resources/stopwords_en.txt");
const LEMMA_EXCEPTIONS_EN: &str = include_str!("../../resources/lemma_exceptions_en.txt");

/// Suffix detachment rules for default-POS (noun) lemmatization, tried in
/// order; the first applicable rule wins. Mirrors WordNet's noun detachments,
/// with guards below standing in for WordNet's dictionary lookup.
const DETACHMENTS: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("ies", "y"),
    ("s", ""),
];

/// Stopword set and lemmatization table, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    lemma_exceptions: HashMap<String, String>,
}

impl Lexicon {
    /// Parses the embedded resource files. Fails (fatally, at startup) if
    /// either resource is empty or malformed.
    pub fn load() -> Result<Self> {
        let stopwords: HashSet<String> = STOPWORDS_EN
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        if stopwords.is_empty() {
            bail!("stopword resource is empty");
        }

        let mut lemma_exceptions = HashMap::new();
        for line in LEMMA_EXCEPTIONS_EN.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(inflected), Some(base), None) => {
                    lemma_exceptions.insert(inflected.to_string(), base.to_string());
                }
                _ => bail!("malformed lemma exception line: {line:?}"),
            }
        }
        if lemma_exceptions.is_empty() {
            bail!("lemma exception resource is empty");
        }

        Ok(Lexicon {
            stopwords,
            lemma_exceptions,
        })
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Reduces a token to its dictionary base form under the default
    /// part-of-speech assumption. Irregular forms resolve through the
    /// exception table; regular forms through the detachment rules. Tokens no
    /// rule applies to are returned unchanged, so lemmatization is idempotent
    /// for base-form words.
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(base) = self.lemma_exceptions.get(token) {
            return base.clone();
        }

        for (suffix, replacement) in DETACHMENTS {
            if let Some(stem) = token.strip_suffix(suffix) {
                let candidate_len = stem.len() + replacement.len();
                // Dictionary-free guards: never produce a stub shorter than
                // three letters, and leave -ss/-us/-is singulars alone.
                let plausible = match *suffix {
                    "s" => {
                        token.len() >= 4
                            && !token.ends_with("ss")
                            && !token.ends_with("us")
                            && !token.ends_with("is")
                    }
                    "ies" => token.len() >= 5,
                    _ => candidate_len >= 3,
                };
                if plausible {
                    return format!("{stem}{replacement}");
                }
                // A guarded-out rule falls through: "ties" fails the -ies
                // length guard but still singularizes via the -s rule.
            }
        }

        token.to_string()
    }
}
