// rowgrade-core/src/domain/validation/scanner.rs

use crate::domain::error::DomainError;
use regex::{Regex, RegexBuilder};

/// Phrases that leak the internal production process into customer copy.
pub const DEFAULT_INTERNAL_PHRASES: [&str; 4] = [
    "supplied by us",
    "our activity kit",
    "our step-by-step guide",
    "our tracking sheet",
];

/// A phrase compiled once at initialization.
struct CompiledPhrase {
    phrase: String,
    regex: Regex,
}

impl CompiledPhrase {
    fn compile(phrase: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&regex::escape(phrase.trim()))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            phrase: phrase.trim().to_string(),
            regex,
        })
    }
}

/// Case-insensitive literal matcher for internal-reference phrases.
pub struct InternalReferenceScanner {
    phrases: Vec<CompiledPhrase>,
}

impl InternalReferenceScanner {
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Result<Self, DomainError> {
        let mut compiled = Vec::with_capacity(phrases.len());

        for phrase in phrases {
            let phrase = phrase.as_ref();
            if phrase.trim().is_empty() {
                continue;
            }
            let pattern = CompiledPhrase::compile(phrase).map_err(|e| DomainError::InvalidPhrase {
                phrase: phrase.to_string(),
                reason: e.to_string(),
            })?;
            compiled.push(pattern);
        }

        Ok(Self { phrases: compiled })
    }

    /// Scanner over [`DEFAULT_INTERNAL_PHRASES`].
    pub fn builtin() -> Self {
        Self {
            phrases: DEFAULT_INTERNAL_PHRASES
                .iter()
                .filter_map(|p| CompiledPhrase::compile(p).ok())
                .collect(),
        }
    }

    /// Returns every configured phrase found in `text`, in configuration order.
    pub fn scan<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.phrases
            .iter()
            .filter(|p| p.regex.is_match(text))
            .map(|p| p.phrase.as_str())
            .collect()
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|p| p.phrase.as_str())
    }
}

impl Default for InternalReferenceScanner {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_builtin_matches_any_case() {
        let scanner = InternalReferenceScanner::builtin();
        assert_eq!(scanner.phrases().count(), 4);
        assert_eq!(
            scanner.scan("Everything comes in Our Activity Kit!"),
            vec!["our activity kit"]
        );
        assert_eq!(
            scanner.scan("everything comes in our activity kit!"),
            vec!["our activity kit"]
        );
        assert!(scanner.scan("Grab a bowl and some rice").is_empty());
    }

    #[test]
    fn test_several_phrases_reported_in_order() {
        let scanner = InternalReferenceScanner::builtin();
        let hits = scanner.scan("Use OUR TRACKING SHEET, materials supplied by us.");
        assert_eq!(hits, vec!["supplied by us", "our tracking sheet"]);
    }

    #[test]
    fn test_custom_phrases_are_literal() -> Result<()> {
        let scanner = InternalReferenceScanner::new(&["see (appendix) *", "  "])?;
        assert_eq!(scanner.phrases().count(), 1);
        assert_eq!(scanner.scan("Please See (Appendix) * below"), vec!["see (appendix) *"]);
        assert!(scanner.scan("see appendix").is_empty());
        Ok(())
    }
}
