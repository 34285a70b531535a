// rowgrade-core/src/domain/rulebook/book.rs

use crate::domain::rulebook::rule::ColumnRule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column name -> rule. Names are trimmed on the way in and on lookup, since
/// sheet headers pick up stray spaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, ColumnRule>", into = "BTreeMap<String, ColumnRule>")]
pub struct Rulebook {
    rules: BTreeMap<String, ColumnRule>,
}

impl Rulebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl AsRef<str>, rule: ColumnRule) -> Option<ColumnRule> {
        self.rules.insert(column.as_ref().trim().to_string(), rule)
    }

    pub fn get(&self, column: &str) -> Option<&ColumnRule> {
        self.rules.get(column.trim())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Entries in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

impl From<BTreeMap<String, ColumnRule>> for Rulebook {
    fn from(map: BTreeMap<String, ColumnRule>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Rulebook> for BTreeMap<String, ColumnRule> {
    fn from(book: Rulebook) -> Self {
        book.rules
    }
}

impl<S: AsRef<str>> FromIterator<(S, ColumnRule)> for Rulebook {
    fn from_iter<I: IntoIterator<Item = (S, ColumnRule)>>(iter: I) -> Self {
        let mut book = Rulebook::new();
        for (column, rule) in iter {
            book.insert(column, rule);
        }
        book
    }
}
