// rowgrade-core/src/domain/rulebook/rule.rs

use serde::{Deserialize, Deserializer, Serialize};

// Field names as they appear in the metadata sheet.
pub const FIELD_MAX_WORDS: &str = "Max Words";
pub const FIELD_MAX_ITEMS: &str = "Max Items";
pub const FIELD_MAX_STEPS: &str = "Max Steps";
pub const FIELD_MAX_SKILLS: &str = "Max Skills";
pub const FIELD_MAX_HASHTAGS: &str = "Max Hashtags";
pub const FIELD_MAX_WORDS_PER_STEP: &str = "Max Words per Step";
pub const FIELD_OPTIONS: &str = "Options";
pub const FIELD_RULES: &str = "Rules";
pub const FIELD_CUSTOMER_FACING: &str = "Customer Facing";

/// Markers in the free-text `Rules` field meaning the cell may not be empty.
const REQUIRED_MARKERS: [&str; 2] = ["required", "must"];

/// One rulebook entry, kept as raw as the metadata source hands it over.
///
/// Limits stay unparsed here: the metadata sheet is edited by hand and routinely
/// carries "N/A", blanks or "6.0". The typed accessors below decide what counts
/// as a limit, so a bad cell only disables its own check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRule {
    #[serde(rename = "Max Words", alias = "max_words", default, deserialize_with = "lenient")]
    pub max_words: Option<String>,

    #[serde(rename = "Max Items", alias = "max_items", default, deserialize_with = "lenient")]
    pub max_items: Option<String>,

    #[serde(rename = "Max Steps", alias = "max_steps", default, deserialize_with = "lenient")]
    pub max_steps: Option<String>,

    #[serde(rename = "Max Skills", alias = "max_skills", default, deserialize_with = "lenient")]
    pub max_skills: Option<String>,

    #[serde(
        rename = "Max Hashtags",
        alias = "max_hashtags",
        default,
        deserialize_with = "lenient"
    )]
    pub max_hashtags: Option<String>,

    #[serde(
        rename = "Max Words per Step",
        alias = "max_words_per_step",
        default,
        deserialize_with = "lenient"
    )]
    pub max_words_per_step: Option<String>,

    #[serde(rename = "Options", alias = "options", default, deserialize_with = "lenient")]
    pub options: Option<String>,

    #[serde(rename = "Rules", alias = "rules", default, deserialize_with = "lenient")]
    pub rules: Option<String>,

    #[serde(
        rename = "Customer Facing",
        alias = "customer_facing",
        default,
        deserialize_with = "lenient"
    )]
    pub customer_facing: Option<String>,
}

impl ColumnRule {
    /// Builds a rule from a field lookup (e.g. a CSV record keyed by header).
    /// Blank values are treated as absent.
    pub fn from_fields<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |field: &str| lookup(field).filter(|v| !v.trim().is_empty());
        Self {
            max_words: get(FIELD_MAX_WORDS),
            max_items: get(FIELD_MAX_ITEMS),
            max_steps: get(FIELD_MAX_STEPS),
            max_skills: get(FIELD_MAX_SKILLS),
            max_hashtags: get(FIELD_MAX_HASHTAGS),
            max_words_per_step: get(FIELD_MAX_WORDS_PER_STEP),
            options: get(FIELD_OPTIONS),
            rules: get(FIELD_RULES),
            customer_facing: get(FIELD_CUSTOMER_FACING),
        }
    }

    pub fn max_words(&self) -> Option<usize> {
        parse_limit(self.max_words.as_deref())
    }

    pub fn max_items(&self) -> Option<usize> {
        parse_limit(self.max_items.as_deref())
    }

    pub fn max_steps(&self) -> Option<usize> {
        parse_limit(self.max_steps.as_deref())
    }

    pub fn max_skills(&self) -> Option<usize> {
        parse_limit(self.max_skills.as_deref())
    }

    pub fn max_hashtags(&self) -> Option<usize> {
        parse_limit(self.max_hashtags.as_deref())
    }

    pub fn max_words_per_step(&self) -> Option<usize> {
        parse_limit(self.max_words_per_step.as_deref())
    }

    /// The enumerated valid values, trimmed. Empty when the rule has none.
    pub fn options(&self) -> Vec<&str> {
        self.options
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_required(&self) -> bool {
        self.rules.as_deref().is_some_and(|text| {
            let text = text.to_lowercase();
            REQUIRED_MARKERS.iter().any(|marker| text.contains(marker))
        })
    }

    pub fn is_customer_facing(&self) -> bool {
        self.customer_facing.as_deref().is_some_and(|flag| {
            matches!(
                flag.trim().to_lowercase().as_str(),
                "yes" | "y" | "true" | "1"
            )
        })
    }
}

/// Parses a limit cell, returning `None` for anything that is not a
/// non-negative whole number. `None` means "no limit, skip the check".
///
/// Integral floats ("6.0") are accepted: spreadsheet exports render integer
/// columns that way as soon as one cell in the column is blank.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let raw = raw?.trim();
    if let Ok(n) = raw.parse::<usize>() {
        return Some(n);
    }
    let value: f64 = raw.parse().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as usize)
}

// Metadata cells arrive as strings, numbers, booleans, lists or nulls depending
// on the source format. Everything is normalized to an optional string; lists
// are joined with ", " and any other shape reads as absent.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<LenientValue>),
    Other(serde::de::IgnoredAny),
}

impl LenientValue {
    fn into_text(self) -> Option<String> {
        let text = match self {
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => if b { "yes" } else { "no" }.to_string(),
            Self::Text(s) => s,
            Self::List(items) => items
                .into_iter()
                .filter_map(Self::into_text)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Other(_) => return None,
        };
        (!text.trim().is_empty()).then_some(text)
    }
}

fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<LenientValue> = Option::deserialize(deserializer)?;
    Ok(value.and_then(LenientValue::into_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_parse_limit_accepts_whole_numbers() {
        assert_eq!(parse_limit(Some("6")), Some(6));
        assert_eq!(parse_limit(Some(" 12 ")), Some(12));
        assert_eq!(parse_limit(Some("6.0")), Some(6));
        assert_eq!(parse_limit(Some("0")), Some(0));
    }

    #[test]
    fn test_parse_limit_ignores_bad_metadata() {
        assert_eq!(parse_limit(None), None);
        assert_eq!(parse_limit(Some("")), None);
        assert_eq!(parse_limit(Some("N/A")), None);
        assert_eq!(parse_limit(Some("nan")), None);
        assert_eq!(parse_limit(Some("-3")), None);
        assert_eq!(parse_limit(Some("2.5")), None);
        assert_eq!(parse_limit(Some("inf")), None);
    }

    #[test]
    fn test_options_are_trimmed() {
        let rule = ColumnRule {
            options: Some("High, Medium ,Low,".into()),
            ..Default::default()
        };
        assert_eq!(rule.options(), vec!["High", "Medium", "Low"]);
        assert!(ColumnRule::default().options().is_empty());
    }

    #[test]
    fn test_required_markers_are_case_insensitive() {
        let required = ColumnRule {
            rules: Some("REQUIRED for every activity".into()),
            ..Default::default()
        };
        let must = ColumnRule {
            rules: Some("Must mention the age range".into()),
            ..Default::default()
        };
        let optional = ColumnRule {
            rules: Some("Optional, keep it short".into()),
            ..Default::default()
        };
        assert!(required.is_required());
        assert!(must.is_required());
        assert!(!optional.is_required());
        assert!(!ColumnRule::default().is_required());
    }

    #[test]
    fn test_customer_facing_flag() {
        let yes = ColumnRule {
            customer_facing: Some(" Yes".into()),
            ..Default::default()
        };
        let no = ColumnRule {
            customer_facing: Some("No".into()),
            ..Default::default()
        };
        assert!(yes.is_customer_facing());
        assert!(!no.is_customer_facing());
    }

    #[test]
    fn test_lenient_deserialization_from_yaml() -> Result<()> {
        let yaml = "\
max_words: 6
Max Items: '6.0'
Max Steps: N/A
Options: ''
Customer Facing: true
";
        let rule: ColumnRule = serde_yaml::from_str(yaml)?;
        assert_eq!(rule.max_words(), Some(6));
        assert_eq!(rule.max_items(), Some(6));
        assert_eq!(rule.max_steps(), None);
        assert_eq!(rule.options, None);
        assert!(rule.is_customer_facing());
        Ok(())
    }

    #[test]
    fn test_list_and_map_values() -> Result<()> {
        let yaml = "\
Options: [High, Medium, Low]
Max Steps: {value: 3}
Max Words: [8]
";
        let rule: ColumnRule = serde_yaml::from_str(yaml)?;
        assert_eq!(rule.options(), vec!["High", "Medium", "Low"]);
        assert_eq!(rule.max_steps, None);
        assert_eq!(rule.max_words(), Some(8));

        let rule: ColumnRule =
            serde_json::from_str(r#"{"Max Steps": {"value": 3}, "Rules": ["required", null]}"#)?;
        assert_eq!(rule.max_steps(), None);
        assert!(rule.is_required());
        Ok(())
    }

    #[test]
    fn test_from_fields_drops_blanks() {
        let rule = ColumnRule::from_fields(|field| match field {
            FIELD_MAX_WORDS => Some("10".to_string()),
            FIELD_RULES => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(rule.max_words(), Some(10));
        assert_eq!(rule.rules, None);
    }
}
