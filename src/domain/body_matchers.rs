use crate::domain::error::{ContractError, Result};
use crate::domain::value_objects::{Pattern, Placeholder};
use serde::Serialize;

/// How the location of a matched fragment is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PathKind {
    JsonPath,
    XPath,
}

/// How the fragment at a path is compared
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MatchingType {
    Equality,
    #[serde(rename_all = "camelCase")]
    Type {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_occurrence: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_occurrence: Option<u32>,
    },
    Regex {
        pattern: Pattern,
    },
    Date,
    Time,
    Timestamp,
    Null,
}

impl MatchingType {
    pub fn by_equality() -> Self {
        MatchingType::Equality
    }

    pub fn by_regex(source: &str) -> Result<Self> {
        Ok(MatchingType::Regex {
            pattern: Pattern::new(source)?,
        })
    }

    pub fn by_pattern(pattern: Pattern) -> Self {
        MatchingType::Regex { pattern }
    }

    /// Matches by type, optionally bounding the number of array elements
    pub fn by_type(min_occurrence: Option<u32>, max_occurrence: Option<u32>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min_occurrence, max_occurrence) {
            if min > max {
                return Err(ContractError::InvalidOccurrence { min, max });
            }
        }
        Ok(MatchingType::Type {
            min_occurrence,
            max_occurrence,
        })
    }

    pub fn by_date() -> Self {
        MatchingType::Date
    }

    pub fn by_time() -> Self {
        MatchingType::Time
    }

    pub fn by_timestamp() -> Self {
        MatchingType::Timestamp
    }

    pub fn by_null() -> Self {
        MatchingType::Null
    }

    /// The regex a value must satisfy under this matching type, if any
    pub fn pattern(&self) -> Result<Option<Pattern>> {
        match self {
            MatchingType::Regex { pattern } => Ok(Some(pattern.clone())),
            MatchingType::Date => Pattern::placeholder(Placeholder::Date).map(Some),
            MatchingType::Time => Pattern::placeholder(Placeholder::Time).map(Some),
            MatchingType::Timestamp => Pattern::placeholder(Placeholder::DateTime).map(Some),
            _ => Ok(None),
        }
    }
}

/// A single structural match rule
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMatcher {
    pub path: String,
    pub path_kind: PathKind,
    pub matching: MatchingType,
}

/// Match rules applied to the body, independent of its literal content
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BodyMatchers {
    pub(crate) matchers: Vec<BodyMatcher>,
}

impl BodyMatchers {
    pub fn matchers(&self) -> &[BodyMatcher] {
        &self.matchers
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn json_paths(&self) -> impl Iterator<Item = &BodyMatcher> {
        self.matchers
            .iter()
            .filter(|matcher| matcher.path_kind == PathKind::JsonPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_type_rejects_inverted_bounds() {
        let err = MatchingType::by_type(Some(3), Some(1)).unwrap_err();
        assert_eq!(err, ContractError::InvalidOccurrence { min: 3, max: 1 });
        assert!(MatchingType::by_type(Some(1), Some(1)).is_ok());
        assert!(MatchingType::by_type(None, Some(0)).is_ok());
    }

    #[test]
    fn by_regex_reports_bad_sources() {
        assert!(matches!(
            MatchingType::by_regex("(").unwrap_err(),
            ContractError::InvalidPattern { .. }
        ));
    }

    #[test]
    fn temporal_types_carry_patterns() {
        let date = MatchingType::by_date().pattern().unwrap().unwrap();
        assert!(date.matches("2024-02-29"));
        let time = MatchingType::by_time().pattern().unwrap().unwrap();
        assert!(time.matches("23:59:59"));
        let timestamp = MatchingType::by_timestamp().pattern().unwrap().unwrap();
        assert!(timestamp.matches("2024-02-29T23:59:59"));
        assert!(MatchingType::by_equality().pattern().unwrap().is_none());
    }

    #[test]
    fn serializes_with_type_tag() {
        let matching = MatchingType::by_type(Some(1), None).unwrap();
        assert_eq!(
            serde_json::to_value(&matching).unwrap(),
            serde_json::json!({ "type": "type", "minOccurrence": 1 })
        );
    }
}
