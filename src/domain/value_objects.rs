use crate::domain::error::{ContractError, Result};
use regex::Regex;
use regex_syntax::hir::{Hir, Look};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::str::FromStr;

/// Represents a validated regular expression used on one side of a contract
///
/// Matching is always whole-value: `\d+` matches `"42"` but not `"a42"`.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    matcher: Regex,
    kind: PatternKind,
}

/// Where a pattern came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    Custom,
    Placeholder(Placeholder),
    OneOf(Vec<String>),
}

impl Pattern {
    /// Creates a new Pattern with validation
    ///
    /// # Arguments
    /// * `source` - The regular expression source
    ///
    /// # Returns
    /// * `Ok(Pattern)` - Compiled pattern
    /// * `Err(ContractError::InvalidPattern)` - If the source does not compile
    pub fn new(source: &str) -> Result<Self> {
        Self::with_kind(source, PatternKind::Custom)
    }

    /// Wraps an already compiled regex.
    ///
    /// Only the source text carries over. Options set through
    /// `regex::RegexBuilder` (case insensitivity, multi-line and so on) are
    /// not recoverable from a `Regex`, so write them as inline flags such
    /// as `(?i)` instead.
    pub fn from_regex(regex: &Regex) -> Result<Self> {
        Self::new(regex.as_str())
    }

    pub fn placeholder(placeholder: Placeholder) -> Result<Self> {
        Self::with_kind(placeholder.regex(), PatternKind::Placeholder(placeholder))
    }

    /// Builds a pattern accepting exactly one of `values`, each taken literally.
    pub fn one_of<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(ContractError::invalid_pattern(
                "",
                "an enumeration needs at least one value",
            ));
        }
        let source = values
            .iter()
            .map(|value| regex::escape(value))
            .collect::<Vec<_>>()
            .join("|");
        Self::with_kind(&source, PatternKind::OneOf(values))
    }

    fn with_kind(source: &str, kind: PatternKind) -> Result<Self> {
        // Anchor the parsed tree; wrapping the text breaks under `(?x)` comments.
        let hir = regex_syntax::Parser::new()
            .parse(source)
            .map_err(|e| ContractError::invalid_pattern(source, e))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        let matcher = Regex::new(&anchored.to_string())
            .map_err(|e| ContractError::invalid_pattern(source, e))?;
        Ok(Pattern {
            source: source.to_string(),
            matcher,
            kind,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    /// Returns true when the whole of `text` matches
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.kind == other.kind
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("regex", &self.source)?;
        map.end()
    }
}

/// Named semantic classes with a fixed regular expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    AlphaUnicode,
    AlphaNumeric,
    Number,
    Integer,
    PositiveInt,
    Double,
    Hex,
    Boolean,
    IpAddress,
    Hostname,
    Email,
    Url,
    HttpsUrl,
    Uuid,
    Date,
    DateTime,
    Time,
    Iso8601WithOffset,
    NonBlankString,
    NonEmptyString,
}

impl Placeholder {
    pub const ALL: [Placeholder; 20] = [
        Placeholder::AlphaUnicode,
        Placeholder::AlphaNumeric,
        Placeholder::Number,
        Placeholder::Integer,
        Placeholder::PositiveInt,
        Placeholder::Double,
        Placeholder::Hex,
        Placeholder::Boolean,
        Placeholder::IpAddress,
        Placeholder::Hostname,
        Placeholder::Email,
        Placeholder::Url,
        Placeholder::HttpsUrl,
        Placeholder::Uuid,
        Placeholder::Date,
        Placeholder::DateTime,
        Placeholder::Time,
        Placeholder::Iso8601WithOffset,
        Placeholder::NonBlankString,
        Placeholder::NonEmptyString,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::AlphaUnicode => "any-alpha-unicode",
            Placeholder::AlphaNumeric => "any-alpha-numeric",
            Placeholder::Number => "any-number",
            Placeholder::Integer => "any-integer",
            Placeholder::PositiveInt => "any-positive-int",
            Placeholder::Double => "any-double",
            Placeholder::Hex => "any-hex",
            Placeholder::Boolean => "a-boolean",
            Placeholder::IpAddress => "any-ip-address",
            Placeholder::Hostname => "any-hostname",
            Placeholder::Email => "any-email",
            Placeholder::Url => "any-url",
            Placeholder::HttpsUrl => "any-https-url",
            Placeholder::Uuid => "any-uuid",
            Placeholder::Date => "any-date",
            Placeholder::DateTime => "any-date-time",
            Placeholder::Time => "any-time",
            Placeholder::Iso8601WithOffset => "any-iso8601-with-offset",
            Placeholder::NonBlankString => "any-non-blank-string",
            Placeholder::NonEmptyString => "any-non-empty-string",
        }
    }

    pub fn regex(self) -> &'static str {
        match self {
            Placeholder::AlphaUnicode => r"[\p{L}]*",
            Placeholder::AlphaNumeric => r"[a-zA-Z0-9]+",
            Placeholder::Number => r"-?(\d*\.\d+|\d+)",
            Placeholder::Integer => r"-?(\d+)",
            Placeholder::PositiveInt => r"([1-9]\d*)",
            Placeholder::Double => r"-?(\d*\.\d+)",
            Placeholder::Hex => r"[a-fA-F0-9]+",
            Placeholder::Boolean => r"(true|false)",
            Placeholder::IpAddress => {
                r"([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])"
            }
            Placeholder::Hostname => r"((http[s]?|ftp):/)/?([^:/\s]+)(:[0-9]{1,5})?",
            Placeholder::Email => r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}",
            Placeholder::Url => {
                r"(ftp|http|https)://[a-zA-Z0-9][a-zA-Z0-9-]*(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,6}(:[0-9]{1,5})?(/[a-zA-Z0-9._~%-]*)*"
            }
            Placeholder::HttpsUrl => {
                r"https://[a-zA-Z0-9][a-zA-Z0-9-]*(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,6}(:[0-9]{1,5})?(/[a-zA-Z0-9._~%-]*)*"
            }
            Placeholder::Uuid => {
                r"[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}"
            }
            Placeholder::Date => r"(\d\d\d\d)-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])",
            Placeholder::DateTime => {
                r"([0-9]{4})-(1[0-2]|0[1-9])-(3[01]|0[1-9]|[12][0-9])T(2[0-3]|[01][0-9]):([0-5][0-9]):([0-5][0-9])"
            }
            Placeholder::Time => r"(2[0-3]|[01][0-9]):([0-5][0-9]):([0-5][0-9])",
            Placeholder::Iso8601WithOffset => {
                r"([0-9]{4})-(1[0-2]|0[1-9])-(3[01]|0[1-9]|[12][0-9])T(2[0-3]|[01][0-9]):([0-5][0-9]):([0-5][0-9])(\.\d{1,6})?(Z|[+-][01]\d:[0-5]\d)"
            }
            Placeholder::NonBlankString => r"^\s*\S[\S\s]*",
            Placeholder::NonEmptyString => r"[\S\s]+",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placeholder {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Placeholder::ALL
            .into_iter()
            .find(|placeholder| placeholder.name() == wanted)
            .ok_or_else(|| ContractError::invalid_pattern(s, "unknown placeholder"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_anchored() {
        let pattern = Pattern::new(r"\d+").unwrap();
        assert!(pattern.matches("42"));
        assert!(!pattern.matches("a42"));
        assert!(!pattern.matches("42a"));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let pattern = Pattern::new("ab|cd").unwrap();
        assert!(pattern.matches("ab"));
        assert!(pattern.matches("cd"));
        assert!(!pattern.matches("abd"));
    }

    #[test]
    fn malformed_source_is_rejected() {
        let err = Pattern::new("[a-").unwrap_err();
        assert!(matches!(err, ContractError::InvalidPattern { .. }));
    }

    #[test]
    fn verbose_mode_comments_do_not_break_anchoring() {
        let pattern = Pattern::new("(?x) a+ # one or more\n b # trailing comment").unwrap();
        assert!(pattern.matches("aab"));
        assert!(!pattern.matches("aabc"));
        assert!(!pattern.matches("a ab"));
    }

    #[test]
    fn inline_flags_survive_a_compiled_regex() {
        let pattern = Pattern::from_regex(&Regex::new("(?i)abc").unwrap()).unwrap();
        assert!(pattern.matches("ABC"));
        assert!(pattern.matches("abc"));
        assert!(!pattern.matches("abcd"));
    }

    #[test]
    fn builder_options_do_not_survive_a_compiled_regex() {
        let regex = regex::RegexBuilder::new("abc")
            .case_insensitive(true)
            .build()
            .unwrap();
        assert!(regex.is_match("ABC"));
        let pattern = Pattern::from_regex(&regex).unwrap();
        assert_eq!(pattern.as_str(), "abc");
        assert!(!pattern.matches("ABC"));
    }

    #[test]
    fn lookaround_is_rejected() {
        let err = Pattern::new("foo(?=bar)").unwrap_err();
        assert!(matches!(err, ContractError::InvalidPattern { .. }));
    }

    #[test]
    fn one_of_escapes_values() {
        let pattern = Pattern::one_of(["a.b", "c+d"]).unwrap();
        assert!(pattern.matches("a.b"));
        assert!(pattern.matches("c+d"));
        assert!(!pattern.matches("axb"));
        assert_eq!(
            pattern.kind(),
            &PatternKind::OneOf(vec!["a.b".to_string(), "c+d".to_string()])
        );
    }

    #[test]
    fn one_of_requires_values() {
        let values: Vec<String> = Vec::new();
        assert!(Pattern::one_of(values).is_err());
    }

    #[test]
    fn every_placeholder_compiles() {
        for placeholder in Placeholder::ALL {
            let pattern = Pattern::placeholder(placeholder).unwrap();
            assert_eq!(pattern.kind(), &PatternKind::Placeholder(placeholder));
        }
    }

    #[test]
    fn ip_address_rejects_out_of_range_octets() {
        let pattern = Pattern::placeholder(Placeholder::IpAddress).unwrap();
        assert!(pattern.matches("192.168.0.255"));
        assert!(!pattern.matches("256.1.1.1"));
    }

    #[test]
    fn placeholder_names_parse_back() {
        for placeholder in Placeholder::ALL {
            assert_eq!(placeholder.name().parse::<Placeholder>().unwrap(), placeholder);
        }
        assert!("any-banana".parse::<Placeholder>().is_err());
    }

    #[test]
    fn pattern_serializes_as_regex_object() {
        let pattern = Pattern::new("[a-z]+").unwrap();
        let json = serde_json::to_value(&pattern).unwrap();
        assert_eq!(json, serde_json::json!({ "regex": "[a-z]+" }));
    }
}
