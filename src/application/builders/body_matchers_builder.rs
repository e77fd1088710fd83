use crate::domain::body_matchers::{BodyMatcher, BodyMatchers, MatchingType, PathKind};

/// Collects structural match rules for the body
#[derive(Debug, Default)]
pub struct BodyMatchersBuilder {
    matchers: Vec<BodyMatcher>,
}

impl BodyMatchersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json_path(&mut self, path: &str, matching: MatchingType) -> &mut Self {
        self.push(path, PathKind::JsonPath, matching)
    }

    pub fn xpath(&mut self, path: &str, matching: MatchingType) -> &mut Self {
        self.push(path, PathKind::XPath, matching)
    }

    fn push(&mut self, path: &str, path_kind: PathKind, matching: MatchingType) -> &mut Self {
        self.matchers.push(BodyMatcher {
            path: path.to_string(),
            path_kind,
            matching,
        });
        self
    }

    pub fn build(self) -> BodyMatchers {
        BodyMatchers {
            matchers: self.matchers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_rules_in_order() {
        let mut builder = BodyMatchersBuilder::new();
        builder
            .json_path("$.id", MatchingType::by_regex(r"\d+").unwrap())
            .xpath("/user/name", MatchingType::by_equality())
            .json_path("$.items", MatchingType::by_type(Some(1), Some(5)).unwrap());
        let matchers = builder.build();

        let paths: Vec<&str> = matchers.matchers().iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, ["$.id", "/user/name", "$.items"]);
        assert_eq!(matchers.json_paths().count(), 2);
        assert_eq!(matchers.matchers()[1].path_kind, PathKind::XPath);
    }
}
