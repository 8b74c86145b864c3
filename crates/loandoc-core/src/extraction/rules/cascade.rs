//! Ordered pattern cascades with first-match-wins semantics.

use regex::Regex;
use tracing::trace;

use crate::models::fields::{ExtractedValue, FieldKind};

/// Clean-up applied to a captured value before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Trim surrounding whitespace.
    Trim,
    /// Join the captured lines with single spaces.
    JoinLines,
    /// Drop thousands separators and the dollar sign.
    StripAmount,
}

impl PostProcess {
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Self::Trim => raw.trim().to_string(),
            Self::JoinLines => raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            Self::StripAmount => raw.trim().replace([',', '$'], ""),
        }
    }
}

/// One candidate pattern of a cascade.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Short name used in logs.
    pub name: &'static str,
    /// Pattern searched in the document text.
    pub pattern: &'static Regex,
    /// Clean-up applied to the capture.
    pub post: PostProcess,
}

impl Rule {
    pub fn new(name: &'static str, pattern: &'static Regex) -> Self {
        Self {
            name,
            pattern,
            post: PostProcess::Trim,
        }
    }

    pub fn with_post(mut self, post: PostProcess) -> Self {
        self.post = post;
        self
    }

    /// Apply the rule to the leftmost match in `text`; the value is capture group 1.
    ///
    /// A capture that is empty after clean-up counts as no match.
    pub fn apply(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        let raw = caps.get(1)?.as_str();
        let value = self.post.apply(raw);
        (!value.is_empty()).then_some(value)
    }
}

/// Ordered list of rules for one field kind.
#[derive(Debug, Clone)]
pub struct Cascade {
    kind: FieldKind,
    rules: Vec<Rule>,
}

impl Cascade {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            rules: Vec::new(),
        }
    }

    /// Append a rule with lower priority than every rule added before it.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Value of the first rule that matches; later rules are never consulted.
    pub fn first_match(&self, text: &str) -> ExtractedValue {
        for rule in &self.rules {
            if let Some(value) = rule.apply(text) {
                trace!("{}: matched rule '{}'", self.kind, rule.name);
                return ExtractedValue::Found(value);
            }
        }

        trace!("{}: no rule matched", self.kind);
        ExtractedValue::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref GENERIC: Regex = Regex::new(r"(?i)Code[:\s]+(\w+)").unwrap();
        static ref SPECIFIC: Regex = Regex::new(r"(?i)Branch\s+Code[:\s]+(\w+)").unwrap();
        static ref BLANK: Regex = Regex::new(r"Empty:([ ]*)").unwrap();
    }

    #[test]
    fn test_first_rule_wins_over_later_rules() {
        let cascade = Cascade::new(FieldKind::ApplicantName)
            .rule(Rule::new("generic", &GENERIC))
            .rule(Rule::new("specific", &SPECIFIC));

        let text = "Code: AAA\nBranch Code: BBB";
        assert_eq!(cascade.first_match(text), ExtractedValue::Found("AAA".to_string()));
    }

    #[test]
    fn test_falls_through_to_next_rule() {
        let cascade = Cascade::new(FieldKind::ApplicantName)
            .rule(Rule::new("specific", &SPECIFIC))
            .rule(Rule::new("generic", &GENERIC));

        assert_eq!(
            cascade.first_match("Code: AAA"),
            ExtractedValue::Found("AAA".to_string())
        );
        assert_eq!(cascade.first_match("nothing here"), ExtractedValue::NotFound);
    }

    #[test]
    fn test_blank_capture_is_no_match() {
        let cascade = Cascade::new(FieldKind::Address)
            .rule(Rule::new("blank", &BLANK))
            .rule(Rule::new("generic", &GENERIC));

        assert_eq!(
            cascade.first_match("Empty:   \nCode: X1"),
            ExtractedValue::Found("X1".to_string())
        );
    }

    #[test]
    fn test_post_process() {
        assert_eq!(PostProcess::Trim.apply("  a b  "), "a b");
        assert_eq!(
            PostProcess::JoinLines.apply("12 Oak St,\n   Springfield\n\nIL 62704  "),
            "12 Oak St, Springfield IL 62704"
        );
        assert_eq!(PostProcess::StripAmount.apply("$10,000.50"), "10000.50");
    }
}
