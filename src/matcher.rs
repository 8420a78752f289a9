//! Per-section matching of ARNs against ArnLike patterns.

use std::fmt;
use std::str::FromStr;

use log::trace;
use regex::{Regex, RegexBuilder};

use crate::arn::{parse, Arn, Section};
use crate::error::{ArnLikeError, Result};
use crate::sanitize::sanitize_sections;

/// Regex compilation knobs used for every pattern section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compiled program size limit; `None` keeps the regex crate default.
    pub size_limit: Option<usize>,
    /// ARN matching in IAM is case-sensitive, so this is off by default.
    pub case_insensitive: bool,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.size_limit = Some(limit);
        self
    }

    pub fn with_case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    fn compile(&self, section: Section, expr: &str) -> Result<Regex> {
        let mut builder = RegexBuilder::new(expr);
        builder
            .dot_matches_new_line(true)
            .case_insensitive(self.case_insensitive);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder
            .build()
            .map_err(|source| ArnLikeError::PatternCompilation {
                section,
                field: expr.to_string(),
                source,
            })
    }
}

/// Returns true if `value` is matched by the ArnLike `pattern`.
///
/// Both strings are split into six sections and each section is matched on
/// its own, so wildcards never reach across a `:` boundary (except inside
/// the resource section, which keeps its delimiters). A non-match is
/// `Ok(false)`, not an error.
pub fn arn_like(value: &str, pattern: &str) -> Result<bool> {
    arn_like_with(value, pattern, &MatchOptions::default())
}

pub fn arn_like_with(value: &str, pattern: &str, options: &MatchOptions) -> Result<bool> {
    let value = parse(value).map_err(ArnLikeError::Value)?;
    match_parsed(&value, pattern, options)
}

/// Returns true if any of `patterns` matches `value`.
///
/// Patterns are tried in order; the first match or the first error ends
/// the search. An empty pattern list never matches.
pub fn arn_like_any<I, S>(value: &str, patterns: I) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = MatchOptions::default();
    let value = parse(value).map_err(ArnLikeError::Value)?;
    for pattern in patterns {
        if match_parsed(&value, pattern.as_ref(), &options)? {
            return Ok(true);
        }
    }
    Ok(false)
}

// Sections are compiled one at a time so a mismatch stops before the
// remaining sections are compiled.
fn match_parsed(value: &Arn<'_>, pattern: &str, options: &MatchOptions) -> Result<bool> {
    let pattern = parse(pattern).map_err(ArnLikeError::Pattern)?;
    let exprs = sanitize_sections(&pattern);
    trace!("sanitized pattern sections: {:?}", exprs);

    for (section, expr) in Section::ALL.into_iter().zip(exprs.iter()) {
        let re = options.compile(section, expr)?;
        if !re.is_match(value.section(section)) {
            trace!(
                "{} section {:?} not matched by {}",
                section,
                value.section(section),
                expr
            );
            return Ok(false);
        }
    }

    Ok(true)
}

/// An ArnLike pattern compiled once for repeated matching.
#[derive(Debug, Clone)]
pub struct ArnPattern {
    source: String,
    // One anchored regex per section, in `Section::ALL` order.
    regexes: Vec<Regex>,
}

impl ArnPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_options(pattern, &MatchOptions::default())
    }

    pub fn with_options(pattern: &str, options: &MatchOptions) -> Result<Self> {
        let parsed = parse(pattern).map_err(ArnLikeError::Pattern)?;
        let exprs = sanitize_sections(&parsed);
        trace!("compiling pattern {}: {:?}", pattern, exprs);

        let regexes = Section::ALL
            .into_iter()
            .zip(exprs.iter())
            .map(|(section, expr)| options.compile(section, expr))
            .collect::<Result<Vec<_>>>()?;

        Ok(ArnPattern {
            source: pattern.to_string(),
            regexes,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The anchored regex compiled for each section.
    pub fn expressions(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        Section::ALL
            .into_iter()
            .zip(self.regexes.iter().map(Regex::as_str))
    }

    pub fn is_match(&self, value: &Arn<'_>) -> bool {
        Section::ALL
            .into_iter()
            .zip(self.regexes.iter())
            .all(|(section, re)| re.is_match(value.section(section)))
    }

    /// Parse `value` and match it. Fails only when `value` is not an ARN.
    pub fn matches(&self, value: &str) -> Result<bool> {
        let value = parse(value).map_err(ArnLikeError::Value)?;
        Ok(self.is_match(&value))
    }
}

impl FromStr for ArnPattern {
    type Err = ArnLikeError;

    fn from_str(s: &str) -> Result<Self> {
        ArnPattern::new(s)
    }
}

impl fmt::Display for ArnPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLE: &str = "arn:aws:iam::000000000000:role/some-role";

    #[test]
    fn test_exact_and_wildcards() {
        assert!(arn_like(ROLE, ROLE).unwrap());
        assert!(arn_like(ROLE, "arn:aws:iam::000000000000:*").unwrap());
        assert!(arn_like(ROLE, "arn:*:*:*:*:*").unwrap());
        assert!(arn_like(ROLE, "arn:aws:iam::000000000000:**").unwrap());
        assert!(arn_like(ROLE, "arn:aws:iam::000000000000:*role*").unwrap());
        assert!(arn_like(ROLE, "arn:aws:iam::000000000000:ro*").unwrap());
        assert!(!arn_like(ROLE, "arn:aws:iam::000000000000:some*").unwrap());
    }

    #[test]
    fn test_question_mark_is_one_character() {
        // "role/some-role" is 14 characters.
        assert!(arn_like(ROLE, "arn:aws:iam::000000000000:??????????????").unwrap());
        assert!(!arn_like(ROLE, "arn:aws:iam::000000000000:?????????????").unwrap());
        assert!(!arn_like(ROLE, "arn:aws:iam::000000000000:???????????????").unwrap());
        // Empty region section.
        assert!(!arn_like(ROLE, "arn:aws:iam:?:000000000000:*").unwrap());
        assert!(arn_like(ROLE, "arn:aws:iam:*:000000000000:*").unwrap());
    }

    #[test]
    fn test_matching_is_anchored() {
        assert!(!arn_like(ROLE, "arn:aws:ia::000000000000:*").unwrap());
        assert!(!arn_like(ROLE, "arn:aws:am::000000000000:*").unwrap());
        assert!(!arn_like(ROLE, "arn:aws:iam::000000000000:role").unwrap());
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let upper = "arn:aws:IAM::000000000000:role/some-role";
        assert!(!arn_like(upper, ROLE).unwrap());
        let options = MatchOptions::new().with_case_insensitive(true);
        assert!(arn_like_with(upper, ROLE, &options).unwrap());
    }

    #[test]
    fn test_wildcards_cover_newlines() {
        let value = "arn:aws:iam::000000000000:role/line\nbreak";
        assert!(arn_like(value, "arn:aws:iam::000000000000:role/*").unwrap());
        assert!(arn_like(value, "arn:aws:iam::000000000000:role/line?break").unwrap());
    }

    #[test]
    fn test_compilation_error_names_section() {
        let options = MatchOptions::new().with_size_limit(4 * 1024);
        let pattern = format!("arn:aws:iam::000000000000:{}", "a*".repeat(500));
        let err = arn_like_with(ROLE, &pattern, &options).unwrap_err();
        match err {
            ArnLikeError::PatternCompilation { section, field, .. } => {
                assert_eq!(section, Section::Resource);
                assert!(field.starts_with("^a.*a.*"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_mismatch_stops_before_later_sections_compile() {
        // The resource section would exceed the size limit, but the
        // account section fails to match first.
        let options = MatchOptions::new().with_size_limit(4 * 1024);
        let pattern = format!("arn:aws:iam::111111111111:{}", "a*".repeat(500));
        assert!(!arn_like_with(ROLE, &pattern, &options).unwrap());
    }

    #[test]
    fn test_arn_like_any() {
        let patterns = [
            "arn:aws:s3:::bucket/*",
            "arn:aws:iam::000000000000:user/*",
            "arn:aws:iam::000000000000:role/*",
        ];
        assert!(arn_like_any(ROLE, patterns).unwrap());
        assert!(!arn_like_any(ROLE, &patterns[..2]).unwrap());
        assert!(!arn_like_any(ROLE, Vec::<String>::new()).unwrap());
        assert!(arn_like_any(ROLE, ["not-an-arn"]).unwrap_err().is_invalid_prefix());
        assert!(arn_like_any("bogus", patterns).unwrap_err().is_invalid_prefix());
    }

    #[test]
    fn test_compiled_pattern() {
        let pattern: ArnPattern = "arn:aws:iam::*:role/*".parse().unwrap();
        assert_eq!(pattern.as_str(), "arn:aws:iam::*:role/*");
        assert_eq!(pattern.to_string(), "arn:aws:iam::*:role/*");
        assert!(pattern.matches(ROLE).unwrap());
        assert!(!pattern
            .matches("arn:aws:iam::000000000000:user/someone")
            .unwrap());
        assert!(pattern.matches("role/some-role").unwrap_err().is_invalid_prefix());

        let exprs: Vec<(Section, &str)> = pattern.expressions().collect();
        assert_eq!(exprs[4], (Section::AccountId, "^.*$"));
        assert_eq!(exprs[5], (Section::Resource, "^role/.*$"));
    }

    #[test]
    fn test_compiled_pattern_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArnPattern>();
    }
}
