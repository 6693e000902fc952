use once_cell::sync::Lazy;
use regex::Regex;

/// A complex-structure category recognized in a transcript.
pub struct GrammarPattern {
    pub label: &'static str,
    regex: Regex,
}

impl GrammarPattern {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            regex: compile(pattern),
        }
    }

    pub fn is_match(&self, transcript: &str) -> bool {
        self.regex.is_match(transcript)
    }
}

/// A common surface-level slip, with the wording shown to the learner.
pub struct GrammarErrorRule {
    pub issue: &'static str,
    pub fix: &'static str,
    regex: Regex,
    /// Skip matches that complete one of [`GERUND_COLLOCATIONS`].
    allow_collocations: bool,
}

impl GrammarErrorRule {
    fn new(pattern: &str, issue: &'static str, fix: &'static str) -> Self {
        Self {
            issue,
            fix,
            regex: compile(pattern),
            allow_collocations: false,
        }
    }

    fn allowing_collocations(mut self) -> Self {
        self.allow_collocations = true;
        self
    }

    /// Returns the first offending text in `transcript`, if any.
    pub fn find<'t>(&self, transcript: &'t str) -> Option<&'t str> {
        if !self.allow_collocations {
            return self.regex.find(transcript).map(|m| m.as_str());
        }
        self.regex
            .find_iter(transcript)
            .find(|m| !completes_collocation(&transcript[..m.start()]))
            .map(|m| m.as_str())
    }
}

/// Lead-ins after which "to + -ing" is a legitimate gerund, not a slip.
pub const GERUND_COLLOCATIONS: &[&str] = &["look forward", "committed", "object"];

fn completes_collocation(preceding: &str) -> bool {
    let preceding = preceding.trim_end().to_lowercase();
    GERUND_COLLOCATIONS.iter().any(|lead| {
        preceding.strip_suffix(lead).is_some_and(|before| {
            before
                .chars()
                .last()
                .map_or(true, |c| !c.is_alphanumeric())
        })
    })
}

fn compile(pattern: &str) -> Regex {
    // Literal patterns only; test_tables_compile exercises every one.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid grammar pattern {pattern}: {e}"))
}

pub static GRAMMAR_PATTERNS: Lazy<Vec<GrammarPattern>> = Lazy::new(|| {
    vec![
        GrammarPattern::new(
            "Conditional (If/Unless)",
            r"(?i)\b(if|unless|provided that|as long as)\b",
        ),
        GrammarPattern::new("Passive Voice", r"(?i)\b(is|are|was|were|been|be)\s+\w+(ed|en)\b"),
        GrammarPattern::new("Relative Clause", r"(?i)\b(which|who|that|where|whose)\b"),
        GrammarPattern::new("Perfect Tense", r"(?i)\b(have|has|had)\s+\w+(ed|en|ne)\b"),
        GrammarPattern::new(
            "Concessive Clause",
            r"(?i)\b(although|even though|despite|in spite of|however)\b",
        ),
        GrammarPattern::new("Cleft Sentence", r"(?i)\b(what\s+i\s+|it\s+is\s+|it\s+was\s+)"),
        GrammarPattern::new("Modal of Deduction", r"(?i)\b(must|might|could|may)\s+have\b"),
        GrammarPattern::new(
            "Inversion",
            r"(?i)\b(never|rarely|seldom|little)\s+(do|did|have|has)\s+i\b",
        ),
        GrammarPattern::new(
            "Advanced Connectors",
            r"(?i)\b(moreover|furthermore|consequently|subsequently|nevertheless)\b",
        ),
    ]
});

pub static GRAMMAR_ERROR_RULES: Lazy<Vec<GrammarErrorRule>> = Lazy::new(|| {
    vec![
        GrammarErrorRule::new(
            r"(?i)\b(a)\s+[aeiou]",
            "Incorrect article 'a' before vowel sound",
            "an",
        ),
        GrammarErrorRule::new(
            r"(?i)\b(an)\s+[bcdfghjklmnpqrstvwxyz]",
            "Incorrect article 'an' before consonant",
            "a",
        ),
        GrammarErrorRule::new(
            r"(?i)\b(I|you|we|they)\s+is\b",
            "Subject-verb agreement error",
            "are/am",
        ),
        GrammarErrorRule::new(r"(?i)\b(he|she|it)\s+have\b", "Subject-verb agreement error", "has"),
        GrammarErrorRule::new(
            r"(?i)\b(much)\s+(people|cars|books)\b",
            "Quantifier error with countable noun",
            "many",
        ),
        GrammarErrorRule::new(
            r"(?i)\b(less)\s+(people|cars|books)\b",
            "Quantifier error with countable noun",
            "fewer",
        ),
        GrammarErrorRule::new(r"(?i)\b(to)\s+\w+ing\b", "Possible infinitive error", "to + base verb")
            .allowing_collocations(),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pattern(label: &str) -> &'static GrammarPattern {
        GRAMMAR_PATTERNS
            .iter()
            .find(|p| p.label == label)
            .expect("pattern exists")
    }

    fn rule(fix: &str) -> &'static GrammarErrorRule {
        GRAMMAR_ERROR_RULES
            .iter()
            .find(|r| r.fix == fix)
            .expect("rule exists")
    }

    #[test]
    fn test_tables_compile() {
        assert_eq!(GRAMMAR_PATTERNS.len(), 9);
        assert_eq!(GRAMMAR_ERROR_RULES.len(), 7);
    }

    #[rstest]
    #[case::conditional("Conditional (If/Unless)", "I would go if it rained")]
    #[case::passive("Passive Voice", "The bridge was constructed in 1900")]
    #[case::relative("Relative Clause", "The man who lives there")]
    #[case::perfect("Perfect Tense", "I have visited Paris")]
    #[case::concessive("Concessive Clause", "Although it was late, we stayed")]
    #[case::cleft("Cleft Sentence", "What I love is the food")]
    #[case::modal("Modal of Deduction", "She must have left")]
    #[case::inversion("Inversion", "Never have I seen such a view")]
    #[case::connector("Advanced Connectors", "Moreover, the rent is cheap")]
    fn test_pattern_recognizes_structure(#[case] label: &str, #[case] text: &str) {
        assert!(pattern(label).is_match(text));
    }

    #[test]
    fn test_pattern_ignores_unrelated_text() {
        assert!(!pattern("Inversion").is_match("I never did that"));
        assert!(!pattern("Modal of Deduction").is_match("You must go"));
    }

    #[test]
    fn test_subject_verb_rule_reports_matched_text() {
        assert_eq!(rule("are/am").find("Well I is happy"), Some("I is"));
    }

    #[test]
    fn test_article_rule_needs_standalone_article() {
        assert_eq!(rule("an").find("I ate a apple"), Some("a a"));
        assert_eq!(rule("an").find("banana is yellow"), None);
    }

    #[test]
    fn test_quantifier_rules() {
        assert_eq!(rule("many").find("too much people"), Some("much people"));
        assert_eq!(rule("fewer").find("less cars today"), Some("less cars"));
    }

    #[rstest]
    #[case::look_forward("I look forward to meeting you tomorrow")]
    #[case::committed("We are committed to doing better")]
    #[case::object("I object to doing that")]
    fn test_gerund_collocations_are_not_reported(#[case] text: &str) {
        assert_eq!(rule("to + base verb").find(text), None);
    }

    #[test]
    fn test_gerund_slip_is_reported() {
        assert_eq!(
            rule("to + base verb").find("I want to going home"),
            Some("to going")
        );
    }

    #[test]
    fn test_gerund_slip_after_collocation_is_still_reported() {
        assert_eq!(
            rule("to + base verb").find("I look forward to meeting you and want to swimming"),
            Some("to swimming")
        );
    }

    #[test]
    fn test_collocation_lead_must_be_whole_word() {
        assert_eq!(
            rule("to + base verb").find("I am uncommitted to going"),
            Some("to going")
        );
    }
}
