//! Agreement detection: did the judge side with the architect or the skeptic?
//!
//! Detection runs in two passes:
//!
//! 1. **Explicit phrasing**: "I agree with the skeptic", "the architect is
//!    correct", ... If exactly one side is named this way, that side wins.
//! 2. **Lexical overlap**: otherwise, the side whose text shares more
//!    significant words with the judge's text wins. A tie goes to the
//!    architect.
//!
//! The architect bias on ties is observed platform behavior and is kept
//! as is until product decides otherwise.

use crate::analysis::tokens::significant_tokens;
use regex::Regex;
use std::sync::LazyLock;

fn side_pattern(side: &str) -> String {
    format!(
        r"(?i)\b(?:agree|agrees|agreed|concur|concurs|side|sides|siding)\s+with\s+the\s+{side}\b|\bthe\s+{side}(?:'s\s+(?:solution|proposal|position|argument|approach|critique))?\s+(?:is|was)\s+(?:correct|right)\b|\bin\s+favou?r\s+of\s+the\s+{side}\b"
    )
}

static ARCHITECT_AGREEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&side_pattern("architect")).expect("architect agreement pattern is valid")
});

static SKEPTIC_AGREEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&side_pattern("skeptic")).expect("skeptic agreement pattern is valid")
});

/// Outcome of the explicit-phrasing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgreementSignal {
    /// Only the architect is explicitly endorsed
    Architect,
    /// Only the skeptic is explicitly endorsed
    Skeptic,
    /// Neither or both sides are named; fall back to overlap
    Ambiguous,
}

/// Search the judge text for explicit agreement phrasing.
pub fn explicit_agreement(judge_text: &str) -> AgreementSignal {
    let architect = ARCHITECT_AGREEMENT.is_match(judge_text);
    let skeptic = SKEPTIC_AGREEMENT.is_match(judge_text);

    match (architect, skeptic) {
        (true, false) => AgreementSignal::Architect,
        (false, true) => AgreementSignal::Skeptic,
        _ => AgreementSignal::Ambiguous,
    }
}

/// Count distinct significant tokens of `judge_text` that also appear in
/// `candidate`.
pub fn lexical_overlap(judge_text: &str, candidate: &str) -> usize {
    let judge_tokens = significant_tokens(judge_text);
    let candidate_tokens = significant_tokens(candidate);
    judge_tokens.intersection(&candidate_tokens).count()
}

/// Decide whether the judge sided with the architect.
///
/// # Examples
///
/// ```
/// use flows_domain::judge_agrees_with_architect;
///
/// assert!(!judge_agrees_with_architect("I agree with the skeptic.", "", ""));
/// assert!(judge_agrees_with_architect("Overall the architect is correct.", "", ""));
/// ```
pub fn judge_agrees_with_architect(
    judge_text: &str,
    architect_solution: &str,
    skeptic_critique: &str,
) -> bool {
    match explicit_agreement(judge_text) {
        AgreementSignal::Architect => true,
        AgreementSignal::Skeptic => false,
        AgreementSignal::Ambiguous => {
            let architect_score = lexical_overlap(judge_text, architect_solution);
            let skeptic_score = lexical_overlap(judge_text, skeptic_critique);
            architect_score >= skeptic_score
        }
    }
}
