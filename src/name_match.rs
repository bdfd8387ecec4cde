/// Exact/fuzzy matching of one candidate name against an ordered reference
/// list. The reference order is the tie-break: when two references score the
/// same, the earlier one wins, so callers pass names in a deliberate order
/// (insertion order of the primary ranking list).
use strsim::normalized_levenshtein;

/// Accept threshold used when the caller has no reason to tune it. The legacy
/// sheet ran at 85 for years; it is a starting point, not a law.
pub const DEFAULT_THRESHOLD: u8 = 85;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched_name: Option<String>,
    pub score: u8,
    pub matched: bool,
}

impl MatchOutcome {
    fn unmatched(score: u8) -> Self {
        Self {
            matched_name: None,
            score,
            matched: false,
        }
    }
}

/// Similarity ratio in [0,100]. Symmetric in its arguments.
pub fn similarity(a: &str, b: &str) -> u8 {
    let ratio = normalized_levenshtein(a, b);
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Match `candidate` against `references`.
///
/// Exact (case-sensitive) equality short-circuits at score 100 with no fuzzy
/// work. Otherwise the best-scoring reference wins, first occurrence breaking
/// ties, and is accepted iff its score reaches `threshold`. An empty reference
/// list is an ordinary unmatched result, not an error.
pub fn best_match<S: AsRef<str>>(candidate: &str, references: &[S], threshold: u8) -> MatchOutcome {
    if references.is_empty() {
        return MatchOutcome::unmatched(0);
    }
    if references.iter().any(|r| r.as_ref() == candidate) {
        return MatchOutcome {
            matched_name: Some(candidate.to_string()),
            score: 100,
            matched: true,
        };
    }

    let mut best_idx = 0usize;
    let mut best_score = 0u8;
    for (idx, reference) in references.iter().enumerate() {
        let score = similarity(candidate, reference.as_ref());
        if score > best_score {
            best_score = score;
            best_idx = idx;
        }
    }

    if best_score >= threshold {
        MatchOutcome {
            matched_name: Some(references[best_idx].as_ref().to_string()),
            score: best_score,
            matched: true,
        }
    } else {
        MatchOutcome::unmatched(best_score)
    }
}
