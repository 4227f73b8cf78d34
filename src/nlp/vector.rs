use std::collections::{HashMap, HashSet};

/// Raw term counts aligned with a vocabulary.
pub type TermVector = Vec<u32>;

/// Deduplicated union of the given token lists, in first-seen order.
pub fn build_vocabulary<'a, I>(token_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();
    for tokens in token_lists {
        for token in tokens {
            if seen.insert(token.as_str()) {
                vocabulary.push(token.clone());
            }
        }
    }
    vocabulary
}

/// Count `tokens` against `vocabulary`. Tokens outside the vocabulary are ignored.
pub fn create_vector(tokens: &[String], vocabulary: &[String]) -> TermVector {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    vocabulary
        .iter()
        .map(|term| counts.get(term.as_str()).copied().unwrap_or(0))
        .collect()
}

/// Cosine similarity of two count vectors. Zero when either has no magnitude.
///
/// Computed as `dot / sqrt(|a|² · |b|²)` so identical vectors score exactly 1.0.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    let mut dot = 0.0_f64;
    let mut mag_a = 0.0_f64;
    let mut mag_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_first_seen_order() {
        let query = toks(&["reset", "password"]);
        let a = toks(&["password", "change", "reset"]);
        let b = toks(&["billing", "change"]);
        let vocab = build_vocabulary([query.as_slice(), a.as_slice(), b.as_slice()]);
        assert_eq!(vocab, toks(&["reset", "password", "change", "billing"]));
    }

    #[test]
    fn test_create_vector_counts() {
        let vocab = toks(&["refund", "policy", "shipping"]);
        let v = create_vector(&toks(&["refund", "policy", "refund"]), &vocab);
        assert_eq!(v, vec![2, 1, 0]);
    }

    #[test]
    fn test_create_vector_ignores_unknown_tokens() {
        let vocab = toks(&["refund"]);
        let v = create_vector(&toks(&["refund", "unknown", "other"]), &vocab);
        assert_eq!(v, vec![1]);
    }

    #[test]
    fn test_create_vector_empty_inputs() {
        assert_eq!(create_vector(&[], &toks(&["a", "b"])), vec![0, 0]);
        assert!(create_vector(&toks(&["a"]), &[]).is_empty());
    }

    #[test]
    fn test_cosine_identical_is_one() {
        assert_eq!(cosine_similarity(&[1, 1, 0], &[1, 1, 0]), 1.0);
        assert_eq!(cosine_similarity(&[3, 1, 2], &[3, 1, 2]), 1.0);
    }

    #[test]
    fn test_cosine_orthogonal_is_zero() {
        assert_eq!(cosine_similarity(&[1, 0], &[0, 1]), 0.0);
    }

    #[test]
    fn test_cosine_zero_magnitude_is_zero() {
        assert_eq!(cosine_similarity(&[0, 0], &[1, 2]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_partial_overlap() {
        // [1,1] . [1,0] = 1, |a|²=2, |b|²=1
        let s = cosine_similarity(&[1, 1], &[1, 0]);
        assert!((s - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }
}
