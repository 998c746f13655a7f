use std::cmp::Ordering;

/// Selects the `k` highest-scored entries, highest first
///
/// The sort is stable: entries with equal scores keep their input order, so
/// callers that pass candidates in catalog order get catalog order as the
/// tie-break. `k == 0` yields an empty result and `k` larger than the input
/// returns every entry.
pub fn top_k<T>(mut scored: Vec<(T, f64)>, k: usize) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(k);
    scored.into_iter().map(|(value, _)| value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_orders_descending() {
        let scored = vec![("a", 1.0), ("b", 3.0), ("c", 2.0)];
        assert_eq!(top_k(scored, 3), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_top_k_truncates() {
        let scored = vec![("a", 1.0), ("b", 3.0), ("c", 2.0)];
        assert_eq!(top_k(scored, 2), vec!["b", "c"]);
    }

    #[test]
    fn test_top_k_ties_keep_input_order() {
        let scored = vec![("first", 5.0), ("second", 7.0), ("third", 5.0), ("fourth", 5.0)];
        assert_eq!(top_k(scored, 4), vec!["second", "first", "third", "fourth"]);
    }

    #[test]
    fn test_top_k_zero_is_empty() {
        let scored = vec![("a", 1.0), ("b", 2.0)];
        assert!(top_k(scored, 0).is_empty());
    }

    #[test]
    fn test_top_k_saturates_at_input_length() {
        let scored = vec![("a", 1.0), ("b", 2.0)];
        assert_eq!(top_k(scored, 10), vec!["b", "a"]);
    }

    #[test]
    fn test_top_k_empty_input() {
        let scored: Vec<(usize, f64)> = Vec::new();
        assert!(top_k(scored, 5).is_empty());
    }
}
