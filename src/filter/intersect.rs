//! Two-sequence intersection

use std::collections::HashSet;
use std::hash::Hash;

/// Elements present in both `a` and `b`
///
/// Hashes the shorter input and scans the longer one, so the result follows
/// the longer input's order. When both have the same length `a` is hashed and
/// `b` is scanned. Runs in O(|a| + |b|) time and O(min(|a|, |b|)) space.
///
/// Each common element is emitted once, at its first position in the longer
/// input.
///
/// # Examples
/// ```
/// use shelfr::filter::intersect;
///
/// let a = vec!["x", "y", "z"];
/// let b = vec!["z", "x"];
/// assert_eq!(intersect(&a, &b), vec!["x", "z"]);
/// ```
#[must_use]
pub fn intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let (smaller, larger) = if a.len() > b.len() { (b, a) } else { (a, b) };

    let mut lookup: HashSet<&T> = smaller.iter().collect();

    larger
        .iter()
        .filter(|item| lookup.remove(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_set(items: Vec<&'static str>) -> HashSet<&'static str> {
        items.into_iter().collect()
    }

    #[test]
    fn test_intersect_basic() {
        let a = vec!["F1", "F2", "F3"];
        let b = vec!["F2", "F3", "F4"];
        assert_eq!(as_set(intersect(&a, &b)), as_set(vec!["F2", "F3"]));
    }

    #[test]
    fn test_intersect_is_commutative_as_sets() {
        let a = vec!["a", "b", "c", "d"];
        let b = vec!["d", "x", "b"];
        assert_eq!(as_set(intersect(&a, &b)), as_set(intersect(&b, &a)));
    }

    #[test]
    fn test_intersect_with_itself_is_dedup() {
        let a = vec!["a", "b", "c"];
        assert_eq!(intersect(&a, &a), a);
    }

    #[test]
    fn test_intersect_with_itself_drops_repeats() {
        let a = vec!["x", "x", "y"];
        assert_eq!(intersect(&a, &a), vec!["x", "y"]);
    }

    #[test]
    fn test_intersect_emits_repeated_match_once() {
        let short = vec!["b", "a"];
        let long = vec!["a", "b", "a", "c", "b"];
        assert_eq!(intersect(&short, &long), vec!["a", "b"]);
        assert_eq!(intersect(&long, &short), vec!["a", "b"]);
    }

    #[test]
    fn test_intersect_follows_longer_order() {
        let short = vec!["c", "a"];
        let long = vec!["a", "b", "c", "d"];
        assert_eq!(intersect(&short, &long), vec!["a", "c"]);
        assert_eq!(intersect(&long, &short), vec!["a", "c"]);
    }

    #[test]
    fn test_intersect_equal_length_scans_second() {
        let a = vec!["b", "a"];
        let b = vec!["a", "b"];
        assert_eq!(intersect(&a, &b), vec!["a", "b"]);
    }

    #[test]
    fn test_intersect_with_empty() {
        let a = vec!["a", "b"];
        let empty: Vec<&str> = Vec::new();
        assert!(intersect(&a, &empty).is_empty());
        assert!(intersect(&empty, &a).is_empty());
    }

    #[test]
    fn test_intersect_disjoint() {
        assert!(intersect(&["a", "b"], &["c", "d"]).is_empty());
    }

    #[test]
    fn test_intersect_is_subset_of_both() {
        let a = vec![1, 2, 3, 5, 8, 13];
        let b = vec![2, 3, 5, 7, 11, 13, 17];
        let result = intersect(&a, &b);
        assert!(result.iter().all(|x| a.contains(x) && b.contains(x)));
        assert_eq!(result, vec![2, 3, 5, 13]);
    }
}
