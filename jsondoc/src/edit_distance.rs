//! Name suggestions for mistyped property names.

use std::cmp;

/// Levenshtein distance between two strings, counted in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    // One row of the DP table; `prev[j]` is the distance between the prefix of `a` seen so far
    // and `b[..j]`.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = cmp::min(substitution, cmp::min(prev[j + 1], curr[j]) + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Find the candidate closest to `lookup`. Case-insensitive exact matches win outright.
/// Otherwise the candidate must be within `dist` edits, which defaults to a third of the
/// lookup's length (but at least one).
pub fn find_best_match_for_name<'c, I>(
    candidates: I,
    lookup: &str,
    dist: Option<usize>,
) -> Option<&'c str>
where
    I: IntoIterator<Item = &'c str>,
{
    let max_dist = dist.unwrap_or_else(|| cmp::max(lookup.chars().count(), 3) / 3);
    let lookup_lower = lookup.to_lowercase();

    let mut best: Option<(&'c str, usize)> = None;
    for candidate in candidates {
        if candidate.to_lowercase() == lookup_lower {
            return Some(candidate);
        }
        let d = edit_distance(candidate, lookup);
        if d > max_dist {
            continue;
        }
        match best {
            Some((_, best_dist)) if best_dist <= d => {}
            _ => best = Some((candidate, d)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("nodes", "nodse"), 2);
        assert_eq!(edit_distance("edges", "edges"), 0);
    }

    #[test]
    fn test_best_match() {
        let keys = ["nodes", "edges", "title"];
        assert_eq!(find_best_match_for_name(keys, "node", None), Some("nodes"));
        assert_eq!(find_best_match_for_name(keys, "Edges", None), Some("edges"));
        assert_eq!(find_best_match_for_name(keys, "xyzzy", None), None);
    }

    #[test]
    fn test_explicit_distance() {
        let keys = ["width", "height"];
        assert_eq!(find_best_match_for_name(keys, "wdth", Some(0)), None);
        assert_eq!(find_best_match_for_name(keys, "wdth", Some(1)), Some("width"));
    }
}
