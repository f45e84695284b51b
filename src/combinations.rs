use crate::signature::Signature;

/// Every sub-signature of `sig`: each letter independently taken 0 up to its
/// full count, zero choices left out.
///
/// For counts `c1..cn` there are exactly `(c1 + 1) * .. * (cn + 1)` results,
/// the empty signature and `sig` itself among them. The order is arbitrary.
pub fn combinations(sig: &Signature) -> Vec<Signature> {
    expand(sig.pairs())
        .into_iter()
        .map(Signature::from_sorted_unchecked)
        .collect()
}

fn expand(pairs: &[(char, usize)]) -> Vec<Vec<(char, usize)>> {
    let (&(letter, count), rest) = match pairs.split_first() {
        Some(split) => split,
        None => return vec![vec![]],
    };

    let tails = expand(rest);
    let mut result = Vec::with_capacity(tails.len() * (count + 1));
    for tail in tails {
        for n in 1..=count {
            // `letter` sorts before everything in `tail`.
            let mut combo = Vec::with_capacity(tail.len() + 1);
            combo.push((letter, n));
            combo.extend_from_slice(&tail);
            result.push(combo);
        }
        result.push(tail);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::word_signature;
    use std::collections::HashSet;

    fn sig(pairs: &[(char, usize)]) -> Signature {
        Signature::from_pairs(pairs.to_vec()).unwrap()
    }

    #[test]
    fn test_empty_has_one_combination() {
        assert_eq!(combinations(&Signature::empty()), vec![Signature::empty()]);
    }

    #[test]
    fn test_aabb() {
        let found = combinations(&sig(&[('a', 2), ('b', 2)]));
        assert_eq!(found.len(), 9);

        let expected: HashSet<Signature> = vec![
            sig(&[]),
            sig(&[('a', 1)]),
            sig(&[('a', 2)]),
            sig(&[('b', 1)]),
            sig(&[('a', 1), ('b', 1)]),
            sig(&[('a', 2), ('b', 1)]),
            sig(&[('b', 2)]),
            sig(&[('a', 1), ('b', 2)]),
            sig(&[('a', 2), ('b', 2)]),
        ]
        .into_iter()
        .collect();
        assert_eq!(found.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_count_is_product_and_well_formed() {
        let source = word_signature("mississippi");
        let found = combinations(&source);
        // i4 m1 p2 s4
        assert_eq!(found.len(), 5 * 2 * 3 * 5);

        let distinct: HashSet<_> = found.iter().cloned().collect();
        assert_eq!(distinct.len(), found.len());

        for combo in &found {
            assert!(Signature::from_pairs(combo.pairs().to_vec()).is_ok());
            assert!(source.covers(combo));
        }
    }
}
