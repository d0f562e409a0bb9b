//! Combinatorial generators: power sets, permutations, Cartesian products.
//!
//! Every generator materializes its full output: 2^n subsets, n!
//! permutations, ∏|Sᵢ| tuples. Nothing here guards against large inputs;
//! bounding them is the caller's business.

use crate::prelude::*;

impl<T: Ord + Clone> Set<T> {
    /// Powerset P(x): the set of all 2^n subsets, Ø and x included.
    ///
    /// Built by incremental doubling: starting from {Ø}, each element of the
    /// set extends every subset accumulated so far, and the batch of extended
    /// subsets is unioned back in.
    #[must_use]
    pub fn powerset(&self) -> Set<Set<T>> {
        let mut acc = Set::singleton(Set::empty());

        for el in self {
            let mut batch = Set::empty();
            for subset in &acc {
                batch.insert_mut(subset.clone().insert(el.clone()));
            }
            acc = acc.union(batch);
        }

        acc
    }

    /// The set of all n! orderings of the full set.
    ///
    /// Each element is threaded through every insertion position of every
    /// sequence of the previous generation, and the accumulator is replaced
    /// wholesale, so shorter sequences never survive into the result. The
    /// empty set yields {()}, the singleton of the empty sequence, matching
    /// 0! = 1.
    #[must_use]
    pub fn permutations(&self) -> Set<Vec<T>> {
        let mut acc = Set::singleton(Vec::new());

        for el in self {
            let mut next = Set::empty();
            for seq in &acc {
                for i in 0..=seq.len() {
                    let mut longer = seq.clone();
                    longer.insert(i, el.clone());
                    next.insert_mut(longer);
                }
            }
            acc = next;
        }

        acc
    }
}

/// Cartesian product S₁ × … × Sₖ: all tuples taking their i-th entry from
/// the i-th set. Any empty factor collapses the product to Ø.
///
/// ## Errors
///
/// Returns [`ArityError`] when given fewer than two sets.
pub fn cartesian_product<T: Ord + Clone>(sets: &[Set<T>]) -> Result<Set<Vec<T>>, ArityError> {
    let Some((fst, rest)) = sets.split_first() else {
        return Err(ArityError);
    };
    if rest.is_empty() {
        return Err(ArityError);
    }

    let mut acc: Set<Vec<T>> = fst.iter().map(|el| vec![el.clone()]).collect();
    for set in rest {
        let mut next = Set::empty();
        for tuple in &acc {
            for el in set {
                let mut longer = tuple.clone();
                longer.push(el.clone());
                next.insert_mut(longer);
            }
        }
        acc = next;
    }

    Ok(acc)
}

/// Tests for the generators.
#[cfg(test)]
mod comb {
    use super::*;
    use crate::set;

    #[test]
    fn powerset_small() {
        let powerset = set![1, 2].powerset();
        assert_eq!(powerset.card(), 4);
        assert_eq!(
            powerset,
            set![Set::empty(), set![1], set![2], set![1, 2]]
        );
    }

    #[test]
    fn powerset_empty() {
        let powerset = Set::<u32>::empty().powerset();
        assert_eq!(powerset, Set::singleton(Set::empty()));
    }

    #[test]
    fn powerset_rederivable() {
        let set = set![1];
        let twice = set.powerset().powerset();
        assert_eq!(twice.card(), 4);
        assert_eq!(twice, set.powerset().powerset());
        assert_eq!(set, set![1]);
    }

    #[test]
    fn permutations_small() {
        let perms = set![1, 2, 3].permutations();
        assert_eq!(perms.card(), 6);
        assert!(perms.contains(&vec![3, 1, 2]));
        for seq in &perms {
            assert_eq!(seq.len(), 3);
        }
    }

    /// Pins down the boundary behavior: 0! = 1 empty sequence.
    #[test]
    fn permutations_empty() {
        let perms = Set::<u32>::empty().permutations();
        assert_eq!(perms, Set::singleton(Vec::new()));
    }

    #[test]
    fn permutations_singleton() {
        let perms = set![7].permutations();
        assert_eq!(perms, Set::singleton(vec![7]));
    }

    #[test]
    fn product_pairs() {
        let fst = set![1, 2];
        let snd = set![3, 4, 5];
        let prod = cartesian_product(&[fst.clone(), snd.clone()]).unwrap();

        assert_eq!(prod.card(), 6);
        for tuple in &prod {
            assert_eq!(tuple.len(), 2);
            assert!(fst.contains(&tuple[0]));
            assert!(snd.contains(&tuple[1]));
        }
        assert!(prod.contains(&vec![2, 4]));
        assert!(!prod.contains(&vec![3, 1]));
    }

    #[test]
    fn product_triple() {
        let prod = cartesian_product(&[set![0, 1], set![2, 3], set![4, 5]]).unwrap();
        assert_eq!(prod.card(), 8);
        assert!(prod.contains(&vec![1, 2, 5]));
    }

    #[test]
    fn product_empty_factor() {
        let prod = cartesian_product(&[set![1, 2], Set::empty()]).unwrap();
        assert!(prod.is_empty());
    }

    #[test]
    fn product_arity() {
        assert_eq!(cartesian_product::<u32>(&[]), Err(ArityError));
        assert_eq!(cartesian_product(&[set![1, 2]]), Err(ArityError));
    }
}
