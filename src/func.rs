//! Elementary properties of functions between finite sets, plus the
//! comprehension helpers.
//!
//! A function is passed as any `FnMut(&I) -> O` closure. The checks apply it
//! exactly once per domain element and never short-circuit the domain pass;
//! a panic inside the closure propagates to the caller untouched. The
//! answers are only meaningful for pure closures, which is the caller's
//! contract to uphold.

use crate::prelude::*;

/// Whether `f` is injective on `domain`: no two distinct elements map to
/// equal outputs.
///
/// Checked by collecting every output in order and testing whether set
/// deduplication shrinks the collection.
pub fn is_injective<I, O: Ord, F: FnMut(&I) -> O>(domain: &Set<I>, f: F) -> bool {
    let outputs: Vec<O> = domain.iter().map(f).collect();
    let total = outputs.len();
    let image: Set<O> = outputs.into_iter().collect();
    image.card() == total
}

/// Whether `f` maps `domain` onto all of `codomain`: every codomain element
/// is some element's output.
pub fn is_surjective<I, O: Ord, F: FnMut(&I) -> O>(
    domain: &Set<I>,
    codomain: &Set<O>,
    f: F,
) -> bool {
    let image: Set<O> = domain.iter().map(f).collect();
    codomain.iter().all(|el| image.contains(el))
}

/// Whether `f` is a bijection between `domain` and `codomain`, i.e. both an
/// injection and a surjection. Applies `f` once per domain element per
/// constituent check.
pub fn is_bijective<I, O: Ord, F: FnMut(&I) -> O>(
    domain: &Set<I>,
    codomain: &Set<O>,
    mut f: F,
) -> bool {
    is_injective(domain, &mut f) && is_surjective(domain, codomain, f)
}

/// List comprehension \[f(x) for x in items if P(x)\], preserving input
/// order and duplicates.
pub fn list_comprehension<I, O, M: FnMut(I) -> O, P: FnMut(&I) -> bool>(
    items: Vec<I>,
    map: M,
    pred: P,
) -> Vec<O> {
    items.into_iter().filter(pred).map(map).collect()
}

/// Set comprehension {f(x) : x ∈ set, P(x)}: specification followed by
/// replacement.
pub fn set_comprehension<I: Ord, O: Ord, M: FnMut(I) -> O, P: FnMut(&I) -> bool>(
    set: Set<I>,
    map: M,
    pred: P,
) -> Set<O> {
    set.select(pred).replace(map)
}
