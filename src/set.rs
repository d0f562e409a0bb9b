//! Finite sets [`Set`] over ordered elements.

use crate::prelude::*;

/// A finite set of elements of type `T`.
///
/// Elements are deduplicated through their [`Ord`] implementation, which
/// doubles as the equality contract: two sets are equal iff they contain the
/// same elements. Since a [`Set`] is itself ordered (and hashable when `T`
/// is), sets nest freely; `Set<Set<T>>` is a set of sets with structural
/// equality, no wrapper required.
///
/// The derived `Ord` is the canonical order used for deduplication
/// (lexicographic over the sorted elements). It is **not** the subset order;
/// that one is spelled [`Set::subset`].
///
/// ## Invariants
///
/// The backing vector is sorted ascending and contains no two equal
/// elements. Every constructor and operation preserves this.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, IntoIterator)]
pub struct Set<T>(#[into_iterator(owned, ref)] Vec<T>);

/// Error for an n-ary set operation given fewer than two sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArityError;

impl Display for ArityError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str("must pass in at least two sets")
    }
}

impl std::error::Error for ArityError {}

// -------------------- Basic traits -------------------- //

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Set<T>> for Vec<T> {
    fn from(set: Set<T>) -> Self {
        set.0
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(&self.0).finish()
    }
}

/// Displays a set in roster notation, elements in canonical order.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for el in iter {
                write!(f, ", {el}")?;
            }
        }
        f.write_char('}')
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Set<T> {
    /// Empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// The set as a slice, in canonical order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements of the set.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

// -------------------- Constructions -------------------- //

impl<T: Ord> Set<T> {
    /// Builds a set from arbitrary elements, deduplicating as needed.
    #[must_use]
    pub fn from_vec(mut vec: Vec<T>) -> Self {
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }

    /// Singleton set {x}.
    #[must_use]
    pub fn singleton(el: T) -> Self {
        Self(vec![el])
    }

    /// In-place set insertion x ∪ {y}.
    pub fn insert_mut(&mut self, el: T) {
        if let Err(i) = self.0.binary_search(&el) {
            self.0.insert(i, el);
        }
    }

    /// Set insertion x ∪ {y}.
    #[must_use]
    pub fn insert(mut self, el: T) -> Self {
        self.insert_mut(el);
        self
    }

    /// In-place set specification: keeps the elements satisfying `pred`.
    pub fn select_mut<P: FnMut(&T) -> bool>(&mut self, pred: P) {
        self.0.retain(pred);
    }

    /// Set specification {x ∈ S : P(x)}.
    #[must_use]
    pub fn select<P: FnMut(&T) -> bool>(mut self, pred: P) -> Self {
        self.select_mut(pred);
        self
    }

    /// Set replacement {f(x) : x ∈ S}.
    ///
    /// The result may be smaller than the input when `f` maps two elements to
    /// the same value.
    #[must_use]
    pub fn replace<O: Ord, F: FnMut(T) -> O>(self, f: F) -> Set<O> {
        self.0.into_iter().map(f).collect()
    }

    /// Membership relation ∈.
    pub fn contains(&self, el: &T) -> bool {
        self.0.binary_search(el).is_ok()
    }
}

// -------------------- Algebra -------------------- //

impl<T: Ord> Set<T> {
    /// Union x ∪ y.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let mut out = Vec::with_capacity(self.card().max(other.card()));
        let mut snd = other.0.into_iter().peekable();

        for el in self.0 {
            while let Some(smaller) = snd.next_if(|cand| *cand < el) {
                out.push(smaller);
            }
            let _ = snd.next_if(|cand| *cand == el);
            out.push(el);
        }

        out.extend(snd);
        Self(out)
    }

    /// Union over an iterator.
    pub fn union_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::union)
    }

    /// Union S₁ ∪ … ∪ Sₖ, requiring at least two sets.
    ///
    /// ## Errors
    ///
    /// Returns [`ArityError`] when given fewer than two sets.
    pub fn union_all(sets: Vec<Self>) -> Result<Self, ArityError> {
        if sets.len() < 2 {
            return Err(ArityError);
        }
        Ok(Self::union_iter(sets))
    }

    /// Intersection x ∩ y.
    #[must_use]
    pub fn inter(self, other: Self) -> Self {
        let mut out = Vec::new();
        let mut snd = other.0.into_iter().peekable();

        for el in self.0 {
            while snd.next_if(|cand| *cand < el).is_some() {}
            if snd.next_if(|cand| *cand == el).is_some() {
                out.push(el);
            }
        }

        Self(out)
    }

    /// Intersection S₁ ∩ … ∩ Sₖ, requiring at least two sets.
    ///
    /// ## Errors
    ///
    /// Returns [`ArityError`] when given fewer than two sets.
    pub fn inter_all(sets: Vec<Self>) -> Result<Self, ArityError> {
        let mut iter = sets.into_iter();
        match (iter.next(), iter.next()) {
            (Some(fst), Some(snd)) => Ok(iter.fold(fst.inter(snd), Self::inter)),
            _ => Err(ArityError),
        }
    }

    /// Difference x \ y.
    #[must_use]
    pub fn diff(self, other: Self) -> Self {
        let mut out = Vec::new();
        let mut snd = other.0.into_iter().peekable();

        for el in self.0 {
            while snd.next_if(|cand| *cand < el).is_some() {}
            if snd.next_if(|cand| *cand == el).is_none() {
                out.push(el);
            }
        }

        Self(out)
    }

    /// Symmetric difference x △ y: the elements in exactly one of the sets.
    #[must_use]
    pub fn sym_diff(self, other: Self) -> Self {
        let mut out = Vec::new();
        let mut snd = other.0.into_iter().peekable();

        for el in self.0 {
            while let Some(smaller) = snd.next_if(|cand| *cand < el) {
                out.push(smaller);
            }
            if snd.next_if(|cand| *cand == el).is_none() {
                out.push(el);
            }
        }

        out.extend(snd);
        Self(out)
    }

    /// Subset relation ⊆.
    pub fn subset(&self, other: &Self) -> bool {
        let mut iter = other.iter();
        'elems: for el in self {
            for cand in iter.by_ref() {
                match cand.cmp(el) {
                    Ordering::Less => {}
                    Ordering::Equal => continue 'elems,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Strict subset relation ⊂.
    pub fn ssubset(&self, other: &Self) -> bool {
        self.card() < other.card() && self.subset(other)
    }
}
