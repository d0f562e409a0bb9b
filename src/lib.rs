//! # Finite set combinatorics
//!
//! Generators and checks over finite sets of generic, order-comparable
//! elements: power sets, permutations, Cartesian products, the elementary
//! function properties (injective, surjective, bijective), and hereditary
//! purity of nested set values.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod comb;
pub mod func;
pub mod nested;
pub mod prelude;
pub mod set;


/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// Builds a [`Set`](set::Set) from a nonempty list of elements.
///
/// Duplicates among the arguments collapse under set semantics. There is no
/// zero-element form; the empty set is spelled [`Set::empty`](set::Set::empty).
///
/// ```
/// use finset::set;
///
/// let set = set![2, 0, 1, 1];
/// assert_eq!(set.card(), 3);
/// ```
#[macro_export]
macro_rules! set {
    ($($el: expr),+ $(,)?) => (
        $crate::set::Set::from_vec(::std::vec![$($el),+])
    );
}
