//! Crate prelude.

// The actual prelude.
pub use crate::{
    comb::cartesian_product,
    func::{is_bijective, is_injective, is_surjective, list_comprehension, set_comprehension},
    nested::{Code, Nested, ParseError},
    set::{ArityError, Set},
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::IntoIterator;
pub(crate) use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    str::FromStr,
};
