//! Nested set values [`Nested`] and the hereditary purity check.
//!
//! Generic [`Set`](crate::set::Set) elements are opaque: nothing in the type
//! says whether an element "is a set". [`Nested`] makes that question
//! answerable by tagging every value as either an [`Atom`](Nested::Atom) or
//! a [`Set`](Nested::Set) of further nested values, making purity (sets of
//! sets all the way down) a property one can actually test.

use crate::prelude::*;

/// A set value whose elements may be atoms or sets, at any depth.
///
/// The `Set` arm holds a real [`Set`], so nested values inherit its
/// deduplication and canonical order. Rust's ownership rules guarantee
/// regularity: a nested value can never contain itself.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nested<T> {
    /// A non-set leaf value.
    Atom(T),
    /// A set of further nested values.
    Set(Set<Nested<T>>),
}

impl<T: Ord> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Self::Set(iter.into_iter().collect())
    }
}

/// Displays atoms inline and sets in roster notation.
impl<T: Display> Display for Nested<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Atom(value) => write!(f, "{value}"),
            Self::Set(elems) => write!(f, "{elems}"),
        }
    }
}

impl<T> Nested<T> {
    /// Empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Set(Set::empty())
    }

    /// Singleton set {x}.
    #[must_use]
    pub fn singleton(self) -> Self
    where
        T: Ord,
    {
        Self::Set(Set::singleton(self))
    }

    /// Whether the value is a set rather than an atom.
    ///
    /// This is the narrow run-time capability check that purity is built on;
    /// it does not look inside.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Whether the value is a pure set: a set whose elements, at every
    /// depth, are themselves sets, with no atom anywhere.
    ///
    /// Atoms are not pure, and the empty set is vacuously pure. The check
    /// short-circuits on the first atom found.
    #[must_use]
    pub fn is_pure(&self) -> bool {
        match self {
            Self::Atom(_) => false,
            Self::Set(elems) => elems.iter().all(Self::is_pure),
        }
    }

    /// Nesting rank: atoms and Ø have rank 0, and a nonempty set exceeds its
    /// deepest element by one.
    #[must_use]
    pub fn rank(&self) -> usize {
        match self {
            Self::Atom(_) => 0,
            Self::Set(elems) => elems.iter().map(Self::rank).max().map_or(0, |rank| rank + 1),
        }
    }

    /// The canonical bracket [`Code`] of a pure set, or `None` if the value
    /// contains an atom at any depth.
    pub fn code(&self) -> Option<Code> {
        match self {
            Self::Atom(_) => None,
            Self::Set(elems) => {
                let mut codes: SmallVec<Code> =
                    elems.iter().map(Self::code).collect::<Option<_>>()?;
                codes.sort_unstable();

                let mut bits = BitVec::new();
                for code in codes {
                    bits.push(true);
                    bits.extend_from_bitslice(&code.0);
                    bits.push(false);
                }
                Some(Code(bits))
            }
        }
    }
}

// -------------------- Canonical codes -------------------- //

/// The canonical bracket encoding of a pure set: each element contributes an
/// opening bit, its own encoding, and a closing bit, with siblings in sorted
/// order. Two pure sets are equal iff their codes are.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, IntoIterator)]
pub struct Code(#[into_iterator(owned, ref)] BitVec);

impl Code {
    /// The encoding of Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BitVec::EMPTY)
    }
}

/// Writes the code as a bare bracket sequence.
impl Debug for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('(')?;
        for bit in self {
            f.write_char(if *bit { '(' } else { ')' })?;
        }
        f.write_char(')')
    }
}

/// Writes the code in roster notation.
impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut last = true;
        for bit in self {
            if *bit {
                if !last {
                    f.write_str(", ")?;
                }
                f.write_char('{')
            } else {
                f.write_char('}')
            }?;

            last = *bit;
        }
        f.write_char('}')
    }
}

// -------------------- String parsing -------------------- //

/// Error in parsing a nested set from roster notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Mismatched brackets, or content outside the outermost set.
    Brackets,
    /// An atom token that failed to parse.
    Atom(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Brackets => f.write_str("mismatched brackets"),
            Self::Atom(token) => write!(f, "invalid atom `{token}`"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the pending atom token, if any, into the innermost open set.
fn flush<T: Ord + FromStr>(
    stack: &mut [Vec<Nested<T>>],
    token: &mut String,
) -> Result<(), ParseError> {
    if token.is_empty() {
        return Ok(());
    }
    let Some(level) = stack.last_mut() else {
        return Err(ParseError::Brackets);
    };

    match token.parse() {
        Ok(value) => {
            level.push(Nested::Atom(value));
            token.clear();
            Ok(())
        }
        Err(_) => Err(ParseError::Atom(std::mem::take(token))),
    }
}

/// Nested sets are parsed from roster notation. Braces delimit sets, commas
/// and whitespace separate elements, and any other maximal run of characters
/// is an atom parsed via `T::from_str`. The input must be a single set.
impl<T: Ord + FromStr> FromStr for Nested<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut stack: Vec<Vec<Nested<T>>> = Vec::new();
        let mut token = String::new();
        let mut result = None;

        for c in s.chars() {
            // Only whitespace may follow the outermost closing brace.
            if result.is_some() {
                if c.is_whitespace() {
                    continue;
                }
                return Err(ParseError::Brackets);
            }

            match c {
                '{' => {
                    flush(&mut stack, &mut token)?;
                    stack.push(Vec::new());
                }
                '}' => {
                    flush(&mut stack, &mut token)?;
                    let Some(level) = stack.pop() else {
                        return Err(ParseError::Brackets);
                    };

                    let set = level.into_iter().collect();
                    if let Some(prev) = stack.last_mut() {
                        prev.push(set);
                    } else {
                        result = Some(set);
                    }
                }
                c if c == ',' || c.is_whitespace() => flush(&mut stack, &mut token)?,
                c => token.push(c),
            }
        }

        result.ok_or(ParseError::Brackets)
    }
}

/// Tests for [`Nested`].
#[cfg(test)]
mod nested {
    use super::*;
    use crate::set;

    /// Pure sets in canonical roster notation.
    const SUITE: &[&str] = &[
        "{}",
        "{{}}",
        "{{}, {{}}}",
        "{{}, {{}}, {{}, {{}}}}",
        "{{{{}}}}",
    ];

    /// Parse a nested set over `u32` atoms.
    fn parse(str: &str) -> Nested<u32> {
        str.parse().unwrap()
    }

    /// Verify round-trip conversion between a nested set and a string.
    fn roundtrip(str: &str) {
        assert_eq!(parse(str).to_string(), str);
    }

    #[test]
    fn roster_roundtrip() {
        for str in SUITE {
            roundtrip(str);
        }
        roundtrip("{0, 1, {2, {}}}");

        // Commas are optional, and non-canonical spellings normalize.
        assert_eq!(parse("{ 1 0 {} 0 }").to_string(), "{0, 1, {}}");
    }

    #[test]
    fn pure() {
        for str in SUITE {
            assert!(parse(str).is_pure(), "{str} should be pure");
        }
        assert!(!parse("{0, 1}").is_pure());
        assert!(!parse("{{0}}").is_pure());
        assert!(!Nested::Atom(0).is_pure());
        assert!(Nested::<u32>::empty().is_pure());

        assert!(Nested::<u32>::empty().is_set());
        assert!(!Nested::Atom(0).is_set());
    }

    #[test]
    fn code_agrees_with_purity() {
        for str in SUITE {
            let set = parse(str);
            let code = set.code().unwrap();
            assert_eq!(code.to_string(), *str);
        }
        assert_eq!(parse("{{3}}").code(), None);
        assert_eq!(Nested::Atom(0).code(), None);
    }

    #[test]
    fn code_format() {
        let code = parse("{{}, {{}}}").code().unwrap();
        assert_eq!(format!("{code:?}"), "(()(()))");
        assert_eq!(Code::empty().to_string(), "{}");
    }

    #[test]
    fn rank() {
        assert_eq!(Nested::<u32>::empty().rank(), 0);
        assert_eq!(Nested::Atom(9).rank(), 0);
        assert_eq!(parse("{9}").rank(), 1);
        assert_eq!(parse("{{}, {{}}}").rank(), 2);
        assert_eq!(parse("{{{{}}}}").rank(), 3);
    }

    #[test]
    fn set_semantics() {
        // Duplicates collapse at every depth.
        assert_eq!(parse("{{}, {}}"), parse("{{}}"));
        assert_eq!(parse("{1, 1, {2, 2}}").to_string(), "{1, {2}}");

        let singleton = Nested::<u32>::empty().singleton();
        assert_eq!(singleton, parse("{{}}"));
        assert_eq!(
            Nested::Set(set![Nested::Atom(1), Nested::Atom(1)]),
            [Nested::Atom(1)].into_iter().collect()
        );
    }

    #[test]
    fn parse_errors() {
        for str in ["", "{", "}{", "{}}", "{} {}", "1", "x {}"] {
            assert_eq!(
                str.parse::<Nested<u32>>(),
                Err(ParseError::Brackets),
                "{str:?}"
            );
        }
        assert_eq!(
            "{a}".parse::<Nested<u32>>(),
            Err(ParseError::Atom("a".into()))
        );
    }
}
