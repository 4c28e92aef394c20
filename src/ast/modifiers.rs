use std::ops::{Range, RangeInclusive};

use crate::ast::Key;
use crate::render::RenderKey;
use crate::value::narrow_unsigned;

/// Pagination applied to the whole result set.
///
/// A query holds at most one slice; attaching another replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slice {
    /// No slicing, renders nothing
    #[default]
    All,

    /// `[i]`
    Single(i64),

    /// `[lower...upper]`, upper bound excluded
    Exclusive(i64, i64),

    /// `[lower..upper]`, upper bound included
    Inclusive(i64, i64),
}

impl Slice {
    pub fn text(&self) -> String {
        match self {
            Slice::All => String::new(),
            Slice::Single(index) => format!("[{}]", index),
            Slice::Exclusive(lower, upper) => format!("[{}...{}]", lower, upper),
            Slice::Inclusive(lower, upper) => format!("[{}..{}]", lower, upper),
        }
    }
}

macro_rules! signed_slice {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Slice {
                fn from(index: $ty) -> Self {
                    Slice::Single(i64::from(index))
                }
            }

            impl From<Range<$ty>> for Slice {
                fn from(range: Range<$ty>) -> Self {
                    Slice::Exclusive(i64::from(range.start), i64::from(range.end))
                }
            }

            impl From<RangeInclusive<$ty>> for Slice {
                fn from(range: RangeInclusive<$ty>) -> Self {
                    Slice::Inclusive(i64::from(*range.start()), i64::from(*range.end()))
                }
            }
        )*
    };
}

signed_slice!(i32, i64);

// Indices past `i64::MAX` clamp to it and are reported.
fn index(n: usize) -> i64 {
    narrow_unsigned(u64::try_from(n).unwrap_or(u64::MAX)).unwrap_or(i64::MAX)
}

impl From<usize> for Slice {
    fn from(n: usize) -> Self {
        Slice::Single(index(n))
    }
}

impl From<Range<usize>> for Slice {
    fn from(range: Range<usize>) -> Self {
        Slice::Exclusive(index(range.start), index(range.end))
    }
}

impl From<RangeInclusive<usize>> for Slice {
    fn from(range: RangeInclusive<usize>) -> Self {
        Slice::Inclusive(index(*range.start()), index(*range.end()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// One ordering clause, rendered as ` | order(<key> <asc|desc>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub key: Key,
    pub direction: Direction,
}

impl Order {
    pub fn new(key: impl Into<Key>, direction: Direction) -> Self {
        Order {
            key: key.into(),
            direction,
        }
    }

    pub fn ascending(key: impl Into<Key>) -> Self {
        Order::new(key, Direction::Ascending)
    }

    pub fn descending(key: impl Into<Key>) -> Self {
        Order::new(key, Direction::Descending)
    }

    pub fn text(&self) -> String {
        format!(" | order({} {})", self.key.key_text(), self.direction.keyword())
    }
}
