//! # GROQ Builder - Expression Nodes
//!
//! Typed nodes that render into the pieces of a GROQ query.
//!
//! ## Architecture Overview
//!
//! - **[key]** - Field references, reserved keys and key modifiers
//! - **[function]** - Built-in function names and concatenation operators
//! - **[filter]** - Predicates placed inside `*[...]`
//! - **[field]** - Projection entries placed inside `{ ... }`
//! - **[modifiers]** - Slicing and ordering applied to the whole result
//! - **[clause]** - Items of a filter block and their routing
//!
//! ## Query Shape
//!
//! ```text
//! *[<filter>] { <fields> } | order(<key> <dir>) ... [<slice>]
//! ```
//!
//! Every part but the leading `*` is optional.
//!
//! ## Examples
//!
//! ### Filter
//!
//! ```text
//! *[_type == "movie" && popularity > 15]
//! ```
//!
//! ### Projection With Fallback
//!
//! ```text
//! *[_type == "movie"] { ..., "rating": coalesce(rating, "unknown") }
//! ```
//!
//! ### Ordering And Slicing
//!
//! ```text
//! *[_type == "movie"] | order(releaseDate desc) | order(_createdAt asc)[0...10]
//! ```
pub mod clause;
pub mod field;
pub mod filter;
pub mod function;
pub mod key;
pub mod modifiers;

pub use clause::{Clause, FilterBlock, RootModifier};
pub use field::{Field, key_safe_name};
pub use filter::{CompareOp, Filter};
pub use function::{ConcatOp, Function};
pub use key::{Key, Operand, SpecialKey};
pub use modifiers::{Direction, Order, Slice};
