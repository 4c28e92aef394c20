pub mod ast;
pub mod diagnostic;
pub mod output;
pub mod query;
pub mod render;
pub mod value;

pub use ast::{
    Clause, CompareOp, ConcatOp, Direction, Field, Filter, FilterBlock, Function, Key, Operand,
    Order, RootModifier, Slice, SpecialKey,
};
pub use diagnostic::Diagnostic;
pub use output::to_literal;
pub use query::{Projection, Query, Style};
pub use render::{Custom, RenderField, RenderFilter, RenderKey, RenderLiteral};
pub use value::Value;
