use crate::ast::{Filter, Key, Order, Slice};
use crate::render::Custom;

/// One item declared in a query's filter block.
///
/// Predicates are conjoined into the bracketed filter; slices and orders are
/// root-level modifiers and are routed to the query instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Predicate(Filter),
    Slice(Slice),
    Order(Order),
}

/// Slice or order found among the predicates of a filter block.
#[derive(Debug, Clone, PartialEq)]
pub enum RootModifier {
    Slice(Slice),
    Order(Order),
}

/// Result of splitting a filter block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterBlock {
    /// Conjunction of every predicate, `None` when the block had none
    pub filter: Option<Filter>,
    /// Root-level modifiers in declaration order
    pub modifiers: Vec<RootModifier>,
}

impl FilterBlock {
    pub fn build(clauses: impl IntoIterator<Item = Clause>) -> Self {
        let mut predicates = Vec::new();
        let mut modifiers = Vec::new();

        for clause in clauses {
            match clause {
                Clause::Predicate(filter) => predicates.push(filter),
                Clause::Slice(slice) => modifiers.push(RootModifier::Slice(slice)),
                Clause::Order(order) => modifiers.push(RootModifier::Order(order)),
            }
        }

        let filter = if predicates.is_empty() {
            None
        } else {
            Some(Filter::And(predicates))
        };

        FilterBlock { filter, modifiers }
    }
}

impl From<Filter> for Clause {
    fn from(filter: Filter) -> Self {
        Clause::Predicate(filter)
    }
}

impl From<Key> for Clause {
    fn from(key: Key) -> Self {
        Clause::Predicate(Filter::Truthy(key))
    }
}

impl From<Custom> for Clause {
    fn from(custom: Custom) -> Self {
        Clause::Predicate(Filter::Custom(custom))
    }
}

impl From<Slice> for Clause {
    fn from(slice: Slice) -> Self {
        Clause::Slice(slice)
    }
}

impl From<Order> for Clause {
    fn from(order: Order) -> Self {
        Clause::Order(order)
    }
}
