use crate::ast::{Clause, Direction, Field, Filter, FilterBlock, Key, Order, RootModifier, Slice};
use crate::render::{RenderField, RenderFilter};

const INDENT: &str = "  ";

/// Layout of the projection block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// One field per line, indented by two spaces
    ///
    /// # Example
    /// ```text
    /// *[_type == "movie"] {
    ///   name,
    ///   rating
    /// }
    /// ```
    #[default]
    Multiline,

    /// All fields on one line
    ///
    /// # Example
    /// ```text
    /// *[_type == "movie"] { name, rating }
    /// ```
    Oneline,
}

impl Style {
    /// Wraps newline-prefixed projection entries in braces.
    fn wrap(self, fields: &str) -> String {
        match self {
            Style::Multiline => {
                format!(" {{{}\n}}", fields.replace('\n', &format!("\n{}", INDENT)))
            }
            Style::Oneline => format!(" {{{} }}", fields.replace('\n', " ")),
        }
    }
}

/// Ordered list of projection entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection(pub Vec<Field>);

impl Projection {
    /// Each entry on its own line, comma after all but the last.
    pub fn text(&self) -> String {
        let last = self.0.len().saturating_sub(1);
        self.0
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let separator = if i == last { "" } else { "," };
                format!("\n{}{}", field.field_text(), separator)
            })
            .collect()
    }
}

/// A complete query: filter, projection, ordering and slice.
///
/// Nodes are immutable; the query itself collects orders and the slice while
/// it is being built and renders them in a fixed order.
///
/// # Examples
///
/// ```
/// use groq_builder::{Clause, Direction, Field, Filter, Query, Slice, Style};
///
/// let query = Query::filter([
///     Clause::from(Filter::type_is("movie")),
///     Clause::from(Slice::from(0..10)),
/// ])
/// .with_style(Style::Oneline)
/// .fields([Field::from("name"), Field::from("rating")])
/// .order("releaseDate", Direction::Descending);
///
/// assert_eq!(
///     query.render(),
///     r#"*[_type == "movie"] { name, rating } | order(releaseDate desc)[0...10]"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    style: Style,
    filter: Option<Filter>,
    projection: Option<Projection>,
    slice: Slice,
    orders: Vec<Order>,
}

impl Query {
    /// Selects every document, `*`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from a filter block.
    ///
    /// Predicates are conjoined; slices and orders declared in the block are
    /// attached to the query in declaration order.
    pub fn filter(clauses: impl IntoIterator<Item = Clause>) -> Self {
        let FilterBlock { filter, modifiers } = FilterBlock::build(clauses);
        let mut query = Query {
            filter,
            ..Self::default()
        };
        for modifier in modifiers {
            query.attach(modifier);
        }
        query
    }

    /// Builds a query from a single predicate.
    pub fn matching(filter: impl Into<Filter>) -> Self {
        Query {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the projection block.
    pub fn fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.projection = Some(Projection(fields.into_iter().map(Into::into).collect()));
        self
    }

    /// Appends an ordering clause.
    pub fn order(mut self, key: impl Into<Key>, direction: Direction) -> Self {
        self.orders.push(Order::new(key, direction));
        self
    }

    /// Replaces the current slice.
    pub fn slice(mut self, slice: impl Into<Slice>) -> Self {
        self.slice = slice.into();
        self
    }

    /// Routes a root-level modifier: slices replace, orders append.
    pub fn attach(&mut self, modifier: RootModifier) {
        match modifier {
            RootModifier::Slice(slice) => self.slice = slice,
            RootModifier::Order(order) => self.orders.push(order),
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn current_slice(&self) -> Slice {
        self.slice
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Renders the full query text.
    pub fn render(&self) -> String {
        let mut text = String::from("*");

        // An empty predicate gets no brackets at all
        let predicate = self.filter.as_ref().map(RenderFilter::filter_text);
        if let Some(predicate) = predicate.filter(|p| !p.is_empty()) {
            text.push('[');
            text.push_str(&predicate);
            text.push(']');
        }

        if let Some(projection) = &self.projection {
            text.push_str(&self.style.wrap(&projection.text()));
        }

        for order in &self.orders {
            text.push_str(&order.text());
        }

        text.push_str(&self.slice.text());

        tracing::trace!(query = %text, "rendered query");
        text
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
