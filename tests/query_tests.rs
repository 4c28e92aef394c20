// Query Assembly Tests
//
// Full query strings: filter, projection, ordering and slicing in their
// fixed textual order.

use groq_builder::{
    Clause, Direction, Field, Filter, FilterBlock, Key, Order, Query, RootModifier, Slice,
    SpecialKey, Style,
};

fn movies() -> Query {
    Query::matching(Filter::type_is("movie"))
}

// ============================================================================
// Section: Filters
// ============================================================================

#[test]
fn test_everything_with_no_filter() {
    assert_eq!(Query::new().render(), "*");
}

#[test]
fn test_id_equals() {
    let query = Query::matching(Filter::equal(SpecialKey::Id, "abc.123"));
    assert_eq!(query.render(), r#"*[_id == "abc.123"]"#);
}

#[test]
fn test_filter_block_conjoins_predicates() {
    let query = Query::filter([
        Filter::type_is("movie").into(),
        Filter::greater_than("popularity", 15).into(),
    ]);
    assert_eq!(query.render(), r#"*[_type == "movie" && popularity > 15]"#);
}

#[test]
fn test_filter_block_with_three_predicates() {
    let query = Query::filter([
        Filter::type_is("movie").into(),
        Filter::greater_than("popularity", 15).into(),
        Filter::greater_than("releaseDate", "2016-04-25").into(),
    ]);
    assert_eq!(
        query.render(),
        r#"*[_type == "movie" && popularity > 15 && releaseDate > "2016-04-25"]"#
    );
}

#[test]
fn test_filter_block_with_disjunction() {
    let query = Query::filter([
        Filter::type_is("movie").into(),
        Filter::any([
            Filter::greater_than("popularity", 15),
            Filter::greater_than("releaseDate", "2016-04-25"),
        ])
        .into(),
    ]);
    assert_eq!(
        query.render(),
        r#"*[_type == "movie" && popularity > 15 || releaseDate > "2016-04-25"]"#
    );
}

#[test]
fn test_custom_filter() {
    let query = Query::matching(Filter::custom(r#"@["1"]"#)).with_style(Style::Oneline);
    assert_eq!(query.render(), r#"*[@["1"]]"#);
}

#[test]
fn test_display_matches_render() {
    let query = movies().order("title", Direction::Ascending);
    assert_eq!(query.to_string(), query.render());
}

// ============================================================================
// Section: Slicing
// ============================================================================

#[test]
fn test_slice_exclusive() {
    assert_eq!(movies().slice(0..10).render(), r#"*[_type == "movie"][0...10]"#);
}

#[test]
fn test_slice_inclusive() {
    assert_eq!(movies().slice(0..=10).render(), r#"*[_type == "movie"][0..10]"#);
}

#[test]
fn test_slice_single_index() {
    assert_eq!(movies().slice(1).render(), r#"*[_type == "movie"][1]"#);
}

#[test]
fn test_slice_from_usize_page() {
    let page: usize = 2;
    let size: usize = 10;

    assert_eq!(movies().slice(page).render(), r#"*[_type == "movie"][2]"#);
    assert_eq!(
        movies().slice(page * size..(page + 1) * size).render(),
        r#"*[_type == "movie"][20...30]"#
    );
    assert_eq!(movies().slice(0..=size).current_slice(), Slice::Inclusive(0, 10));
}

#[test]
fn test_slice_from_huge_usize_clamps() {
    assert_eq!(Slice::from(usize::MAX), Slice::Single(i64::try_from(usize::MAX).unwrap_or(i64::MAX)));
    assert_eq!(Slice::from(3_i64), Slice::Single(3));
}

#[test]
fn test_slice_all_renders_nothing() {
    assert_eq!(movies().slice(Slice::All).render(), r#"*[_type == "movie"]"#);
}

#[test]
fn test_second_slice_replaces_first() {
    let query = movies().slice(0..10).slice(5);
    assert_eq!(query.current_slice(), Slice::Single(5));
    assert_eq!(query.render(), r#"*[_type == "movie"][5]"#);
}

#[test]
fn test_slice_in_filter_block() {
    let query = Query::filter([Filter::type_is("movie").into(), Slice::from(0..10).into()]);
    assert_eq!(query.render(), r#"*[_type == "movie"][0...10]"#);
}

#[test]
fn test_single_index_in_filter_block() {
    let query = Query::filter([Filter::type_is("movie").into(), Slice::Single(1).into()]);
    assert_eq!(query.render(), r#"*[_type == "movie"][1]"#);
}

#[test]
fn test_chained_slice_replaces_block_slice() {
    let query = Query::filter([Filter::type_is("movie").into(), Slice::from(0..10).into()])
        .slice(20..30);
    assert_eq!(query.render(), r#"*[_type == "movie"][20...30]"#);
}

#[test]
fn test_empty_combinators_render_no_brackets() {
    assert_eq!(Query::matching(Filter::all([])).render(), "*");
    assert_eq!(Query::matching(Filter::any([])).render(), "*");
    assert_eq!(Query::matching(Filter::not_all([])).slice(0..10).render(), "*[0...10]");
}

#[test]
fn test_block_with_only_modifiers_has_no_filter() {
    let query = Query::filter([Clause::from(Slice::from(0..10))]);
    assert_eq!(query.render(), "*[0...10]");
}

// ============================================================================
// Section: Ordering
// ============================================================================

#[test]
fn test_order_chained() {
    let query = movies().order(SpecialKey::CreatedAt, Direction::Ascending);
    assert_eq!(query.render(), r#"*[_type == "movie"] | order(_createdAt asc)"#);
}

#[test]
fn test_order_in_filter_block() {
    let query = Query::filter([
        Filter::type_is("movie").into(),
        Order::ascending("_createdAt").into(),
    ]);
    assert_eq!(query.render(), r#"*[_type == "movie"] | order(_createdAt asc)"#);
}

#[test]
fn test_multiple_orders_in_filter_block() {
    let query = Query::filter([
        Filter::type_is("movie").into(),
        Order::descending("releaseDate").into(),
        Order::new("_createdAt", Direction::default()).into(),
    ]);
    assert_eq!(
        query.render(),
        r#"*[_type == "movie"] | order(releaseDate desc) | order(_createdAt asc)"#
    );
}

#[test]
fn test_multiple_orders_chained() {
    let query = movies()
        .order("releaseDate", Direction::Descending)
        .order("_createdAt", Direction::Ascending);
    assert_eq!(
        query.render(),
        r#"*[_type == "movie"] | order(releaseDate desc) | order(_createdAt asc)"#
    );
}

#[test]
fn test_block_orders_precede_chained_orders() {
    let query = Query::filter([
        Filter::type_is("movie").into(),
        Order::descending("releaseDate").into(),
    ])
    .order("title", Direction::Ascending);

    assert_eq!(query.orders().len(), 2);
    assert_eq!(
        query.render(),
        r#"*[_type == "movie"] | order(releaseDate desc) | order(title asc)"#
    );
}

#[test]
fn test_order_by_lowercase() {
    let query = movies().order(Key::lower("title"), Direction::Ascending);
    assert_eq!(query.render(), r#"*[_type == "movie"] | order(lower(title) asc)"#);
}

#[test]
fn test_orders_come_before_slice_regardless_of_declaration() {
    let query = movies()
        .slice(0..10)
        .order("releaseDate", Direction::Descending)
        .order("title", Direction::Ascending);
    assert_eq!(
        query.render(),
        r#"*[_type == "movie"] | order(releaseDate desc) | order(title asc)[0...10]"#
    );
}

// ============================================================================
// Section: Projection
// ============================================================================

#[test]
fn test_projection_multiline_is_default() {
    let query = Query::filter([Filter::type_is("movie").into(), Slice::from(0..10).into()])
        .fields(["name", "rating", "releaseDate"]);

    let expected = "*[_type == \"movie\"] {\n  name,\n  rating,\n  releaseDate\n}[0...10]";
    assert_eq!(query.style(), Style::Multiline);
    assert_eq!(query.render(), expected);
}

#[test]
fn test_projection_oneline() {
    let query = movies()
        .with_style(Style::Oneline)
        .fields(["name", "rating", "releaseDate"]);
    assert_eq!(query.render(), r#"*[_type == "movie"] { name, rating, releaseDate }"#);
}

#[test]
fn test_projection_without_filter() {
    let query = Query::new().with_style(Style::Oneline).fields(["title"]);
    assert_eq!(query.render(), "* { title }");
}

#[test]
fn test_renamed_fields() {
    let query = movies().with_style(Style::Oneline).fields([
        Field::renamed("renamedId", SpecialKey::Id),
        Field::from(SpecialKey::Type),
        Field::from("title"),
    ]);
    assert_eq!(
        query.render(),
        r#"*[_type == "movie"] { "renamedId": _id, _type, title }"#
    );
}

#[test]
fn test_all_fields() {
    let query = movies().with_style(Style::Oneline).fields([Field::all()]);
    assert_eq!(query.render(), r#"*[_type == "movie"] { ... }"#);
}

#[test]
fn test_count_field() {
    let query = movies()
        .with_style(Style::Oneline)
        .fields([Field::count("actorCount", "actors")]);
    assert_eq!(query.render(), r#"*[_type == "movie"] { "actorCount": count(actors) }"#);
}

#[test]
fn test_coalesce_with_all_fields() {
    let query = movies()
        .with_style(Style::Oneline)
        .fields([Field::all(), Field::coalesce("rating", "rating", "unknown")]);
    assert_eq!(
        query.render(),
        r#"*[_type == "movie"] { ..., "rating": coalesce(rating, "unknown") }"#
    );
}

#[test]
fn test_custom_field() {
    let select = r#""popularity": select(popularity > 20 => "high", popularity > 10 => "medium", popularity <= 10 => "low")"#;
    let query = movies().with_style(Style::Oneline).fields([Field::custom(select)]);
    assert_eq!(query.render(), format!(r#"*[_type == "movie"] {{ {} }}"#, select));
}

#[test]
fn test_computed_date_field_multiline() {
    let query = movies().fields([
        Field::from("title"),
        Field::date_time("now()") - Field::date_time(SpecialKey::CreatedAt),
    ]);
    let expected = "*[_type == \"movie\"] {\n  title,\n  \"now\": dateTime(now()) - dateTime(_createdAt)\n}";
    assert_eq!(query.render(), expected);
}

#[test]
fn test_everything_together() {
    let query = Query::filter([
        Filter::type_is("movie").into(),
        Filter::greater_than("popularity", 15).into(),
        Slice::from(0..10).into(),
        Order::descending("popularity").into(),
    ])
    .with_style(Style::Oneline)
    .fields([Field::all(), Field::coalesce("rating", "rating", "unknown")])
    .order(SpecialKey::CreatedAt, Direction::Ascending);

    assert_eq!(
        query.render(),
        concat!(
            r#"*[_type == "movie" && popularity > 15]"#,
            r#" { ..., "rating": coalesce(rating, "unknown") }"#,
            " | order(popularity desc) | order(_createdAt asc)",
            "[0...10]",
        )
    );
}

// ============================================================================
// Section: Filter Blocks
// ============================================================================

#[test]
fn test_filter_block_routes_modifiers() {
    let block = FilterBlock::build([
        Filter::type_is("movie").into(),
        Order::ascending("title").into(),
        Slice::from(0..=4).into(),
        Filter::defined("poster").into(),
    ]);

    assert_eq!(
        block.filter,
        Some(Filter::And(vec![Filter::type_is("movie"), Filter::defined("poster")]))
    );
    assert_eq!(
        block.modifiers,
        vec![
            RootModifier::Order(Order::ascending("title")),
            RootModifier::Slice(Slice::Inclusive(0, 4)),
        ]
    );
}

#[test]
fn test_empty_filter_block() {
    let block = FilterBlock::build(Vec::<Clause>::new());
    assert_eq!(block.filter, None);
    assert!(block.modifiers.is_empty());
}

#[test]
fn test_attach_routes_modifier() {
    let mut query = movies();
    query.attach(RootModifier::Order(Order::descending("rating")));
    query.attach(RootModifier::Slice(Slice::Single(0)));
    assert_eq!(query.render(), r#"*[_type == "movie"] | order(rating desc)[0]"#);
}
