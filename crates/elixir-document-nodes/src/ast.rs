pub use graphql_parser::Pos;
pub use graphql_parser::query::ParseError;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Document = graphql_parser::schema::Document<'static, String>;

    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::schema::parse_schema::<String>(content)?.into_static())
    }
}

/// Parse an executable GraphQL document (operations and fragments).
pub fn parse(content: &str) -> Result<Document, ParseError> {
    Ok(graphql_parser::query::parse_query::<String>(content)?.into_static())
}

/// The name of an operation, or `None` for anonymous operations (including
/// the `{ ... }` shorthand form).
pub fn operation_name(op: &OperationDefinition) -> Option<&str> {
    use graphql_parser::query::OperationDefinition as OpDef;
    match op {
        OpDef::SelectionSet(_) => None,
        OpDef::Query(query) => query.name.as_deref(),
        OpDef::Mutation(mutation) => mutation.name.as_deref(),
        OpDef::Subscription(subscription) => subscription.name.as_deref(),
    }
}

pub fn operation_position(op: &OperationDefinition) -> Pos {
    use graphql_parser::query::OperationDefinition as OpDef;
    match op {
        OpDef::SelectionSet(selection_set) => selection_set.span.0,
        OpDef::Query(query) => query.position,
        OpDef::Mutation(mutation) => mutation.position,
        OpDef::Subscription(subscription) => subscription.position,
    }
}

pub fn operation_selection_set(op: &OperationDefinition) -> &SelectionSet {
    use graphql_parser::query::OperationDefinition as OpDef;
    match op {
        OpDef::SelectionSet(selection_set) => selection_set,
        OpDef::Query(query) => &query.selection_set,
        OpDef::Mutation(mutation) => &mutation.selection_set,
        OpDef::Subscription(subscription) => &subscription.selection_set,
    }
}

pub fn type_condition_name(type_condition: &TypeCondition) -> &str {
    match type_condition {
        graphql_parser::query::TypeCondition::On(type_name) => type_name.as_str(),
    }
}

/// Every named fragment spread in a selection set (recursing into fields and
/// inline fragments), in source order. Repeated spreads are reported each
/// time they occur.
pub fn fragment_spreads(selection_set: &SelectionSet) -> Vec<(&str, Pos)> {
    let mut spreads = vec![];
    collect_fragment_spreads(selection_set, &mut spreads);
    spreads
}

fn collect_fragment_spreads<'a>(
    selection_set: &'a SelectionSet,
    spreads: &mut Vec<(&'a str, Pos)>,
) {
    use graphql_parser::query::Selection as Sel;
    for selection in &selection_set.items {
        match selection {
            Sel::Field(field) =>
                collect_fragment_spreads(&field.selection_set, spreads),

            Sel::FragmentSpread(spread) =>
                spreads.push((spread.fragment_name.as_str(), spread.position)),

            Sel::InlineFragment(inline) =>
                collect_fragment_spreads(&inline.selection_set, spreads),
        }
    }
}
