use crate::ast::{Element, Group, Item, SanitizedGroup, Token};

/// Drop every `(`, `)` and `,` from a group, keeping labels and nesting in order.
pub fn sanitize<'a>(group: &Group<'a>) -> SanitizedGroup<'a> {
    let elements = group
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Token(Token::Label(label)) => Some(Element::Label(*label)),
            Item::Token(Token::Open | Token::Close | Token::Comma) => None,
            Item::Group(nested) => Some(Element::Group(sanitize(nested))),
        })
        .collect();

    SanitizedGroup { elements }
}
