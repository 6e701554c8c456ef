use std::fmt;

/// Lexical unit of a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Name of a grammar construct or a literal value: `Program`, `INT`, `f`
    Label(&'a str),
    /// `(`
    Open,
    /// `)`
    Close,
    /// `,`
    Comma,
}

impl Token<'_> {
    pub fn is_structural(&self) -> bool {
        !matches!(self, Token::Label(_))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Label(label) => f.write_str(label),
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Comma => f.write_str(","),
        }
    }
}

/// Element of a [`Group`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<'a> {
    Token(Token<'a>),
    /// Contents of a parenthesized level, up to and including its `)`
    Group(Group<'a>),
}

/// Parenthesis structure of a dump, markers included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group<'a> {
    pub items: Vec<Item<'a>>,
}

impl<'a> Group<'a> {
    /// Number of tokens held by this group and every nested group.
    ///
    /// For a group produced by the structural parser this is exactly the
    /// number of tokens the parser consumed to build it.
    pub fn token_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                Item::Token(_) => 1,
                Item::Group(group) => group.token_count(),
            })
            .sum()
    }

    /// All tokens in source order.
    pub fn flatten(&self) -> Vec<Token<'a>> {
        let mut tokens = Vec::with_capacity(self.token_count());
        self.flatten_into(&mut tokens);
        tokens
    }

    fn flatten_into(&self, tokens: &mut Vec<Token<'a>>) {
        for item in &self.items {
            match item {
                Item::Token(token) => tokens.push(*token),
                Item::Group(group) => group.flatten_into(tokens),
            }
        }
    }
}

impl<'a> From<SanitizedGroup<'a>> for Group<'a> {
    fn from(group: SanitizedGroup<'a>) -> Self {
        Group {
            items: group
                .elements
                .into_iter()
                .map(|element| match element {
                    Element::Label(label) => Item::Token(Token::Label(label)),
                    Element::Group(nested) => Item::Group(nested.into()),
                })
                .collect(),
        }
    }
}

/// Element of a [`SanitizedGroup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<'a> {
    Label(&'a str),
    Group(SanitizedGroup<'a>),
}

/// A [`Group`] with every structural marker removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedGroup<'a> {
    pub elements: Vec<Element<'a>>,
}

impl SanitizedGroup<'_> {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn label_count(&self) -> usize {
        self.elements
            .iter()
            .map(|element| match element {
                Element::Label(_) => 1,
                Element::Group(group) => group.label_count(),
            })
            .sum()
    }
}

impl fmt::Display for SanitizedGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match element {
                Element::Label(label) => f.write_str(label)?,
                Element::Group(group) => write!(f, "{group}")?,
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_count_includes_markers() {
        let group = Group {
            items: vec![
                Item::Token(Token::Label("A")),
                Item::Token(Token::Open),
                Item::Group(Group {
                    items: vec![
                        Item::Token(Token::Label("B")),
                        Item::Token(Token::Comma),
                        Item::Token(Token::Label("C")),
                        Item::Token(Token::Close),
                    ],
                }),
            ],
        };

        assert_eq!(group.token_count(), 6);
        assert_eq!(
            group.flatten(),
            vec![
                Token::Label("A"),
                Token::Open,
                Token::Label("B"),
                Token::Comma,
                Token::Label("C"),
                Token::Close,
            ]
        );
    }

    #[test]
    fn test_sanitized_display() {
        let group = SanitizedGroup {
            elements: vec![
                Element::Label("A"),
                Element::Group(SanitizedGroup {
                    elements: vec![
                        Element::Label("B"),
                        Element::Group(SanitizedGroup::default()),
                    ],
                }),
            ],
        };

        assert_eq!(group.to_string(), "[A, [B, []]]");
        assert_eq!(group.label_count(), 2);
    }

    #[test]
    fn test_lift_sanitized_group() {
        let group = SanitizedGroup {
            elements: vec![
                Element::Label("A"),
                Element::Group(SanitizedGroup {
                    elements: vec![Element::Label("B")],
                }),
            ],
        };

        assert_eq!(
            Group::from(group),
            Group {
                items: vec![
                    Item::Token(Token::Label("A")),
                    Item::Group(Group {
                        items: vec![Item::Token(Token::Label("B"))],
                    }),
                ],
            }
        );
    }
}
