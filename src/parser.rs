use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

use crate::ast::{Group, Item, Token};
use crate::error::{DumpError, DumpResult};

#[derive(Parser)]
#[grammar = "dump.pest"]
pub struct DumpParser;

impl DumpParser {
    /// Split dump text into tokens.
    ///
    /// Labels are maximal runs of characters other than whitespace, `(`, `)`
    /// and `,`. Whitespace and line breaks only separate tokens.
    pub fn tokenize(input: &str) -> DumpResult<Vec<Token<'_>>> {
        let mut pairs = DumpParser::parse(Rule::dump, input).map_err(Box::new)?;
        let Some(dump) = pairs.next() else {
            return Ok(Vec::new());
        };

        Ok(dump.into_inner().filter_map(Self::parse_token).collect())
    }

    fn parse_token(pair: Pair<'_, Rule>) -> Option<Token<'_>> {
        match pair.as_rule() {
            Rule::label => Some(Token::Label(pair.as_str())),
            Rule::open => Some(Token::Open),
            Rule::close => Some(Token::Close),
            Rule::comma => Some(Token::Comma),
            _ => None,
        }
    }

    /// Nest a token sequence by its parentheses.
    ///
    /// Every `(` is kept in the enclosing group and immediately followed by a
    /// nested [`Group`] holding everything up to and including the matching
    /// `)`. Nesting deeper than `max_depth` is rejected.
    pub fn parse_groups<'a>(tokens: &[Token<'a>], max_depth: usize) -> DumpResult<Group<'a>> {
        let mut cursor = Cursor::new(tokens);
        Self::parse_level(&mut cursor, None, 0, max_depth)
    }

    fn parse_level<'a>(
        cursor: &mut Cursor<'_, 'a>,
        opened_at: Option<usize>,
        depth: usize,
        max_depth: usize,
    ) -> DumpResult<Group<'a>> {
        let mut items = Vec::new();

        while let Some((position, token)) = cursor.advance() {
            match token {
                Token::Open => {
                    if depth >= max_depth {
                        return Err(DumpError::NestingTooDeep { limit: max_depth });
                    }
                    items.push(Item::Token(Token::Open));
                    let nested = Self::parse_level(cursor, Some(position), depth + 1, max_depth)?;
                    items.push(Item::Group(nested));
                }
                Token::Close => {
                    if opened_at.is_none() {
                        return Err(DumpError::UnmatchedClose { position });
                    }
                    items.push(Item::Token(Token::Close));
                    return Ok(Group { items });
                }
                other => items.push(Item::Token(other)),
            }
        }

        match opened_at {
            Some(position) => Err(DumpError::UnclosedParen { position }),
            None => Ok(Group { items }),
        }
    }
}

/// Read position into a token sequence, shared by every level of the
/// structural parse so each level resumes exactly where the nested one stopped.
struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    position: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Consume the next token, returning it with its index.
    fn advance(&mut self) -> Option<(usize, Token<'a>)> {
        let token = *self.tokens.get(self.position)?;
        let position = self.position;
        self.position += 1;
        Some((position, token))
    }
}
