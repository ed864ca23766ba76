//! Recursive-descent parser for parenthesized propositional formulas.
//!
//! ```text
//! expr      = symbol
//!           | '(' word child* ')'
//! child     = ws* expr
//! word      = (alnum | '_')+
//! ```
//!
//! A connective word is read immediately after `(`, so `( and P)` produces a
//! compound with an empty connective. Connective names and arities are not
//! checked here; that is the job of [`crate::validate`].

use std::sync::Arc;

use crate::ast::Expression;
use crate::error::ParseError;

/// A cursor over the input text.
///
/// Each call to [`Parser::next_expression`] reads one expression and leaves
/// the cursor just past it, so a text holding several top-level expressions
/// can be read by calling it repeatedly.
#[derive(Debug, Clone)]
pub struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Current offset into the input, in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` if only whitespace remains.
    pub fn is_exhausted(&self) -> bool {
        self.chars[self.pos..].iter().all(|c| c.is_whitespace())
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Read the next expression.
    ///
    /// Reaching the end of input before any expression starts yields a
    /// literal with an empty symbol, which the validator rejects.
    pub fn next_expression(&mut self) -> Result<Expression, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                self.advance(); // consume `(`
                let connective = self.read_word()?;
                let children = self.read_children()?;
                Ok(Expression::Compound {
                    connective,
                    children,
                })
            }
            _ => Ok(Expression::Literal(self.read_word()?)),
        }
    }

    /// Read children up to and including the closing `)`.
    fn read_children(&mut self) -> Result<Vec<Arc<Expression>>, ParseError> {
        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(ParseError::UnexpectedEndOfInput { position: self.pos });
                }
                Some(')') => {
                    self.advance();
                    return Ok(children);
                }
                Some(_) => children.push(Arc::new(self.next_expression()?)),
            }
        }
    }

    /// Read a word, stopping before whitespace, `)` or end of input.
    fn read_word(&mut self) -> Result<String, ParseError> {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                word.push(c);
                self.advance();
            } else if c == ')' || c.is_whitespace() {
                break;
            } else {
                return Err(ParseError::UnexpectedCharacter {
                    character: c,
                    position: self.pos,
                });
            }
        }
        Ok(word)
    }
}

/// Parse the first expression in `input`.
///
/// Text after the expression is not examined.
///
/// # Example
///
/// ```
/// use entail::{parse, Expression};
///
/// let expr = parse("(if P Q)").unwrap();
/// assert_eq!(expr, Expression::implies(Expression::literal("P"), Expression::literal("Q")));
/// ```
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    Parser::new(input).next_expression()
}

/// Parse every top-level expression in `input`.
///
/// A stray `)` between expressions is an error.
pub fn parse_all(input: &str) -> Result<Vec<Expression>, ParseError> {
    let mut parser = Parser::new(input);
    let mut expressions = Vec::new();
    while !parser.is_exhausted() {
        let expression = parser.next_expression()?;
        // An empty literal with input left over means the cursor is stuck on `)`.
        if expression.symbol() == Some("") {
            return Err(ParseError::UnexpectedCharacter {
                character: ')',
                position: parser.position(),
            });
        }
        expressions.push(expression);
    }
    Ok(expressions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lit(symbol: &str) -> Expression {
        Expression::literal(symbol)
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse("M_1_4").unwrap(), lit("M_1_4"));
        assert_eq!(parse("   P  ").unwrap(), lit("P"));
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(
            parse("(and P (or Q (not R)))").unwrap(),
            Expression::and([
                lit("P"),
                Expression::or([lit("Q"), Expression::not(lit("R"))]),
            ])
        );
    }

    #[test]
    fn test_parse_keeps_connective_case() {
        let expr = parse("(IF P Q)").unwrap();
        assert_eq!(expr.connective_name(), Some("IF"));
        assert_eq!(expr.children().len(), 2);
    }

    #[test]
    fn test_parse_tolerates_any_whitespace() {
        let expr = parse("(and\n\tP\r\n   (not\tQ)   )").unwrap();
        assert_eq!(expr, Expression::and([lit("P"), Expression::not(lit("Q"))]));
    }

    #[test]
    fn test_parse_space_after_paren_gives_empty_connective() {
        let expr = parse("( and P)").unwrap();
        assert_eq!(expr, Expression::compound("", [lit("and"), lit("P")]));
    }

    #[test]
    fn test_parse_empty_compound() {
        assert_eq!(
            parse("()").unwrap(),
            Expression::Compound {
                connective: String::new(),
                children: vec![],
            }
        );
        assert_eq!(
            parse("(and)").unwrap(),
            Expression::compound("and", Vec::<Expression>::new())
        );
    }

    #[test]
    fn test_parse_empty_input_gives_empty_literal() {
        assert_eq!(parse("").unwrap(), lit(""));
        assert_eq!(parse("   ").unwrap(), lit(""));
    }

    #[test]
    fn test_parse_unexpected_end_of_input() {
        assert_eq!(
            parse("(and P (or Q R)"),
            Err(ParseError::UnexpectedEndOfInput { position: 15 })
        );
        assert_eq!(
            parse("(not"),
            Err(ParseError::UnexpectedEndOfInput { position: 4 })
        );
    }

    #[test]
    fn test_parse_unexpected_character() {
        assert_eq!(
            parse("(and P Q-R)"),
            Err(ParseError::UnexpectedCharacter {
                character: '-',
                position: 8,
            })
        );
        assert_eq!(
            parse("(and(P))"),
            Err(ParseError::UnexpectedCharacter {
                character: '(',
                position: 4,
            })
        );
    }

    #[test]
    fn test_parse_stops_after_first_expression() {
        let mut parser = Parser::new("P (and Q R)  ");
        assert_eq!(parser.next_expression().unwrap(), lit("P"));
        assert!(!parser.is_exhausted());
        assert_eq!(parser.next_expression().unwrap(), Expression::and([lit("Q"), lit("R")]));
        assert!(parser.is_exhausted());
        assert_eq!(parser.position(), 11);
    }

    #[test]
    fn test_parse_all() {
        let expressions = parse_all("P\n(not Q)\n(if P (not Q))\n").unwrap();
        assert_eq!(expressions.len(), 3);
        assert_eq!(expressions[1], Expression::not(lit("Q")));
        assert_eq!(parse_all("  \n").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_all_rejects_stray_close() {
        assert_eq!(
            parse_all("P )"),
            Err(ParseError::UnexpectedCharacter {
                character: ')',
                position: 2,
            })
        );
    }

    #[test]
    fn test_roundtrip() {
        for input in [
            "P",
            "(not P)",
            "(and P Q R)",
            "(iff (xor A B C) (if A (or B C)))",
            "(AND wumpus_1_1 (NOT pit_2_2))",
        ] {
            let expr = parse(input).unwrap();
            assert_eq!(expr.to_string(), input);
            assert_eq!(parse(&expr.render("")).unwrap(), expr);
        }
    }
}
