use super::ast::{Condition, RawCategory, RawSpec, RawValue};
use super::token::{classify, TokenClass};

/// A one-token lookahead cursor over a token iterator, mirroring the
/// `Token`/`getToken()` globals of the original LL(1) parser as a small
/// piece of local state instead.
struct Cursor<I: Iterator<Item = String>> {
    tokens: I,
    current: Option<String>,
}

impl<I: Iterator<Item = String>> Cursor<I> {
    fn new(mut tokens: I) -> Self {
        let current = tokens.next();
        Cursor { tokens, current }
    }

    fn class(&self) -> TokenClass {
        match &self.current {
            Some(tok) => classify(tok),
            None => TokenClass::Eof,
        }
    }

    fn advance(&mut self) -> Option<String> {
        let next = self.tokens.next();
        std::mem::replace(&mut self.current, next)
    }
}

/// Parses a full specification, in the style of `parseSpec`: on a syntax
/// error within one category, logs a warning and resynchronizes at the
/// next category token rather than aborting the whole read.
pub fn parse(tokens: impl Iterator<Item = String>) -> RawSpec {
    let mut cursor = Cursor::new(tokens);
    let mut categories = Vec::new();

    while cursor.class() != TokenClass::Eof {
        if cursor.class() != TokenClass::Category {
            let bad = cursor.current.clone().unwrap_or_default();
            log::warn!(target: crate::misc::log::targets::PARSER, "syntax error on '{bad}', expected 'category:'; skipping to next category");
            while cursor.class() != TokenClass::Category && cursor.class() != TokenClass::Eof {
                cursor.advance();
            }
            if cursor.class() == TokenClass::Eof {
                log::warn!(target: crate::misc::log::targets::PARSER, "discarding rest of specification");
                break;
            }
        }

        categories.push(parse_category(&mut cursor));
    }

    RawSpec { categories }
}

fn parse_category<I: Iterator<Item = String>>(cursor: &mut Cursor<I>) -> RawCategory {
    let raw = cursor.current.clone().expect("caller checked Category class");
    let name = raw.trim_end_matches(':').to_string();
    cursor.advance();

    let values = parse_values(cursor);
    RawCategory { name, values }
}

fn parse_values<I: Iterator<Item = String>>(cursor: &mut Cursor<I>) -> Vec<RawValue> {
    let mut values = Vec::new();
    while cursor.class() == TokenClass::Value {
        values.push(parse_value(cursor));
    }
    values
}

fn parse_value<I: Iterator<Item = String>>(cursor: &mut Cursor<I>) -> RawValue {
    let name = cursor.current.clone().expect("caller checked Value class");
    cursor.advance();
    let conditions = parse_conditions(cursor);
    RawValue { name, conditions }
}

fn parse_conditions<I: Iterator<Item = String>>(cursor: &mut Cursor<I>) -> Vec<Condition> {
    let mut conditions = Vec::new();
    loop {
        match cursor.class() {
            TokenClass::Error => {
                cursor.advance();
                conditions.push(Condition::Error);
            }
            TokenClass::Single => {
                cursor.advance();
                conditions.push(Condition::Single);
            }
            TokenClass::If => {
                cursor.advance();
                match cursor.current.clone() {
                    Some(name) => {
                        cursor.advance();
                        conditions.push(Condition::If(name));
                    }
                    None => {
                        log::warn!(target: crate::misc::log::targets::PARSER, "'if' at end of input with no property name; ignoring");
                        break;
                    }
                }
            }
            TokenClass::Prop => {
                cursor.advance();
                match cursor.current.clone() {
                    Some(name) => {
                        cursor.advance();
                        conditions.push(Condition::Prop(name));
                    }
                    None => {
                        log::warn!(target: crate::misc::log::targets::PARSER, "'prop' at end of input with no property name; ignoring");
                        break;
                    }
                }
            }
            TokenClass::Except => {
                cursor.advance();
                match cursor.current.clone() {
                    Some(name) => {
                        cursor.advance();
                        conditions.push(Condition::Except(name));
                    }
                    None => {
                        log::warn!(target: crate::misc::log::targets::PARSER, "'except' at end of input with no property name; ignoring");
                        break;
                    }
                }
            }
            _ => break,
        }
    }
    conditions
}
