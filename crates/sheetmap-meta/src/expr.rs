//! Declared field types
//!
//! A field's declared type is kept as a small expression tree so that the
//! element type of a collection field can be recovered without any runtime
//! introspection. The textual form follows Rust generics syntax:
//!
//! ```text
//! Order
//! Vec<Order>
//! std::collections::BTreeSet<Line>
//! HashMap<String, Order>
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A declared type: either a plain name or a name applied to type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeExpr {
    /// A type without type arguments (e.g. `Order`, or a raw `Vec`).
    Named(String),
    /// A type applied to arguments (e.g. `Vec<Order>`). `args` may be empty
    /// for an explicit `Vec<>`.
    Generic { name: String, args: Vec<TypeExpr> },
}

impl TypeExpr {
    /// A plain named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    /// A generic type applied to the given arguments.
    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeExpr>) -> Self {
        TypeExpr::Generic {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Shorthand for `Vec<element>`.
    pub fn vec_of(element: impl Into<String>) -> Self {
        Self::generic("Vec", [Self::named(element)])
    }

    /// The head name, without type arguments.
    pub fn name(&self) -> &str {
        match self {
            TypeExpr::Named(name) | TypeExpr::Generic { name, .. } => name,
        }
    }

    /// Type arguments; empty for named types.
    pub fn args(&self) -> &[TypeExpr] {
        match self {
            TypeExpr::Named(_) => &[],
            TypeExpr::Generic { args, .. } => args,
        }
    }

    /// Last `::`-separated segment of the head name.
    pub fn base_name(&self) -> &str {
        let name = self.name();
        name.rsplit("::").next().unwrap_or(name)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => write!(f, "{name}"),
            TypeExpr::Generic { name, args } => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
        }
    }
}

impl FromStr for TypeExpr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = Parser { input: s, pos: 0 };
        let expr = parser.expr()?;
        parser.skip_whitespace();
        if parser.pos != s.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(expr)
    }
}

impl TryFrom<String> for TypeExpr {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TypeExpr> for String {
    fn from(expr: TypeExpr) -> Self {
        expr.to_string()
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    fn expr(&mut self) -> Result<TypeExpr> {
        self.skip_whitespace();
        let name = self.path()?;
        self.skip_whitespace();
        if self.peek() != Some('<') {
            return Ok(TypeExpr::Named(name));
        }
        self.bump('<');

        let mut args = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some('>') {
            self.bump('>');
            return Ok(TypeExpr::Generic { name, args });
        }

        loop {
            args.push(self.expr()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.bump(','),
                Some('>') => {
                    self.bump('>');
                    break;
                }
                Some(c) => return Err(self.error(&format!("expected ',' or '>', found '{c}'"))),
                None => return Err(self.error("unclosed '<'")),
            }
        }

        Ok(TypeExpr::Generic { name, args })
    }

    fn path(&mut self) -> Result<String> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == ':' {
                self.bump(c);
            } else {
                break;
            }
        }
        if start == self.pos {
            return Err(self.error("expected a type name"));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn error(&self, message: &str) -> Error {
        Error::InvalidTypeExpr {
            input: self.input.to_string(),
            message: format!("{message} at offset {}", self.pos),
        }
    }
}
