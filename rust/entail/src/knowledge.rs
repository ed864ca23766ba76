//! Loading knowledge bases and statements from line-oriented text.
//!
//! Each non-blank line that does not start with `#` holds one expression:
//!
//! ```text
//! # Stench is perceived next to the wumpus
//! (if W_1_2 (and S_1_1 S_2_2 S_1_3))
//! (not W_1_1)
//! ```
//!
//! A [`KnowledgeBase`] collects the sentences of any number of sources and
//! presents them as a single conjunction.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::ast::Expression;
use crate::connective::Connective;
use crate::error::{Error, Result};
use crate::parser::Parser;

/// Parse one expression from every content line of `text`.
///
/// `origin` names the source in error messages. Text after the first
/// expression on a line is ignored.
pub fn read_expressions(origin: &str, text: &str) -> Result<Vec<Expression>> {
    let mut expressions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let expression = Parser::new(content)
            .next_expression()
            .map_err(|source| Error::Parse {
                origin: origin.to_string(),
                line: index + 1,
                source,
            })?;
        expressions.push(expression);
    }
    Ok(expressions)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the statement held by `text`.
///
/// Only the first expression is used; any further expressions are ignored.
pub fn load_statement(origin: &str, text: &str) -> Result<Expression> {
    let mut expressions = read_expressions(origin, text)?.into_iter();
    let statement = expressions.next().ok_or_else(|| Error::MissingStatement {
        origin: origin.to_string(),
    })?;
    let ignored = expressions.count();
    if ignored > 0 {
        tracing::warn!(origin, ignored, "ignoring expressions after the statement");
    }
    Ok(statement)
}

/// Read the statement held by the file at `path`.
pub fn load_statement_file(path: impl AsRef<Path>) -> Result<Expression> {
    let path = path.as_ref();
    let text = read_file(path)?;
    load_statement(&path.display().to_string(), &text)
}

/// An ordered collection of sentences, interpreted as their conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    sentences: Vec<Arc<Expression>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tell(&mut self, sentence: impl Into<Arc<Expression>>) {
        self.sentences.push(sentence.into());
    }

    /// Add every expression of `text`, returning how many were added.
    pub fn extend_from_source(&mut self, origin: &str, text: &str) -> Result<usize> {
        let expressions = read_expressions(origin, text)?;
        let added = expressions.len();
        self.sentences.extend(expressions.into_iter().map(Arc::new));
        tracing::debug!(origin, added, total = self.sentences.len(), "loaded knowledge");
        Ok(added)
    }

    /// Add every expression of the file at `path`.
    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = read_file(path)?;
        self.extend_from_source(&path.display().to_string(), &text)
    }

    pub fn sentences(&self) -> &[Arc<Expression>] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The conjunction `(and s1 s2 ...)` of all sentences.
    ///
    /// The sentences are shared with the returned expression. An empty
    /// knowledge base yields `(and)`, which does not validate.
    pub fn to_expression(&self) -> Expression {
        Expression::Compound {
            connective: Connective::And.name().to_string(),
            children: self.sentences.clone(),
        }
    }
}

impl FromIterator<Expression> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Self {
            sentences: iter.into_iter().map(Arc::new).collect(),
        }
    }
}
