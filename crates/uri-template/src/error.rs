use std::io;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Any failure from [`expand()`](crate::expand) or [`expand_with()`](crate::expand_with).
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// The template failed to parse.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// The template parsed, but could not be expanded with the given values.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Expand(#[from] ExpandError),
}

/// A template syntax error.
///
/// Carries the template source so that it can be rendered as a diagnostic
/// pointing at the offending placeholder.
#[derive(Debug, Diagnostic, Error)]
pub enum ParseError {
    /// An opening brace has no matching closing brace.
    #[error("malformed template: unclosed placeholder")]
    #[diagnostic(
        code(uri_template::malformed_template),
        help("every `{{` must be closed by a `}}`")
    )]
    MalformedTemplate {
        #[source_code]
        src: String,
        #[label("opened here")]
        at: SourceSpan,
    },

    /// A placeholder has nothing between its braces.
    #[error("empty identifier in placeholder")]
    #[diagnostic(code(uri_template::empty_identifier))]
    EmptyIdentifier {
        #[source_code]
        src: String,
        #[label("empty placeholder")]
        at: SourceSpan,
    },

    /// A placeholder identifier contains characters outside `[A-Za-z0-9_]`.
    #[error("invalid identifier `{name}`")]
    #[diagnostic(
        code(uri_template::invalid_identifier),
        help("identifiers may only contain ASCII letters, digits and underscores")
    )]
    InvalidIdentifier {
        name: String,
        #[source_code]
        src: String,
        #[label("invalid identifier")]
        at: SourceSpan,
    },
}

impl ParseError {
    pub(crate) fn malformed_template(src: &str, open: usize) -> Self {
        Self::MalformedTemplate {
            src: src.to_owned(),
            at: (open, 1).into(),
        }
    }

    pub(crate) fn empty_identifier(src: &str, open: usize) -> Self {
        Self::EmptyIdentifier {
            src: src.to_owned(),
            at: (open, 2).into(),
        }
    }

    pub(crate) fn invalid_identifier(src: &str, start: usize, name: &str) -> Self {
        Self::InvalidIdentifier {
            name: name.to_owned(),
            src: src.to_owned(),
            at: (start, name.len()).into(),
        }
    }

    /// Location of the offending placeholder in the template source.
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::MalformedTemplate { at, .. }
            | Self::EmptyIdentifier { at, .. }
            | Self::InvalidIdentifier { at, .. } => *at,
        }
    }
}

/// A failure while substituting values into a parsed template.
#[derive(Debug, Diagnostic, Error)]
pub enum ExpandError {
    /// A placeholder names a variable that the values do not provide.
    #[error("unresolved variable `{0}`")]
    #[diagnostic(code(uri_template::unresolved_variable))]
    UnresolvedVariable(String),

    /// An I/O error passed through from [`Template::expand_into`](crate::Template::expand_into).
    #[error(transparent)]
    #[diagnostic(code(uri_template::io))]
    Io(#[from] io::Error),
}
