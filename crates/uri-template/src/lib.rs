//! Level 1 URI template expansion.
//!
//! A URI template is a string with `{name}` placeholders. Expanding it
//! substitutes each placeholder with the percent-encoded value of the
//! variable it names. There are no operators, modifiers, or defaults: a
//! placeholder is replaced by exactly one value, encoded as a whole.
//!
//! # Syntax
//!
//! ```plain
//! http://example.com/{foo}
//! http://example.org/{a}{b}/{a_b}
//! ```
//!
//! A placeholder is denoted by `{` and `}`. The identifier between the braces
//! must be non-empty and made of ASCII letters, digits and underscores. Text
//! outside of braces is copied as-is and is never encoded; a `}` on its own is
//! plain text.
//!
//! # Encoding
//!
//! Substituted values are converted to their canonical string form (see
//! [`Stringable`]) and every byte outside the unreserved set
//! `A-Z a-z 0-9 - . _ ~` is written as `%XX` with uppercase hex digits. A
//! space becomes `%20`.
//!
//! # Usage
//!
//! The quickest way is [`expand()`]:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut values = HashMap::new();
//! values.insert("foo", "it worked");
//! assert_eq!(
//!     uri_template::expand("http://example.com/{foo}", &values).unwrap(),
//!     "http://example.com/it%20worked",
//! );
//! ```
//!
//! …with keyword-style arguments:
//!
//! ```
//! use uri_template::{expand, vars};
//!
//! assert_eq!(
//!     expand("http://example.org/?q={a}", &vars!(a = "foo")).unwrap(),
//!     "http://example.org/?q=foo",
//! );
//! ```
//!
//! A template can also be parsed once and expanded many times:
//!
//! ```
//! use uri_template::Template;
//!
//! let template = Template::parse("http://example.org/{a}{b}/{a_b}").unwrap();
//! assert!(template.has_variable("a_b"));
//! assert_eq!(
//!     template
//!         .expand(&[("a", "foo"), ("b", "bar"), ("a_b", "baz")])
//!         .unwrap(),
//!     "http://example.org/foobar/baz",
//! );
//! ```
//!
//! …or with your own type, if you implement the [`Values`] trait:
//!
//! ```
//! use std::borrow::Cow;
//! use uri_template::{Template, Values};
//!
//! struct Repo {
//!     owner: &'static str,
//!     name: &'static str,
//! }
//!
//! impl Values for Repo {
//!     fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
//!         match name {
//!             "owner" => Some(self.owner.into()),
//!             "repo" => Some(self.name.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let template = Template::parse("https://github.com/{owner}/{repo}").unwrap();
//! let repo = Repo { owner: "rust-lang", name: "rust" };
//! assert_eq!(template.expand(&repo).unwrap(), "https://github.com/rust-lang/rust");
//! ```
//!
//! # Compile-time parsing
//!
//! `uri-template-macros` provides a `template!` proc-macro taking the same
//! syntax as [`Template::parse`] and rejecting invalid templates at compile
//! time. This crate's [`template!`] rules-macro builds a template from
//! [`Item`]s instead.
//!
//! # Errors
//!
//! Parsing fails with a [`ParseError`] on an unclosed `{`
//! ([`ParseError::MalformedTemplate`]), on `{}`
//! ([`ParseError::EmptyIdentifier`]), or on an identifier with other
//! characters ([`ParseError::InvalidIdentifier`]).
//!
//! Expansion fails with [`ExpandError::UnresolvedVariable`] if a placeholder
//! names a variable the values don't have. Nothing is ever substituted with
//! an empty string or left as the raw placeholder, and no partial output is
//! produced.

use tracing::trace;

#[doc(inline)]
pub use encode::encode;

#[doc(inline)]
pub use error::*;

#[doc(inline)]
pub use template::*;

#[doc(inline)]
pub use value::*;

#[doc(inline)]
pub use values::*;

mod encode;
mod error;
mod macros;
mod parser;
mod template;
mod value;
mod values;

/// Parse `template` and expand it with `values`.
///
/// ```
/// let values = [("a", "foo"), ("b", "bar"), ("a_b", "baz")];
/// assert_eq!(
///     uri_template::expand("http://example.org/{a}{b}/{a_b}", &values).unwrap(),
///     "http://example.org/foobar/baz",
/// );
/// ```
pub fn expand(template: &str, values: &impl Values) -> Result<String, Error> {
    trace!(template, "expanding");
    Ok(Template::parse(template)?.expand(values)?)
}

/// Expand with a base mapping and extra named values, the extras winning.
///
/// This is the function form of [`vars!`]`(base; ...)`.
///
/// ```
/// use uri_template::{expand_with, vars};
///
/// let base = vars!(q = "base", lang = "en");
/// assert_eq!(
///     expand_with("/?q={q}&hl={lang}", base, vars!(q = "extra")).unwrap(),
///     "/?q=extra&hl=en",
/// );
/// ```
pub fn expand_with(template: &str, base: Variables, extra: Variables) -> Result<String, Error> {
    expand(template, &base.merge(extra))
}
