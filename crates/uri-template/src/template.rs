use std::{borrow::Cow, fmt, io::Write, ops::Add};

use tracing::debug;

use crate::{encode, encode::encoded_len, ExpandError, Values};

/// An item with its value looked up, ready to be written out.
enum Part<'a> {
    Text(&'a str),
    Value(Cow<'a, str>),
}

/// A parsed URI template.
///
/// Obtain one with [`Template::parse`], the [`template!`](crate::template)
/// rules-macro, or `uri_template_macros::template!` for compile-time parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Template<'s> {
    pub items: Cow<'s, [Item<'s>]>,
}

/// A piece of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Item<'s> {
    /// Literal text, copied to the output as-is.
    Text(&'s str),
    /// A placeholder, holding the identifier between the braces.
    Var(&'s str),
}

impl<'s> Template<'s> {
    /// Construct a template from already-split items.
    ///
    /// Identifiers are not validated here; prefer [`Template::parse`] for
    /// untrusted input.
    pub const fn new(items: &'s [Item<'s>]) -> Template<'s> {
        Template {
            items: Cow::Borrowed(items),
        }
    }

    /// Expand the template, writing the result to `writer`.
    ///
    /// Every placeholder is resolved before anything is written, so a
    /// missing variable leaves `writer` untouched.
    pub fn expand_into(
        &self,
        writer: &mut dyn Write,
        values: &impl Values,
    ) -> Result<(), ExpandError> {
        let expanded = self.expand(values)?;
        writer.write_all(expanded.as_bytes())?;
        Ok(())
    }

    /// Expand the template to a string.
    ///
    /// Each placeholder is replaced by the percent-encoded value that `values`
    /// gives for its identifier. Literal text is copied unchanged.
    pub fn expand(&self, values: &impl Values) -> Result<String, ExpandError> {
        let parts = self
            .items
            .iter()
            .map(|item| match *item {
                Item::Text(text) => Ok(Part::Text(text)),
                Item::Var(name) => values.get_value(name).map(Part::Value).ok_or_else(|| {
                    debug!(variable = name, "unresolved variable");
                    ExpandError::UnresolvedVariable(name.to_owned())
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let capacity = parts
            .iter()
            .map(|part| match part {
                Part::Text(text) => text.len(),
                Part::Value(value) => encoded_len(value),
            })
            .sum();

        let mut buf = String::with_capacity(capacity);
        for part in &parts {
            match part {
                Part::Text(text) => buf.push_str(text),
                Part::Value(value) => buf.extend(encode(value)),
            }
        }

        Ok(buf)
    }

    /// Returns `true` if a placeholder uses this identifier.
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables().any(|var| var == name)
    }

    /// Identifiers of all placeholders, in order of appearance.
    ///
    /// An identifier used twice is yielded twice.
    pub fn variables(&self) -> impl Iterator<Item = &'s str> + '_ {
        self.items.iter().filter_map(|item| match *item {
            Item::Var(name) => Some(name),
            Item::Text(_) => None,
        })
    }

    /// Total length of the literal text.
    pub fn literal_len(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                Item::Text(text) => text.len(),
                Item::Var(_) => 0,
            })
            .sum()
    }
}

impl fmt::Display for Template<'_> {
    /// Writes the template back in its source syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items.iter() {
            match item {
                Item::Text(text) => f.write_str(text)?,
                Item::Var(name) => write!(f, "{{{name}}}")?,
            }
        }
        Ok(())
    }
}

impl<'s> Add for Template<'s> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut items = self.items.into_owned();
        items.extend_from_slice(&rhs.items);
        Template {
            items: Cow::Owned(items),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::{template, vals, ExpandError, Item, Template};

    #[test]
    fn concat_templates() {
        let t1 = Template::new(&[Item::Text("http://"), Item::Var("host")]);
        let t2 = Template::new(&[Item::Text("/"), Item::Var("path")]);
        assert_eq!(
            t1 + t2,
            Template::new(&[
                Item::Text("http://"),
                Item::Var("host"),
                Item::Text("/"),
                Item::Var("path"),
            ])
        );
    }

    #[test]
    fn expands_and_encodes() {
        let template = Template::parse("http://example.com/{foo}").unwrap();
        let values = [("foo", "it worked")];
        assert_eq!(
            template.expand(&values).unwrap(),
            "http://example.com/it%20worked"
        );
    }

    #[test]
    fn literal_text_not_encoded() {
        let template = Template::parse("http://example.org/a b?q={q}&x=é").unwrap();
        assert_eq!(
            template.expand(&[("q", "a b")]).unwrap(),
            "http://example.org/a b?q=a%20b&x=é"
        );
    }

    #[test]
    fn substituted_text_not_rescanned() {
        let template = Template::parse("{a}{b}").unwrap();
        let values = [("a", "{b}"), ("b", "x")];
        assert_eq!(template.expand(&values).unwrap(), "%7Bb%7Dx");
    }

    #[test]
    fn repeated_variable() {
        let template = Template::parse("{x}-{x}").unwrap();
        assert_eq!(template.expand(&[("x", "1")]).unwrap(), "1-1");
        assert_eq!(template.variables().collect::<Vec<_>>(), ["x", "x"]);
    }

    #[test]
    fn each_placeholder_gets_its_value() {
        let template = Template::parse("{a}/{b}{a}-{c}").unwrap();
        let values = [("a", "1"), ("b", "two words"), ("c", "3")];
        assert_eq!(template.expand(&values).unwrap(), "1/two%20words1-3");
    }

    #[test]
    fn missing_variable() {
        let template = Template::parse("/{present}/{absent}").unwrap();
        let err = template.expand(&[("present", "here")]).unwrap_err();
        assert!(matches!(err, ExpandError::UnresolvedVariable(ref name) if name == "absent"));
    }

    #[test]
    fn expand_into_writer() {
        let template = Template::parse("/users/{user}").unwrap();
        let mut buf: Vec<u8> = Vec::new();
        template
            .expand_into(&mut buf, &vals(|_: &str| Some("Jürgen")))
            .unwrap();
        assert_eq!(buf.as_slice(), b"/users/J%C3%BCrgen");
    }

    #[test]
    fn expand_into_writes_nothing_on_failure() {
        let template = Template::parse("/a/{a}/b/{b}").unwrap();
        let mut buf: Vec<u8> = Vec::new();
        let err = template
            .expand_into(&mut buf, &[("a", "1")])
            .unwrap_err();
        assert!(matches!(err, ExpandError::UnresolvedVariable(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn has_variable() {
        let template = template!(Item::Text("/"), Item::Var("id"));
        assert!(template.has_variable("id"));
        assert!(!template.has_variable("ID"));
    }

    #[test]
    fn display_round_trips() {
        let source = "http://example.org/{a}{b}/}/{a_b}";
        let template = Template::parse(source).unwrap();
        assert_eq!(template.to_string(), source);
        assert_eq!(Template::parse(&template.to_string()).unwrap(), template);
    }

    #[test]
    fn hashmap_values() {
        let mut values = HashMap::new();
        values.insert("a", "foo");
        values.insert("b", "bar");
        values.insert("a_b", "baz");
        let template = Template::parse("http://example.org/{a}{b}/{a_b}").unwrap();
        assert_eq!(
            template.expand(&values).unwrap(),
            "http://example.org/foobar/baz"
        );
    }

    #[test]
    fn literal_len() {
        let template = Template::parse("ab{c}de").unwrap();
        assert_eq!(template.literal_len(), 4);
    }
}
