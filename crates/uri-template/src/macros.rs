/// Construct a template constant without needing to make an items constant.
///
/// This is essentially a shorthand for:
///
/// ```
/// use uri_template::{Item, Template};
/// Template::new({
///     const ITEMS: &'static [Item<'static>] = &[Item::Text("/users/"), Item::Var("id")];
///     ITEMS
/// });
/// ```
///
/// # Examples
///
/// ```
/// use uri_template::Item::*;
/// assert_eq!(
///     uri_template::template!(Text("/users/"), Var("id"))
///         .expand(&[("id", "Ada Lovelace")])
///         .unwrap(),
///     "/users/Ada%20Lovelace",
/// );
/// ```
#[macro_export]
macro_rules! template {
    ($($item:expr),* $(,)?) => {
        $crate::Template::new({
            const ITEMS: &'static [$crate::Item<'static>] = &[$($item),*];
            ITEMS
        })
    };
}

/// Build [`Variables`](crate::Variables) from keyword-style arguments.
///
/// Each `name = value` pair is inserted with [`Variables::insert`](crate::Variables::insert),
/// so values may be anything convertible into a [`Value`](crate::Value).
///
/// ```
/// let vars = uri_template::vars!(q = "rust", page = 2, exact = true);
/// assert_eq!(
///     uri_template::expand("/search?q={q}&page={page}&exact={exact}", &vars).unwrap(),
///     "/search?q=rust&page=2&exact=true",
/// );
/// ```
///
/// Start from an existing mapping by giving it before a `;`. Named arguments
/// override entries of the mapping:
///
/// ```
/// use uri_template::{vars, Variables};
///
/// let defaults = Variables::new().set("host", "example.org").set("q", "default");
/// let vars = vars!(defaults; q = "given");
/// assert_eq!(
///     uri_template::expand("http://{host}/?q={q}", &vars).unwrap(),
///     "http://example.org/?q=given",
/// );
/// ```
#[macro_export]
macro_rules! vars {
    ($($name:ident = $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut vars = $crate::Variables::new();
        $(
            vars.insert(::core::stringify!($name), $value);
        )*
        vars
    }};
    ($base:expr; $($name:ident = $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut vars: $crate::Variables = ::core::convert::From::from($base);
        $(
            vars.insert(::core::stringify!($name), $value);
        )*
        vars
    }};
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::{expand, template, vars, Item, Stringable, Template, Value, Variables};

    #[test]
    fn template_macro() {
        assert_eq!(template!(), Template::new(&[]));
        assert_eq!(
            template!(Item::Text("a"), Item::Var("b"),),
            Template::new(&[Item::Text("a"), Item::Var("b")])
        );
    }

    #[test]
    fn vars_macro() {
        assert!(vars!().is_empty());

        let vars = vars!(a = "foo", n = 1u8);
        assert_eq!(vars.get("a"), Some(&Value::from("foo")));
        assert_eq!(vars.get("n"), Some(&Value::UInt(1)));
    }

    #[test]
    fn vars_macro_takes_every_number() {
        let vars = vars!(ratio = 1.1f32, big = u128::MAX, small = i128::MIN);

        let mut map = HashMap::new();
        map.insert("ratio", 1.1f32.to_canonical_string().into_owned());
        map.insert("big", u128::MAX.to_string());
        map.insert("small", i128::MIN.to_string());

        let template = "{ratio}/{big}/{small}";
        assert_eq!(expand(template, &vars).unwrap(), expand(template, &map).unwrap());
        assert_eq!(expand("{ratio}", &vars).unwrap(), "1.1");
    }

    #[test]
    fn vars_macro_with_base() {
        let base = Variables::new().set("a", "base").set("keep", "kept");
        let vars = vars!(base; a = "override", b = false);
        assert_eq!(vars.get("a"), Some(&Value::from("override")));
        assert_eq!(vars.get("keep"), Some(&Value::from("kept")));
        assert_eq!(vars.get("b"), Some(&Value::Bool(false)));
    }

    #[test]
    fn vars_macro_base_only() {
        let base = Variables::new().set("x", 1);
        assert_eq!(vars!(base.clone();), base);
    }
}
