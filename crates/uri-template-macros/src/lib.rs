//! Compile-time parsing of URI templates for crate `uri-template`.

use quote::quote;
use syn::{parse_macro_input, LitStr};
use uri_template::{Item, Template};

/// Parse a template literal at compile time.
///
/// Expands to a `const`-compatible [`Template`]. A malformed template, an
/// empty placeholder, or an invalid identifier is a compile error.
///
/// ```
/// const USER: uri_template::Template<'static> =
///     uri_template_macros::template!("https://example.com/users/{id}");
///
/// assert_eq!(
///     USER.expand(&[("id", "42")]).unwrap(),
///     "https://example.com/users/42",
/// );
/// ```
///
/// ```compile_fail
/// let _ = uri_template_macros::template!("https://example.com/{unclosed");
/// ```
#[proc_macro]
pub fn template(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    let source = literal.value();

    let template = match Template::parse(&source) {
        Ok(template) => template,
        Err(err) => {
            return syn::Error::new(literal.span(), err)
                .to_compile_error()
                .into()
        }
    };

    let items = template.items.iter().map(|item| match item {
        Item::Text(text) => quote! {
            ::uri_template::Item::Text(#text)
        },
        Item::Var(name) => quote! {
            ::uri_template::Item::Var(#name)
        },
    });

    quote! {
        ::uri_template::Template::new({
            const ITEMS: &'static [::uri_template::Item<'static>] = &[
                #(#items),*
            ];
            ITEMS
        })
    }
    .into()
}
