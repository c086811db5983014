use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use uri_template::{encode, expand, Template, Variables};

/// Literal text without braces.
fn arb_literal() -> impl Strategy<Value = String> {
    "[^{}]{0,12}"
}

fn arb_identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,8}"
}

/// Alternating literal runs and placeholders, with a value for every name.
fn arb_template() -> impl Strategy<Value = (Vec<String>, Vec<String>, HashMap<String, String>)> {
    prop::collection::vec((arb_literal(), arb_identifier(), any::<String>()), 0..6).prop_map(
        |parts| {
            let literals: Vec<String> = parts.iter().map(|(lit, _, _)| lit.clone()).collect();
            let names: Vec<String> = parts.iter().map(|(_, name, _)| name.clone()).collect();
            let values: HashMap<String, String> = parts
                .into_iter()
                .map(|(_, name, value)| (name, value))
                .collect();
            (literals, names, values)
        },
    )
}

fn render_source(literals: &[String], names: &[String], tail: &str) -> String {
    let mut source = String::new();
    for (literal, name) in literals.iter().zip(names) {
        source.push_str(literal);
        source.push('{');
        source.push_str(name);
        source.push('}');
    }
    source.push_str(tail);
    source
}

proptest! {
    #[test]
    fn literal_only_is_identity(template in "[^{}]*") {
        prop_assert_eq!(expand(&template, &Variables::new()).unwrap(), template);
    }

    #[test]
    fn lone_closing_braces_are_literal(template in "[^{]*") {
        prop_assert_eq!(expand(&template, &Variables::new()).unwrap(), template);
    }

    #[test]
    fn output_length(
        (literals, names, values) in arb_template(),
        tail in arb_literal(),
    ) {
        let source = render_source(&literals, &names, &tail);
        let expanded = expand(&source, &values).unwrap();

        let literal_len: usize = literals.iter().map(String::len).sum::<usize>() + tail.len();
        let values_len: usize = names
            .iter()
            .map(|name| encode(&values[name]).to_string().len())
            .sum();
        prop_assert_eq!(expanded.len(), literal_len + values_len);
    }

    #[test]
    fn split_outside_placeholders(
        (literals, names, values) in arb_template(),
        (more_literals, more_names, more_values) in arb_template(),
        tail in arb_literal(),
    ) {
        let mut values = values;
        for (name, value) in more_values {
            values.entry(name).or_insert(value);
        }

        let head = render_source(&literals, &names, "");
        let rest = render_source(&more_literals, &more_names, &tail);
        let whole = format!("{head}{rest}");

        prop_assert_eq!(
            expand(&whole, &values).unwrap(),
            expand(&head, &values).unwrap() + &expand(&rest, &values).unwrap()
        );
    }

    #[test]
    fn decoding_recovers_value(value in any::<String>(), prefix in arb_literal()) {
        let template = format!("{prefix}{{v}}");
        let expanded = expand(&template, &[("v", value.as_str())]).unwrap();
        let encoded = &expanded[prefix.len()..];

        prop_assert!(!encoded.contains('+'));
        prop_assert!(!encoded.contains(' '));
        prop_assert_eq!(percent_decode_str(encoded).decode_utf8().unwrap(), value.as_str());
    }

    #[test]
    fn encoded_output_is_unreserved_or_escape(value in any::<String>()) {
        let encoded = encode(&value).to_string();
        let mut bytes = encoded.bytes();
        while let Some(b) = bytes.next() {
            if b == b'%' {
                let hi = bytes.next().unwrap();
                let lo = bytes.next().unwrap();
                prop_assert!(hi.is_ascii_digit() || (b'A'..=b'F').contains(&hi));
                prop_assert!(lo.is_ascii_digit() || (b'A'..=b'F').contains(&lo));
            } else {
                prop_assert!(b.is_ascii_alphanumeric() || b"-._~".contains(&b));
            }
        }
    }

    #[test]
    fn display_round_trips((literals, names, _values) in arb_template(), tail in arb_literal()) {
        let source = render_source(&literals, &names, &tail);
        let template = Template::parse(&source).unwrap();
        prop_assert_eq!(template.to_string(), source);
    }
}
