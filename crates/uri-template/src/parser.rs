use std::borrow::Cow;

use tracing::trace;

use crate::{Item, ParseError, Template};

#[derive(Debug, Clone, Copy)]
enum State {
    /// Copying text; `start` is where the current run began.
    Literal { start: usize },
    /// Inside braces; `open` is the position of the `{`.
    Placeholder { open: usize },
}

impl<'s> Template<'s> {
    /// Parse a template string.
    ///
    /// The returned template borrows from `s`. Text outside of placeholders
    /// is kept verbatim, including any lone `}`.
    pub fn parse(s: &'s str) -> Result<Self, ParseError> {
        let mut items = Vec::new();
        let mut state = State::Literal { start: 0 };

        for (pos, chara) in s.char_indices() {
            match (state, chara) {
                (State::Literal { start }, '{') => {
                    if start < pos {
                        items.push(Item::Text(&s[start..pos]));
                    }
                    state = State::Placeholder { open: pos };
                }
                (State::Placeholder { open }, '}') => {
                    items.push(Item::Var(identifier(s, open, pos)?));
                    state = State::Literal { start: pos + 1 };
                }
                _ => {}
            }
        }

        match state {
            State::Literal { start } => {
                if start < s.len() {
                    items.push(Item::Text(&s[start..]));
                }
            }
            State::Placeholder { open } => return Err(ParseError::malformed_template(s, open)),
        }

        trace!(items = items.len(), "parsed template");

        Ok(Template {
            items: Cow::Owned(items),
        })
    }
}

/// Validate the text between the braces at `open` and `close`.
fn identifier(s: &str, open: usize, close: usize) -> Result<&str, ParseError> {
    let name = &s[open + 1..close];

    if name.is_empty() {
        Err(ParseError::empty_identifier(s, open))
    } else if !name.bytes().all(is_identifier_byte) {
        Err(ParseError::invalid_identifier(s, open + 1, name))
    } else {
        Ok(name)
    }
}

/// `[A-Za-z0-9_]`. Non-ASCII characters are rejected byte by byte.
const fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
