use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, NON_ALPHANUMERIC};

/// Everything except the URI unreserved set: `A-Z a-z 0-9 - . _ ~`.
///
/// https://www.rfc-editor.org/rfc/rfc3986#section-2.3
const RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a substituted value.
///
/// Each UTF-8 byte outside the unreserved set is written as `%` followed by
/// two uppercase hex digits, so a space becomes `%20` and never `+`.
///
/// The result is lazy: it implements [`Display`](std::fmt::Display) and
/// iterates over `&str` chunks.
///
/// ```
/// assert_eq!(uri_template::encode("it worked").to_string(), "it%20worked");
/// assert_eq!(uri_template::encode("AT&T").to_string(), "AT%26T");
/// ```
pub fn encode(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, RESERVED)
}

/// Length of `value` once encoded, without allocating.
pub(crate) fn encoded_len(value: &str) -> usize {
    encode(value).map(str::len).sum()
}
