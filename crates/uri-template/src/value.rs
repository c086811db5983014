use std::{
    borrow::Cow,
    collections::{btree_map, BTreeMap},
    fmt,
};

/// A value that can be substituted into a template.
///
/// The canonical string form is what gets percent-encoded:
///
/// - strings as-is;
/// - integers in base 10, with a leading `-` when negative;
/// - floats in the shortest form that round-trips (`1.5`, `1`, `NaN`, `inf`);
/// - booleans as `true` or `false`;
/// - chars as themselves.
pub trait Stringable {
    fn to_canonical_string(&self) -> Cow<'_, str>;
}

impl<T: Stringable + ?Sized> Stringable for &T {
    fn to_canonical_string(&self) -> Cow<'_, str> {
        T::to_canonical_string(self)
    }
}

impl<T: Stringable + ?Sized> Stringable for Box<T> {
    fn to_canonical_string(&self) -> Cow<'_, str> {
        T::to_canonical_string(self)
    }
}

impl Stringable for str {
    fn to_canonical_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Stringable for String {
    fn to_canonical_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Stringable for Cow<'_, str> {
    fn to_canonical_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

macro_rules! impl_stringable_display {
    ($($t:ty),*) => {
        $(
            impl Stringable for $t {
                fn to_canonical_string(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_stringable_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

/// An owned, typed template value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i128),
    UInt(u128),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Stringable for Value {
    fn to_canonical_string(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::UInt(u) => Cow::Owned(u.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Char(c) => Cow::Owned(c.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Self::Str(s.into_owned())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Value {
    /// Keeps the `f32` canonical form, so `1.1f32` stays `1.1`.
    fn from(f: f32) -> Self {
        Self::Float(f.to_string().parse().unwrap_or(f64::from(f)))
    }
}

macro_rules! impl_from_int {
    ($variant:ident($repr:ty): $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Self::$variant(i as $repr)
                }
            }
        )*
    };
}

impl_from_int!(Int(i128): i8, i16, i32, i64, i128, isize);
impl_from_int!(UInt(u128): u8, u16, u32, u64, u128, usize);

/// An owned variable mapping.
///
/// Setting a name that is already present replaces its value.
///
/// ```
/// use uri_template::Variables;
///
/// let vars = Variables::new().set("page", 2).set("q", "rust lang");
/// assert_eq!(
///     uri_template::expand("/search?q={q}&page={page}", &vars).unwrap(),
///     "/search?q=rust%20lang&page=2",
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    inner: BTreeMap<String, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.inner.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Overlay `other` on top of `self`: entries of `other` win.
    #[must_use]
    pub fn merge(mut self, other: Variables) -> Self {
        self.inner.extend(other.inner);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        vars.extend(iter);
        vars
    }
}

impl<K, V> Extend<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Variables {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(feature = "serde")]
mod de {
    use std::{collections::BTreeMap, fmt};

    use serde::de::{Deserialize, Deserializer, Error, Visitor};

    use super::{Value, Variables};

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, integer, float or boolean")
        }

        fn visit_bool<E: Error>(self, v: bool) -> Result<Value, E> {
            Ok(Value::Bool(v))
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<Value, E> {
            Ok(Value::Int(v.into()))
        }

        fn visit_i128<E: Error>(self, v: i128) -> Result<Value, E> {
            Ok(Value::Int(v))
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<Value, E> {
            Ok(Value::UInt(v.into()))
        }

        fn visit_u128<E: Error>(self, v: u128) -> Result<Value, E> {
            Ok(Value::UInt(v))
        }

        fn visit_f64<E: Error>(self, v: f64) -> Result<Value, E> {
            Ok(Value::Float(v))
        }

        fn visit_char<E: Error>(self, v: char) -> Result<Value, E> {
            Ok(Value::Char(v))
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Value, E> {
            Ok(Value::Str(v.to_owned()))
        }

        fn visit_string<E: Error>(self, v: String) -> Result<Value, E> {
            Ok(Value::Str(v))
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ValueVisitor)
        }
    }

    impl<'de> Deserialize<'de> for Variables {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            BTreeMap::<String, Value>::deserialize(deserializer).map(|inner| Variables { inner })
        }
    }
}
