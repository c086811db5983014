use std::{
    borrow::{Borrow, Cow},
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::{Stringable, Variables};

/// A source of values for template placeholders.
///
/// Implemented for maps, slices and arrays of pairs, [`Variables`], and
/// closures wrapped with [`vals()`]. Values are converted with
/// [`Stringable`] before they are percent-encoded.
pub trait Values {
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T> Values for &T
where
    T: Values + ?Sized,
{
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
        T::get_value(self, name)
    }
}

impl<K, V> Values for [(K, V)]
where
    K: AsRef<str>,
    V: Stringable,
{
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.to_canonical_string())
    }
}

impl<K, V, const N: usize> Values for [(K, V); N]
where
    K: AsRef<str>,
    V: Stringable,
{
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_slice().get_value(name)
    }
}

impl<K, V> Values for Vec<(K, V)>
where
    K: AsRef<str>,
    V: Stringable,
{
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_slice().get_value(name)
    }
}

impl<K, V, S> Values for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: Stringable,
    S: BuildHasher,
{
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Stringable::to_canonical_string)
    }
}

impl<K, V> Values for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Stringable,
{
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Stringable::to_canonical_string)
    }
}

impl Values for Variables {
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Stringable::to_canonical_string)
    }
}

/// Workaround to allow using functions as [`Values`].
///
/// As this isn't constructible you'll want to use [`vals()`] instead.
#[derive(Copy, Clone, Debug)]
pub struct ValuesFn<F> {
    inner: F,
}

impl<F, V> Values for ValuesFn<F>
where
    F: Fn(&str) -> Option<V>,
    V: Stringable,
{
    fn get_value(&self, name: &str) -> Option<Cow<'_, str>> {
        (self.inner)(name).map(|value| Cow::Owned(value.to_canonical_string().into_owned()))
    }
}

/// Use a closure as [`Values`].
///
/// The closure may return any [`Stringable`] type.
///
/// ```
/// use uri_template::{expand, vals};
///
/// let id = |name: &str| (name == "id").then_some(42);
/// assert_eq!(expand("/items/{id}", &vals(id)).unwrap(), "/items/42");
/// ```
pub const fn vals<F>(func: F) -> ValuesFn<F> {
    ValuesFn { inner: func }
}
