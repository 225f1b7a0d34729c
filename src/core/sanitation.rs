// key projection, filtering and standardization
use crate::core::options::StandardizeOptions;
use crate::core::record::{AlgebraError, Record};
use crate::core::types::{Key, Value};

/// Flat list of keys used by projection operations.
///
/// Nested lists are flattened on construction, so membership tests never
/// see nesting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList {
    keys: Vec<Key>,
}

impl KeyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<Key>) {
        self.keys.push(key.into());
    }

    /// Flattens several lists into one, keeping their order.
    pub fn nested<I>(lists: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<KeyList>,
    {
        let mut out = KeyList::new();
        for list in lists {
            out.keys.extend(list.into().keys);
        }
        out
    }

    /// Collects the keys out of a (possibly nested) sequence value.
    /// Values that cannot be keys never match any key and are skipped.
    pub fn from_value(value: &Value) -> Self {
        let mut out = KeyList::new();
        out.collect_from(value);
        out
    }

    fn collect_from(&mut self, value: &Value) {
        match value {
            Value::List(items) => items.iter().for_each(|v| self.collect_from(v)),
            other => {
                if let Ok(key) = Key::try_from(other) {
                    self.keys.push(key);
                }
            }
        }
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }
}

impl From<Key> for KeyList {
    fn from(key: Key) -> Self {
        KeyList { keys: vec![key] }
    }
}

impl From<&Key> for KeyList {
    fn from(key: &Key) -> Self {
        KeyList { keys: vec![key.clone()] }
    }
}

impl From<&str> for KeyList {
    fn from(key: &str) -> Self {
        KeyList { keys: vec![Key::from(key)] }
    }
}

impl From<&KeyList> for KeyList {
    fn from(list: &KeyList) -> Self {
        list.clone()
    }
}

impl From<&Value> for KeyList {
    fn from(value: &Value) -> Self {
        KeyList::from_value(value)
    }
}

impl<K: Into<Key>> From<Vec<K>> for KeyList {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for KeyList {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key> + Clone> From<&[K]> for KeyList {
    fn from(keys: &[K]) -> Self {
        keys.iter().cloned().collect()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyList {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        KeyList {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl Record {
    /// Every entry except those whose key is listed. Unknown keys are ignored.
    pub fn without(&self, keys: impl Into<KeyList>) -> Record {
        let keys = keys.into();
        self.iter()
            .filter(|(k, _)| !keys.contains(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn without_in_place(&mut self, keys: impl Into<KeyList>) -> &mut Self {
        let keys = keys.into();
        let before = self.len();
        self.entries.retain(|k, _| !keys.contains(k));
        tracing::trace!(removed = before - self.len(), "without_in_place");
        self
    }

    /// Alias of [`Record::without`].
    pub fn except(&self, keys: impl Into<KeyList>) -> Record {
        self.without(keys)
    }

    /// Alias of [`Record::without_in_place`].
    pub fn except_in_place(&mut self, keys: impl Into<KeyList>) -> &mut Self {
        self.without_in_place(keys)
    }

    /// Alias of [`Record::without`].
    pub fn clean(&self, keys: impl Into<KeyList>) -> Record {
        self.without(keys)
    }

    /// Alias of [`Record::without_in_place`].
    pub fn clean_in_place(&mut self, keys: impl Into<KeyList>) -> &mut Self {
        self.without_in_place(keys)
    }

    /// Only the entries whose key is listed, in the record's own order.
    /// Listed keys that are absent are simply not in the result.
    pub fn only_with(&self, keys: impl Into<KeyList>) -> Record {
        let keys = keys.into();
        self.iter()
            .filter(|(k, _)| keys.contains(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn only_with_in_place(&mut self, keys: impl Into<KeyList>) -> &mut Self {
        let keys = keys.into();
        let before = self.len();
        self.entries.retain(|k, _| keys.contains(k));
        tracing::trace!(removed = before - self.len(), "only_with_in_place");
        self
    }

    /// Reshapes a copy of the record so its key set is exactly `keys`.
    ///
    /// Listed keys that are absent are bound to `Null`, or, with
    /// `options.errors`, the first one found aborts the whole operation
    /// with [`AlgebraError::MissingKey`].
    pub fn standardize(
        &self,
        keys: impl Into<KeyList>,
        options: StandardizeOptions,
    ) -> Result<Record, AlgebraError> {
        let keys = keys.into();
        let mut out = self.deep_dup();
        out.only_with_in_place(&keys);

        for key in keys.iter() {
            if out.contains_key(key) {
                continue;
            }
            if options.errors {
                tracing::debug!(%key, "standardize: required key missing");
                return Err(AlgebraError::MissingKey {
                    key: key.clone(),
                    record: Box::new(self.clone()),
                });
            }
            out.entries.insert(key.clone(), Value::Null);
        }

        Ok(out)
    }

    /// In-place counterpart of [`Record::standardize`].
    ///
    /// On failure the receiver has already been trimmed to the listed keys;
    /// no null fills have been applied yet, since strict mode fails before
    /// filling anything.
    pub fn standardize_in_place(
        &mut self,
        keys: impl Into<KeyList>,
        options: StandardizeOptions,
    ) -> Result<&mut Self, AlgebraError> {
        let keys = keys.into();
        self.only_with_in_place(&keys);

        for key in keys.iter() {
            if self.contains_key(key) {
                continue;
            }
            if options.errors {
                tracing::debug!(%key, "standardize_in_place: required key missing");
                return Err(AlgebraError::MissingKey {
                    key: key.clone(),
                    record: Box::new(self.clone()),
                });
            }
            self.entries.insert(key.clone(), Value::Null);
        }

        Ok(self)
    }
}
