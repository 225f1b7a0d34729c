// key normalization (textual <-> symbolic labels)
use crate::core::record::Record;
use crate::core::types::Key;

impl Key {
    /// Symbolic form of this key, or `None` when the key has no symbolic form.
    pub fn to_symbolic(&self) -> Option<Key> {
        match self {
            Key::Str(s) | Key::Sym(s) => Some(Key::Sym(s.clone())),
            Key::Int(_) => None,
        }
    }

    /// Textual form of this key. Every key kind has one.
    pub fn to_textual(&self) -> Option<Key> {
        match self {
            Key::Str(s) | Key::Sym(s) => Some(Key::Str(s.clone())),
            Key::Int(i) => Some(Key::Str(i.to_string())),
        }
    }
}

impl Record {
    /// Builds a new record whose keys are passed through `convert`.
    ///
    /// A key for which `convert` returns `None` is kept as is. When two keys
    /// convert to the same key the one processed later (insertion order)
    /// wins; the surviving entry sits where the first of them was.
    pub fn transform_keys<F>(&self, convert: F) -> Record
    where
        F: Fn(&Key) -> Option<Key>,
    {
        let mut out = Record::new();
        for (k, v) in self.iter() {
            let key = convert(k).unwrap_or_else(|| k.clone());
            out.entries.insert(key, v.clone());
        }
        out
    }

    /// In-place counterpart of [`Record::transform_keys`]; values are moved,
    /// not copied, and the result is the same as the non-destructive form.
    pub fn transform_keys_in_place<F>(&mut self, convert: F) -> &mut Self
    where
        F: Fn(&Key) -> Option<Key>,
    {
        let before = self.len();
        let old = std::mem::take(&mut self.entries);
        for (k, v) in old {
            let key = convert(&k).unwrap_or(k);
            self.entries.insert(key, v);
        }
        tracing::trace!(before, after = self.len(), "keys rewritten in place");
        self
    }

    pub fn to_symbolic_keys(&self) -> Record {
        self.transform_keys(Key::to_symbolic)
    }

    pub fn to_symbolic_keys_in_place(&mut self) -> &mut Self {
        self.transform_keys_in_place(Key::to_symbolic)
    }

    pub fn to_string_keys(&self) -> Record {
        self.transform_keys(Key::to_textual)
    }

    pub fn to_string_keys_in_place(&mut self) -> &mut Self {
        self.transform_keys_in_place(Key::to_textual)
    }
}
