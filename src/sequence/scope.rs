// value-scoped filtering of sequences of records
use crate::core::record::Record;
use crate::core::types::{Key, Sequence, Value};

/// Field lookup on a sequence element.
///
/// `None` means the element has no such field, which is never a member of
/// any value set. A field explicitly bound to `Null` is `Some(&Null)`.
pub trait Field {
    fn field(&self, key: &Key) -> Option<&Value>;
}

impl Field for Record {
    fn field(&self, key: &Key) -> Option<&Value> {
        self.get(key)
    }
}

impl Field for Value {
    //anything that is not a record has no fields
    fn field(&self, key: &Key) -> Option<&Value> {
        self.as_record().and_then(|r| r.get(key))
    }
}

fn is_member<T: Field>(item: &T, key: &Key, values: &[Value]) -> bool {
    item.field(key).is_some_and(|v| values.contains(v))
}

/// Stable sub-sequence of the items whose `key` field is one of `values`.
pub fn scope<T: Field + Clone>(items: &[T], key: &Key, values: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter(|item| is_member(*item, key, values))
        .cloned()
        .collect()
}

/// Complement of [`scope`]: items lacking `key`, or whose value is not in
/// `values`.
pub fn exclude_scope<T: Field + Clone>(items: &[T], key: &Key, values: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter(|item| !is_member(*item, key, values))
        .cloned()
        .collect()
}

impl Sequence {
    pub fn scope<V>(&self, key: impl Into<Key>, values: impl IntoIterator<Item = V>) -> Sequence
    where
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Sequence::from(scope(self.as_slice(), &key.into(), &values))
    }

    pub fn exclude_scope<V>(
        &self,
        key: impl Into<Key>,
        values: impl IntoIterator<Item = V>,
    ) -> Sequence
    where
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Sequence::from(exclude_scope(self.as_slice(), &key.into(), &values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strategy::arb_value;
    use proptest::prelude::*;

    fn philosopher(name: &str, nationality: &str) -> Record {
        Record::from([("name", name), ("nationality", nationality)])
    }

    fn philosophers() -> Vec<Record> {
        vec![
            philosopher("Jean-Paul Sartre", "French"),
            philosopher("Bertrand Russell", "English"),
            philosopher("Ludwig Wittgenstein", "Austrian"),
            philosopher("Albert Camus", "French"),
        ]
    }

    fn symbolized() -> Vec<Record> {
        let mut all = philosophers();
        all.iter_mut().for_each(|r| {
            r.to_symbolic_keys_in_place();
        });
        all
    }

    fn names(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .filter_map(|r| match r.field(&Key::from("name")).or(r.field(&Key::sym("name"))) {
                Some(Value::Str(s)) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn scope_single_value_with_textual_keys() {
        let all = philosophers();
        let out = scope(&all, &Key::from("nationality"), &[Value::from("French")]);
        assert_eq!(names(&out), vec!["Jean-Paul Sartre", "Albert Camus"]);
    }

    #[test]
    fn scope_multiple_values_with_symbolic_keys() {
        let all = symbolized();
        let out = scope(
            &all,
            &Key::sym("nationality"),
            &[Value::from("French"), Value::from("English")],
        );
        assert_eq!(names(&out), vec!["Jean-Paul Sartre", "Bertrand Russell", "Albert Camus"]);
    }

    #[test]
    fn exclude_scope_returns_complement() {
        let all = philosophers();
        let out = exclude_scope(&all, &Key::from("nationality"), &[Value::from("French")]);
        assert_eq!(names(&out), vec!["Bertrand Russell", "Ludwig Wittgenstein"]);

        let all = symbolized();
        let out = exclude_scope(
            &all,
            &Key::sym("nationality"),
            &[Value::from("French"), Value::from("English")],
        );
        assert_eq!(names(&out), vec!["Ludwig Wittgenstein"]);
    }

    #[test]
    fn missing_key_is_never_a_member_but_explicit_null_is() {
        let items = vec![
            Record::from([("k", Value::Null)]),
            Record::from([("other", 1)]),
        ];

        let out = scope(&items, &Key::from("k"), &[Value::Null]);
        assert_eq!(out, vec![Record::from([("k", Value::Null)])]);

        let out = exclude_scope(&items, &Key::from("k"), &[Value::Null]);
        assert_eq!(out, vec![Record::from([("other", 1)])]);
    }

    #[test]
    fn sequence_scope_treats_non_records_as_lacking_the_key() {
        let seq = Sequence::from([
            Value::Map(philosopher("Sartre", "French")),
            Value::Int(3),
            Value::Map(philosopher("Russell", "English")),
        ]);

        let french = seq.scope("nationality", ["French"]);
        assert_eq!(french, Sequence::from([Value::Map(philosopher("Sartre", "French"))]));

        let rest = seq.exclude_scope("nationality", ["French"]);
        assert_eq!(
            rest,
            Sequence::from([Value::Int(3), Value::Map(philosopher("Russell", "English"))])
        );
        //source untouched
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn empty_value_set_selects_nothing() {
        let all = philosophers();
        assert!(scope(&all, &Key::from("nationality"), &[]).is_empty());
        assert_eq!(exclude_scope(&all, &Key::from("nationality"), &[]), all);
    }

    proptest! {
        #[test]
        fn scope_and_exclude_scope_partition_the_sequence(
            items in proptest::collection::vec(arb_value(2), 0..8),
            values in proptest::collection::vec(arb_value(0), 0..3),
        ) {
            let key = Key::from("a");
            let inside = scope(&items, &key, &values);
            let outside = exclude_scope(&items, &key, &values);

            prop_assert_eq!(inside.len() + outside.len(), items.len());
            for item in &inside {
                prop_assert!(is_member(item, &key, &values));
            }
            for item in &outside {
                prop_assert!(!is_member(item, &key, &values));
            }
        }
    }
}
