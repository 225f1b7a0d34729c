// conversions to and from serde_json values
use serde_json::{Map, Number, Value as Json};

use crate::core::record::Record;
use crate::core::types::{Key, Sequence, Value};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                //u64 beyond i64 range lands here too
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Map(Record::from(map)),
        }
    }
}

impl From<Map<String, Json>> for Record {
    fn from(map: Map<String, Json>) -> Self {
        map.into_iter()
            .map(|(k, v)| (Key::Str(k), Value::from(v)))
            .collect()
    }
}

fn key_to_string(key: Key) -> String {
    match key {
        Key::Str(s) | Key::Sym(s) => s,
        Key::Int(i) => i.to_string(),
    }
}

impl From<Value> for Json {
    /// Symbols become strings and non-finite floats become null. Keys that
    /// collide once rendered as strings keep the later value.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Int(i) => Json::Number(Number::from(i)),
            Value::Float(x) => Number::from_f64(x).map_or(Json::Null, Json::Number),
            Value::Str(s) | Value::Sym(s) => Json::String(s),
            Value::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Map(record) => Json::Object(record.into()),
        }
    }
}

impl From<Record> for Map<String, Json> {
    fn from(record: Record) -> Self {
        record
            .into_iter()
            .map(|(k, v)| (key_to_string(k), Json::from(v)))
            .collect()
    }
}

impl From<Sequence> for Json {
    fn from(seq: Sequence) -> Self {
        Json::Array(seq.into_iter().map(Json::from).collect())
    }
}

impl From<Record> for Json {
    fn from(record: Record) -> Self {
        Json::Object(record.into())
    }
}
