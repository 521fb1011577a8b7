use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_FIELD: &str = "id";

/// A stored record: a unique string id plus whatever other fields the
/// caller supplied. The extra fields are kept verbatim, in their original
/// order, and never interpreted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Build a record from any JSON value without failing. Objects keep all
    /// their fields; an `id` that is missing or not a string becomes `""`.
    /// Anything other than an object becomes the empty record.
    pub fn from_value_lossy(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                let id = match fields.shift_remove(ID_FIELD) {
                    Some(Value::String(id)) => id,
                    _ => String::new(),
                };
                Self { id, fields }
            }
            _ => Self::default(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = self.fields.iter().filter(|(key, _)| key.as_str() != ID_FIELD);
        let mut map = serializer.serialize_map(Some(1 + extra.clone().count()))?;
        map.serialize_entry(ID_FIELD, &self.id)?;
        for (key, value) in extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let id = match fields.shift_remove(ID_FIELD) {
            Some(Value::String(id)) => id,
            Some(other) => {
                return Err(de::Error::invalid_type(
                    unexpected(&other),
                    &"a string id",
                ))
            }
            None => return Err(de::Error::missing_field(ID_FIELD)),
        };
        Ok(Self { id, fields })
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}

/// Everything persisted in one backing file, in insertion order.
pub type Collection = Vec<Record>;
