//! Raw tagged payloads and field-attributed struct decoding.
//!
//! A payload is a JSON object whose `type` field has already been split off.
//! Variant structs are decoded from the remaining fields through a small
//! `Deserializer` that remembers which top-level field was being read, so a
//! failure can be reported as `(tag, field, reason)` instead of an opaque
//! serde message.

use std::fmt;

use serde::de::{
    self, DeserializeOwned, DeserializeSeed, IntoDeserializer, MapAccess, Visitor,
    value::StringDeserializer,
};
use serde_json::{Map, Value};

use crate::error::{DecodeError, Result};

/// Wire name of the discriminator field, shared by events and message elements.
pub const DISCRIMINATOR: &str = "type";

/// Split an object into its discriminator and remaining fields.
///
/// Anything other than an object carrying a string `type` is rejected with
/// [`DecodeError::MissingDiscriminator`].
pub(crate) fn split_tag(value: Value) -> Result<(String, Map<String, Value>)> {
    let Value::Object(mut fields) = value else {
        return Err(DecodeError::MissingDiscriminator);
    };
    match fields.remove(DISCRIMINATOR) {
        Some(Value::String(tag)) => Ok((tag, fields)),
        _ => Err(DecodeError::MissingDiscriminator),
    }
}

/// serde_json's message when a document nests deeper than its parser allows.
const PARSER_DEPTH_ERROR: &str = "recursion limit exceeded";

/// Parse raw bytes into `T`.
///
/// Nesting beyond the parser's own limit can only come from chains far deeper
/// than any accepted `limit`, so it is reported as
/// [`DecodeError::RecursionLimitExceeded`] rather than malformed JSON.
pub(crate) fn parse_json<T: DeserializeOwned>(bytes: &[u8], limit: usize) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        if e.is_syntax() && e.to_string().starts_with(PARSER_DEPTH_ERROR) {
            DecodeError::RecursionLimitExceeded { limit }
        } else {
            DecodeError::MalformedJson(e)
        }
    })
}

/// The fields of one tagged object, waiting to be decoded by a registered rule.
#[derive(Debug, Clone)]
pub struct Payload {
    tag: String,
    fields: Map<String, Value>,
}

impl Payload {
    pub(crate) fn new(tag: String, fields: Map<String, Value>) -> Self {
        Self { tag, fields }
    }

    /// The discriminator this payload was dispatched on.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Remove a field holding a nested message chain and return its raw elements.
    ///
    /// `None` means the field was absent; callers decide whether that is an error.
    pub fn take_chain(&mut self, field: &str) -> Result<Option<Vec<Value>>> {
        match self.fields.remove(field) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => Err(DecodeError::variant(
                self.tag.as_str(),
                Some(field),
                format!("expected a message chain array, found {}", json_kind(&other)),
            )),
        }
    }

    /// Like [`Payload::take_chain`], but an absent field is a decode failure.
    pub fn require_chain(&mut self, field: &str) -> Result<Vec<Value>> {
        self.take_chain(field)?
            .ok_or_else(|| DecodeError::variant(self.tag.as_str(), Some(field), "missing field"))
    }

    /// Decode the remaining fields into a variant struct.
    ///
    /// Unknown fields are ignored; absent `Option` fields become `None`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let Self { tag, fields } = self;
        T::deserialize(FieldsDeserializer { fields })
            .map_err(|e| DecodeError::variant(tag, e.field, e.reason))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Error raised while decoding the fields of a payload.
#[derive(Debug)]
struct FieldError {
    field: Option<String>,
    reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "field `{field}`: {}", self.reason),
            None => f.write_str(&self.reason),
        }
    }
}

impl std::error::Error for FieldError {}

impl de::Error for FieldError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self {
            field: None,
            reason: msg.to_string(),
        }
    }

    fn missing_field(field: &'static str) -> Self {
        Self {
            field: Some(field.to_string()),
            reason: "missing field".to_string(),
        }
    }
}

struct FieldsDeserializer {
    fields: Map<String, Value>,
}

impl<'de> de::Deserializer<'de> for FieldsDeserializer {
    type Error = FieldError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> std::result::Result<V::Value, Self::Error> {
        visitor.visit_map(FieldsAccess {
            iter: self.fields.into_iter(),
            pending: None,
        })
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct FieldsAccess {
    iter: serde_json::map::IntoIter,
    pending: Option<(String, Value)>,
}

impl<'de> MapAccess<'de> for FieldsAccess {
    type Error = FieldError;

    fn next_key_seed<K>(&mut self, seed: K) -> std::result::Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        let Some((key, value)) = self.iter.next() else {
            return Ok(None);
        };
        let de: StringDeserializer<FieldError> = key.clone().into_deserializer();
        let key_value = seed.deserialize(de)?;
        self.pending = Some((key, value));
        Ok(Some(key_value))
    }

    fn next_value_seed<V>(&mut self, seed: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        let (key, value) = self
            .pending
            .take()
            .ok_or_else(|| <FieldError as de::Error>::custom("value requested before key"))?;
        seed.deserialize(value).map_err(|e| FieldError {
            field: Some(key),
            reason: e.to_string(),
        })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}
