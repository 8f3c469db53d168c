use std::fmt;

use indexmap::{map::Entry, IndexMap};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Key/value storage of a [`Json::Object`], kept in insertion order.
pub type Map = IndexMap<String, Json>;

#[derive(Debug, Clone, PartialEq)]
pub enum Json {
	Null,
	Boolean(bool),
	Number(f64),
	String(String),
	Array(Vec<Json>),
	Object(Map),
}

impl Json {
	pub fn is_null(&self) -> bool {
		matches!(self, Json::Null)
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Json::Boolean(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Json::Number(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Json::String(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&[Json]> {
		match self {
			Json::Array(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&Map> {
		match self {
			Json::Object(entries) => Some(entries),
			_ => None,
		}
	}

	/// Looks up `key` if this is an object.
	pub fn get(&self, key: &str) -> Option<&Json> {
		self.as_object()?.get(key)
	}

	/// Looks up the element at `index` if this is an array.
	pub fn get_index(&self, index: usize) -> Option<&Json> {
		self.as_array()?.get(index)
	}
}

impl From<bool> for Json {
	fn from(value: bool) -> Self {
		Json::Boolean(value)
	}
}

impl From<f64> for Json {
	fn from(value: f64) -> Self {
		Json::Number(value)
	}
}

impl From<&str> for Json {
	fn from(value: &str) -> Self {
		Json::String(value.to_owned())
	}
}

impl From<String> for Json {
	fn from(value: String) -> Self {
		Json::String(value)
	}
}

impl From<Vec<Json>> for Json {
	fn from(items: Vec<Json>) -> Self {
		Json::Array(items)
	}
}

impl From<Map> for Json {
	fn from(entries: Map) -> Self {
		Json::Object(entries)
	}
}

impl From<serde_json::Value> for Json {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Json::Null,
			serde_json::Value::Bool(value) => Json::Boolean(value),
			serde_json::Value::Number(number) => number.as_f64().map_or(Json::Null, Json::Number),
			serde_json::Value::String(value) => Json::String(value),
			serde_json::Value::Array(items) => Json::Array(items.into_iter().map(Json::from).collect()),
			serde_json::Value::Object(entries) => Json::Object(
				entries
					.into_iter()
					.map(|(key, value)| (key, Json::from(value)))
					.collect(),
			),
		}
	}
}

impl From<Json> for serde_json::Value {
	fn from(value: Json) -> Self {
		match value {
			Json::Null => serde_json::Value::Null,
			Json::Boolean(value) => serde_json::Value::Bool(value),
			Json::Number(value) => number_to_serde_json(value),
			Json::String(value) => serde_json::Value::String(value),
			Json::Array(items) => {
				serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
			}
			Json::Object(entries) => serde_json::Value::Object(
				entries
					.into_iter()
					.map(|(key, value)| (key, serde_json::Value::from(value)))
					.collect(),
			),
		}
	}
}

/// Integral values inside the exactly representable range map to serde_json
/// integers, so they compare equal to values serde_json parsed itself.
fn number_to_serde_json(value: f64) -> serde_json::Value {
	const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

	let negative_zero = value == 0.0 && value.is_sign_negative();
	if value.fract() == 0.0 && value.abs() <= EXACT_INTEGER_LIMIT && !negative_zero {
		#[allow(clippy::cast_possible_truncation)]
		let integer = value as i64;
		return serde_json::Value::from(integer);
	}

	// `from_f64` refuses NaN and the infinities.
	serde_json::Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl Serialize for Json {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Json::Null => serializer.serialize_unit(),
			Json::Boolean(value) => serializer.serialize_bool(*value),
			Json::Number(value) => serializer.serialize_f64(*value),
			Json::String(value) => serializer.serialize_str(value),
			Json::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Json::Object(entries) => {
				let mut map = serializer.serialize_map(Some(entries.len()))?;
				for (key, value) in entries {
					map.serialize_entry(key, value)?;
				}
				map.end()
			}
		}
	}
}

/// Numbers arrive as `f64` unchecked, so a non-finite value from a foreign
/// source survives and is refused later by the serializer.
impl<'de> Deserialize<'de> for Json {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(JsonVisitor)
	}
}

struct JsonVisitor;

impl<'de> Visitor<'de> for JsonVisitor {
	type Value = Json;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a JSON value")
	}

	fn visit_bool<E: de::Error>(self, value: bool) -> Result<Json, E> {
		Ok(Json::Boolean(value))
	}

	#[allow(clippy::cast_precision_loss)]
	fn visit_i64<E: de::Error>(self, value: i64) -> Result<Json, E> {
		Ok(Json::Number(value as f64))
	}

	#[allow(clippy::cast_precision_loss)]
	fn visit_u64<E: de::Error>(self, value: u64) -> Result<Json, E> {
		Ok(Json::Number(value as f64))
	}

	fn visit_f64<E: de::Error>(self, value: f64) -> Result<Json, E> {
		Ok(Json::Number(value))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<Json, E> {
		Ok(Json::String(value.to_owned()))
	}

	fn visit_string<E: de::Error>(self, value: String) -> Result<Json, E> {
		Ok(Json::String(value))
	}

	fn visit_unit<E: de::Error>(self) -> Result<Json, E> {
		Ok(Json::Null)
	}

	fn visit_none<E: de::Error>(self) -> Result<Json, E> {
		Ok(Json::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Json, D::Error> {
		Json::deserialize(deserializer)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Json, A::Error> {
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(item) = seq.next_element()? {
			items.push(item);
		}
		Ok(Json::Array(items))
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Json, A::Error> {
		let mut entries = Map::with_capacity(map.size_hint().unwrap_or(0));
		while let Some(key) = map.next_key::<String>()? {
			match entries.entry(key) {
				Entry::Occupied(entry) => {
					return Err(de::Error::custom(format_args!(
						"duplicate key \"{}\"",
						entry.key()
					)));
				}
				Entry::Vacant(entry) => {
					entry.insert(map.next_value()?);
				}
			}
		}
		Ok(Json::Object(entries))
	}
}
