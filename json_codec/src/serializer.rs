use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{Json, Limits, SerializeError};

type Result<T = ()> = ::std::result::Result<T, SerializeError>;

/// Serializes `value` to compact JSON text using the default [`Limits`].
///
/// Inputs must be acyclic. A cyclic graph (for example through
/// `Rc<RefCell<_>>`) is reported as [`SerializeError::NestingTooDeep`].
pub fn serialize<T: ToJson + ?Sized>(value: &T) -> Result<String> {
	serialize_with_limits(value, Limits::default())
}

pub fn serialize_with_limits<T: ToJson + ?Sized>(value: &T, limits: Limits) -> Result<String> {
	let mut serializer = Serializer::new(limits);
	let result = value.to_json(&mut serializer);

	match result {
		Ok(()) => {
			debug!(len = serializer.output.len(), "serialized JSON document");
			Ok(serializer.into_string())
		}
		Err(error) => {
			debug!(%error, "failed to serialize JSON document");
			Err(error)
		}
	}
}

/// A value that can be written as JSON.
///
/// Implementations pick exactly one of the capability methods on
/// [`Serializer`]. Types wrapping several kinds (like [`Json`]) check them in
/// the order null, boolean, sequence, number, string, record.
///
/// ```
/// use json_codec::{serialize, SerializeError, Serializer, ToJson};
///
/// struct Point {
/// 	x: i32,
/// 	y: i32,
/// }
///
/// impl ToJson for Point {
/// 	fn to_json(&self, serializer: &mut Serializer) -> Result<(), SerializeError> {
/// 		serializer.serialize_record(|record| {
/// 			record.field("x", &self.x)?;
/// 			record.field("y", &self.y)
/// 		})
/// 	}
/// }
///
/// assert_eq!(serialize(&Point { x: 1, y: -2 }).unwrap(), r#"{"x":1,"y":-2}"#);
/// ```
pub trait ToJson {
	fn to_json(&self, serializer: &mut Serializer) -> Result;
}

/// Numeric primitives the serializer knows how to print.
pub trait JsonNumber: Copy {
	fn write_number(self, output: &mut String) -> Result;
}

macro_rules! impl_integer {
	($($ty:ty),*) => {
		$(
			impl JsonNumber for $ty {
				fn write_number(self, output: &mut String) -> Result {
					output.push_str(&self.to_string());
					Ok(())
				}
			}

			impl ToJson for $ty {
				fn to_json(&self, serializer: &mut Serializer) -> Result {
					serializer.serialize_number(*self)
				}
			}
		)*
	};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
	($($ty:ty),*) => {
		$(
			impl JsonNumber for $ty {
				fn write_number(self, output: &mut String) -> Result {
					if !self.is_finite() {
						return Err(SerializeError::NonFiniteNumber(f64::from(self)));
					}

					// Same cut-over points as JavaScript's `Number.prototype.toString`.
					let magnitude = self.abs();
					let text = if magnitude != 0.0 && (magnitude >= 1e21 || magnitude < 1e-6) {
						format!("{self:e}")
					} else {
						self.to_string()
					};
					output.push_str(&text);
					Ok(())
				}
			}

			impl ToJson for $ty {
				fn to_json(&self, serializer: &mut Serializer) -> Result {
					serializer.serialize_number(*self)
				}
			}
		)*
	};
}

impl_float!(f32, f64);

/// Accumulates JSON text for one [`serialize`] call.
pub struct Serializer {
	output: String,
	depth: usize,
	limits: Limits,
}

impl Serializer {
	pub fn new(limits: Limits) -> Self {
		Serializer {
			output: String::new(),
			depth: 0,
			limits,
		}
	}

	pub fn into_string(self) -> String {
		self.output
	}

	pub fn serialize_null(&mut self) -> Result {
		self.output.push_str("null");
		Ok(())
	}

	pub fn serialize_bool(&mut self, value: bool) -> Result {
		self.output.push_str(if value { "true" } else { "false" });
		Ok(())
	}

	pub fn serialize_seq<I>(&mut self, items: I) -> Result
	where
		I: IntoIterator,
		I::Item: ToJson,
	{
		self.enter()?;
		self.output.push('[');

		for (index, item) in items.into_iter().enumerate() {
			if index > 0 {
				self.output.push(',');
			}
			item.to_json(self)?;
		}

		self.output.push(']');
		self.leave();
		Ok(())
	}

	pub fn serialize_number<N: JsonNumber>(&mut self, value: N) -> Result {
		value.write_number(&mut self.output)
	}

	pub fn serialize_str(&mut self, value: &str) -> Result {
		write_escaped(&mut self.output, value);
		Ok(())
	}

	/// Writes an object whose fields are emitted by `fields`, in call order.
	pub fn serialize_record<F>(&mut self, fields: F) -> Result
	where
		F: FnOnce(&mut RecordSerializer<'_>) -> Result,
	{
		self.enter()?;
		self.output.push('{');

		let mut record = RecordSerializer {
			serializer: self,
			names: HashSet::new(),
		};
		fields(&mut record)?;

		self.output.push('}');
		self.leave();
		Ok(())
	}

	fn enter(&mut self) -> Result {
		self.depth += 1;
		trace!(depth = self.depth, "entering container");

		if self.depth > self.limits.max_depth {
			return Err(SerializeError::NestingTooDeep {
				max_depth: self.limits.max_depth,
			});
		}

		Ok(())
	}

	fn leave(&mut self) {
		self.depth -= 1;
	}
}

pub struct RecordSerializer<'a> {
	serializer: &'a mut Serializer,
	names: HashSet<String>,
}

impl RecordSerializer<'_> {
	/// Writes one field. Each name may appear once per record.
	pub fn field<T: ToJson + ?Sized>(&mut self, name: &str, value: &T) -> Result {
		if self.names.contains(name) {
			return Err(SerializeError::DuplicateField {
				name: name.to_owned(),
			});
		}
		if !self.names.is_empty() {
			self.serializer.output.push(',');
		}
		self.names.insert(name.to_owned());

		write_escaped(&mut self.serializer.output, name);
		self.serializer.output.push(':');
		value.to_json(self.serializer)
	}
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn write_escaped(output: &mut String, value: &str) {
	output.push('"');

	let mut start = 0;
	for (index, char) in value.char_indices() {
		let escape = match char {
			'"' => "\\\"",
			'\\' => "\\\\",
			'\u{8}' => "\\b",
			'\u{c}' => "\\f",
			'\n' => "\\n",
			'\r' => "\\r",
			'\t' => "\\t",
			'\u{0}'..='\u{1f}' => {
				output.push_str(&value[start..index]);
				let code = char as usize;
				output.push_str("\\u00");
				output.push(char::from(HEX_DIGITS[code >> 4]));
				output.push(char::from(HEX_DIGITS[code & 0xf]));
				start = index + 1;
				continue;
			}
			_ => continue,
		};

		output.push_str(&value[start..index]);
		output.push_str(escape);
		start = index + 1;
	}

	output.push_str(&value[start..]);
	output.push('"');
}

impl ToJson for Json {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		match self {
			Json::Null => serializer.serialize_null(),
			Json::Boolean(value) => serializer.serialize_bool(*value),
			Json::Array(items) => serializer.serialize_seq(items),
			Json::Number(value) => serializer.serialize_number(*value),
			Json::String(value) => serializer.serialize_str(value),
			Json::Object(entries) => serialize_entries(serializer, entries),
		}
	}
}

impl ToJson for serde_json::Value {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		match self {
			serde_json::Value::Null => serializer.serialize_null(),
			serde_json::Value::Bool(value) => serializer.serialize_bool(*value),
			serde_json::Value::Array(items) => serializer.serialize_seq(items),
			serde_json::Value::Number(number) => {
				if let Some(value) = number.as_u64() {
					serializer.serialize_number(value)
				} else if let Some(value) = number.as_i64() {
					serializer.serialize_number(value)
				} else {
					let value = number.as_f64().ok_or_else(|| {
						SerializeError::unsupported(format!("number {number} has no f64 form"))
					})?;
					serializer.serialize_number(value)
				}
			}
			serde_json::Value::String(value) => serializer.serialize_str(value),
			serde_json::Value::Object(entries) => serialize_entries(serializer, entries),
		}
	}
}

fn serialize_entries<'a, K, V, I>(serializer: &mut Serializer, entries: I) -> Result
where
	K: AsRef<str> + 'a,
	V: ToJson + 'a,
	I: IntoIterator<Item = (&'a K, &'a V)>,
{
	serializer.serialize_record(|record| {
		for (key, value) in entries {
			record.field(key.as_ref(), value)?;
		}
		Ok(())
	})
}

impl ToJson for () {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_null()
	}
}

impl ToJson for bool {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_bool(*self)
	}
}

impl ToJson for char {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_str(self.encode_utf8(&mut [0; 4]))
	}
}

impl ToJson for str {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_str(self)
	}
}

impl ToJson for String {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_str(self)
	}
}

impl<T: ToJson> ToJson for Option<T> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		match self {
			None => serializer.serialize_null(),
			Some(value) => value.to_json(serializer),
		}
	}
}

impl<T: ToJson> ToJson for [T] {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_seq(self)
	}
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_seq(self)
	}
}

impl<T: ToJson> ToJson for Vec<T> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_seq(self)
	}
}

impl<T: ToJson> ToJson for VecDeque<T> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serializer.serialize_seq(self)
	}
}

impl<K: AsRef<str>, V: ToJson> ToJson for BTreeMap<K, V> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serialize_entries(serializer, self)
	}
}

impl<K: AsRef<str>, V: ToJson, S> ToJson for IndexMap<K, V, S> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		serialize_entries(serializer, self)
	}
}

/// Keys are emitted sorted, since `HashMap` iteration order is unstable.
impl<K: AsRef<str>, V: ToJson, S: BuildHasher> ToJson for HashMap<K, V, S> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		let mut entries: Vec<_> = self.iter().collect();
		entries.sort_unstable_by(|(a, _), (b, _)| {
			AsRef::<str>::as_ref(*a).cmp(AsRef::<str>::as_ref(*b))
		});
		serialize_entries(serializer, entries)
	}
}

impl<T: ToJson + ?Sized> ToJson for &T {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		(**self).to_json(serializer)
	}
}

impl<T: ToJson + ?Sized> ToJson for Box<T> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		(**self).to_json(serializer)
	}
}

impl<T: ToJson + ?Sized> ToJson for Rc<T> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		(**self).to_json(serializer)
	}
}

impl<T: ToJson + ?Sized> ToJson for Arc<T> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		(**self).to_json(serializer)
	}
}

impl<T: ToJson + ?Sized> ToJson for RefCell<T> {
	fn to_json(&self, serializer: &mut Serializer) -> Result {
		let value = self
			.try_borrow()
			.map_err(|_| SerializeError::unsupported("value is mutably borrowed"))?;
		value.to_json(serializer)
	}
}
