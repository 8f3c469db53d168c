//! A JSON text codec: [`parse_json`] turns text into a [`Json`] value and
//! [`serialize`] turns anything implementing [`ToJson`] back into text.

mod error;
pub use error::{Container, ParseError, ParseErrorCause, SerializeError};

mod limits;
pub use limits::{Limits, DEFAULT_MAX_DEPTH};

mod parser;
pub use parser::{parse_json, parse_json_with_limits};

mod serializer;
pub use serializer::{
	serialize, serialize_with_limits, JsonNumber, RecordSerializer, Serializer, ToJson,
};

mod json;
pub use json::{Json, Map};
