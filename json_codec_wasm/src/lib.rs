use json_codec::Json;
use serde::Serialize;
use wasm_bindgen::{prelude::wasm_bindgen, JsError, JsValue};

#[wasm_bindgen(js_name = "parseJson")]
pub fn parse_json(source: &str) -> Result<JsValue, JsError> {
	let value = json_codec::parse_json(source)?;
	let serializer = serde_wasm_bindgen::Serializer::json_compatible();
	Ok(value.serialize(&serializer)?)
}

/// Accepts any JSON-compatible JS value (objects, arrays, strings, numbers,
/// booleans, `null`). `NaN` and the infinities are reported as errors rather
/// than written as `null`. A nested `undefined` becomes `null`.
#[wasm_bindgen(js_name = "serializeJson")]
pub fn serialize_json(value: JsValue) -> Result<String, JsError> {
	if value.is_undefined() {
		return Err(JsError::new("undefined cannot be represented in JSON"));
	}

	let value: Json = serde_wasm_bindgen::from_value(value)?;
	Ok(json_codec::serialize(&value)?)
}
