use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("{}:{} {cause}", .row + 1, .column + 1)]
pub struct ParseError {
	pub cause: ParseErrorCause,

	pub row: usize,
	pub column: usize,
	/// Byte offset into the source.
	pub offset: usize,
}

/// Which container a separator error was raised in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Container {
	Array,
	Object,
}

impl Display for Container {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Container::Array => f.write_str("array elements"),
			Container::Object => f.write_str("object entries"),
		}
	}
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseErrorCause {
	#[error("Unexpected end of input")]
	UnexpectedEndOfInput,
	#[error("Unexpected token: '{char}'")]
	UnexpectedToken { char: char },
	#[error("Expected string key but got '{char}'")]
	ExpectedStringKey { char: char },
	#[error("Expected ':' after object key but got '{char}'")]
	ExpectedColon { char: char },
	#[error("Expected ',' between {container} but got '{char}'")]
	ExpectedComma { char: char, container: Container },
	#[error("Duplicate object key: \"{key}\"")]
	DuplicateKey { key: String },
	#[error("Unexpected escape character: '{char}'")]
	InvalidEscape { char: char },
	#[error("Only hex digits are allowed in a unicode escape, got '{char}'")]
	InvalidHexDigit { char: char },
	#[error("Invalid unicode code point: \\u{code:04X}")]
	InvalidCodePoint { code: u32 },
	#[error("Unescaped control character U+{code:04X} in string")]
	UnescapedControlCharacter { code: u32 },
	#[error("Leading zeros are not allowed in numbers")]
	LeadingZero,
	#[error("Expected a digit after '{after}'")]
	MissingDigit { after: char },
	#[error("Not a number: '{lexeme}'")]
	NotANumber { lexeme: String },
	#[error("Unexpected trailing character: '{char}'")]
	TrailingCharacters { char: char },
	#[error("Nesting deeper than {max_depth} levels")]
	NestingTooDeep { max_depth: usize },
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum SerializeError {
	#[error("Non-finite number {0} cannot be represented in JSON")]
	NonFiniteNumber(f64),
	#[error("Nesting deeper than {max_depth} levels (is the value cyclic?)")]
	NestingTooDeep { max_depth: usize },
	#[error("Duplicate field: \"{name}\"")]
	DuplicateField { name: String },
	#[error("Unsupported value: {0}")]
	Unsupported(String),
}

impl SerializeError {
	pub fn unsupported(reason: impl Into<String>) -> Self {
		SerializeError::Unsupported(reason.into())
	}
}
