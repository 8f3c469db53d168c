use indexmap::map::Entry;
use tracing::{debug, trace};

use crate::error::{Container, ParseErrorCause};
use crate::json::Map;
use crate::{Json, Limits, ParseError};

type Result<T = Json> = ::std::result::Result<T, ParseError>;

/// Parses a single JSON document using the default [`Limits`].
pub fn parse_json(source: impl AsRef<str>) -> Result {
	parse_json_with_limits(source, Limits::default())
}

pub fn parse_json_with_limits(source: impl AsRef<str>, limits: Limits) -> Result {
	let source = source.as_ref();
	let result = Parser::new(source, limits).parse_document();

	match &result {
		Ok(_) => debug!(len = source.len(), "parsed JSON document"),
		Err(error) => debug!(len = source.len(), %error, "failed to parse JSON document"),
	}

	result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
	index: usize,
	row: usize,
	column: usize,
}

struct Parser<'a> {
	source: &'a str,
	index: usize,
	row: usize,
	column: usize,
	depth: usize,
	limits: Limits,
}

impl<'a> Parser<'a> {
	fn new(source: &'a str, limits: Limits) -> Self {
		Parser {
			source,
			index: 0,
			row: 0,
			column: 0,
			depth: 0,
			limits,
		}
	}

	fn parse_document(&mut self) -> Result {
		let value = self.parse_value()?;
		self.skip_whitespace();

		match self.peek() {
			None => Ok(value),
			Some(char) => Err(self.error(ParseErrorCause::TrailingCharacters { char })),
		}
	}

	fn parse_value(&mut self) -> Result {
		self.skip_whitespace();

		match self.peek() {
			None => Err(self.error(ParseErrorCause::UnexpectedEndOfInput)),
			Some('{') => self.parse_object(),
			Some('[') => self.parse_array(),
			Some('"') => self.parse_string().map(Json::String),
			Some(char) if char == '-' || char.is_ascii_digit() => self.parse_number(),
			Some(char) => self
				.parse_literal()
				.ok_or_else(|| self.error(ParseErrorCause::UnexpectedToken { char })),
		}
	}

	fn parse_literal(&mut self) -> Option<Json> {
		if self.match_word("true") {
			Some(Json::Boolean(true))
		} else if self.match_word("false") {
			Some(Json::Boolean(false))
		} else if self.match_word("null") {
			Some(Json::Null)
		} else {
			None
		}
	}

	fn parse_object(&mut self) -> Result {
		self.enter()?;
		self.consume();
		self.skip_whitespace();

		let mut entries = Map::new();
		if self.peek() == Some('}') {
			self.consume();
			self.leave();
			return Ok(Json::Object(entries));
		}

		loop {
			let key_position = self.position();
			match self.peek() {
				None => return Err(self.error(ParseErrorCause::UnexpectedEndOfInput)),
				Some('"') => {}
				Some(char) => return Err(self.error(ParseErrorCause::ExpectedStringKey { char })),
			}
			let key = self.parse_string()?;

			self.skip_whitespace();
			self.expect_colon()?;
			let value = self.parse_value()?;

			match entries.entry(key) {
				Entry::Occupied(entry) => {
					let key = entry.key().clone();
					return Err(self.error_at(key_position, ParseErrorCause::DuplicateKey { key }));
				}
				Entry::Vacant(entry) => {
					entry.insert(value);
				}
			}

			if self.parse_separator('}', Container::Object)? {
				break;
			}
			self.skip_whitespace();
		}

		self.leave();
		Ok(Json::Object(entries))
	}

	fn parse_array(&mut self) -> Result {
		self.enter()?;
		self.consume();
		self.skip_whitespace();

		let mut items = Vec::new();
		if self.peek() == Some(']') {
			self.consume();
			self.leave();
			return Ok(Json::Array(items));
		}

		loop {
			items.push(self.parse_value()?);

			if self.parse_separator(']', Container::Array)? {
				break;
			}
		}

		self.leave();
		Ok(Json::Array(items))
	}

	/// Consumes either `,` or `terminator`, returning whether the container ended.
	fn parse_separator(&mut self, terminator: char, container: Container) -> Result<bool> {
		self.skip_whitespace();

		match self.peek() {
			None => Err(self.error(ParseErrorCause::UnexpectedEndOfInput)),
			Some(char) if char == terminator => {
				self.consume();
				Ok(true)
			}
			Some(',') => {
				self.consume();
				Ok(false)
			}
			Some(char) => Err(self.error(ParseErrorCause::ExpectedComma { char, container })),
		}
	}

	fn expect_colon(&mut self) -> Result<()> {
		match self.peek() {
			None => Err(self.error(ParseErrorCause::UnexpectedEndOfInput)),
			Some(':') => {
				self.consume();
				Ok(())
			}
			Some(char) => Err(self.error(ParseErrorCause::ExpectedColon { char })),
		}
	}

	fn parse_string(&mut self) -> Result<String> {
		self.consume();

		let mut string = String::new();
		loop {
			let position = self.position();
			match self.consume() {
				None => return Err(self.error(ParseErrorCause::UnexpectedEndOfInput)),
				Some('"') => return Ok(string),
				Some('\\') => string.push(self.parse_escape(position)?),
				Some(char) if char < '\u{20}' => {
					let code = u32::from(char);
					return Err(self.error_at(
						position,
						ParseErrorCause::UnescapedControlCharacter { code },
					));
				}
				Some(char) => string.push(char),
			}
		}
	}

	fn parse_escape(&mut self, backslash: Position) -> Result<char> {
		let position = self.position();

		match self.consume() {
			None => Err(self.error(ParseErrorCause::UnexpectedEndOfInput)),
			Some('"') => Ok('"'),
			Some('\\') => Ok('\\'),
			Some('/') => Ok('/'),
			Some('b') => Ok('\u{8}'),
			Some('f') => Ok('\u{c}'),
			Some('n') => Ok('\n'),
			Some('r') => Ok('\r'),
			Some('t') => Ok('\t'),
			Some('u') => self.parse_unicode_escape(backslash),
			Some(char) => Err(self.error_at(position, ParseErrorCause::InvalidEscape { char })),
		}
	}

	/// Decodes the hex digits of a `\u` escape, joining a surrogate pair when
	/// the high half is immediately followed by an escaped low half.
	fn parse_unicode_escape(&mut self, backslash: Position) -> Result<char> {
		let mut code = self.parse_hex_quad()?;

		if (0xD800..=0xDBFF).contains(&code) {
			let low_position = self.position();
			if !self.match_str("\\u") {
				return Err(self.error_at(backslash, ParseErrorCause::InvalidCodePoint { code }));
			}

			let low = self.parse_hex_quad()?;
			if !(0xDC00..=0xDFFF).contains(&low) {
				return Err(self.error_at(
					low_position,
					ParseErrorCause::InvalidCodePoint { code: low },
				));
			}

			code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
		}

		char::from_u32(code)
			.ok_or_else(|| self.error_at(backslash, ParseErrorCause::InvalidCodePoint { code }))
	}

	fn parse_hex_quad(&mut self) -> Result<u32> {
		let mut code = 0;

		for _ in 0..4 {
			let position = self.position();
			let char = self
				.consume()
				.ok_or_else(|| self.error(ParseErrorCause::UnexpectedEndOfInput))?;
			let digit = char
				.to_digit(16)
				.ok_or_else(|| self.error_at(position, ParseErrorCause::InvalidHexDigit { char }))?;

			code = code * 16 + digit;
		}

		Ok(code)
	}

	fn parse_number(&mut self) -> Result {
		let start = self.position();

		if self.peek() == Some('-') {
			self.consume();
		}

		match self.peek() {
			Some('0') => {
				self.consume();
				if self.peek().is_some_and(|char| char.is_ascii_digit()) {
					return Err(self.error_at(start, ParseErrorCause::LeadingZero));
				}
			}
			Some('1'..='9') => self.skip_digits(),
			_ => return Err(self.error(ParseErrorCause::MissingDigit { after: '-' })),
		}

		if self.peek() == Some('.') {
			self.consume();
			self.expect_digits('.')?;
		}

		if let Some(marker @ ('e' | 'E')) = self.peek() {
			self.consume();
			if let Some('+' | '-') = self.peek() {
				self.consume();
			}
			self.expect_digits(marker)?;
		}

		let lexeme = &self.source[start.index..self.index];
		match lexeme.parse::<f64>() {
			Ok(number) if number.is_finite() => Ok(Json::Number(number)),
			_ => Err(self.error_at(
				start,
				ParseErrorCause::NotANumber {
					lexeme: lexeme.to_owned(),
				},
			)),
		}
	}

	fn expect_digits(&mut self, after: char) -> Result<()> {
		if !self.peek().is_some_and(|char| char.is_ascii_digit()) {
			return Err(self.error(ParseErrorCause::MissingDigit { after }));
		}

		self.skip_digits();
		Ok(())
	}

	fn skip_digits(&mut self) {
		while self.peek().is_some_and(|char| char.is_ascii_digit()) {
			self.consume();
		}
	}

	fn enter(&mut self) -> Result<()> {
		self.depth += 1;
		trace!(depth = self.depth, offset = self.index, "entering container");

		if self.depth > self.limits.max_depth {
			return Err(self.error(ParseErrorCause::NestingTooDeep {
				max_depth: self.limits.max_depth,
			}));
		}

		Ok(())
	}

	fn leave(&mut self) {
		self.depth -= 1;
	}

	fn skip_whitespace(&mut self) {
		while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
			self.consume();
		}
	}

	fn peek(&self) -> Option<char> {
		self.source[self.index..].chars().next()
	}

	/// Matches a keyword that is not directly followed by another
	/// alphanumeric character. Restores the cursor on mismatch.
	fn match_word(&mut self, expected: &str) -> bool {
		let start = self.position();

		if self.match_str(expected) && !self.peek().is_some_and(char::is_alphanumeric) {
			return true;
		}

		self.restore(start);
		false
	}

	/// Consumes `expected` if the input continues with it. Restores the
	/// cursor on mismatch.
	fn match_str(&mut self, expected: &str) -> bool {
		let start = self.position();

		for expected in expected.chars() {
			if self.peek() != Some(expected) {
				self.restore(start);
				return false;
			}
			self.consume();
		}

		true
	}

	fn consume(&mut self) -> Option<char> {
		let peeked = self.peek()?;

		self.index += peeked.len_utf8();

		if peeked == '\n' {
			self.row += 1;
			self.column = 0;
		} else {
			self.column += 1;
		}

		Some(peeked)
	}

	fn position(&self) -> Position {
		Position {
			index: self.index,
			row: self.row,
			column: self.column,
		}
	}

	fn restore(&mut self, position: Position) {
		self.index = position.index;
		self.row = position.row;
		self.column = position.column;
	}

	fn error(&self, cause: ParseErrorCause) -> ParseError {
		self.error_at(self.position(), cause)
	}

	fn error_at(&self, position: Position, cause: ParseErrorCause) -> ParseError {
		ParseError {
			cause,
			row: position.row,
			column: position.column,
			offset: position.index,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(input: &str) -> Result {
		Parser::new(input, Limits::default()).parse_document()
	}

	fn parse_cause(input: &str) -> ParseErrorCause {
		parse(input).unwrap_err().cause
	}

	fn object(entries: &[(&str, Json)]) -> Json {
		Json::Object(
			entries
				.iter()
				.map(|(key, value)| ((*key).to_owned(), value.clone()))
				.collect(),
		)
	}

	mod literal_value {
		use super::*;
		use test_case::test_case;

		#[test]
		fn test_parse_false() {
			test_parse_literal_value(Json::Boolean(false), "false");
		}

		#[test]
		fn test_parse_true() {
			test_parse_literal_value(Json::Boolean(true), "true");
		}

		#[test]
		fn test_parse_null() {
			test_parse_literal_value(Json::Null, "null");
		}

		fn test_parse_literal_value(expected: Json, input: &str) {
			let mut parser = Parser::new(input, Limits::default());
			assert_eq!(parser.parse_value(), Ok(expected));
			assert_eq!(parser.row, 0);
			assert_eq!(parser.column, input.len());
			assert_eq!(parser.index, input.len());
		}

		#[test_case("tru", 't'; "truncated true")]
		#[test_case("nul", 'n'; "truncated null")]
		#[test_case("True", 'T'; "wrong case")]
		#[test_case("truex", 't'; "not a whole word")]
		#[test_case("nothing", 'n'; "diverges after first letter")]
		fn test_partial_match_is_unexpected_token(input: &str, char: char) {
			let error = parse(input).unwrap_err();
			assert_eq!(error.cause, ParseErrorCause::UnexpectedToken { char });
			assert_eq!((error.row, error.column, error.offset), (0, 0, 0));
		}

		#[test]
		fn test_partial_match_restores_cursor() {
			let mut parser = Parser::new("fals", Limits::default());
			assert_eq!(parser.parse_literal(), None);
			assert_eq!(parser.index, 0);
			assert_eq!(parser.column, 0);
		}
	}

	mod number {
		use super::*;
		use test_case::test_case;

		#[test_case("0", 0.0; "zero")]
		#[test_case("-0", -0.0; "negative zero")]
		#[test_case("0.5", 0.5; "fraction")]
		#[test_case("-12.75", -12.75; "negative fraction")]
		#[test_case("123456789", 123_456_789.0; "integer")]
		#[test_case("1e3", 1000.0; "exponent")]
		#[test_case("1E+2", 100.0; "signed upper exponent")]
		#[test_case("2.5e-3", 0.0025; "negative exponent")]
		#[test_case("0e0", 0.0; "zero exponent")]
		fn test_parse_number(input: &str, expected: f64) {
			assert_eq!(parse(input), Ok(Json::Number(expected)));
		}

		#[test]
		fn test_negative_zero_keeps_sign() {
			let number = parse("-0").unwrap().as_f64().unwrap();
			assert!(number.is_sign_negative());
		}

		#[test_case("01", ParseErrorCause::LeadingZero; "leading zero")]
		#[test_case("-01", ParseErrorCause::LeadingZero; "negative leading zero")]
		#[test_case("00.5", ParseErrorCause::LeadingZero; "leading zero before fraction")]
		#[test_case("1.", ParseErrorCause::MissingDigit { after: '.' }; "dot at end")]
		#[test_case("1.e5", ParseErrorCause::MissingDigit { after: '.' }; "dot before exponent")]
		#[test_case("1e", ParseErrorCause::MissingDigit { after: 'e' }; "exponent at end")]
		#[test_case("1E+", ParseErrorCause::MissingDigit { after: 'E' }; "signed exponent at end")]
		#[test_case("-", ParseErrorCause::MissingDigit { after: '-' }; "lone minus")]
		#[test_case("-x", ParseErrorCause::MissingDigit { after: '-' }; "minus before letter")]
		#[test_case(".5", ParseErrorCause::UnexpectedToken { char: '.' }; "leading dot")]
		#[test_case("+1", ParseErrorCause::UnexpectedToken { char: '+' }; "leading plus")]
		fn test_reject_malformed_number(input: &str, expected: ParseErrorCause) {
			assert_eq!(parse_cause(input), expected);
		}

		#[test]
		fn test_overflow_is_not_a_number() {
			let error = parse("[1e400]").unwrap_err();
			assert_eq!(
				error.cause,
				ParseErrorCause::NotANumber {
					lexeme: "1e400".to_owned()
				}
			);
			assert_eq!(error.column, 1);
		}

		#[test]
		fn test_missing_digit_points_past_marker() {
			let error = parse("1.").unwrap_err();
			assert_eq!((error.row, error.column, error.offset), (0, 2, 2));
		}
	}

	mod string {
		use super::*;
		use test_case::test_case;

		#[test_case(r#""""#, ""; "empty")]
		#[test_case(r#""plain""#, "plain"; "plain")]
		#[test_case(r#""\n""#, "\n"; "newline")]
		#[test_case(r#""\u0041""#, "A"; "unicode escape")]
		#[test_case(r#""\"\\\/\b\f\n\r\t""#, "\"\\/\u{8}\u{c}\n\r\t"; "short escapes")]
		#[test_case(r#""\u00e9\u00E9""#, "éé"; "hex digits in either case")]
		#[test_case(r#""\ud83d\ude00""#, "😀"; "surrogate pair")]
		#[test_case(r#""héllo wörld""#, "héllo wörld"; "non ascii")]
		fn test_parse_string(input: &str, expected: &str) {
			assert_eq!(parse(input), Ok(Json::String(expected.to_owned())));
		}

		#[test]
		fn test_escaped_newline_is_one_character() {
			let value = parse(r#""\n""#).unwrap();
			assert_eq!(value.as_str().map(|s| s.chars().count()), Some(1));
		}

		#[test_case(r#""\x""#, ParseErrorCause::InvalidEscape { char: 'x' }; "unknown escape")]
		#[test_case(r#""\u12g4""#, ParseErrorCause::InvalidHexDigit { char: 'g' }; "non hex digit")]
		#[test_case(r#""\ud83d""#, ParseErrorCause::InvalidCodePoint { code: 0xD83D }; "lone high surrogate")]
		#[test_case(r#""\ude00""#, ParseErrorCause::InvalidCodePoint { code: 0xDE00 }; "lone low surrogate")]
		#[test_case(r#""\ud83d\u0041""#, ParseErrorCause::InvalidCodePoint { code: 0x0041 }; "high surrogate without low")]
		#[test_case("\"abc", ParseErrorCause::UnexpectedEndOfInput; "unterminated")]
		#[test_case("\"ab\\", ParseErrorCause::UnexpectedEndOfInput; "unterminated escape")]
		#[test_case("\"\\u12", ParseErrorCause::UnexpectedEndOfInput; "unterminated unicode escape")]
		#[test_case("\"a\nb\"", ParseErrorCause::UnescapedControlCharacter { code: 0x0A }; "raw newline")]
		#[test_case("\"\u{0}\"", ParseErrorCause::UnescapedControlCharacter { code: 0 }; "raw nul")]
		fn test_reject_malformed_string(input: &str, expected: ParseErrorCause) {
			assert_eq!(parse_cause(input), expected);
		}

		#[test]
		fn test_invalid_escape_position() {
			let error = parse(r#""ab\q""#).unwrap_err();
			assert_eq!(error.cause, ParseErrorCause::InvalidEscape { char: 'q' });
			assert_eq!((error.row, error.column, error.offset), (0, 4, 4));
		}

		#[test]
		fn test_columns_count_characters() {
			let error = parse("\"é\\q\"").unwrap_err();
			assert_eq!(error.column, 3);
			assert_eq!(error.offset, 4);
		}
	}

	mod array {
		use super::*;
		use test_case::test_case;

		#[test_case("[]", vec![]; "empty")]
		#[test_case("[ \n ]", vec![]; "empty with whitespace")]
		#[test_case("[1, 2 ,3]", vec![Json::Number(1.0), Json::Number(2.0), Json::Number(3.0)]; "numbers")]
		#[test_case(r#"["a",true,null]"#, vec![Json::from("a"), Json::Boolean(true), Json::Null]; "mixed")]
		#[test_case("[[],[[]]]", vec![Json::Array(vec![]), Json::Array(vec![Json::Array(vec![])])]; "nested")]
		fn test_parse_array(input: &str, expected: Vec<Json>) {
			assert_eq!(parse(input), Ok(Json::Array(expected)));
		}

		#[test]
		fn test_missing_comma() {
			let error = parse("[1 2]").unwrap_err();
			assert_eq!(
				error.cause,
				ParseErrorCause::ExpectedComma {
					char: '2',
					container: Container::Array
				}
			);
			assert_eq!(error.column, 3);
		}

		#[test_case("["; "open bracket")]
		#[test_case("[1"; "after element")]
		#[test_case("[1,"; "after comma")]
		#[test_case("[1, "; "after whitespace")]
		fn test_truncated_array(input: &str) {
			assert_eq!(parse_cause(input), ParseErrorCause::UnexpectedEndOfInput);
		}

		#[test]
		fn test_trailing_comma_is_rejected() {
			assert_eq!(parse_cause("[1,]"), ParseErrorCause::UnexpectedToken { char: ']' });
		}
	}

	mod object {
		use super::*;
		use test_case::test_case;

		#[test]
		fn test_parse_empty_object() {
			assert_eq!(parse("{}"), Ok(Json::Object(Map::new())));
			assert_eq!(parse("{ \t}"), Ok(Json::Object(Map::new())));
		}

		#[test]
		fn test_parse_nested_object() {
			let expected = object(&[
				("a", Json::Number(1.0)),
				(
					"b",
					object(&[("c", Json::Array(vec![Json::from("x"), Json::Null]))]),
				),
			]);
			assert_eq!(parse(r#" { "a" : 1 , "b":{"c":["x",null]} } "#), Ok(expected));
		}

		#[test]
		fn test_keys_keep_source_order() {
			let value = parse(r#"{"b":1,"a":2,"c":3}"#).unwrap();
			let keys: Vec<_> = value.as_object().unwrap().keys().map(String::as_str).collect();
			assert_eq!(keys, ["b", "a", "c"]);
		}

		#[test]
		fn test_duplicate_key() {
			let error = parse(r#"{"a":1,"a":2}"#).unwrap_err();
			assert_eq!(
				error.cause,
				ParseErrorCause::DuplicateKey {
					key: "a".to_owned()
				}
			);
			assert_eq!((error.row, error.column, error.offset), (0, 7, 7));
		}

		#[test]
		fn test_escaped_duplicate_key() {
			assert_eq!(
				parse_cause(r#"{"\u0041":1,"A":2}"#),
				ParseErrorCause::DuplicateKey {
					key: "A".to_owned()
				}
			);
		}

		#[test_case("{1:2}", ParseErrorCause::ExpectedStringKey { char: '1' }; "number key")]
		#[test_case(r#"{"a":1,}"#, ParseErrorCause::ExpectedStringKey { char: '}' }; "trailing comma")]
		#[test_case(r#"{"a" 1}"#, ParseErrorCause::ExpectedColon { char: '1' }; "missing colon")]
		#[test_case(
			r#"{"a":1 "b":2}"#,
			ParseErrorCause::ExpectedComma { char: '"', container: Container::Object };
			"missing comma"
		)]
		fn test_reject_malformed_object(input: &str, expected: ParseErrorCause) {
			assert_eq!(parse_cause(input), expected);
		}

		#[test_case("{"; "open brace")]
		#[test_case(r#"{"a""#; "after key")]
		#[test_case(r#"{"a":"#; "after colon")]
		#[test_case(r#"{"a":1"#; "after value")]
		#[test_case(r#"{"a":1,"#; "after comma")]
		fn test_truncated_object(input: &str) {
			assert_eq!(parse_cause(input), ParseErrorCause::UnexpectedEndOfInput);
		}
	}

	mod document {
		use super::*;
		use test_case::test_case;

		#[test]
		fn test_surrounding_whitespace() {
			assert_eq!(parse("  \n\t true \r\n"), Ok(Json::Boolean(true)));
		}

		#[test_case(""; "empty")]
		#[test_case(" \n "; "only whitespace")]
		fn test_empty_document(input: &str) {
			assert_eq!(parse_cause(input), ParseErrorCause::UnexpectedEndOfInput);
		}

		#[test]
		fn test_trailing_characters() {
			let error = parse("true false").unwrap_err();
			assert_eq!(error.cause, ParseErrorCause::TrailingCharacters { char: 'f' });
			assert_eq!(error.column, 5);
		}

		#[test]
		fn test_error_position_tracks_rows() {
			let error = parse("[\n  1,\n  x]").unwrap_err();
			assert_eq!(error.cause, ParseErrorCause::UnexpectedToken { char: 'x' });
			assert_eq!((error.row, error.column), (2, 2));
			assert_eq!(error.to_string(), "3:3 Unexpected token: 'x'");
		}

		#[test]
		fn test_depth_limit() {
			let limits = Limits::default().with_max_depth(2);
			assert!(parse_json_with_limits("[[1]]", limits).is_ok());
			assert!(parse_json_with_limits(r#"{"a":[1]}"#, limits).is_ok());

			let error = parse_json_with_limits("[[[1]]]", limits).unwrap_err();
			assert_eq!(error.cause, ParseErrorCause::NestingTooDeep { max_depth: 2 });
			assert_eq!(error.column, 2);
		}

		#[test]
		fn test_deep_nesting_fails_without_overflowing() {
			let input = "[".repeat(100_000);
			assert_eq!(
				parse_cause(&input),
				ParseErrorCause::NestingTooDeep {
					max_depth: crate::limits::DEFAULT_MAX_DEPTH
				}
			);
		}

		#[test]
		fn test_sibling_containers_do_not_accumulate_depth() {
			let limits = Limits::default().with_max_depth(1);
			assert!(parse_json_with_limits("[]", limits).is_ok());
			assert!(parse_json_with_limits(r#"{"a":1,"b":2}"#, limits).is_ok());
			assert!(parse_json_with_limits("[[],[]]", limits).is_err());
		}
	}
}
