// Copyright (C) 2024 RME contributors
//
// This file is part of RME.
//
// RME is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// RME is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with RME.  If not, see <http://www.gnu.org/licenses/>.


//! Turns command line words into script values.
//!
//! Arguments are RON (`3`, `-1.5`, `"sky"`, `[[0, 0], [4, 0], [0, 4]]`, `true`, `()`), except
//! that a bare word or a `:word` becomes a symbol, the way a script would write `:mouse_left`.

use rme_data::Value;
use rme_result::{Error, Result};

pub fn parse_all<S: AsRef<str>>(words: &[S]) -> Result<Vec<Value>> {
    words.iter().map(|word| parse(word.as_ref())).collect()
}

pub fn parse(word: &str) -> Result<Value> {
    let word = word.trim();

    if let Some(symbol) = word.strip_prefix(':') {
        if is_identifier(symbol) {
            return Ok(Value::symbol(symbol));
        }
    }
    match word {
        "nil" => return Ok(Value::Nil),
        "true" | "false" => {}
        _ if is_identifier(word) => return Ok(Value::symbol(word)),
        _ => {}
    }

    let value = ron::from_str::<ron::Value>(word)
        .map_err(|error| Error::InvalidArgument(format!("`{word}` ({error})")))?;
    convert(value).ok_or_else(|| Error::InvalidArgument(format!("`{word}`")))
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '?' || c == '!')
}

fn convert(value: ron::Value) -> Option<Value> {
    Some(match value {
        ron::Value::Unit | ron::Value::Option(None) => Value::Nil,
        ron::Value::Option(Some(value)) => return convert(*value),
        ron::Value::Bool(v) => Value::Bool(v),
        ron::Value::Number(ron::Number::Integer(v)) => Value::Integer(v),
        ron::Value::Number(ron::Number::Float(v)) => Value::Float(v.get()),
        ron::Value::Char(c) => Value::String(c.to_string()),
        ron::Value::String(v) => Value::String(v),
        ron::Value::Seq(values) => Value::Array(
            values
                .into_iter()
                .map(convert)
                .collect::<Option<Vec<_>>>()?,
        ),
        ron::Value::Map(_) => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars() {
        assert_eq!(parse("-1").ok(), Some(Value::Integer(-1)));
        assert_eq!(parse("2.5").ok(), Some(Value::Float(2.5)));
        assert_eq!(parse("true").ok(), Some(Value::Bool(true)));
        assert_eq!(parse("nil").ok(), Some(Value::Nil));
        assert_eq!(parse("()").ok(), Some(Value::Nil));
        assert_eq!(parse("\"sky\"").ok(), Some(Value::from("sky")));
    }

    #[test]
    fn words_become_symbols() {
        assert_eq!(parse("mouse_right").ok(), Some(Value::symbol("mouse_right")));
        assert_eq!(parse(":mouse_left").ok(), Some(Value::symbol("mouse_left")));
    }

    #[test]
    fn nested_lists() {
        assert_eq!(
            parse("[[0, 0], [4, 0], [0, 4]]").ok(),
            Some(Value::Array(vec![
                Value::from([0, 0]),
                Value::from([4, 0]),
                Value::from([0, 4])
            ]))
        );
    }

    #[test]
    fn maps_and_garbage_are_refused() {
        assert!(parse("{1: 2}").is_err());
        assert!(parse("[1,").is_err());
        assert!(parse_all(&["1", "[1,"]).is_err());
    }
}
