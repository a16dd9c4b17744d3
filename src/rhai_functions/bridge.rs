//! Conversions between Rhai values and the byte-oriented text model.
//!
//! Script strings are Unicode, the library works on 8-bit character codes.
//! The two meet as Latin-1: each char in `U+0000..=U+00FF` is one byte and
//! every byte maps back to the char with the same code. Chars outside that
//! range have no byte and are replaced by `?`.

use rhai::{Array, Dynamic, EvalAltResult, ImmutableString, Position, INT};
use std::any::TypeId;

const UNMAPPABLE: u8 = b'?';

pub fn text_from_script(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(c).unwrap_or(UNMAPPABLE))
        .collect()
}

pub fn text_to_script(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parameter and return types a registered function can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    Text,
    Int,
    Bool,
    TextArray,
    IntArray,
}

impl ScriptType {
    /// Rhai dispatches raw functions on the `TypeId` of each argument.
    pub fn type_id(self) -> TypeId {
        match self {
            ScriptType::Text => TypeId::of::<ImmutableString>(),
            ScriptType::Int => TypeId::of::<INT>(),
            ScriptType::Bool => TypeId::of::<bool>(),
            ScriptType::TextArray | ScriptType::IntArray => TypeId::of::<Array>(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScriptType::Text => "String",
            ScriptType::Int => "Int",
            ScriptType::Bool => "Bool",
            ScriptType::TextArray => "String[]",
            ScriptType::IntArray => "Int[]",
        }
    }

    /// Converts one call argument. Non-string array elements become absent,
    /// non-integer ordinals are dropped.
    pub fn extract(self, arg: &Dynamic) -> Result<ScriptValue, Box<EvalAltResult>> {
        let mismatch = |actual: &str| -> Box<EvalAltResult> {
            EvalAltResult::ErrorMismatchDataType(
                self.name().to_string(),
                actual.to_string(),
                Position::NONE,
            )
            .into()
        };

        let value = match self {
            ScriptType::Text => {
                let text = arg.clone().into_immutable_string().map_err(mismatch)?;
                ScriptValue::Text(text_from_script(&text))
            }
            ScriptType::Int => ScriptValue::Int(arg.as_int().map_err(mismatch)?),
            ScriptType::Bool => ScriptValue::Bool(arg.as_bool().map_err(mismatch)?),
            ScriptType::TextArray => {
                let items = arg.clone().into_array().map_err(mismatch)?;
                ScriptValue::TextArray(
                    items
                        .into_iter()
                        .map(|item| {
                            item.into_immutable_string()
                                .ok()
                                .map(|s| text_from_script(&s))
                        })
                        .collect(),
                )
            }
            ScriptType::IntArray => {
                let items = arg.clone().into_array().map_err(mismatch)?;
                ScriptValue::IntArray(items.iter().filter_map(|item| item.as_int().ok()).collect())
            }
        };
        Ok(value)
    }
}

/// A call argument or return value after conversion out of Rhai.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptValue {
    Text(Vec<u8>),
    Int(i64),
    Bool(bool),
    TextArray(Vec<Option<Vec<u8>>>),
    IntArray(Vec<i64>),
}

impl ScriptValue {
    pub fn script_type(&self) -> ScriptType {
        match self {
            ScriptValue::Text(_) => ScriptType::Text,
            ScriptValue::Int(_) => ScriptType::Int,
            ScriptValue::Bool(_) => ScriptType::Bool,
            ScriptValue::TextArray(_) => ScriptType::TextArray,
            ScriptValue::IntArray(_) => ScriptType::IntArray,
        }
    }

    pub fn into_dynamic(self) -> Dynamic {
        match self {
            ScriptValue::Text(bytes) => Dynamic::from(text_to_script(&bytes)),
            ScriptValue::Int(n) => Dynamic::from(n),
            ScriptValue::Bool(b) => Dynamic::from(b),
            ScriptValue::TextArray(parts) => Dynamic::from_array(
                parts
                    .into_iter()
                    .map(|part| match part {
                        Some(bytes) => Dynamic::from(text_to_script(&bytes)),
                        None => Dynamic::UNIT,
                    })
                    .collect(),
            ),
            ScriptValue::IntArray(values) => {
                Dynamic::from_array(values.into_iter().map(Dynamic::from).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_mapping() {
        assert_eq!(text_from_script("abc"), b"abc");
        assert_eq!(text_from_script("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(text_from_script("\u{263a}x"), b"?x");
        assert_eq!(text_to_script(&[b'A', 0xFF]), "A\u{ff}");
        assert_eq!(text_to_script(b""), "");
    }

    #[test]
    fn test_extract_text_array_marks_non_strings_absent() {
        let arr: Array = vec![Dynamic::from("a"), Dynamic::UNIT, Dynamic::from(3_i64)];
        let value = ScriptType::TextArray.extract(&Dynamic::from_array(arr)).unwrap();
        assert_eq!(value, ScriptValue::TextArray(vec![Some(b"a".to_vec()), None, None]));
    }

    #[test]
    fn test_extract_int_array_drops_non_integers() {
        let arr: Array = vec![Dynamic::from(72_i64), Dynamic::from("x"), Dynamic::from(105_i64)];
        let value = ScriptType::IntArray.extract(&Dynamic::from_array(arr)).unwrap();
        assert_eq!(value, ScriptValue::IntArray(vec![72, 105]));
    }

    #[test]
    fn test_extract_reports_mismatch() {
        assert!(ScriptType::Int.extract(&Dynamic::from("nope")).is_err());
    }

    #[test]
    fn test_into_dynamic_round_trips_text() {
        let dynamic = ScriptValue::Text(vec![0xE9]).into_dynamic();
        assert_eq!(dynamic.into_string().unwrap(), "\u{e9}");
    }
}
