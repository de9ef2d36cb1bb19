// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Any value handed to a style is first converted to its canonical textual form. The
//! rules mirror the loosely typed hosts this crate is used with:
//!
//! | Value                  | Text                                  |
//! |------------------------|---------------------------------------|
//! | `"foo"`                | `foo`                                 |
//! | `42`, `-7`             | `42`, `-7`                            |
//! | `1.0`, `0.5`           | `1`, `0.5`                            |
//! | `f64::INFINITY`        | `Infinity`                            |
//! | `true`                 | `true`                                |
//! | `None` / JSON `null`   | `null`                                |
//! | `vec![1, 2, 3]`        | `1,2,3` (nested lists flatten)        |
//! | `vec![None, Some(1)]`  | `,1` (null list items are empty)      |
//! | JSON object            | [`KolorError::InvalidInputType`]      |

use std::fmt::Write as _;

use crate::{KolorError, KolorResult};

#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Integer(i128),
    Float(f64),
    Bool(bool),
    Char(char),
    Null,
    List(Vec<StyleValue>),
    /// A value with no meaningful textual form.
    Unsupported { type_name: &'static str },
}

pub const LIST_SEPARATOR: char = ',';

impl StyleValue {
    /// Convert to the canonical textual form.
    ///
    /// # Errors
    ///
    /// Returns [`KolorError::InvalidInputType`] if this is (or a list contains) a
    /// [`StyleValue::Unsupported`] value.
    pub fn try_into_text(&self) -> KolorResult<String> {
        let mut acc = String::new();
        self.write_text(&mut acc, false)?;
        Ok(acc)
    }

    fn write_text(&self, acc: &mut String, in_list: bool) -> KolorResult<()> {
        match self {
            StyleValue::Text(it) => acc.push_str(it),
            StyleValue::Integer(it) => {
                _ = write!(acc, "{it}");
            }
            StyleValue::Float(it) => write_float(acc, *it),
            StyleValue::Bool(it) => {
                _ = write!(acc, "{it}");
            }
            StyleValue::Char(it) => acc.push(*it),
            StyleValue::Null => {
                if !in_list {
                    acc.push_str("null");
                }
            }
            StyleValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        acc.push(LIST_SEPARATOR);
                    }
                    item.write_text(acc, true)?;
                }
            }
            StyleValue::Unsupported { type_name } => {
                return Err(KolorError::InvalidInputType { type_name });
            }
        }
        Ok(())
    }
}

fn write_float(acc: &mut String, value: f64) {
    if value.is_nan() {
        acc.push_str("NaN");
    } else if value.is_infinite() {
        acc.push_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    } else if value == 0.0 {
        // Negative zero prints as `0`.
        acc.push('0');
    } else {
        _ = write!(acc, "{value}");
    }
}

mod convert_into_style_value {
    use super::StyleValue;

    impl From<&str> for StyleValue {
        fn from(value: &str) -> Self { StyleValue::Text(value.to_owned()) }
    }

    impl From<String> for StyleValue {
        fn from(value: String) -> Self { StyleValue::Text(value) }
    }

    impl From<&String> for StyleValue {
        fn from(value: &String) -> Self { StyleValue::Text(value.clone()) }
    }

    impl From<char> for StyleValue {
        fn from(value: char) -> Self { StyleValue::Char(value) }
    }

    impl From<bool> for StyleValue {
        fn from(value: bool) -> Self { StyleValue::Bool(value) }
    }

    macro_rules! from_integer {
        ($($ty:ty),*) => {
            $(
                impl From<$ty> for StyleValue {
                    fn from(value: $ty) -> Self { StyleValue::Integer(i128::from(value)) }
                }
            )*
        };
    }

    from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

    impl From<isize> for StyleValue {
        fn from(value: isize) -> Self { StyleValue::Integer(value as i128) }
    }

    impl From<usize> for StyleValue {
        fn from(value: usize) -> Self { StyleValue::Integer(value as i128) }
    }

    impl From<f32> for StyleValue {
        fn from(value: f32) -> Self { StyleValue::Float(f64::from(value)) }
    }

    impl From<f64> for StyleValue {
        fn from(value: f64) -> Self { StyleValue::Float(value) }
    }

    impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
        fn from(value: Option<T>) -> Self {
            match value {
                Some(it) => it.into(),
                None => StyleValue::Null,
            }
        }
    }

    impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
        fn from(value: Vec<T>) -> Self {
            StyleValue::List(value.into_iter().map(Into::into).collect())
        }
    }

    impl<T: Into<StyleValue> + Clone> From<&[T]> for StyleValue {
        fn from(value: &[T]) -> Self {
            StyleValue::List(value.iter().cloned().map(Into::into).collect())
        }
    }

    impl<T: Into<StyleValue>, const N: usize> From<[T; N]> for StyleValue {
        fn from(value: [T; N]) -> Self {
            StyleValue::List(value.into_iter().map(Into::into).collect())
        }
    }

    impl From<serde_json::Value> for StyleValue {
        fn from(value: serde_json::Value) -> Self {
            use serde_json::Value;
            match value {
                Value::Null => StyleValue::Null,
                Value::Bool(it) => StyleValue::Bool(it),
                Value::Number(it) => {
                    if let Some(int) = it.as_i64() {
                        StyleValue::Integer(i128::from(int))
                    } else if let Some(uint) = it.as_u64() {
                        StyleValue::Integer(i128::from(uint))
                    } else {
                        it.as_f64().map_or(
                            StyleValue::Unsupported {
                                type_name: "number",
                            },
                            StyleValue::Float,
                        )
                    }
                }
                Value::String(it) => StyleValue::Text(it),
                Value::Array(items) => {
                    StyleValue::List(items.into_iter().map(StyleValue::from).collect())
                }
                Value::Object(_) => StyleValue::Unsupported { type_name: "object" },
            }
        }
    }
}
