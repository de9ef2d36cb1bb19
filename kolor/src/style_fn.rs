// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crate::{ColorSupport, InlineCode, KolorResult, StyleEntry, StyleValue};

/// A style bound to its SGR codes and to the color support decision it was built with.
/// It holds no other state, so it can be shared and called from any thread.
///
/// When colors are enabled, the value is wrapped as `OPEN + text + CLOSE`. Every
/// occurrence of `CLOSE` already inside the text is replaced with `OPEN` first: an inner
/// style from the same family (eg: all foreground colors close with `39`) would otherwise
/// end this style early. `reset` is the exception, it only prepends `ESC[0m`.
///
/// Wrapping is not idempotent. Styling an already styled value nests another layer.
///
/// ```rust
/// use r3bl_kolor::{ColorSupport, StyleEntry, StyleFn};
///
/// let red = StyleFn::new("red", StyleEntry::new(31, 39), ColorSupport::Colors);
/// let blue = StyleFn::new("blue", StyleEntry::new(34, 39), ColorSupport::Colors);
///
/// assert_eq!(red.name(), "red");
/// assert_eq!(
///     red.paint(format!("a{}b", blue.paint("x"))),
///     "\x1b[31ma\x1b[34mx\x1b[31mb\x1b[39m"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFn {
    name: &'static str,
    entry: StyleEntry,
    color_support: ColorSupport,
    open: InlineCode,
    close: InlineCode,
}

impl StyleFn {
    #[must_use]
    pub fn new(name: &'static str, entry: StyleEntry, color_support: ColorSupport) -> Self {
        Self {
            name,
            entry,
            color_support,
            open: entry.start.to_small_str(),
            close: entry.end.to_small_str(),
        }
    }

    /// The registry key this function was built for. Aliases share the function, so
    /// this is always the canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str { self.name }

    #[must_use]
    pub fn entry(&self) -> StyleEntry { self.entry }

    #[must_use]
    pub fn color_support(&self) -> ColorSupport { self.color_support }

    /// Style anything with a [Display] implementation.
    pub fn paint(&self, value: impl Display) -> String { self.wrap(&value.to_string()) }

    /// Style any value that converts to a [`StyleValue`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::KolorError::InvalidInputType`] if the value has no textual form.
    pub fn apply(&self, value: impl Into<StyleValue>) -> KolorResult<String> {
        let text = value.into().try_into_text()?;
        Ok(self.wrap(&text))
    }

    /// The Sequence Wrapper.
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        if !self.color_support.is_enabled() {
            return text.to_owned();
        }

        let open = self.open.as_str();

        if self.entry.is_reset() {
            let mut acc = String::with_capacity(open.len() + text.len());
            acc.push_str(open);
            acc.push_str(text);
            return acc;
        }

        let close = self.close.as_str();
        let mut acc = String::with_capacity(open.len() * 2 + text.len() + close.len());
        acc.push_str(open);
        acc.push_str(&text.replace(close, open));
        acc.push_str(close);
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KolorError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn style_fn(name: &'static str, start: u8, end: u8, enabled: bool) -> StyleFn {
        StyleFn::new(name, StyleEntry::new(start, end), ColorSupport::from(enabled))
    }

    #[test]
    fn test_wrap_enabled() {
        let red = style_fn("red", 31, 39, true);
        assert_eq!(red.paint("foo"), "\x1b[31mfoo\x1b[39m");
        assert_eq!(red.paint(""), "\x1b[31m\x1b[39m");

        let bg_magenta = style_fn("bgMagenta", 45, 49, true);
        assert_eq!(bg_magenta.paint(""), "\x1b[45m\x1b[49m");
    }

    #[test]
    fn test_wrap_disabled_is_identity() {
        let red = style_fn("red", 31, 39, false);
        assert_eq!(red.paint("foo"), "foo");
        assert_eq!(red.paint(12.5), "12.5");

        // Already styled text passes through untouched.
        let styled = "\x1b[34mx\x1b[39m";
        assert_eq!(red.paint(styled), styled);
        assert_eq!(red.paint(red.paint(styled)), styled);

        let reset = style_fn("reset", 0, 0, false);
        assert_eq!(reset.paint("foo"), "foo");
    }

    #[test]
    fn test_reset_only_prepends() {
        let reset = style_fn("reset", 0, 0, true);
        assert_eq!(reset.paint(""), "\x1b[0m");
        assert_eq!(reset.paint("foo"), "\x1b[0mfoo");

        let bold = style_fn("bold", 1, 22, true);
        assert_eq!(
            reset.paint(bold.paint("foo")),
            "\x1b[0m\x1b[1mfoo\x1b[22m"
        );
    }

    #[test]
    fn test_nested_same_family_reasserts_outer() {
        let red = style_fn("red", 31, 39, true);
        let blue = style_fn("blue", 34, 39, true);
        assert_eq!(
            red.paint(blue.paint("x")),
            "\x1b[31m\x1b[34mx\x1b[31m\x1b[39m"
        );
    }

    #[test]
    fn test_every_inner_close_is_replaced() {
        let red = style_fn("red", 31, 39, true);
        let blue = style_fn("blue", 34, 39, true);
        let green = style_fn("green", 32, 39, true);
        let inner = format!("{} and {}", blue.paint("a"), green.paint("b"));
        assert_eq!(
            red.paint(inner),
            "\x1b[31m\x1b[34ma\x1b[31m and \x1b[32mb\x1b[31m\x1b[39m"
        );
    }

    #[test]
    fn test_different_family_is_left_alone() {
        let red = style_fn("red", 31, 39, true);
        let bold = style_fn("bold", 1, 22, true);
        assert_eq!(
            red.paint(bold.paint("x")),
            "\x1b[31m\x1b[1mx\x1b[22m\x1b[39m"
        );
    }

    #[test]
    fn test_not_idempotent_when_enabled() {
        let red = style_fn("red", 31, 39, true);
        let once = red.paint("x");
        let twice = red.paint(&once);
        assert_eq!(twice, "\x1b[31m\x1b[31mx\x1b[31m\x1b[39m");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_apply_converts_values() {
        let bold = style_fn("bold", 1, 22, true);
        assert_eq!(bold.apply(42).unwrap(), "\x1b[1m42\x1b[22m");
        assert_eq!(bold.apply(true).unwrap(), "\x1b[1mtrue\x1b[22m");
        assert_eq!(bold.apply(vec!["a", "b"]).unwrap(), "\x1b[1ma,b\x1b[22m");
        assert_eq!(bold.apply(None::<&str>).unwrap(), "\x1b[1mnull\x1b[22m");
    }

    #[test]
    fn test_apply_invalid_input_type() {
        for enabled in [true, false] {
            let bold = style_fn("bold", 1, 22, enabled);
            assert_eq!(
                bold.apply(json!({"not": "text"})),
                Err(KolorError::InvalidInputType {
                    type_name: "object"
                })
            );
        }
    }

    #[test]
    fn test_accessors() {
        let italic = style_fn("italic", 3, 23, false);
        assert_eq!(italic.name(), "italic");
        assert_eq!(italic.entry(), StyleEntry::new(3, 23));
        assert_eq!(italic.color_support(), ColorSupport::NoColor);
    }
}
