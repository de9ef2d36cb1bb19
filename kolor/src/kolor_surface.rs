// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The public surface, assembled once from the registries:
//!
//! ```text
//! Kolor
//! ├── colors()              COLORS + aliases
//! ├── modifiers()
//! │   ├── safe()            MODIFIERS_SAFE + aliases
//! │   └── other()           MODIFIERS_OTHER + aliases
//! ├── get() / try_get()     colors + safe modifiers, flat
//! └── unsafe_styles()       other modifiers, not universally supported
//! ```
//!
//! Every name in every group is bound to a function from the same three
//! [`crate::StyleMap::build`] calls, so the same style reached through different groups
//! or aliases is the identical [`StyleFn`].

use std::sync::{Arc, LazyLock};

use crate::{COLORS, ColorSupport, KolorResult, MODIFIERS_OTHER, MODIFIERS_SAFE, StyleFn,
            StyleMap, global_color_support};

#[derive(Debug, Clone)]
pub struct Kolor {
    color_support: ColorSupport,
    colors: StyleMap,
    modifiers: Modifiers,
    root: StyleMap,
}

/// Text attributes, grouped by how widely consoles support them.
#[derive(Debug, Clone)]
pub struct Modifiers {
    safe: StyleMap,
    other: StyleMap,
}

impl Modifiers {
    /// Reset, bold, underline, inverse. These work fine across most platforms and
    /// consoles.
    #[must_use]
    pub fn safe(&self) -> &StyleMap { &self.safe }

    /// Dim, italic, blink, hidden, strikethrough, etc. Some consoles (eg: `cmd.exe`)
    /// ignore these.
    #[must_use]
    pub fn other(&self) -> &StyleMap { &self.other }
}

impl Kolor {
    /// Build every registry using an already resolved color support decision.
    #[must_use]
    pub fn new(color_support: ColorSupport) -> Self {
        let colors =
            StyleMap::build(&COLORS, color_support).with_aliases(COLORS.aliases);
        let safe = StyleMap::build(&MODIFIERS_SAFE, color_support)
            .with_aliases(MODIFIERS_SAFE.aliases);
        let other = StyleMap::build(&MODIFIERS_OTHER, color_support)
            .with_aliases(MODIFIERS_OTHER.aliases);
        let root = StyleMap::default().merged_with(&colors).merged_with(&safe);

        Self {
            color_support,
            colors,
            modifiers: Modifiers { safe, other },
            root,
        }
    }

    #[must_use]
    pub fn color_support(&self) -> ColorSupport { self.color_support }

    #[must_use]
    pub fn colors(&self) -> &StyleMap { &self.colors }

    #[must_use]
    pub fn modifiers(&self) -> &Modifiers { &self.modifiers }

    /// The "other" modifiers, kept apart from the flat default surface as a reminder that
    /// they are not universally supported.
    #[must_use]
    pub fn unsafe_styles(&self) -> &StyleMap { &self.modifiers.other }

    /// Colors and safe modifiers, flat, with their aliases.
    #[must_use]
    pub fn root(&self) -> &StyleMap { &self.root }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<StyleFn>> { self.root.get(name) }

    /// # Errors
    ///
    /// Returns [`crate::KolorError::UnknownStyleName`] if `name` is neither a color nor a
    /// safe modifier. Use [`Self::unsafe_styles`] for the others.
    pub fn try_get(&self, name: &str) -> KolorResult<&Arc<StyleFn>> {
        self.root.try_get(name)
    }

    /// Every canonical function exactly once, across all three registries, in table
    /// order.
    pub fn canonical_styles(&self) -> impl Iterator<Item = &Arc<StyleFn>> + '_ {
        self.colors
            .canonical()
            .chain(self.modifiers.safe.canonical())
            .chain(self.modifiers.other.canonical())
    }
}

static KOLOR: LazyLock<Kolor> =
    LazyLock::new(|| Kolor::new(global_color_support::detect()));

/// The process wide surface. It is built on first use from
/// [`global_color_support::detect()`] and frozen afterwards. To control the decision,
/// call [`global_color_support::init()`] before the first call to this function.
#[must_use]
pub fn kolor() -> &'static Kolor { &KOLOR }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KolorError;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use test_case::test_case;

    const SAMPLE: &str = "Lorem Ipsum Dolor Sit Amet";

    fn enabled() -> Kolor { Kolor::new(ColorSupport::Colors) }

    fn disabled() -> Kolor { Kolor::new(ColorSupport::NoColor) }

    #[test]
    fn test_concrete_scenarios() {
        let kolor = enabled();
        assert_eq!(kolor.colors().paint("red", "foo").unwrap(), "\x1b[31mfoo\x1b[39m");
        assert_eq!(
            kolor.modifiers().safe().paint("reset", "").unwrap(),
            "\x1b[0m"
        );
        assert_eq!(
            kolor.colors().paint("bgMagenta", "").unwrap(),
            "\x1b[45m\x1b[49m"
        );

        assert_eq!(disabled().colors().paint("red", "foo").unwrap(), "foo");
    }

    #[test]
    fn test_every_style_responds() {
        let kolor = enabled();
        let mut count = 0;
        for style_fn in kolor.canonical_styles() {
            let result = style_fn.paint("foo");
            assert_ne!(result, "foo", "{} did not modify its input", style_fn.name());
            assert_eq!(
                strip_ansi_escapes::strip_str(&result),
                "foo",
                "{} changed the visible text",
                style_fn.name()
            );
            count += 1;
        }
        assert_eq!(count, 32 + 4 + 9);
    }

    #[test]
    fn test_strip_round_trip() {
        let kolor = enabled();
        for value in ["", "foo", "a b c", "ünïcödé 🦀", SAMPLE] {
            for style_fn in kolor.canonical_styles() {
                assert_eq!(strip_ansi_escapes::strip_str(style_fn.paint(value)), value);
            }
        }
    }

    #[test]
    fn test_identity_when_disabled() {
        let kolor = disabled();
        for value in ["", "foo", "\x1b[31malready red\x1b[39m", SAMPLE] {
            for style_fn in kolor.canonical_styles() {
                assert_eq!(style_fn.paint(value), value);
            }
        }
        assert_eq!(kolor.colors().apply("red", 12).unwrap(), "12");
        assert_eq!(kolor.unsafe_styles().apply("dim", false).unwrap(), "false");
    }

    #[test]
    fn test_empty_value_codes() {
        let kolor = enabled();
        for style_fn in kolor.canonical_styles() {
            let entry = style_fn.entry();
            let expected = if style_fn.name() == "reset" {
                format!("{}", entry.start)
            } else {
                format!("{}{}", entry.start, entry.end)
            };
            assert_eq!(style_fn.paint(""), expected, "{}", style_fn.name());
        }
    }

    #[test_case("black", 30)]
    #[test_case("red", 31)]
    #[test_case("green", 32)]
    #[test_case("yellow", 33)]
    #[test_case("blue", 34)]
    #[test_case("magenta", 35)]
    #[test_case("cyan", 36)]
    #[test_case("white", 37)]
    #[test_case("bgBlack", 40)]
    #[test_case("bgRed", 41)]
    #[test_case("bgGreen", 42)]
    #[test_case("bgYellow", 43)]
    #[test_case("bgBlue", 44)]
    #[test_case("bgMagenta", 45)]
    #[test_case("bgCyan", 46)]
    #[test_case("bgWhite", 47)]
    #[test_case("redBright", 91)]
    #[test_case("whiteBright", 97)]
    #[test_case("bgRedBright", 101)]
    #[test_case("bgWhiteBright", 107)]
    fn test_color_applied_to_sample(name: &str, code: u8) {
        let end = if name.starts_with("bg") { 49 } else { 39 };
        assert_eq!(
            enabled().colors().paint(name, SAMPLE).unwrap(),
            format!("\x1b[{code}m{SAMPLE}\x1b[{end}m")
        );
    }

    #[test]
    fn test_composition_order() {
        let kolor = enabled();
        let reset = kolor.try_get("reset").unwrap();
        let bold = kolor.try_get("bold").unwrap();
        assert_eq!(
            reset.paint(bold.paint("value")),
            "\x1b[0m\x1b[1mvalue\x1b[22m"
        );
    }

    #[test]
    fn test_nesting_reasserts_outer_color() {
        let kolor = enabled();
        let red = kolor.try_get("red").unwrap();
        let blue = kolor.try_get("blue").unwrap();
        let bg_red = kolor.try_get("bgRed").unwrap();
        let bg_blue = kolor.try_get("bgBlue").unwrap();
        assert_eq!(
            red.paint(format!("[{}]", blue.paint("x"))),
            "\x1b[31m[\x1b[34mx\x1b[31m]\x1b[39m"
        );
        assert_eq!(
            bg_red.paint(bg_blue.paint("x")),
            "\x1b[41m\x1b[44mx\x1b[41m\x1b[49m"
        );
        // Foreground inside background: different close codes, nothing replaced.
        assert_eq!(
            bg_red.paint(blue.paint("x")),
            "\x1b[41m\x1b[34mx\x1b[39m\x1b[49m"
        );
    }

    #[test_case("purple", "magenta")]
    #[test_case("bgPurple", "bgMagenta")]
    #[test_case("lightGray", "gray")]
    #[test_case("lightGrey", "gray")]
    #[test_case("grey", "gray")]
    #[test_case("blackBright", "gray")]
    #[test_case("bgGrey", "bgGray")]
    #[test_case("bgBlackBright", "bgGray")]
    fn test_color_alias_identity(alias: &str, canonical: &str) {
        let kolor = enabled();
        assert!(kolor.colors().same_fn(alias, canonical));
        assert!(kolor.root().same_fn(alias, canonical));
    }

    #[test_case("swapColors", "inverse")]
    #[test_case("swapcolors", "inverse")]
    fn test_safe_alias_identity(alias: &str, canonical: &str) {
        let kolor = enabled();
        assert!(kolor.modifiers().safe().same_fn(alias, canonical));
        assert!(kolor.root().same_fn(alias, canonical));
    }

    #[test_case("faint", "dim")]
    #[test_case("strikeThrough", "strikethrough")]
    #[test_case("crossedout", "strikethrough")]
    #[test_case("crossedOut", "strikethrough")]
    #[test_case("conceal", "hidden")]
    #[test_case("doubleUnderline", "doubleunderline")]
    fn test_other_alias_identity(alias: &str, canonical: &str) {
        let kolor = enabled();
        assert!(kolor.modifiers().other().same_fn(alias, canonical));
        assert!(kolor.unsafe_styles().same_fn(alias, canonical));
    }

    #[test]
    fn test_groups_share_functions() {
        let kolor = enabled();
        assert!(Arc::ptr_eq(
            kolor.try_get("red").unwrap(),
            kolor.colors().try_get("red").unwrap()
        ));
        assert!(Arc::ptr_eq(
            kolor.try_get("bold").unwrap(),
            kolor.modifiers().safe().try_get("bold").unwrap()
        ));
    }

    #[test]
    fn test_default_surface_keeps_other_modifiers_apart() {
        let kolor = enabled();
        assert!(kolor.get("italic").is_none());
        assert_eq!(
            kolor.try_get("italic").unwrap_err(),
            KolorError::UnknownStyleName {
                name: "italic".into()
            }
        );
        assert!(kolor.unsafe_styles().contains("italic"));
        assert_eq!(
            kolor.root().len(),
            kolor.colors().len() + kolor.modifiers().safe().len()
        );
    }

    #[test]
    fn test_group_sizes() {
        let kolor = disabled();
        assert_eq!(kolor.colors().len(), 32 + 8);
        assert_eq!(kolor.modifiers().safe().len(), 4 + 2);
        assert_eq!(kolor.modifiers().other().len(), 9 + 6);
        assert_eq!(kolor.color_support(), ColorSupport::NoColor);
    }

    #[serial]
    #[test]
    fn test_global_surface_is_frozen() {
        let first = kolor();
        let second = kolor();
        assert!(std::ptr::eq(first, second));
        let color_support = first.color_support();
        assert!(first.canonical_styles().all(|it| it.color_support() == color_support));
    }
}
