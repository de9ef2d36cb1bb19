// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_kolor
//!
//! Wrap any value in 16 color ANSI escape sequences, by style name.
//!
//! 1. Every style (a foreground or background color, or a text attribute like bold) is a
//!    pair of SGR codes, one that opens it and one that closes it. See
//!    [`style_registry`].
//! 2. Whether escape sequences are emitted at all is decided once per process, see
//!    [`global_color_support`]. When they are not, every style is the identity function
//!    on the textual form of its input.
//! 3. Styling nests. When the wrapped text already contains a style that closes with the
//!    same code (all foreground colors close with `39`), the inner close is replaced by
//!    the outer open, so the outer style is re-asserted right after the inner span ends.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_kolor::{ColorSupport, Kolor};
//!
//! let kolor = Kolor::new(ColorSupport::Colors);
//!
//! let red = kolor.colors().try_get("red").unwrap();
//! let blue = kolor.colors().try_get("blue").unwrap();
//! assert_eq!(red.paint("foo"), "\x1b[31mfoo\x1b[39m");
//! assert_eq!(
//!     red.paint(blue.paint("x")),
//!     "\x1b[31m\x1b[34mx\x1b[31m\x1b[39m"
//! );
//!
//! // Aliases are the same function, not a copy of it.
//! assert!(kolor.colors().same_fn("purple", "magenta"));
//!
//! // Less portable modifiers live in their own group.
//! let italic = kolor.unsafe_styles().try_get("italic").unwrap();
//! assert_eq!(italic.paint(42), "\x1b[3m42\x1b[23m");
//!
//! // Nothing is emitted when colors are off.
//! let plain = Kolor::new(ColorSupport::NoColor);
//! assert_eq!(plain.colors().paint("red", "foo").unwrap(), "foo");
//! ```
//!
//! Use [`kolor()`] to get the process wide instance, built from the one-shot capability
//! decision.

// Enable unwrap_in_result lint for production code only (not tests).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod color_config;
pub mod detect_color_support;
pub mod kolor_error;
pub mod kolor_surface;
pub mod sgr_code;
pub mod style_fn;
pub mod style_map;
pub mod style_registry;
pub mod style_value;

// Re-export.
pub use color_config::*;
pub use detect_color_support::*;
pub use kolor_error::*;
pub use kolor_surface::*;
pub use sgr_code::*;
pub use style_fn::*;
pub use style_map::*;
pub use style_registry::*;
pub use style_value::*;
