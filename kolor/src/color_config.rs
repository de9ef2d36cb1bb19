// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

/// The user's explicit choice, usually from a `--color=<mode>` command line directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    /// Emit escape sequences even when output is not a terminal.
    Always,
    /// Let [`crate::detect_color_support()`] look at the terminal.
    #[default]
    Auto,
    /// Never emit escape sequences.
    Never,
}

/// Configuration threaded into the capability detector. It is read once at startup, see
/// [`crate::global_color_support::init()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorConfig {
    pub color_mode: ColorMode,
}

pub const COLOR_DIRECTIVE_PREFIX: &str = "--color=";

impl ColorConfig {
    #[must_use]
    pub fn new(color_mode: ColorMode) -> Self { Self { color_mode } }

    /// Find the color directive in the process invocation arguments.
    ///
    /// The arguments are joined with `=` before scanning, so `--color always` and
    /// `--color=always` are the same directive. The first directive wins. Any other
    /// argument, including an unrecognized mode like `--color=sometimes`, is ignored and
    /// the mode stays [`ColorMode::Auto`].
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = args
            .into_iter()
            .map(|it| it.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join("=");

        let color_mode = joined
            .match_indices(COLOR_DIRECTIVE_PREFIX)
            .find_map(|(index, _)| {
                parse_mode_prefix(&joined[index + COLOR_DIRECTIVE_PREFIX.len()..])
            })
            .unwrap_or_default();

        Self { color_mode }
    }

    /// Same as [`Self::from_args`] using [`std::env::args_os`]. Arguments that are not
    /// valid unicode are converted lossily.
    #[must_use]
    pub fn from_env_args() -> Self {
        Self::from_args(
            std::env::args_os().map(|it| it.to_string_lossy().into_owned()),
        )
    }
}

/// Matches `always`, `auto` or `never` at the start of `rest`. Trailing text is ignored.
fn parse_mode_prefix(rest: &str) -> Option<ColorMode> {
    use strum::IntoEnumIterator;
    ColorMode::iter().find(|mode| rest.starts_with(mode.to_string().as_str()))
}
