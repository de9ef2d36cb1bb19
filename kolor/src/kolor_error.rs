// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors are only ever caused by caller misuse: asking for a style name that does not
//! exist, or passing a value that has no meaningful textual form. Ambiguity while
//! detecting color support is not an error, it resolves to
//! [`crate::ColorSupport::NoColor`].
//!
//! [`KolorError`] implements [`miette::Diagnostic`], so it can be propagated with `?` in
//! any function returning [`miette::Result`].

/// Convenience type alias for results produced by this crate.
pub type KolorResult<T> = Result<T, KolorError>;

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum KolorError {
    #[error("🎨 Unknown style name: '{name}'")]
    #[diagnostic(
        code(r3bl_kolor::unknown_style_name),
        help("Style names are case sensitive, eg: `red`, `bgRed`, `redBright`, `bold`")
    )]
    UnknownStyleName { name: String },

    #[error("🧾 Value of type '{type_name}' can't be converted to text")]
    #[diagnostic(
        code(r3bl_kolor::invalid_input_type),
        help("Pass a string, number, bool, char, null, or a list of those")
    )]
    InvalidInputType { type_name: &'static str },
}

impl KolorError {
    #[must_use]
    pub fn unknown_style_name(name: impl Into<String>) -> Self {
        Self::UnknownStyleName { name: name.into() }
    }
}
