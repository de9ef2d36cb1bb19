// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

use crate::{ColorConfig, ColorMode};

/// # One-shot color support decision
///
/// Every [`crate::StyleFn`] captures a [`ColorSupport`] when it is built. For the process
/// wide surface returned by [`crate::kolor()`] that value comes from [`detect()`], which
/// runs [`crate::detect_color_support()`] at most once and memoizes the result.
///
/// Three global atomic variables hold the state:
/// - `COLOR_SUPPORT_GLOBAL`: explicit override (highest priority), for tests and hosts.
/// - `COLOR_SUPPORT_CACHED`: the memoized detection result.
/// - `EMBEDDING_OVERRIDE`: set by a host that embeds this crate in a runtime without
///   process or TTY introspection (eg: `wasm32-unknown-unknown` in a browser). Only
///   consulted when introspection is unavailable.
///
/// ```rust
/// use r3bl_kolor::{global_color_support, ColorConfig, ColorMode, ColorSupport};
///
/// // At startup, thread the parsed command line into the detector.
/// let color_support = global_color_support::init(&ColorConfig::new(ColorMode::Never));
/// assert_eq!(color_support, ColorSupport::NoColor);
///
/// // The decision is never recomputed.
/// let again = global_color_support::init(&ColorConfig::new(ColorMode::Always));
/// assert_eq!(again, ColorSupport::NoColor);
/// assert_eq!(global_color_support::detect(), ColorSupport::NoColor);
/// ```
pub mod global_color_support {
    use super::{AtomicI8, ColorConfig, ColorSupport, Ordering, ProcessColorProbe,
                detect_color_support};

    static COLOR_SUPPORT_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static EMBEDDING_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// This is the main function that is used to determine whether color is supported.
    ///
    /// 1. If [`set_override`] was called, return that value.
    /// 2. If a decision was already made (by [`init`] or an earlier call), return it.
    /// 3. Otherwise decide now, using the color directive in the process arguments
    ///    ([`ColorConfig::from_env_args`]), and cache the result.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }
        if let Ok(cached) = try_get_cached() {
            return cached;
        }
        init(&ColorConfig::from_env_args())
    }

    /// Make the one-shot decision using an explicit configuration. Call this once at
    /// startup, before the first style is applied. If the decision has already been
    /// made, the cached value is returned and `config` is ignored.
    pub fn init(config: &ColorConfig) -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }
        if let Ok(cached) = try_get_cached() {
            tracing::trace!(?config, ?cached, "color support already decided");
            return cached;
        }
        let detected = detect_color_support(config, &ProcessColorProbe);
        set_cached(detected);
        detected
    }

    /// Override the color support. Regardless of the environment, the value you set
    /// here will be returned by [`detect()`] and [`init()`].
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
    /// function. In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_GLOBAL.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_SUPPORT_GLOBAL.store(NOT_SET_VALUE, Ordering::Release); }

    /// Get the color support override value.
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if no override value has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_GLOBAL.load(Ordering::Acquire))
    }

    /// Forget the cached decision, forcing a new one on the next call. Only useful in
    /// tests, the environment is not expected to change within a process lifetime.
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// Get the cached decision.
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if no decision has been made yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    pub fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }

    /// Escape hatch for hosts without process or TTY introspection. Has no effect on
    /// regular native processes.
    pub fn set_embedding_override(enabled: bool) {
        EMBEDDING_OVERRIDE.store(i8::from(enabled), Ordering::Release);
    }

    pub fn clear_embedding_override() {
        EMBEDDING_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release);
    }

    #[must_use]
    pub fn embedding_override() -> bool { EMBEDDING_OVERRIDE.load(Ordering::Acquire) == 1 }
}

/// The result of the color support check. This is a binary decision, there is no
/// palette negotiation beyond the 16 ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSupport {
    /// Emit escape sequences.
    Colors,
    /// Pass values through unchanged.
    NoColor,
}

impl ColorSupport {
    #[must_use]
    pub fn is_enabled(self) -> bool { matches!(self, ColorSupport::Colors) }
}

impl From<bool> for ColorSupport {
    fn from(enabled: bool) -> Self {
        if enabled {
            ColorSupport::Colors
        } else {
            ColorSupport::NoColor
        }
    }
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Colors),
                0 => Ok(super::ColorSupport::NoColor),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Colors  => 1,
                super::ColorSupport::NoColor => 0,
            }
        }
    }
}

/// The stream to check for a terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Environment specific heuristics used by [`detect_color_support`]. Hosts with unusual
/// runtimes can plug in their own answers, see [`FixedColorProbe`].
pub trait ColorProbe {
    /// `false` when there are no process arguments or standard streams to look at.
    fn has_process_introspection(&self) -> bool;

    fn is_a_tty(&self, stream: Stream) -> bool;

    /// `None` when the terminal can't be asked, which counts as not supported.
    fn supports_min_colors(&self, count: u16) -> Option<bool>;

    /// Running under a desktop shell runtime on Windows, whose terminal misreports its
    /// own capability.
    fn is_desktop_shell_on_windows(&self) -> bool;

    /// Only consulted when [`Self::has_process_introspection`] is `false`.
    fn embedding_override(&self) -> bool { global_color_support::embedding_override() }
}

/// Decide whether escape sequences should be emitted. Rules, in priority order:
///
/// 1. No process introspection: disabled, unless the host set the embedding override.
/// 2. [`ColorMode::Always`] forces enabled, [`ColorMode::Never`] forces disabled.
/// 3. Enabled if both stdout and stderr are terminals and the terminal supports at least
///    16 colors. A terminal that can't answer gets no colors.
/// 4. Enabled anyway under a desktop shell runtime on Windows.
///
/// This is a pure function of its inputs; it is memoized by [`global_color_support`].
pub fn detect_color_support(config: &ColorConfig, probe: &impl ColorProbe) -> ColorSupport {
    let (color_support, reason) = if !probe.has_process_introspection() {
        (
            ColorSupport::from(probe.embedding_override()),
            "no process introspection, embedding override",
        )
    } else {
        match config.color_mode {
            ColorMode::Always => (ColorSupport::Colors, "color mode always"),
            ColorMode::Never => (ColorSupport::NoColor, "color mode never"),
            ColorMode::Auto => {
                let is_interactive = probe.is_a_tty(Stream::Stdout)
                    && probe.is_a_tty(Stream::Stderr)
                    && probe.supports_min_colors(MIN_COLOR_COUNT).unwrap_or(false);
                if is_interactive {
                    (ColorSupport::Colors, "interactive terminal")
                } else if probe.is_desktop_shell_on_windows() {
                    (ColorSupport::Colors, "desktop shell on windows")
                } else {
                    (ColorSupport::NoColor, "not an interactive color terminal")
                }
            }
        }
    };

    tracing::debug!(?color_support, reason, "color support detected");
    color_support
}

pub const MIN_COLOR_COUNT: u16 = 16;

/// Answers from the running process and its environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessColorProbe;

impl ColorProbe for ProcessColorProbe {
    fn has_process_introspection(&self) -> bool {
        !cfg!(all(target_arch = "wasm32", target_os = "unknown"))
    }

    fn is_a_tty(&self, stream: Stream) -> bool { helpers::is_a_tty(stream) }

    /// Heuristic based on environment variables:
    /// - `NO_COLOR` (other than `0`) or `TERM=dumb` rule colors out.
    /// - Windows consoles, `COLORTERM`, a known `TERM` family, `CLICOLOR` (other than
    ///   `0`), or running in CI rule them in.
    /// - Anything else, including no `TERM` at all, rules them out.
    fn supports_min_colors(&self, count: u16) -> Option<bool> {
        if count > MIN_COLOR_COUNT {
            return Some(false);
        }

        if helpers::env_no_color() || env::var("TERM").is_ok_and(|v| v == "dumb") {
            return Some(false);
        }

        if env::consts::OS == "windows"
            || env::var("COLORTERM").is_ok()
            || env::var("TERM").is_ok_and(|term| helpers::check_ansi_color(&term))
            || env::var("CLICOLOR").is_ok_and(|v| v != "0")
            || is_ci::uncached()
        {
            return Some(true);
        }

        Some(false)
    }

    /// `ELECTRON_RUN_AS_NODE` is only a proxy for an Electron hosted process. It is set
    /// when Electron runs as plain Node, which is how CLI tools get spawned from an
    /// Electron app. An Electron renderer or main process without it is not detected.
    fn is_desktop_shell_on_windows(&self) -> bool {
        env::consts::OS == "windows" && env::var_os("ELECTRON_RUN_AS_NODE").is_some()
    }
}

/// Canned answers, for hosts that know their environment better than the heuristics.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorProbe {
    pub has_process_introspection: bool,
    pub stdout_is_a_tty: bool,
    pub stderr_is_a_tty: bool,
    pub supports_16_colors: Option<bool>,
    pub is_desktop_shell_on_windows: bool,
    pub embedding_override: bool,
}

impl FixedColorProbe {
    /// An interactive 16 color terminal.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            has_process_introspection: true,
            stdout_is_a_tty: true,
            stderr_is_a_tty: true,
            supports_16_colors: Some(true),
            is_desktop_shell_on_windows: false,
            embedding_override: false,
        }
    }

    /// Output is piped to a file or another process.
    #[must_use]
    pub fn piped() -> Self {
        Self {
            stdout_is_a_tty: false,
            stderr_is_a_tty: false,
            ..Self::interactive()
        }
    }
}

impl ColorProbe for FixedColorProbe {
    fn has_process_introspection(&self) -> bool { self.has_process_introspection }

    fn is_a_tty(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => self.stdout_is_a_tty,
            Stream::Stderr => self.stderr_is_a_tty,
        }
    }

    fn supports_min_colors(&self, count: u16) -> Option<bool> {
        if count > MIN_COLOR_COUNT {
            return Some(false);
        }
        self.supports_16_colors
    }

    fn is_desktop_shell_on_windows(&self) -> bool { self.is_desktop_shell_on_windows }

    fn embedding_override(&self) -> bool { self.embedding_override }
}

mod helpers {
    use super::{Stream, env};

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use std::io::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("vscode")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }

    #[must_use]
    pub fn env_no_color() -> bool { env::var("NO_COLOR").is_ok_and(|v| v != "0") }
}
