// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

/// The longest sequence this crate emits is `ESC [ 1 0 7 m`, 6 bytes.
pub const INLINE_CODE_SIZE: usize = 8;

/// Stack allocated escape sequence, eg: `"\x1b[31m"`.
pub type InlineCode = SmallString<[u8; INLINE_CODE_SIZE]>;

/// One "Select Graphic Rendition" parameter, eg: `31` for red foreground, `39` for
/// default foreground.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SgrCode(pub u8);

pub mod sgr_code_impl {
    use super::{Display, Formatter, InlineCode, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let SgrCode(param) = *self;
            write!(f, "{CSI}{param}{SGR}")
        }
    }

    impl SgrCode {
        /// This is different than the [Display] trait implementation, because it doesn't
        /// allocate a new [String], but instead allocates an inline buffer on the stack.
        #[must_use]
        pub fn to_small_str(&self) -> InlineCode {
            use std::fmt::Write as _;
            let mut acc = InlineCode::new();
            // Writing into a SmallString can't fail.
            _ = write!(acc, "{self}");
            acc
        }
    }

    impl From<u8> for SgrCode {
        fn from(param: u8) -> Self { SgrCode(param) }
    }
}
