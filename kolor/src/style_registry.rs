// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Static tables mapping style names to the SGR codes that open and close them.
//!
//! There are three tables, disjoint in name:
//! 1. [`COLORS`]: foreground and background, regular and bright.
//! 2. [`MODIFIERS_SAFE`]: widely supported attributes.
//! 3. [`MODIFIERS_OTHER`]: attributes that some consoles (eg: `cmd.exe`) ignore.
//!
//! Each table has a companion alias table, mapping an extra name to a canonical name in
//! the same table. More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#Colors>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#Select_Graphic_Rendition_parameters>

use crate::{KolorError, KolorResult, SgrCode};

/// The SGR codes that open and close one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleEntry {
    pub start: SgrCode,
    pub end: SgrCode,
}

impl StyleEntry {
    #[must_use]
    pub const fn new(start: u8, end: u8) -> Self {
        Self {
            start: SgrCode(start),
            end: SgrCode(end),
        }
    }

    /// `reset` opens and closes with `0`, which already clears everything.
    #[must_use]
    pub const fn is_reset(&self) -> bool { self.start.0 == 0 && self.end.0 == 0 }
}

/// A named, ordered, read-only list of styles plus the aliases into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTable {
    pub name: &'static str,
    pub entries: &'static [(&'static str, StyleEntry)],
    /// `(alias, canonical)` pairs. The canonical name is always in [`Self::entries`].
    pub aliases: &'static [(&'static str, &'static str)],
}

impl StyleTable {
    /// Resolves canonical names and aliases.
    ///
    /// # Errors
    ///
    /// Returns [`KolorError::UnknownStyleName`] if `name` is not declared in this table.
    pub fn lookup(&self, name: &str) -> KolorResult<StyleEntry> {
        let canonical = self.canonical_name(name).unwrap_or(name);
        self.entries
            .iter()
            .find(|(it, _)| *it == canonical)
            .map(|(_, entry)| *entry)
            .ok_or_else(|| KolorError::unknown_style_name(name))
    }

    /// Returns the canonical name for `name` if it is an alias.
    #[must_use]
    pub fn canonical_name(&self, name: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, canonical)| *canonical)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

#[rustfmt::skip]
pub const COLORS: StyleTable = StyleTable {
    name: "colors",
    entries: &[
        ("black",           StyleEntry::new( 30, 39)),
        ("red",             StyleEntry::new( 31, 39)),
        ("green",           StyleEntry::new( 32, 39)),
        ("yellow",          StyleEntry::new( 33, 39)),
        ("blue",            StyleEntry::new( 34, 39)),
        ("magenta",         StyleEntry::new( 35, 39)),
        ("cyan",            StyleEntry::new( 36, 39)),
        ("white",           StyleEntry::new( 37, 39)),
        ("bgBlack",         StyleEntry::new( 40, 49)),
        ("bgRed",           StyleEntry::new( 41, 49)),
        ("bgGreen",         StyleEntry::new( 42, 49)),
        ("bgYellow",        StyleEntry::new( 43, 49)),
        ("bgBlue",          StyleEntry::new( 44, 49)),
        ("bgMagenta",       StyleEntry::new( 45, 49)),
        ("bgCyan",          StyleEntry::new( 46, 49)),
        ("bgWhite",         StyleEntry::new( 47, 49)),
        ("gray",            StyleEntry::new( 90, 39)),
        ("redBright",       StyleEntry::new( 91, 39)),
        ("greenBright",     StyleEntry::new( 92, 39)),
        ("yellowBright",    StyleEntry::new( 93, 39)),
        ("blueBright",      StyleEntry::new( 94, 39)),
        ("magentaBright",   StyleEntry::new( 95, 39)),
        ("cyanBright",      StyleEntry::new( 96, 39)),
        ("whiteBright",     StyleEntry::new( 97, 39)),
        ("bgGray",          StyleEntry::new(100, 49)),
        ("bgRedBright",     StyleEntry::new(101, 49)),
        ("bgGreenBright",   StyleEntry::new(102, 49)),
        ("bgYellowBright",  StyleEntry::new(103, 49)),
        ("bgBlueBright",    StyleEntry::new(104, 49)),
        ("bgMagentaBright", StyleEntry::new(105, 49)),
        ("bgCyanBright",    StyleEntry::new(106, 49)),
        ("bgWhiteBright",   StyleEntry::new(107, 49)),
    ],
    aliases: &[
        ("purple",        "magenta"),
        ("bgPurple",      "bgMagenta"),
        ("lightGray",     "gray"),
        ("lightGrey",     "gray"),
        ("grey",          "gray"),
        ("blackBright",   "gray"),
        ("bgGrey",        "bgGray"),
        ("bgBlackBright", "bgGray"),
    ],
};

#[rustfmt::skip]
pub const MODIFIERS_SAFE: StyleTable = StyleTable {
    name: "safe",
    entries: &[
        ("reset",     StyleEntry::new(0,  0)),
        ("bold",      StyleEntry::new(1, 22)),
        ("underline", StyleEntry::new(4, 24)),
        ("inverse",   StyleEntry::new(7, 27)),
    ],
    aliases: &[
        ("swapColors", "inverse"),
        ("swapcolors", "inverse"),
    ],
};

#[rustfmt::skip]
pub const MODIFIERS_OTHER: StyleTable = StyleTable {
    name: "other",
    entries: &[
        ("dim",             StyleEntry::new( 2, 22)),
        ("italic",          StyleEntry::new( 3, 23)),
        ("blink",           StyleEntry::new( 5, 25)),
        ("rapidBlink",      StyleEntry::new( 6, 25)),
        ("hidden",          StyleEntry::new( 8, 28)),
        ("strikethrough",   StyleEntry::new( 9, 29)),
        ("doubleunderline", StyleEntry::new(21, 24)),
        ("framed",          StyleEntry::new(51, 54)),
        ("overlined",       StyleEntry::new(53, 55)),
    ],
    aliases: &[
        ("faint",           "dim"),
        ("strikeThrough",   "strikethrough"),
        ("crossedout",      "strikethrough"),
        ("crossedOut",      "strikethrough"),
        ("conceal",         "hidden"),
        ("doubleUnderline", "doubleunderline"),
    ],
};

pub const ALL_TABLES: [StyleTable; 3] = [COLORS, MODIFIERS_SAFE, MODIFIERS_OTHER];

/// Look up a style (canonical name or alias) across all three tables.
///
/// # Errors
///
/// Returns [`KolorError::UnknownStyleName`] if no table declares `name`.
pub fn lookup(name: &str) -> KolorResult<StyleEntry> {
    ALL_TABLES
        .iter()
        .find_map(|table| table.lookup(name).ok())
        .ok_or_else(|| KolorError::unknown_style_name(name))
}
