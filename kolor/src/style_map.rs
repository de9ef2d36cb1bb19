// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Display, sync::Arc};

use ordermap::OrderMap;

use crate::{ColorSupport, KolorError, KolorResult, StyleFn, StyleTable, StyleValue};

/// Ordered mapping from style name to its [`StyleFn`]. Canonical names come first, in
/// table order, followed by aliases. An alias is a second key for the same [Arc], never a
/// second function.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    map: OrderMap<&'static str, Arc<StyleFn>>,
}

impl StyleMap {
    /// The Function Registry Builder. Instantiates one [`StyleFn`] per table entry, named
    /// after its key. The color support decision is an input; it is not re-detected
    /// here, so every function in the map observes the same decision.
    ///
    /// Aliases are not added, see [`Self::with_aliases`].
    #[must_use]
    pub fn build(table: &StyleTable, color_support: ColorSupport) -> Self {
        let map: OrderMap<_, _> = table
            .entries
            .iter()
            .map(|(name, entry)| {
                (*name, Arc::new(StyleFn::new(*name, *entry, color_support)))
            })
            .collect();
        tracing::trace!(
            table = table.name,
            count = map.len(),
            ?color_support,
            "built style map"
        );
        Self { map }
    }

    /// Bind every `(alias, canonical)` pair to the canonical name's function.
    #[must_use]
    pub fn with_aliases(mut self, aliases: &[(&'static str, &'static str)]) -> Self {
        for &(alias, canonical) in aliases {
            match self.map.get(canonical).map(Arc::clone) {
                Some(style_fn) => {
                    self.map.insert(alias, style_fn);
                }
                None => {
                    tracing::warn!(alias, canonical, "alias for unknown style, skipping");
                }
            }
        }
        tracing::trace!(count = aliases.len(), "applied aliases");
        self
    }

    /// Add all of `other`'s entries, sharing its functions.
    #[must_use]
    pub fn merged_with(mut self, other: &StyleMap) -> Self {
        for (name, style_fn) in &other.map {
            self.map.insert(*name, Arc::clone(style_fn));
        }
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<StyleFn>> { self.map.get(name) }

    /// # Errors
    ///
    /// Returns [`KolorError::UnknownStyleName`] if `name` is not in this map.
    pub fn try_get(&self, name: &str) -> KolorResult<&Arc<StyleFn>> {
        self.get(name)
            .ok_or_else(|| KolorError::unknown_style_name(name))
    }

    /// Lookup and call in one step.
    ///
    /// # Errors
    ///
    /// Returns [`KolorError::UnknownStyleName`] if `name` is not in this map.
    pub fn paint(&self, name: &str, value: impl Display) -> KolorResult<String> {
        Ok(self.try_get(name)?.paint(value))
    }

    /// Lookup and call in one step, for values that may have no textual form.
    ///
    /// # Errors
    ///
    /// - [`KolorError::UnknownStyleName`] if `name` is not in this map.
    /// - [`KolorError::InvalidInputType`] if the value can't be converted to text.
    pub fn apply(&self, name: &str, value: impl Into<StyleValue>) -> KolorResult<String> {
        self.try_get(name)?.apply(value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool { self.map.contains_key(name) }

    /// `true` if both names are bound to the very same function.
    #[must_use]
    pub fn same_fn(&self, lhs: &str, rhs: &str) -> bool {
        match (self.get(lhs), self.get(rhs)) {
            (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Arc<StyleFn>)> + '_ {
        self.map.iter().map(|(name, style_fn)| (*name, style_fn))
    }

    /// Only the entries whose function was built for that key, ie: no aliases.
    pub fn canonical(&self) -> impl Iterator<Item = &Arc<StyleFn>> + '_ {
        self.map
            .iter()
            .filter(|(name, style_fn)| **name == style_fn.name())
            .map(|(_, style_fn)| style_fn)
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'static str, &'a Arc<StyleFn>);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter { Box::new(self.iter()) }
}
