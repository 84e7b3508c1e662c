//! In-memory store for INI-like configuration profiles.
//!
//! This module provides:
//! - The [`Profile`] store: sections, named instances, and insertion-ordered
//!   key to value-list maps
//! - Line classification and block parsing (internal)
//! - File, directory, and glob loading ([`Profile::load_file`],
//!   [`Profile::load_directory`], [`Profile::load`])
//! - Typed accessors with default-value and presence-flag semantics
//!   ([`Lookup`] and the `*_value` / `*_values` families)
//! - A canonical dump for diff-based regression testing ([`Profile::dump`])
//!
//! # Format
//!
//! Input is UTF-8 text. After trimming, lines starting with `;` or `#` are
//! comments, `[Name]` opens a section, and any other non-blank line splits
//! on the first `=` into a key and a value (the value may contain further
//! `=` characters). Repeated keys append values instead of overwriting, and
//! loading never discards previously loaded data, so multiple sources
//! accumulate into one store.
//!
//! # Modes
//!
//! In [`Mode::Legacy`] every section has a single anonymous instance. In
//! [`Mode::Extended`] a block may carry the reserved `Id` key; blocks with
//! the same section name but different ids become separate instances, and
//! blocks sharing an id accumulate into one.

mod block;
mod dump;
mod error;
mod glob;
mod line;
mod loader;
mod values;

#[cfg(test)]
mod line_tests;
#[cfg(test)]
mod loader_tests;

pub use error::LoadError;
pub use loader::LoadOutcome;
pub use values::Lookup;

use std::collections::BTreeMap;

use indexmap::IndexMap;

use block::BlockParser;

/// Reserved key that names a section instance in [`Mode::Extended`].
///
/// The key stays stored and visible to ordinary lookups; it is read, not
/// stripped, when a block is merged.
pub const ID_KEY: &str = "Id";

/// Section-identity rules applied when parsed blocks are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// One anonymous instance per section name; repeated blocks merge.
    #[default]
    Legacy,
    /// The reserved `Id` key distinguishes repeated section blocks into
    /// separate named instances.
    Extended,
}

/// Insertion-ordered key to value-list map for one block or instance.
pub(crate) type KeyValues = IndexMap<String, Vec<String>>;

/// One concrete occurrence of a section, disambiguated by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Instance {
    pub(crate) id: String,
    pub(crate) keys: KeyValues,
}

/// The in-memory aggregate of all loaded sections, instances, keys, and
/// values for one configuration profile.
///
/// Created empty, populated only by load/parse calls, and reset only by
/// [`Profile::clear`]. Loading is append-only: repeated loads accumulate,
/// which is what makes directory aggregation work.
///
/// Sections live in a sorted map, so [`Profile::sections`] and
/// [`Profile::dump`] are lexicographic by section name. Instances within a
/// section keep first-seen order, and keys within an instance keep
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    mode: Mode,
    sections: BTreeMap<String, Vec<Instance>>,
}

impl Profile {
    /// Creates an empty store with the given mode.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            sections: BTreeMap::new(),
        }
    }

    /// Returns the mode this store was created with.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns all section names in lexicographic order.
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Returns the instance ids of a section in first-seen order.
    ///
    /// The anonymous instance reports an empty id. Unknown sections yield
    /// an empty list.
    #[must_use]
    pub fn section_ids(&self, section: &str) -> Vec<&str> {
        self.sections
            .get(section)
            .map(|instances| instances.iter().map(|i| i.id.as_str()).collect())
            .unwrap_or_default()
    }

    /// Returns the raw values stored for a key in the anonymous instance.
    #[must_use]
    pub fn raw_values(&self, section: &str, tag: &str) -> Option<&[String]> {
        self.raw_values_in(section, "", tag)
    }

    /// Returns the raw values stored for a key in a named instance, in
    /// encounter order across all contributing blocks and files.
    #[must_use]
    pub fn raw_values_in(&self, section: &str, id: &str, tag: &str) -> Option<&[String]> {
        self.sections
            .get(section)?
            .iter()
            .find(|instance| instance.id == id)?
            .keys
            .get(tag)
            .map(Vec::as_slice)
    }

    /// Parses a sequence of text lines into the store.
    ///
    /// This is the in-memory counterpart of [`Profile::load_file`]: each
    /// line is trimmed, classified, and accumulated block by block.
    /// Returns the number of lines consumed. Malformed lines are absorbed,
    /// never rejected.
    pub fn append_lines<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = BlockParser::new();
        let mut count = 0;
        for line in lines {
            parser.feed(line.as_ref().trim(), self);
            count += 1;
        }
        parser.finish(self);
        count
    }

    /// Resets the store to empty, keeping the mode.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Merges one parsed block into the store.
    ///
    /// Legacy mode targets the anonymous instance. Extended mode reads the
    /// first value of the reserved `Id` key (empty id when absent). New
    /// values append after any existing ones per key; nothing is removed.
    pub(crate) fn flush(&mut self, name: &str, pending: KeyValues) {
        let id = match self.mode {
            Mode::Legacy => String::new(),
            Mode::Extended => pending
                .get(ID_KEY)
                .and_then(|values| values.first())
                .cloned()
                .unwrap_or_default(),
        };

        let instances = self.sections.entry(name.to_owned()).or_default();
        let index = instances
            .iter()
            .position(|instance| instance.id == id)
            .unwrap_or_else(|| {
                instances.push(Instance {
                    id,
                    keys: KeyValues::new(),
                });
                instances.len() - 1
            });

        let instance = &mut instances[index];
        for (key, values) in pending {
            instance.keys.entry(key).or_default().extend(values);
        }
    }
}
