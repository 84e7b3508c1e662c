//! Block accumulation.
//!
//! A block is the run of assignment lines between one section header and
//! the next (or end of input). The parser keeps the current section name
//! and a pending insertion-ordered key to value-list map, and flushes the
//! pair into the store whenever a new header arrives or input ends.

use super::line::{Line, classify};
use super::{KeyValues, Profile};

/// Streaming block parser feeding a [`Profile`].
///
/// Lines before the first section header are silently discarded; there is
/// no global section. Comments and blank lines never reset the pending
/// block.
#[derive(Debug, Default)]
pub(crate) struct BlockParser {
    section: Option<String>,
    pending: KeyValues,
}

impl BlockParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consumes one trimmed line.
    pub(crate) fn feed(&mut self, line: &str, store: &mut Profile) {
        match classify(line) {
            Line::Blank | Line::Comment => {}
            Line::Section(name) => {
                self.flush_into(store);
                self.section = Some(name.to_owned());
            }
            Line::Assignment(key, value) => {
                if self.section.is_some() {
                    self.pending
                        .entry(key.to_owned())
                        .or_default()
                        .push(value.to_owned());
                }
            }
        }
    }

    /// Flushes the final open block, if any.
    pub(crate) fn finish(mut self, store: &mut Profile) {
        self.flush_into(store);
    }

    fn flush_into(&mut self, store: &mut Profile) {
        if let Some(name) = self.section.take() {
            store.flush(&name, std::mem::take(&mut self.pending));
        }
    }
}
