//! Canonical text rendering of a [`Profile`].

use super::Profile;

impl Profile {
    /// Renders the store as canonical, deterministic text.
    ///
    /// Sections appear in lexicographic order; instances within a section
    /// in first-seen order; keys within an instance in insertion order.
    /// Each instance prints as `[Name]` followed by one `key=value` line
    /// per stored raw value (repeated keys produce repeated lines) and a
    /// trailing blank line.
    ///
    /// The output is byte-stable for identical input, so it can be compared
    /// against a checked-in exemplar with a line-diff tool. Re-parsing the
    /// dump with the same mode reproduces an equivalent store.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (name, instances) in &self.sections {
            for instance in instances {
                out.push('[');
                out.push_str(name);
                out.push_str("]\n");
                for (key, values) in &instance.keys {
                    for value in values {
                        out.push_str(key);
                        out.push('=');
                        out.push_str(value);
                        out.push('\n');
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}
