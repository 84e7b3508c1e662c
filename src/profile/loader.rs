//! File, directory, and glob loading.
//!
//! The loader resolves a path into one or more text sources and feeds each
//! through the block parser. Loading is append-only, so feeding several
//! sources into one [`Profile`] aggregates them in order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{LoadError, Profile, glob};

/// Outcome of a directory or glob load.
///
/// Per-file failures do not abort the sweep; they are collected here so the
/// caller can decide whether partial success is acceptable.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Number of files successfully loaded.
    pub loaded: usize,
    /// Per-file errors, in filename-sorted processing order.
    pub errors: Vec<LoadError>,
}

impl Profile {
    /// Loads a single file.
    ///
    /// The file is read as UTF-8 text, each line trimmed and parsed.
    /// Returns the number of lines consumed. Malformed lines never fail a
    /// load; only I/O problems (including invalid UTF-8) do.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::FileRead`] when the file cannot be opened or
    /// read, with the OS error preserved on the source chain.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let count = self.append_lines(content.lines());
        debug!(path = %path.display(), lines = count, "loaded profile source");
        Ok(count)
    }

    /// Loads every regular file in `dir` whose name matches `pattern`.
    ///
    /// Matches are sorted lexicographically by filename and loaded in that
    /// order, so aggregation across files is deterministic. A file that
    /// fails to read is recorded in the outcome and the sweep continues.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Directory`] when `dir` cannot be enumerated and
    /// [`LoadError::Pattern`] when the glob cannot be compiled. A valid
    /// directory where nothing matches is not an error; it yields an
    /// outcome with zero files loaded.
    pub fn load_directory(
        &mut self,
        dir: impl AsRef<Path>,
        pattern: &str,
    ) -> Result<LoadOutcome, LoadError> {
        let dir = dir.as_ref();
        let matcher = glob::compile(pattern).map_err(|source| LoadError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        let entries = fs::read_dir(dir).map_err(|source| LoadError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::Directory {
                path: dir.to_path_buf(),
                source,
            })?;
            if !entry.path().is_file() {
                continue;
            }
            // Non-UTF-8 filenames cannot match a UTF-8 pattern; skip them.
            if let Ok(name) = entry.file_name().into_string() {
                if matcher.is_match(&name) {
                    names.push(name);
                }
            }
        }
        names.sort();

        let mut outcome = LoadOutcome::default();
        for name in &names {
            match self.load_file(dir.join(name)) {
                Ok(_) => outcome.loaded += 1,
                Err(error) => {
                    warn!(file = %name, %error, "skipping unreadable profile source");
                    outcome.errors.push(error);
                }
            }
        }
        Ok(outcome)
    }

    /// Convenience entry point for a file path or a path-with-glob.
    ///
    /// If the final path segment contains a glob metacharacter it is split
    /// off and expanded against the preceding directory (relative or
    /// absolute; an empty prefix means the current directory). Otherwise
    /// the path loads as a plain file. Glob characters in a non-final
    /// segment are not expanded; such a directory simply fails to open.
    ///
    /// # Errors
    ///
    /// Propagates [`LoadError::FileRead`] for plain files and the
    /// [`Profile::load_directory`] errors for glob paths.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, LoadError> {
        let path = path.as_ref();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return Err(LoadError::MissingFileName {
                path: path.to_path_buf(),
            });
        };

        if glob::is_glob(name) {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            self.load_directory(dir, name)
        } else {
            self.load_file(path).map(|_| LoadOutcome {
                loaded: 1,
                errors: Vec::new(),
            })
        }
    }
}
