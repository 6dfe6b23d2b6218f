//! Settings file persistence.
//!
//! One `key=value` per line. `|` escapes itself, newlines and the list
//! separator, so any string round-trips.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use super::store::{PreferenceStore, StoreError};

const ESCAPE: char = '|';
const LIST_SEPARATOR: char = ',';

/// Preference store backed by a plain text file.
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first flush.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match OpenOptions::new().read(true).open(&path) {
            Ok(file) => read_values(BufReader::new(file)).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        log::debug!("loaded {} preference(s) from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    /// Empty store at `path`, for when the existing file cannot be read.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        if let Some(mut old) = self.values.insert(key.to_string(), value) {
            old.zeroize();
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(mut old) = self.values.remove(key) {
            old.zeroize();
        }
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut data = String::new();
        for (key, value) in &self.values {
            data.push_str(&escape(key));
            data.push('=');
            data.push_str(&escape(value));
            data.push('\n');
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // Owner-only: the file holds the password history.
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(write_err)?;

        // `mode` applies only at creation; tighten files written before.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }
        let result = file.write_all(data.as_bytes()).map_err(write_err);
        data.zeroize();
        result?;

        log::info!("saved preferences to {}", self.path.display());
        Ok(())
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        for value in self.values.values_mut() {
            value.zeroize();
        }
    }
}

/// Default location: `<config dir>/passgen/settings`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passgen")
        .join("settings")
}

fn read_values<R: BufRead>(reader: R) -> std::io::Result<BTreeMap<String, String>> {
    let mut values = BTreeMap::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match split_key(&line) {
            Some((key, value)) => {
                values.insert(unescape(key), unescape(value));
            }
            None => log::warn!("ignoring malformed preference line"),
        }
    }
    Ok(values)
}

/// Split at the first unescaped `=`.
fn split_key(line: &str) -> Option<(&str, &str)> {
    let mut escape_next = false;
    for (i, c) in line.char_indices() {
        if escape_next {
            escape_next = false;
        } else if c == ESCAPE {
            escape_next = true;
        } else if c == '=' {
            return Some((&line[..i], &line[i + 1..]));
        }
    }
    None
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ESCAPE => out.push_str("||"),
            '=' => out.push_str("|="),
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escape_next = false;
    for c in s.chars() {
        if escape_next {
            out.push(match c {
                'n' => '\n',
                'r' => '\r',
                other => other,
            });
            escape_next = false;
        } else if c == ESCAPE {
            escape_next = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Join list items into one value, escaping separators.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| {
            item.as_ref()
                .chars()
                .map(|c| match c {
                    ESCAPE => "||".to_string(),
                    LIST_SEPARATOR => "|,".to_string(),
                    _ => c.to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join(",")
}

/// Inverse of `join_list`. An empty value is an empty list.
pub fn split_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == ESCAPE {
            escape_next = true;
        } else if c == LIST_SEPARATOR {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
