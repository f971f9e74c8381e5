use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{BookError, Result};
use crate::models::Contact;

mod contacts;

/// What happened when the backing file was read at open time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No backing file yet; the book starts empty.
    Missing,
    /// The file was read; holds the number of contacts loaded.
    Loaded(usize),
    /// The file could not be decoded and the book was reset to empty.
    Reset(String),
}

/// In-memory contact list backed by a single JSON file.
///
/// The file is read once by [`ContactBook::open_at`] and written only by
/// [`ContactBook::save`]. Changes made in between are lost if the process
/// exits without saving.
pub struct ContactBook {
    contacts: Vec<Contact>,
    path: PathBuf,
    load_status: LoadStatus,
}

impl ContactBook {
    /// Open the book stored at `path`, loading whatever it holds.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut book = Self {
            contacts: Vec::new(),
            path,
            load_status: LoadStatus::Missing,
        };
        book.load()?;
        Ok(book)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts in stored (insertion) order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn load(&mut self) -> Result<()> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no backing file, starting empty");
                self.contacts.clear();
                self.load_status = LoadStatus::Missing;
                return Ok(());
            }
            Err(e) => return Err(BookError::io(&self.path, e)),
        };

        match decode(&raw) {
            Ok(contacts) => {
                info!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
                self.load_status = LoadStatus::Loaded(contacts.len());
                self.contacts = contacts;
            }
            Err(reason) => {
                let err = BookError::MalformedStorage {
                    path: self.path.clone(),
                    reason,
                };
                warn!(error = %err, "backing file unreadable, starting empty");
                self.contacts.clear();
                self.load_status = LoadStatus::Reset(err.to_string());
            }
        }
        Ok(())
    }

    /// Write every contact, in stored order, to the backing file.
    /// Returns the number of contacts written.
    pub fn save(&self) -> Result<usize> {
        let records: Vec<Value> = self
            .contacts
            .iter()
            .map(|c| Value::Object(c.to_map()))
            .collect();
        let body = encode(&records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BookError::io(parent, e))?;
        }

        // Write beside the target, then rename over it
        let tmp = tmp_path(&self.path);
        let written = fs::File::create(&tmp).and_then(|mut f| {
            f.write_all(&body)?;
            f.write_all(b"\n")?;
            f.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(BookError::io(&tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(BookError::io(&self.path, e));
        }

        info!(path = %self.path.display(), count = records.len(), "saved contacts");
        Ok(records.len())
    }
}

fn decode(raw: &str) -> std::result::Result<Vec<Contact>, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let Value::Array(items) = value else {
        return Err("expected a JSON array of contacts".to_string());
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Contact::from_map(map).map_err(|e| format!("entry {}: {}", i, e)),
            _ => Err(format!("entry {}: expected an object", i)),
        })
        .collect()
}

fn encode(records: &[Value]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(records, &mut ser)?;
    Ok(buf)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
