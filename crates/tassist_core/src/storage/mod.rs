//! Persistence layer for the address book.
//!
//! # Responsibility
//! - Define the storage contract used by the logic layer.
//! - Read and write the address book as a JSON document on disk.
//!
//! # Invariants
//! - A missing data file reads as `None`, never as an error.
//! - Reads reject malformed JSON and invalid records instead of masking them.
//! - Writes replace the file wholesale via a temporary sibling file.

pub mod json_address_book;
pub mod json_person;

use crate::model::address_book::AddressBook;
use json_address_book::JsonSerializableAddressBook;
use json_person::RecordError;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage failure for address book reads and writes.
#[derive(Debug)]
pub enum StorageError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    InvalidData { path: PathBuf, source: RecordError },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "could not access `{}`: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "malformed address book `{}`: {source}", path.display())
            }
            Self::InvalidData { path, source } => {
                write!(f, "invalid address book data in `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidData { source, .. } => Some(source),
        }
    }
}

/// Storage contract for the address book.
pub trait AddressBookStorage {
    /// Location of the backing data.
    fn address_book_file_path(&self) -> &Path;
    /// Returns `None` when no data has been saved yet.
    fn read_address_book(&self) -> StorageResult<Option<AddressBook>>;
    fn save_address_book(&self, address_book: &AddressBook) -> StorageResult<()>;
}

/// JSON-file-backed address book storage.
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    fn address_book_file_path(&self) -> &Path {
        &self.path
    }

    fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        let started_at = Instant::now();
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("event=storage_read module=storage status=ok found=false");
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=storage_read module=storage status=error error_code=io_failed error={err}"
                );
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let document: JsonSerializableAddressBook =
            serde_json::from_str(&raw).map_err(|err| {
                error!(
                    "event=storage_read module=storage status=error error_code=json_malformed line={} column={}",
                    err.line(),
                    err.column()
                );
                StorageError::Json {
                    path: self.path.clone(),
                    source: err,
                }
            })?;

        let address_book = document.to_model_type().map_err(|err| {
            error!("event=storage_read module=storage status=error error_code=invalid_record");
            StorageError::InvalidData {
                path: self.path.clone(),
                source: err,
            }
        })?;

        info!(
            "event=storage_read module=storage status=ok found=true persons={} duration_ms={}",
            address_book.len(),
            started_at.elapsed().as_millis()
        );
        Ok(Some(address_book))
    }

    fn save_address_book(&self, address_book: &AddressBook) -> StorageResult<()> {
        let started_at = Instant::now();
        let io_error = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let document = JsonSerializableAddressBook::from_model_type(address_book);
        let json = serde_json::to_string_pretty(&document).map_err(|err| StorageError::Json {
            path: self.path.clone(),
            source: err,
        })?;

        let temp_path = temp_sibling(&self.path);
        fs::write(&temp_path, json).map_err(io_error)?;
        fs::rename(&temp_path, &self.path).map_err(|err| {
            error!(
                "event=storage_save module=storage status=error error_code=rename_failed error={err}"
            );
            if let Err(cleanup_err) = fs::remove_file(&temp_path) {
                warn!(
                    "event=storage_save module=storage status=error error_code=temp_cleanup_failed error={cleanup_err}"
                );
            }
            io_error(err)
        })?;

        info!(
            "event=storage_save module=storage status=ok persons={} duration_ms={}",
            address_book.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
