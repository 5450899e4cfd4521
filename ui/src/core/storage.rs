//! Local persistence for the chosen locale.
//!
//! Web builds use `localStorage`; native builds keep a one-line file in the
//! platform config directory. Any failure leaves the session on its
//! in-memory locale.

use std::cell::Cell;
use std::fmt;

use crate::config::LOCALE_STORAGE_KEY;
use crate::core::locale::Locale;

#[derive(Debug)]
pub enum StorageError {
    /// No backing store (storage disabled, no config directory, ...).
    Unavailable,
    Read(String),
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => f.write_str("storage unavailable"),
            StorageError::Read(msg) => write!(f, "failed to read stored locale: {msg}"),
            StorageError::Write(msg) => write!(f, "failed to store locale: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Last persisted locale. Unknown stored values count as nothing stored.
pub fn load_locale() -> Result<Option<Locale>, StorageError> {
    Ok(backend::read()?.as_deref().and_then(Locale::from_code))
}

pub fn save_locale(locale: Locale) -> Result<(), StorageError> {
    backend::write(locale.code())
}

/// Where the chosen locale is kept between visits.
pub trait LocaleStore {
    fn load(&self) -> Result<Option<Locale>, StorageError>;
    fn save(&self, locale: Locale) -> Result<(), StorageError>;
}

/// `localStorage` on web, the config directory on native.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformStore;

impl LocaleStore for PlatformStore {
    fn load(&self) -> Result<Option<Locale>, StorageError> {
        load_locale()
    }

    fn save(&self, locale: Locale) -> Result<(), StorageError> {
        save_locale(locale)
    }
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Cell<Option<Locale>>,
}

impl MemoryStore {
    pub fn new(saved: Option<Locale>) -> Self {
        Self {
            saved: Cell::new(saved),
        }
    }

    pub fn saved(&self) -> Option<Locale> {
        self.saved.get()
    }
}

impl LocaleStore for MemoryStore {
    fn load(&self) -> Result<Option<Locale>, StorageError> {
        Ok(self.saved.get())
    }

    fn save(&self, locale: Locale) -> Result<(), StorageError> {
        self.saved.set(Some(locale));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::{StorageError, LOCALE_STORAGE_KEY};

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    pub(super) fn read() -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(LOCALE_STORAGE_KEY)
            .map_err(|err| StorageError::Read(format!("{err:?}")))
    }

    pub(super) fn write(value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(LOCALE_STORAGE_KEY, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{StorageError, LOCALE_STORAGE_KEY};

    fn storage_file(dir: &Path) -> PathBuf {
        // ':' is not a valid file name character everywhere.
        dir.join(LOCALE_STORAGE_KEY.replace(':', "-"))
    }

    fn config_dir() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("cl", "Zennith", "Ranky")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(StorageError::Unavailable)
    }

    pub(super) fn read() -> Result<Option<String>, StorageError> {
        read_from(&config_dir()?)
    }

    pub(super) fn write(value: &str) -> Result<(), StorageError> {
        write_to(&config_dir()?, value)
    }

    pub(super) fn read_from(dir: &Path) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(storage_file(dir)) {
            Ok(raw) => Ok(Some(raw.trim().to_string()).filter(|s| !s.is_empty())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(err.to_string())),
        }
    }

    pub(super) fn write_to(dir: &Path, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(dir).map_err(|err| StorageError::Write(err.to_string()))?;
        fs::write(storage_file(dir), value).map_err(|err| StorageError::Write(err.to_string()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ranky-storage-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = scratch_dir("missing");
        assert!(backend::read_from(&dir).unwrap().is_none());
    }

    #[test]
    fn stored_value_is_read_back() {
        let dir = scratch_dir("roundtrip");
        backend::write_to(&dir, Locale::En.code()).unwrap();
        let raw = backend::read_from(&dir).unwrap();
        assert_eq!(raw.as_deref().and_then(Locale::from_code), Some(Locale::En));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn garbage_is_not_a_locale() {
        let dir = scratch_dir("garbage");
        backend::write_to(&dir, "klingon").unwrap();
        let raw = backend::read_from(&dir).unwrap();
        assert_eq!(raw.as_deref().and_then(Locale::from_code), None);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn memory_store_keeps_the_last_save() {
        let store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), None);
        store.save(Locale::Es).unwrap();
        store.save(Locale::En).unwrap();
        assert_eq!(store.load().unwrap(), Some(Locale::En));
        assert_eq!(store.saved(), Some(Locale::En));
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
        assert!(StorageError::Write("denied".into()).to_string().contains("denied"));
    }
}
