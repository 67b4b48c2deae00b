use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::Preferences;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "TyrasGroup";
const APP_NAME: &str = "TyrasSite";
const PREFERENCES_FILE: &str = "preferences.json";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
}

pub fn load_preferences() -> Option<Preferences> {
    load_preferences_from(&data_file()?)
}

pub fn save_preferences(preferences: &Preferences) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_preferences_to(&path, preferences)
}

/// Missing or unreadable files mean "use the defaults".
pub fn load_preferences_from(path: &Path) -> Option<Preferences> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_preferences_to(path: &Path, preferences: &Preferences) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(preferences)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, Language};

    #[test]
    fn preferences_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);
        let prefs = Preferences {
            language: Language::Fr,
            currency: Currency::Usd,
        };

        save_preferences_to(&path, &prefs).unwrap();
        assert_eq!(load_preferences_from(&path), Some(prefs));
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_preferences_from(&dir.path().join(PREFERENCES_FILE)), None);
    }

    #[test]
    fn corrupt_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_preferences_from(&path), None);
    }

    #[test]
    fn saving_over_a_directory_fails_with_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_preferences_to(dir.path(), &Preferences::default()).unwrap_err();
        assert!(matches!(err, PersistSaveError::Io(_)));
    }
}
