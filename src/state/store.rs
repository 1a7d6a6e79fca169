use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Profile;

/// Storage strategy for the body profile.
///
/// Injected at construction time so callers never reach for an ambient
/// backend toggle; swapping stores is a constructor argument, and tests
/// can drop in an in-memory implementation.
pub trait ProfileStore {
    /// Load the stored profile. `Ok(None)` means no profile exists yet.
    fn load(&self) -> Result<Option<Profile>>;

    /// Persist the profile, replacing any previous one.
    fn save(&self, profile: &Profile) -> Result<()>;
}

/// File-backed profile store using pretty-printed JSON.
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> Result<Option<Profile>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let profile: Profile = serde_json::from_str(&content)?;
        Ok(Some(profile))
    }

    fn save(&self, profile: &Profile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_profile() -> Profile {
        Profile {
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            age: Some(30),
            gender: Some("male".to_string()),
            workout_frequency: Some("3-5".to_string()),
            difficulty: Some("medium".to_string()),
            targets: None,
        }
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProfileStore::new(dir.path().join("profile.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let store = JsonProfileStore::new(file.path());

        store.save(&sample_profile()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, sample_profile());
    }

    #[test]
    fn test_load_partial_profile() {
        let json = r#"{"weightKg": 82.5, "gender": "female"}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = JsonProfileStore::new(file.path());
        let profile = store.load().unwrap().unwrap();
        assert_eq!(profile.weight_kg, Some(82.5));
        assert_eq!(profile.gender.as_deref(), Some("female"));
        assert!(profile.height_cm.is_none());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let store = JsonProfileStore::new(file.path());
        assert!(store.load().is_err());
    }

    #[test]
    fn test_targets_write_back_survives_roundtrip() {
        use crate::calculator::fallback_targets;

        let file = NamedTempFile::new().unwrap();
        let store = JsonProfileStore::new(file.path());

        let mut profile = sample_profile();
        profile.targets = Some(fallback_targets());
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.targets, Some(fallback_targets()));
    }
}
