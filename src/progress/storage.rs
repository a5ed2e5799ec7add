use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

use super::sheet::AnswerSheet;

const ANSWERS_FILE: &str = "mcq-answers.json";
const PANEL_FILE: &str = "mcq-panel-open.json";

/// Durable key-value storage for quiz progress: one JSON file per key,
/// rooted at a single directory.
///
/// Answers are stored as a bare JSON array of length N with elements
/// `null` or 0-3; the panel preference is a bare JSON boolean.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    answers_path: PathBuf,
    panel_path: PathBuf,
}

impl ProgressStore {
    /// Store rooted at the default config directory (~/.config/quizdeck/)
    pub fn default_paths() -> Self {
        Self::in_dir(crate::bank::get_config_dir())
    }

    /// Store rooted at an arbitrary directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            answers_path: dir.join(ANSWERS_FILE),
            panel_path: dir.join(PANEL_FILE),
        }
    }

    /// Load saved answers.
    ///
    /// A missing file, unreadable file, corrupt JSON, or wrong element
    /// type all read as absent data; the caller starts fresh. Length and
    /// value-range checks belong to `AnswerSheet::restore`.
    pub fn load_answers(&self) -> Option<Vec<Option<u8>>> {
        read_json(&self.answers_path).ok()
    }

    /// Persist the sheet, written atomically so a crash mid-write never
    /// leaves a truncated file behind.
    pub fn save_answers(&self, sheet: &AnswerSheet) -> Result<()> {
        write_json(&self.answers_path, &sheet.as_slice())
    }

    /// Remove saved answers. A missing file counts as success.
    pub fn delete_answers(&self) -> Result<()> {
        match std::fs::remove_file(&self.answers_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!(
                    "Failed to delete saved answers at {}",
                    self.answers_path.display()
                )
            }),
        }
    }

    /// Load the study-panel preference. Absent or malformed reads as closed.
    pub fn load_panel_open(&self) -> bool {
        read_json(&self.panel_path).unwrap_or(false)
    }

    pub fn save_panel_open(&self, open: bool) -> Result<()> {
        write_json(&self.panel_path, &open)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer(&mut file, value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_store(name: &str) -> ProgressStore {
        let dir = env::temp_dir().join(format!("quizdeck_storage_{}", name));
        let _ = fs::remove_dir_all(&dir);
        ProgressStore::in_dir(dir)
    }

    #[test]
    fn test_load_missing_file_is_absent() {
        let store = temp_store("missing");
        assert_eq!(store.load_answers(), None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = temp_store("roundtrip");

        let mut sheet = AnswerSheet::new(4);
        sheet.set(0, 0);
        sheet.set(2, 3);
        store.save_answers(&sheet).unwrap();

        let loaded = store.load_answers().unwrap();
        assert_eq!(loaded, vec![Some(0), None, Some(3), None]);

        // Fed back through restore, the sheet reproduces element-wise
        let restored = AnswerSheet::restore(4, Some(loaded));
        assert_eq!(restored, sheet);
    }

    #[test]
    fn test_wire_format_is_bare_array() {
        let store = temp_store("wire");

        let mut sheet = AnswerSheet::new(3);
        sheet.set(1, 2);
        store.save_answers(&sheet).unwrap();

        let raw = fs::read_to_string(&store.answers_path).unwrap();
        assert_eq!(raw, "[null,2,null]");
    }

    #[test]
    fn test_corrupt_json_is_absent() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.answers_path.parent().unwrap()).unwrap();
        fs::write(&store.answers_path, "{not json").unwrap();
        assert_eq!(store.load_answers(), None);
    }

    #[test]
    fn test_wrong_shape_is_absent() {
        let store = temp_store("shape");
        fs::create_dir_all(store.answers_path.parent().unwrap()).unwrap();
        fs::write(&store.answers_path, "{\"answers\": [0, 1]}").unwrap();
        assert_eq!(store.load_answers(), None);

        fs::write(&store.answers_path, "[\"a\", \"b\"]").unwrap();
        assert_eq!(store.load_answers(), None);
    }

    #[test]
    fn test_delete_answers() {
        let store = temp_store("delete");

        let mut sheet = AnswerSheet::new(2);
        sheet.set(0, 1);
        store.save_answers(&sheet).unwrap();
        assert!(store.load_answers().is_some());

        store.delete_answers().unwrap();
        assert_eq!(store.load_answers(), None);

        // Deleting again is still fine
        store.delete_answers().unwrap();
    }

    #[test]
    fn test_panel_roundtrip_and_default() {
        let store = temp_store("panel");
        assert!(!store.load_panel_open());

        store.save_panel_open(true).unwrap();
        assert!(store.load_panel_open());

        store.save_panel_open(false).unwrap();
        assert!(!store.load_panel_open());
    }

    #[test]
    fn test_panel_malformed_defaults_closed() {
        let store = temp_store("panel_bad");
        fs::create_dir_all(store.panel_path.parent().unwrap()).unwrap();
        fs::write(&store.panel_path, "\"open\"").unwrap();
        assert!(!store.load_panel_open());
    }
}
