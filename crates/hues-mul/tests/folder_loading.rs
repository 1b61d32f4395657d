//! Loading tables from a real directory.

use std::path::{Path, PathBuf};

use hues_core::layout::GROUP_SIZE;
use hues_core::{Hues, HuesConfig, LoadError, RawBufferProvider};
use hues_mul::MulFolder;

/// A fresh, empty scratch directory removed again on drop.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("hues-mul-{name}-{}", std::process::id()));
        if dir.exists() {
            std::fs::remove_dir_all(&dir).expect("clear stale scratch dir");
        }
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        Self(dir)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.0) {
            eprintln!("failed to remove scratch dir {}: {e}", self.0.display());
        }
    }
}

#[test]
fn test_load_from_folder() {
    let dir = ScratchDir::new("load");
    let mut hues = vec![0u8; GROUP_SIZE * 2 + 10];
    hues[4..6].copy_from_slice(&0x7FFFu16.to_le_bytes());
    std::fs::write(dir.path().join("hues.mul"), &hues).expect("write hues");
    std::fs::write(dir.path().join("radarcol.mul"), [0x34, 0x12, 0x78, 0x56]).expect("write radar");

    let folder = MulFolder::new(dir.path());
    let loaded = Hues::load(&folder, &HuesConfig::default()).expect("load");
    assert_eq!(loaded.table.group_count(), 2);
    assert_eq!(loaded.hue_count(), 16);
    assert_eq!(loaded.radar_color(1), 0x5678);
    assert_eq!(loaded.table.entry(1).map(|e| e.colors[0]), Some(0x7FFF));
}

#[test]
fn test_missing_file_is_source_not_found() {
    let dir = ScratchDir::new("missing");
    std::fs::write(dir.path().join("hues.mul"), vec![0u8; GROUP_SIZE]).expect("write hues");

    let folder = MulFolder::new(dir.path());
    let err = Hues::load(&folder, &HuesConfig::default()).unwrap_err();
    match err {
        LoadError::SourceNotFound { path, source } => {
            assert_eq!(path, dir.path().join("radarcol.mul"));
            assert!(source.is_none());
        }
    }
}

#[test]
fn test_unreadable_file_is_source_not_found_with_cause() {
    let dir = ScratchDir::new("unreadable");
    std::fs::create_dir_all(dir.path().join("hues.mul")).expect("create dir");

    let folder = MulFolder::new(dir.path());
    let err = folder.open("hues.mul".as_ref()).unwrap_err();
    assert_eq!(err.path(), dir.path().join("hues.mul"));
    assert!(matches!(err, LoadError::SourceNotFound { source: Some(_), .. }));
    assert!(std::error::Error::source(&err).is_some());

    let err = Hues::load(&folder, &HuesConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::SourceNotFound { .. }));
}
