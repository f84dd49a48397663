//! On-disk save record and per-night journal files.
//! This module exists to own paths and atomic writes.
//! It does not decide when progress changes; the core reports that.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use night_core::{InputJournal, Progress};
use tracing::{info, warn};

const SAVE_FILE_NAME: &str = "save.json";
const JOURNAL_FILE_NAME: &str = "last_night.journal.json";

fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "NightShift").map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_save_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(SAVE_FILE_NAME))
}

pub fn default_journal_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(JOURNAL_FILE_NAME))
}

/// A missing or unreadable save starts a fresh game on night 1.
pub fn load_or_default(path: &Path) -> Progress {
    match fs::read_to_string(path) {
        Ok(text) => Progress::parse_or_default(&text),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no save record yet");
            Progress::default()
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "save record unreadable");
            Progress::default()
        }
    }
}

pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)
}

pub fn save_progress(path: &Path, progress: &Progress) -> io::Result<()> {
    write_atomic(path, &progress.to_json())
}

pub fn save_journal(path: &Path, journal: &InputJournal) -> io::Result<()> {
    let json = serde_json::to_string(journal).map_err(io::Error::other)?;
    write_atomic(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use night_core::{NightMode, PlayerSignals};
    use tempfile::tempdir;

    #[test]
    fn saved_progress_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("save.json");
        let progress = Progress { current_night: 4, custom_unlocked: true, ..Progress::default() };

        save_progress(&path, &progress).unwrap();
        assert_eq!(load_or_default(&path), progress);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn missing_or_corrupt_save_falls_back_to_night_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        assert_eq!(load_or_default(&path), Progress::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_or_default(&path), Progress::default());
    }

    #[test]
    fn journal_is_written_as_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("night.journal.json");
        let mut journal = InputJournal::new(8, Progress::default());
        journal.append_start(NightMode::Continue);
        journal.append_frame(33, PlayerSignals::default());

        save_journal(&path, &journal).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let back: InputJournal = serde_json::from_str(&text).unwrap();
        assert_eq!(back, journal);
    }
}
