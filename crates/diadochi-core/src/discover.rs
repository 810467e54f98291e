//! Save-file discovery.
//!
//! Resolves search locations (explicit arguments or the standard Old World save
//! directories) and enumerates `.zip` save archives, oldest first.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Subdirectories under the user's home where Old World keeps saves. The game
/// has used both `Save` and `Saves` across versions, and macOS installs write
/// under `Library/Application Support` instead of `Documents`.
const SAVE_SUBDIRS: &[&[&str]] = &[
    &["Documents", "My Games", "OldWorld", "Save"],
    &["Documents", "My Games", "OldWorld", "Saves"],
    &["Library", "Application Support", "OldWorld", "Save"],
    &["Library", "Application Support", "OldWorld", "Saves"],
];

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Default save directories that actually exist on this machine. Empty when the
/// home directory cannot be determined or no candidate exists.
pub fn default_search_paths() -> Vec<PathBuf> {
    let Some(home) = home_dir() else {
        tracing::warn!("could not determine home directory");
        return Vec::new();
    };

    SAVE_SUBDIRS
        .iter()
        .map(|parts| parts.iter().fold(home.clone(), |p, part| p.join(part)))
        .filter(|p| p.is_dir())
        .collect()
}

fn is_save_archive(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zip")
}

fn mtime(path: &Path) -> SystemTime {
    path.metadata()
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Enumerate save archives under the given paths.
///
/// A path that is itself a `.zip` file is included directly; a directory is
/// walked recursively. Nonexistent paths contribute nothing (open failures
/// surface later, per archive). Result is sorted by modification time,
/// oldest first, for stable report ordering.
pub fn find_save_files(search_paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for search_path in search_paths {
        if search_path.is_file() {
            if is_save_archive(search_path) {
                files.push(search_path.clone());
            }
        } else if search_path.is_dir() {
            let walk = walkdir::WalkDir::new(search_path)
                .min_depth(1)
                .follow_links(false);
            for entry in walk.into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_file() && is_save_archive(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            tracing::debug!(path = %search_path.display(), "search path does not exist");
        }
    }

    files.sort_by_key(|p| mtime(p));
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn finds_zip_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("autosave")).unwrap();
        touch(&dir.path().join("game1.zip"));
        touch(&dir.path().join("autosave").join("game2.zip"));
        touch(&dir.path().join("notes.txt"));

        let files = find_save_files(&[dir.path().to_path_buf()]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "zip"));
    }

    #[test]
    fn direct_file_path_included_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let save = dir.path().join("manual.zip");
        touch(&save);

        let files = find_save_files(&[save.clone()]);
        assert_eq!(files, vec![save]);
    }

    #[test]
    fn direct_non_archive_path_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("readme.txt");
        touch(&txt);

        assert!(find_save_files(&[txt]).is_empty());
    }

    #[test]
    fn nonexistent_path_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");

        assert!(find_save_files(&[missing]).is_empty());
    }

    #[test]
    fn sorted_by_modification_time_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let newer = dir.path().join("newer.zip");
        let older = dir.path().join("older.zip");
        touch(&newer);
        touch(&older);

        let past = SystemTime::now() - Duration::from_secs(3600);
        File::options()
            .write(true)
            .open(&older)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let files = find_save_files(&[dir.path().to_path_buf()]);
        assert_eq!(files, vec![older, newer]);
    }
}
