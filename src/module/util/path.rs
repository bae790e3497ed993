//! Path Operations Module
//!
//! This module handles path operations for directories and files.

use std::path::PathBuf;

/// Join Paths
///
/// This function takes a slice of strings as input and joins them into a single path string.
/// It uses the PathBuf type to handle platform-specific separators and conversions.
/// It returns the joined path as a String, or panics if the conversion fails.
pub fn join(paths: &[&str]) -> String {
    let mut path: PathBuf = PathBuf::new();
    for p in paths {
        path.push(p);
    }
    path.into_os_string().into_string().unwrap()
}

pub mod dir {
    //! Directory Operations Submodule

    use std::fs;
    use std::path::Path;

    use super::{FieldcamDir, FieldcamPath};
    use crate::module::define;

    /// Create a directory from a list of path segments.
    ///
    /// Returns `Some(path)` if the directory creation succeeds, or `None` if it fails.
    pub fn create_dir_from_path_list(paths: &[&str]) -> Option<String> {
        let path = super::join(paths);
        match fs::create_dir_all(Path::new(&path)) {
            Ok(_) => Some(path),
            Err(_) => None,
        }
    }

    /// Create a subdirectory in whichever parent directory exists.
    ///
    /// If `dir1` exists it is used as the parent, otherwise `dir2` is.
    pub fn create_subdir_in_either_dir(dir1: &str, dir2: &str, name: &str) -> Option<String> {
        let exist: bool = Path::new(dir1).is_dir();
        let parent: &str = match exist {
            true => dir1,
            false => dir2,
        };
        create_dir_from_path_list(&[parent, name])
    }

    /// Create the base data directory for the application.
    ///
    /// Uses the persistent parent when it exists, falling back to the
    /// ephemeral one. Panics if neither can be created.
    pub fn create_base_dir() -> String {
        let res = create_subdir_in_either_dir(
            define::path::PERSISTENT_DIR,
            define::path::EPHEMERAL_DIR,
            define::system::NAME,
        );
        match res {
            Some(path) => path,
            None => panic!("Can't Create Base Dir."),
        }
    }

    /// Create the application directory layout and return the path set.
    ///
    /// Layout under the base directory: `originals/`, `thumbnails/`,
    /// `blank/` and `log/`. All are created on startup if absent.
    pub fn create_app_sub_dir() -> FieldcamPath {
        let base_dir = create_base_dir();
        create_sub_dirs(&base_dir)
    }

    /// Create the fieldcam subdirectories under an explicit base directory.
    pub fn create_sub_dirs(base_dir: &str) -> FieldcamPath {
        let original_dir =
            create_dir_from_path_list(&[base_dir, define::path::ORIGINAL_DIR]).unwrap();
        let thumbnail_dir =
            create_dir_from_path_list(&[base_dir, define::path::THUMBNAIL_DIR]).unwrap();
        let blank_dir = create_dir_from_path_list(&[base_dir, define::path::BLANK_DIR]).unwrap();
        let log_dir = create_dir_from_path_list(&[base_dir, define::path::LOG_DIR]).unwrap();
        FieldcamPath {
            dir: FieldcamDir {
                base: base_dir.to_string(),
                original: original_dir,
                thumbnail: thumbnail_dir,
                blank: blank_dir,
                log: log_dir,
            },
        }
    }
}

/// List captured originals, newest first.
///
/// Only plain files are returned. Capture filenames are timestamps, so the
/// descending filename sort is reverse chronological order. This is the
/// listing the picture gallery reads.
pub fn list_originals(dir: &str) -> Vec<String> {
    let mut names: Vec<String> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect(),
        Err(_) => vec![],
    };
    names.sort();
    names.reverse();
    names
}

/// Paths of Resources
///
/// This struct represents the paths of the resources used by the application.
#[derive(Debug, Clone)]
pub struct FieldcamPath {
    /// Directories Paths
    pub dir: FieldcamDir,
}

/// Paths of Directories
///
/// This struct represents the paths of the directories used by the application.
#[derive(Debug, Clone)]
pub struct FieldcamDir {
    /// Base Data Directory Path
    pub base: String,
    /// Captured Originals Directory Path
    pub original: String,
    /// Thumbnails Directory Path
    pub thumbnail: String,
    /// Blank Frame Quarantine Directory Path
    pub blank: String,
    /// Log Directory Path
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_create_dir_from_path_list() {
        dir::create_dir_from_path_list(&["/tmp", "fieldcamtest", "test_create_dir_from_path_list"]);

        // Assert that the directory was created
        assert!(Path::new("/tmp/fieldcamtest/test_create_dir_from_path_list").is_dir());
    }

    #[test]
    fn test_create_subdir_in_either_dir() {
        dir::create_subdir_in_either_dir(
            "/tmp/fieldcamtest1",
            "/tmp/fieldcamtest",
            "test_create_subdir_in_either_dir",
        );

        // The first parent doesn't exist, so the second one must be used
        assert!(Path::new("/tmp/fieldcamtest/test_create_subdir_in_either_dir").is_dir());
    }

    #[test]
    fn test_create_sub_dirs() {
        let res = dir::create_sub_dirs("/tmp/fieldcamtest/test_create_sub_dirs");

        assert!(Path::new("/tmp/fieldcamtest/test_create_sub_dirs/originals").is_dir());
        assert!(Path::new("/tmp/fieldcamtest/test_create_sub_dirs/thumbnails").is_dir());
        assert!(Path::new("/tmp/fieldcamtest/test_create_sub_dirs/blank").is_dir());
        assert!(Path::new("/tmp/fieldcamtest/test_create_sub_dirs/log").is_dir());
        assert_eq!(
            res.dir.original,
            "/tmp/fieldcamtest/test_create_sub_dirs/originals"
        );
        assert_eq!(res.dir.blank, "/tmp/fieldcamtest/test_create_sub_dirs/blank");
    }

    #[test]
    fn test_list_originals() {
        let base = "/tmp/fieldcamtest/test_list_originals";
        fs::create_dir_all(base).unwrap();
        fs::write(join(&[base, "20230101T000000000000.jpg"]), b"a").unwrap();
        fs::write(join(&[base, "20230101T000000000002.jpg"]), b"c").unwrap();
        fs::write(join(&[base, "20230101T000000000001.jpg"]), b"b").unwrap();
        // Subdirectories must not appear in the listing
        fs::create_dir_all(join(&[base, "thumbnails"])).unwrap();

        let names = list_originals(base);
        assert_eq!(
            names,
            vec![
                "20230101T000000000002.jpg",
                "20230101T000000000001.jpg",
                "20230101T000000000000.jpg",
            ]
        );

        // A missing directory lists as empty
        assert!(list_originals("/tmp/fieldcamtest/no_such_dir").is_empty());
    }

    #[test]
    fn test_path_join() {
        assert_eq!(join(&["/test/", "test"]), "/test/test");
        assert_eq!(join(&["test", "test", "test"]), "test/test/test");
        assert_eq!(join(&["/test/", "test/"]), "/test/test/");
        assert_eq!(
            join(&["./test/", "test/", "test.txt"]),
            "./test/test/test.txt"
        );
    }
}
