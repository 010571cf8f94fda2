//! Local store for puzzle inputs

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// File-based store for puzzle inputs
///
/// Directory structure: `{root}/{year}/day{day:02}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the input file for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input, or None if the file does not exist
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.input_path(year, day);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("/data/aoc"));

        let path = store.input_path(2025, 1);
        assert_eq!(path, PathBuf::from("/data/aoc/2025/day01.txt"));

        let path = store.input_path(2025, 25);
        assert_eq!(path, PathBuf::from("/data/aoc/2025/day25.txt"));
    }

    #[test]
    fn test_missing_input_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2025, 1));
        assert!(store.get(2025, 1).unwrap().is_none());
    }

    #[test]
    fn test_present_input_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let input = "test input\nline 2\n";
        let path = store.input_path(2025, 3);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, input).unwrap();

        assert!(store.contains(2025, 3));
        assert_eq!(store.get(2025, 3).unwrap(), Some(input.to_string()));
    }
}
