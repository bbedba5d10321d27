//! File system utility functions
//!
//! Thin wrappers over `std::fs` that attach the path and operation to errors.

use crate::error::{Result, ToolError};
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug, Clone, Copy)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub const fn new() -> Self {
        Self
    }

    /// Check if a path exists and is a file
    pub fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_file()
    }

    /// Check if a path exists and is a directory
    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }

    /// Read file contents as string
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path).map_err(|e| ToolError::file_system("read", path, e))
    }

    /// Truncate a file and write new contents to it
    #[instrument(skip(self, contents))]
    pub fn overwrite_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> Result<()> {
        let path = path.as_ref();
        debug!("Writing file: {}", path.display());
        fs::write(path, contents).map_err(|e| ToolError::file_system("write", path, e))
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a directory path so that it always ends with the path separator
pub fn with_trailing_separator(dir: &Path) -> PathBuf {
    let mut rendered = dir.as_os_str().to_os_string();
    if !rendered.to_string_lossy().ends_with(MAIN_SEPARATOR) {
        rendered.push(MAIN_SEPARATOR.to_string());
    }
    PathBuf::from(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "a much longer original content").unwrap();

        fs_utils.overwrite_file(&file_path, "short").unwrap();
        let read_content = fs_utils.read_file_to_string(&file_path).unwrap();

        assert_eq!(read_content, "short");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let err = fs_utils
            .read_file_to_string(temp_dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, ToolError::FileSystem { ref operation, .. } if operation == "read"));
    }

    #[test]
    fn test_is_file_and_is_dir() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("test.txt");
        let dir_path = temp_dir.path().join("testdir");

        fs::write(&file_path, "content").unwrap();
        fs::create_dir(&dir_path).unwrap();

        assert!(fs_utils.is_file(&file_path));
        assert!(!fs_utils.is_dir(&file_path));

        assert!(fs_utils.is_dir(&dir_path));
        assert!(!fs_utils.is_file(&dir_path));

        assert!(!fs_utils.is_file("nonexistent"));
        assert!(!fs_utils.is_dir("nonexistent"));
    }

    #[test]
    fn test_with_trailing_separator() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(
            with_trailing_separator(Path::new("src")),
            PathBuf::from(format!("src{sep}"))
        );
        assert_eq!(
            with_trailing_separator(Path::new(&format!("src{sep}"))),
            PathBuf::from(format!("src{sep}"))
        );
    }
}
