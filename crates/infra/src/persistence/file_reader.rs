use std::{fs, path::Path};

use country_stats_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading data files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = FileReader::read_to_string(Path::new("/definitely/not/here.json")).unwrap_err();
        match err {
            InfrastructureError::FileRead { path, .. } => assert_eq!(path, Path::new("/definitely/not/here.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
