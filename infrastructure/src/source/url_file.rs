//! Newline-delimited URL list reader

use census_domain::{Endpoint, parse_endpoint_list};
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading the URL list
#[derive(Error, Debug)]
pub enum UrlFileError {
    #[error("Error: file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Error while reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads endpoint base URLs from a plain text file, one per line
///
/// Lines are trimmed and blank lines skipped. Nothing else is validated.
#[derive(Debug, Clone)]
pub struct UrlFileReader {
    path: PathBuf,
}

impl UrlFileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the file and return its endpoints in file order
    pub fn read(&self) -> Result<Vec<Endpoint>, UrlFileError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => UrlFileError::NotFound(self.path.clone()),
            _ => UrlFileError::Read {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let endpoints = parse_endpoint_list(&text);
        debug!(
            "Read {} endpoints from {}",
            endpoints.len(),
            self.path.display()
        );
        Ok(endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_trims_and_skips_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(
            &path,
            "http://10.0.0.1:11434\n\n   \n  http://10.0.0.2:11434  \nhttp://10.0.0.1:11434\n",
        )
        .unwrap();

        let endpoints = UrlFileReader::new(&path).read().unwrap();
        let urls: Vec<&str> = endpoints.iter().map(|e| e.url()).collect();
        assert_eq!(
            urls,
            vec![
                "http://10.0.0.1:11434",
                "http://10.0.0.2:11434",
                "http://10.0.0.1:11434"
            ]
        );
    }

    #[test]
    fn test_blank_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(&path, "\n  \n\t\n").unwrap();

        assert!(UrlFileReader::new(&path).read().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let error = UrlFileReader::new(&path).read().unwrap_err();
        assert!(matches!(error, UrlFileError::NotFound(_)));
        assert!(error.to_string().contains("does not exist"));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempdir().unwrap();

        let error = UrlFileReader::new(dir.path()).read().unwrap_err();
        assert!(matches!(error, UrlFileError::Read { .. }));
    }

    #[test]
    fn test_non_utf8_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let error = UrlFileReader::new(&path).read().unwrap_err();
        assert!(matches!(error, UrlFileError::Read { .. }));
    }
}
