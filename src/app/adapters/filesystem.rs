//! Filesystem adapter for transaction input and report output
//!
//! Input files are expected to be UTF-8. Files that are not valid UTF-8 are
//! decoded as Latin-1, which maps every byte to a character and never fails.

use crate::{Error, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Read a text file and split it into lines
pub async fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_text(path).await?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Read a text file with UTF-8 decoding and Latin-1 fallback
pub async fn read_text(path: &Path) -> Result<String> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let bytes = fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

    Ok(decode_text(bytes, path))
}

/// Decode bytes as UTF-8, falling back to Latin-1
pub fn decode_text(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(text),
        Err(error) => {
            warn!(
                "{} is not valid UTF-8 ({}), decoding as Latin-1",
                path.display(),
                error.utf8_error()
            );
            error.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Write text to a file, creating parent directories as needed
pub async fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", parent.display()),
                e,
            )
        })?;
    }

    fs::write(path, content)
        .await
        .map_err(|e| Error::io(format!("Failed to write file {}", path.display()), e))?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_decode_utf8_strips_bom() {
        let bytes = "\u{feff}A|B".as_bytes().to_vec();
        assert_eq!(decode_text(bytes, Path::new("x")), "A|B");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        let bytes = vec![b'N', 0xE4, b'h'];
        assert_eq!(decode_text(bytes, Path::new("x")), "Näh");
    }

    #[tokio::test]
    async fn test_write_then_read_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.txt");

        write_text(&path, "line one\nline two\n").await.unwrap();
        let lines = read_lines(&path).await.unwrap();

        assert_eq!(lines, vec!["line one", "line two"]);
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let result = read_text(Path::new("/no/such/file.txt")).await;
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_write_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let result = write_text(&blocker.join("report.txt"), "data").await;
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
