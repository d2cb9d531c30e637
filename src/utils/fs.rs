use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Read a whole file as UTF-8.
pub fn read_text(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Write text as UTF-8, creating missing parent directories.
pub fn write_text(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/page.html");
        write_text(&path, "<p>Füchse</p>").unwrap();
        assert_eq!(read_text(&path).unwrap(), "<p>Füchse</p>");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
