//! Output file writing.

use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::Result;

/// Write `text` to `path`, replacing any previous content.
///
/// The content is staged into a temporary file in the destination directory
/// and then persisted over the target, so an interrupted run never leaves a
/// truncated output file behind.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir()?,
    };

    let mut staged = NamedTempFile::new_in(&dir)?;
    staged.write_all(text.as_bytes())?;
    staged.flush()?;
    staged.persist(path).map_err(|e| e.error)?;

    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_text(&path, "uno\n\ndos").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "uno\n\ndos");
    }

    #[test]
    fn test_write_text_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_text(&path, "first run with longer content").unwrap();
        write_text(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_text_leaves_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_text(&path, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
