//! File helpers for the front end.

use crate::ast::Metadata;
use crate::errors::{CompileError, ErrorKind};
use std::path::Path;

/// True if `path` names a readable file.
pub fn exists(path: impl AsRef<Path>) -> bool {
    std::fs::File::open(path.as_ref()).is_ok()
}

/// Reads a whole file as UTF-8 text.
///
/// Read failures come back as a [`CompileError`] located at line 1 of the
/// requested file.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, CompileError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        let display = path.display().to_string();
        CompileError::new(
            ErrorKind::Io {
                path: display.clone(),
                message: e.to_string(),
            },
            Metadata::new(display, 1, 1),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error_value() {
        let path = "/no/such/dir/prog.json";
        assert!(!exists(path));
        let err = read_file(path).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Io { .. }));
        assert_eq!(err.metadata.file, path);
    }

    #[test]
    fn reads_existing_file() {
        let path = std::env::temp_dir().join(format!("treelit-source-{}.txt", std::process::id()));
        std::fs::write(&path, "(seq)").unwrap();
        assert!(exists(&path));
        assert_eq!(read_file(&path).unwrap(), "(seq)");
        let _ = std::fs::remove_file(&path);
    }
}
