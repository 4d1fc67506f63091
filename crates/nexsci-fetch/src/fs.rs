use crate::error::{FetchError, Result};
use std::fs;
use std::path::Path;

/// Write `content` to `path` through a sibling temp file and a rename.
///
/// Missing parent directories are created. Concurrent writers to the same
/// path are not coordinated: the last rename wins.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::current_dir().map_err(|source| FetchError::Write {
            path: path.to_path_buf(),
            source,
        })?,
    };

    fs::create_dir_all(&parent).map_err(|source| FetchError::Write {
        path: parent.clone(),
        source,
    })?;

    let tmp_path = parent.join(format!(".tmp.{}.nexsci", uuid::Uuid::new_v4()));

    fs::write(&tmp_path, content).map_err(|source| FetchError::Write {
        path: tmp_path.clone(),
        source,
    })?;

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        FetchError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(())
}

pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| FetchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        atomic_write(&path, b"a,b\n1,2\n").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("table.csv");
        atomic_write(&path, b"x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
        assert_eq!(read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_to_string(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, FetchError::Read { .. }));
    }
}
