// Directory scanner — find the image files a loader should read
//
//   train_root/
//     cat/
//       cat_001.png
//       cat_002.png
//     dog/
//       dog_001.png
//
//   test_root/
//     0001.png
//     0002.png
//
// Only files directly inside the scanned directory are returned; nested
// directories are not descended into and dot-prefixed files are skipped. A
// directory that does not exist yields no files, the same way an unmatched
// glob would.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{DataError, Result};

/// Whether `path` has one of the (lowercase) `extensions`.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            extensions.iter().any(|x| *x == e)
        })
        .unwrap_or(false)
}

/// Dot-prefixed names (`.DS_Store`, `._img.png`) are never dataset files.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// Image files under `root/<class_name>/`, in directory enumeration order.
pub fn scan_class_dir(root: &Path, class_name: &str, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let dir = root.join(class_name);
    let files = list_images(&dir, extensions)?;
    if files.is_none() {
        warn!("class directory {} does not exist", dir.display());
    }
    Ok(files.unwrap_or_default())
}

/// Image files directly under `root`, sorted by full path.
pub fn scan_flat_dir(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = list_images(root, extensions)?.unwrap_or_default();
    files.sort();
    Ok(files)
}

/// `None` when `dir` does not exist.
fn list_images(dir: &Path, extensions: &[String]) -> Result<Option<Vec<PathBuf>>> {
    let rd = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DataError::io(dir, e)),
    };

    let mut out = Vec::new();
    for entry in rd {
        let entry = entry.map_err(|e| DataError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && !is_hidden(&path) && has_extension(&path, extensions) {
            out.push(path);
        }
    }
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts() -> Vec<String> {
        vec!["png".to_string(), "jpg".to_string()]
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(has_extension(Path::new("a/b.PNG"), &exts()));
        assert!(has_extension(Path::new("b.jpg"), &exts()));
        assert!(!has_extension(Path::new("b.txt"), &exts()));
        assert!(!has_extension(Path::new("noext"), &exts()));
    }

    #[test]
    fn class_dir_filters_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let cat = dir.path().join("cat");
        fs::create_dir(&cat).unwrap();
        fs::write(cat.join("a.png"), b"").unwrap();
        fs::write(cat.join("b.jpg"), b"").unwrap();
        fs::write(cat.join("notes.txt"), b"").unwrap();
        fs::create_dir(cat.join("nested.png")).unwrap();

        let mut files = scan_class_dir(dir.path(), "cat", &exts()).unwrap();
        files.sort();
        assert_eq!(files, vec![cat.join("a.png"), cat.join("b.jpg")]);
    }

    #[test]
    fn hidden_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let cat = dir.path().join("cat");
        fs::create_dir(&cat).unwrap();
        fs::write(cat.join("a.png"), b"").unwrap();
        fs::write(cat.join("._a.png"), b"").unwrap();
        fs::write(dir.path().join("x.png"), b"").unwrap();
        fs::write(dir.path().join(".hidden.png"), b"").unwrap();

        let files = scan_class_dir(dir.path(), "cat", &exts()).unwrap();
        assert_eq!(files, vec![cat.join("a.png")]);

        let files = scan_flat_dir(dir.path(), &exts()).unwrap();
        assert_eq!(files, vec![dir.path().join("x.png")]);
    }

    #[test]
    fn missing_class_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = scan_class_dir(dir.path(), "ghost", &exts()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn flat_dir_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.png", "b.png"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let files = scan_flat_dir(dir.path(), &exts()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }
}
