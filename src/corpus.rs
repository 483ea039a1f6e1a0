use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::tokenize::casefold;

/// Name used for the results directory when all corpora are analyzed together.
pub const COMBINED_NAME: &str = "combined";

///Collects corpus files. A file path is returned as-is; a directory is walked
///recursively for `.txt` files, sorted by path.
pub fn collect_files(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| is_corpus_file(p))
        .collect();
    files.sort();
    files
}

fn is_corpus_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Reads a whole corpus file and case-folds it.
pub fn read_corpus(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(casefold(&content))
}

///Names a corpus in the results tree: its path below the walked `root` without the extension
///(`nested/a` for `root/nested/a.txt`), or just the file stem when `root` is the file itself.
pub fn corpus_name(root: &Path, file: &Path) -> String {
    let relative = match file.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.with_extension(""),
        _ => PathBuf::from(file.file_stem().unwrap_or_default()),
    };
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        COMBINED_NAME.to_string()
    } else {
        parts.join("/")
    }
}
