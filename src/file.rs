// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `<out_dir>/<slug>.html`
pub fn fighter_page_path(out_dir: &Path, slug: &str) -> PathBuf {
    out_dir.join(format!("{slug}.html"))
}

/// Create parent dirs as needed, then overwrite `path` with UTF-8 `contents`.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)
        .map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
    Ok(())
}

/// Display form relative to `base` when possible ("fighters/x.html").
pub fn display_relative(path: &Path, base: &Path) -> String {
    let shown = path.strip_prefix(base).unwrap_or(path);
    shown.to_string_lossy().replace('\\', "/")
}
