use std::{fs, path::Path};

use anyhow::Context as _;

/// File name used when `render` is given an output directory instead of a path.
pub fn timestamped_name(unix_millis: i64) -> String {
    format!("github-contributions-gol-{unix_millis}.svg")
}

/// Write through `write` into a fresh temp file next to `path`, then persist it over `path`.
///
/// A failed write never leaves a truncated file at `path`; the temp file is removed on drop.
pub fn commit<F>(path: &Path, write: F) -> anyhow::Result<()>
where
    F: FnOnce(&Path) -> anyhow::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("create output dir '{}'", dir.display()))?;

    let temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in '{}'", dir.display()))?;
    write(temp.path())?;
    temp.persist(path)
        .with_context(|| format!("persist output to '{}'", path.display()))?;
    Ok(())
}

pub fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    commit(path, |tmp| {
        fs::write(tmp, text).with_context(|| format!("write '{}'", tmp.display()))
    })
}
