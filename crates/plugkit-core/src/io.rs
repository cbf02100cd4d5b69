use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Recursively copy the contents of `src` into `dst`, creating `dst` if needed.
///
/// Hidden files are copied like any other entry. On unix, symlinks are
/// recreated as symlinks rather than followed. Returns the number of
/// non-directory entries written.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize> {
    ensure_dir(dst)?;
    let mut copied = 0;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else if file_type.is_symlink() {
            copy_symlink(&src_path, &dst_path)?;
            copied += 1;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }

    debug!(src = %src.display(), dst = %dst.display(), copied, "copied directory");
    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = std::fs::read_link(src)?;
    std::os::unix::fs::symlink(target, dst)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    std::fs::copy(src, dst)?;
    Ok(())
}

/// Remove a file or directory tree. Returns true if something was removed.
pub fn remove_path(path: &Path) -> Result<bool> {
    let Ok(meta) = std::fs::symlink_metadata(path) else {
        return Ok(false);
    };
    if meta.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }
    debug!(path = %path.display(), "removed");
    Ok(true)
}

/// Split a markdown document into its YAML frontmatter and body.
///
/// Frontmatter must open on the first line with `---` and close with a
/// line that is exactly `---`. Returns `None` for the frontmatter when
/// either delimiter is missing.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let body = &rest[offset + line.len()..];
            return (Some(&rest[..offset]), body);
        }
        offset += line.len();
    }
    (None, content)
}
