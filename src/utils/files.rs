use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ensure the asset directory exists before a batch writes into it.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        println!("Created directory: {}", dir.display());
    }
    Ok(())
}

/// Enumerate the SVG files of a directory in lexical filename order.
pub fn list_svg_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            let is_svg = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));
            if path.is_file() && is_svg {
                Some(path)
            } else {
                None
            }
        })
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Write a final image atomically: temp sibling first, then rename.
///
/// A crash mid-write leaves at worst a `.tmp` sibling, never a truncated
/// file at the destination path.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_sibling(path);
    fs::write(&tmp, bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_svg_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zucchini_bake.svg"), "b").unwrap();
        fs::write(dir.path().join("apple_crumble.svg"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("banner.jpg"), "x").unwrap();

        let files = list_svg_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["apple_crumble.svg", "zucchini_bake.svg"]);
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("caprese_salad.jpg");

        write_atomic(&target, b"payload").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"payload");
        assert!(!dir.path().join("caprese_salad.jpg.tmp").exists());
    }

    #[test]
    fn atomic_write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("caprese_salad.jpg");

        write_atomic(&target, b"first").unwrap();
        write_atomic(&target, b"second").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"second");
    }
}
