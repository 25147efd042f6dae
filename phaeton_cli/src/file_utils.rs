use std::path::{Path, PathBuf};

/// Lists the `.in` instance files of a dataset directory, sorted by name.
pub fn read_instance_folder(folder: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "in") {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance_folder() {
        let dir = std::env::temp_dir().join("phaeton_read_instance_folder");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("b_example.in"), "").unwrap();
        std::fs::write(dir.join("a_example.in"), "").unwrap();
        std::fs::write(dir.join("a_example.out"), "").unwrap();

        let files = read_instance_folder(&dir).unwrap();

        assert_eq!(
            files,
            vec![dir.join("a_example.in"), dir.join("b_example.in")]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
