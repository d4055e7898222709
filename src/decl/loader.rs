// Wed Aug 26 2026 - Alex

use crate::decl::{DeclError, DeclarationForest};
use std::fs;
use std::path::Path;

/// Reads one declaration-forest document. Any failure to read or parse is
/// reported as `UnreadableDocument`; callers continue with the next input.
pub fn load_document(path: &Path) -> Result<DeclarationForest, DeclError> {
    let text = fs::read_to_string(path).map_err(|e| DeclError::UnreadableDocument {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&text).map_err(|e| DeclError::UnreadableDocument {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file() {
        let err = load_document(Path::new("/nonexistent/forest.json")).unwrap_err();
        assert!(matches!(err, DeclError::UnreadableDocument { .. }));
    }

    #[test]
    fn test_load_malformed_document() {
        let mut path = std::env::temp_dir();
        path.push("abi_surface_mapper_malformed.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"not a forest").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DeclError::UnreadableDocument { .. }));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_valid_document() {
        let mut path = std::env::temp_dir();
        path.push("abi_surface_mapper_valid.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"{"compounds": [{"kind": "namespace", "name": "ns"}]}"#)
            .unwrap();

        let forest = load_document(&path).unwrap();
        assert_eq!(forest.compounds.len(), 1);

        fs::remove_file(&path).ok();
    }
}
