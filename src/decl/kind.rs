// Wed Aug 26 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration kind as tagged by the documentation-extraction tool.
/// Kind strings this tool has no rule for map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DeclKind {
    Class,
    Struct,
    Union,
    Namespace,
    Group,
    Page,
    File,
    Example,
    Function,
    Variable,
    Enum,
    Typedef,
    Define,
    Other,
}

impl From<String> for DeclKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "class" => DeclKind::Class,
            "struct" => DeclKind::Struct,
            "union" => DeclKind::Union,
            "namespace" => DeclKind::Namespace,
            "group" => DeclKind::Group,
            "page" => DeclKind::Page,
            "file" => DeclKind::File,
            "example" => DeclKind::Example,
            "function" => DeclKind::Function,
            "variable" => DeclKind::Variable,
            "enum" => DeclKind::Enum,
            "typedef" => DeclKind::Typedef,
            "define" => DeclKind::Define,
            _ => DeclKind::Other,
        }
    }
}

impl DeclKind {
    pub fn is_class_like(self) -> bool {
        matches!(self, DeclKind::Class | DeclKind::Struct)
    }

    // Compound kinds that carry no linkable declarations of their own
    pub fn is_ignored_compound(self) -> bool {
        matches!(
            self,
            DeclKind::Page | DeclKind::File | DeclKind::Example | DeclKind::Union
        )
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclKind::Class => "class",
            DeclKind::Struct => "struct",
            DeclKind::Union => "union",
            DeclKind::Namespace => "namespace",
            DeclKind::Group => "group",
            DeclKind::Page => "page",
            DeclKind::File => "file",
            DeclKind::Example => "example",
            DeclKind::Function => "function",
            DeclKind::Variable => "variable",
            DeclKind::Enum => "enum",
            DeclKind::Typedef => "typedef",
            DeclKind::Define => "define",
            DeclKind::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// C++ access specifier attached to members and class-like compounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protection {
    #[default]
    Public,
    Protected,
    Private,
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Protection::Public => "public",
            Protection::Protected => "protected",
            Protection::Private => "private",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_json() {
        let kind: DeclKind = serde_json::from_str("\"class\"").unwrap();
        assert_eq!(kind, DeclKind::Class);

        let kind: DeclKind = serde_json::from_str("\"define\"").unwrap();
        assert_eq!(kind, DeclKind::Define);
    }

    #[test]
    fn test_unknown_kind_maps_to_other() {
        let kind: DeclKind = serde_json::from_str("\"interface\"").unwrap();
        assert_eq!(kind, DeclKind::Other);
    }

    #[test]
    fn test_ignored_compounds() {
        assert!(DeclKind::Page.is_ignored_compound());
        assert!(DeclKind::File.is_ignored_compound());
        assert!(DeclKind::Example.is_ignored_compound());
        assert!(DeclKind::Union.is_ignored_compound());
        assert!(!DeclKind::Class.is_ignored_compound());
        assert!(!DeclKind::Namespace.is_ignored_compound());
    }

    #[test]
    fn test_protection_default_is_public() {
        assert_eq!(Protection::default(), Protection::Public);
    }
}
