// Wed Aug 26 2026 - Alex

use crate::decl::{DeclKind, Protection};
use serde::{Deserialize, Serialize};

/// One serialized declaration-forest document, as handed over by the
/// documentation-extraction tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclarationForest {
    #[serde(default)]
    pub compounds: Vec<CompoundRecord>,
}

/// Top-level compound: class, struct, namespace, group, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundRecord {
    pub kind: DeclKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub protection: Option<Protection>,
    #[serde(default)]
    pub has_template_params: bool,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

/// Member declaration inside a compound
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub kind: DeclKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub protection: Option<Protection>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_inline: bool,
    #[serde(default)]
    pub has_template_params: bool,
}
