// Wed Aug 26 2026 - Alex

use crate::decl::DeclKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeclError {
    #[error("Unreadable document {path}: {reason}")]
    UnreadableDocument { path: PathBuf, reason: String },
    #[error("Missing required attribute `{attribute}` on {kind} record")]
    MissingAttribute {
        kind: DeclKind,
        attribute: &'static str,
    },
}
