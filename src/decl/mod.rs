// Wed Aug 26 2026 - Alex

pub mod attrs;
pub mod error;
pub mod kind;
pub mod loader;
pub mod record;

pub use attrs::{CompoundAttrs, MemberAttrs};
pub use error::DeclError;
pub use kind::{DeclKind, Protection};
pub use loader::load_document;
pub use record::{CompoundRecord, DeclarationForest, MemberRecord};
