// Thu Aug 27 2026 - Alex

pub mod aggregate;
pub mod classify;
pub mod component;
pub mod config;
pub mod decl;
pub mod report;
pub mod utils;
pub mod walker;

pub use aggregate::SymbolAggregator;
pub use classify::{Classifier, Verdict};
pub use component::ComponentMapper;
pub use config::Config;
pub use decl::{load_document, DeclarationForest};
pub use report::ReportEmitter;
pub use walker::Walker;
