// Wed Aug 26 2026 - Alex

pub mod gates;
pub mod overrides;

pub use gates::{is_public_header_path, Gate, GateAction, GATE_CHAIN};
pub use overrides::default_publish_overrides;

use crate::decl::{DeclKind, MemberAttrs, Protection};
use std::collections::BTreeSet;

/// Outcome of classifying one declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No linkable symbol at all; recorded nowhere
    Skipped,
    /// Part of the component's exported binary interface
    Public,
    /// Present in the binary but free to change
    Private,
}

/// Everything one gate may look at: the declaration's validated attributes,
/// the enclosing compound, and the fully qualified symbol key.
pub struct ClassifyContext<'a> {
    pub attrs: &'a MemberAttrs,
    pub enclosing_kind: Option<DeclKind>,
    pub enclosing_templated: bool,
    pub symbol: &'a str,
    pub overrides: &'a BTreeSet<String>,
}

impl ClassifyContext<'_> {
    pub fn enclosing_is_class(&self) -> bool {
        self.enclosing_kind.is_some_and(DeclKind::is_class_like)
    }
}

/// The rule engine: an ordered chain of gates folded left to right with
/// early exit. Order is load-bearing; see `GATE_CHAIN`.
#[derive(Debug, Clone)]
pub struct Classifier {
    overrides: BTreeSet<String>,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            overrides: default_publish_overrides(),
        }
    }

    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            overrides: overrides.into_iter().collect(),
        }
    }

    pub fn classify(
        &self,
        attrs: &MemberAttrs,
        enclosing_kind: Option<DeclKind>,
        enclosing_templated: bool,
        symbol: &str,
    ) -> Verdict {
        let ctx = ClassifyContext {
            attrs,
            enclosing_kind,
            enclosing_templated,
            symbol,
            overrides: &self.overrides,
        };

        let folded = GATE_CHAIN.iter().try_fold(true, |public, gate| {
            match gate.apply(&ctx) {
                GateAction::Pass => Ok(public),
                GateAction::Deny => Ok(false),
                GateAction::Skip => Err(Verdict::Skipped),
                GateAction::ForcePublic => Err(Verdict::Public),
            }
        });

        match folded {
            Ok(true) => Verdict::Public,
            Ok(false) => Verdict::Private,
            Err(verdict) => verdict,
        }
    }

    /// Compound-level rule: a class-like compound is public when it sits
    /// under a public-header path and is not private-protected. Template
    /// compounds never reach this point (the walker skips them).
    pub fn classify_compound(&self, location: &str, protection: Protection) -> Verdict {
        if !is_public_header_path(location) {
            return Verdict::Private;
        }
        if protection == Protection::Private {
            return Verdict::Private;
        }
        Verdict::Public
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
