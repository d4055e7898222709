// Wed Aug 26 2026 - Alex

use crate::classify::ClassifyContext;
use crate::decl::{DeclKind, Protection};

// Doxygen emits a mangled memberdef when it trips over __attribute__
const MISPARSE_NAMES: [&str; 1] = ["__attribute__"];

/// One predicate in the classification chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// enums and typedefs carry no binary footprint
    KindFilter,
    /// templates have no single ABI-visible symbol
    TemplateFilter,
    /// inline functions have no externally linked symbol
    InlineFilter,
    /// compiler-internal artifacts mis-parsed by the extraction tool
    NoiseFilter,
    /// only declarations under a public-header path start out visible
    LocationGate,
    /// private members are never exported
    ProtectionGate,
    /// inside a class, only functions and static data are symbol-level ABI
    MemberOfClassGate,
    /// preprocessor macros leave no linkable symbol
    MacroGate,
    /// fixed allow-list of known compiler-behavior exceptions
    OverrideGate,
}

/// What a gate does to the running classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Pass,
    Deny,
    Skip,
    ForcePublic,
}

/// Evaluation order. Skips come first so that declarations with no binary
/// footprint never reach the visibility gates; the override is last so it
/// wins over every deny.
pub const GATE_CHAIN: [Gate; 9] = [
    Gate::KindFilter,
    Gate::TemplateFilter,
    Gate::InlineFilter,
    Gate::NoiseFilter,
    Gate::LocationGate,
    Gate::ProtectionGate,
    Gate::MemberOfClassGate,
    Gate::MacroGate,
    Gate::OverrideGate,
];

impl Gate {
    pub fn apply(self, ctx: &ClassifyContext<'_>) -> GateAction {
        let attrs = ctx.attrs;
        match self {
            Gate::KindFilter => {
                if matches!(attrs.kind, DeclKind::Enum | DeclKind::Typedef) {
                    GateAction::Skip
                } else {
                    GateAction::Pass
                }
            }
            Gate::TemplateFilter => {
                if attrs.has_template_params || ctx.enclosing_templated {
                    GateAction::Skip
                } else {
                    GateAction::Pass
                }
            }
            Gate::InlineFilter => {
                if attrs.kind == DeclKind::Function && attrs.is_inline {
                    GateAction::Skip
                } else {
                    GateAction::Pass
                }
            }
            Gate::NoiseFilter => {
                if MISPARSE_NAMES.contains(&attrs.name.as_str()) {
                    GateAction::Skip
                } else {
                    GateAction::Pass
                }
            }
            Gate::LocationGate => {
                if is_public_header_path(&attrs.location) {
                    GateAction::Pass
                } else {
                    GateAction::Deny
                }
            }
            Gate::ProtectionGate => {
                if attrs.protection == Protection::Private {
                    GateAction::Deny
                } else {
                    GateAction::Pass
                }
            }
            Gate::MemberOfClassGate => {
                if ctx.enclosing_is_class()
                    && attrs.kind != DeclKind::Function
                    && !attrs.is_static
                {
                    GateAction::Skip
                } else {
                    GateAction::Pass
                }
            }
            Gate::MacroGate => {
                if attrs.kind == DeclKind::Define {
                    GateAction::Skip
                } else {
                    GateAction::Pass
                }
            }
            Gate::OverrideGate => {
                if ctx.overrides.contains(ctx.symbol) {
                    GateAction::ForcePublic
                } else {
                    GateAction::Pass
                }
            }
        }
    }
}

/// Public headers live under an `include` path segment
pub fn is_public_header_path(location: &str) -> bool {
    location.split('/').any(|segment| segment == "include")
}
