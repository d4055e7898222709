// Thu Aug 27 2026 - Alex

use crate::aggregate::SymbolAggregator;
use crate::classify::{Classifier, Verdict};
use crate::component::ComponentMapper;
use crate::decl::{
    CompoundAttrs, CompoundRecord, DeclKind, DeclarationForest, MemberAttrs, MemberRecord,
};

// Any of these markers in a compound's location drops the whole compound
const EXCLUDED_SEGMENTS: [&str; 3] = ["examples", "test", "tests"];
const EXCLUDED_MARKERS: [&str; 2] = ["[generated]", "[STL]"];

/// Single pass over a declaration forest. Feeds the component mapper and
/// the classifier, pushes results into the shared aggregator.
pub struct Walker<'a> {
    mapper: &'a ComponentMapper,
    classifier: &'a Classifier,
}

impl<'a> Walker<'a> {
    pub fn new(mapper: &'a ComponentMapper, classifier: &'a Classifier) -> Self {
        Self { mapper, classifier }
    }

    pub fn walk(&self, forest: &DeclarationForest, aggregator: &mut SymbolAggregator) {
        for compound in &forest.compounds {
            self.walk_compound(compound, aggregator);
        }
    }

    fn walk_compound(&self, compound: &CompoundRecord, aggregator: &mut SymbolAggregator) {
        if compound.kind.is_ignored_compound() {
            return;
        }

        match compound.kind {
            DeclKind::Group => {
                // Grouped declarations are free-standing: no enclosing scope
                for member in &compound.members {
                    self.walk_member(member, None, None, false, aggregator);
                }
            }
            DeclKind::Namespace => {
                let Some(scope) = compound.name.as_deref() else {
                    log::debug!("skipping unnamed namespace compound");
                    return;
                };
                for member in &compound.members {
                    self.walk_member(
                        member,
                        Some(scope),
                        Some(DeclKind::Namespace),
                        false,
                        aggregator,
                    );
                }
            }
            _ => self.walk_scoped_compound(compound, aggregator),
        }
    }

    fn walk_scoped_compound(&self, compound: &CompoundRecord, aggregator: &mut SymbolAggregator) {
        let attrs = match CompoundAttrs::from_record(compound) {
            Ok(attrs) => attrs,
            Err(e) => {
                log::debug!("skipping compound: {}", e);
                return;
            }
        };

        if is_excluded_location(&attrs.location) {
            log::debug!("excluded location: {}", attrs.location);
            return;
        }
        if attrs.has_template_params {
            return;
        }

        let Some(component) = self.mapper.map(&attrs.location) else {
            log::debug!("no component in: {}", attrs.location);
            return;
        };

        if self
            .classifier
            .classify_compound(&attrs.location, attrs.protection)
            != Verdict::Public
        {
            // A non-public compound contributes nothing; its members are
            // never visited
            return;
        }

        if attrs.kind.is_class_like() {
            // Compiler-generated per-type symbols, exported with the type
            aggregator.record(&component, true, &format!("vtable?for?{}*", attrs.name));
            aggregator.record(&component, true, &format!("typeinfo?for?{}*", attrs.name));
        }

        for member in &compound.members {
            self.walk_member(
                member,
                Some(&attrs.name),
                Some(attrs.kind),
                attrs.has_template_params,
                aggregator,
            );
        }
    }

    fn walk_member(
        &self,
        member: &MemberRecord,
        scope: Option<&str>,
        enclosing_kind: Option<DeclKind>,
        enclosing_templated: bool,
        aggregator: &mut SymbolAggregator,
    ) {
        let attrs = match MemberAttrs::from_record(member) {
            Ok(attrs) => attrs,
            Err(e) => {
                log::debug!("skipping member: {}", e);
                return;
            }
        };

        let Some(component) = self.mapper.map(&attrs.location) else {
            log::debug!("no component in: {}", attrs.location);
            return;
        };

        let symbol = match scope {
            Some(scope) => format!("{}::{}*", scope, attrs.canonical_name()),
            None => format!("{}*", attrs.canonical_name()),
        };

        match self
            .classifier
            .classify(&attrs, enclosing_kind, enclosing_templated, &symbol)
        {
            Verdict::Public => aggregator.record(&component, true, &symbol),
            Verdict::Private => aggregator.record(&component, false, &symbol),
            Verdict::Skipped => {}
        }
    }
}

fn is_excluded_location(location: &str) -> bool {
    location
        .split('/')
        .any(|segment| EXCLUDED_SEGMENTS.contains(&segment))
        || EXCLUDED_MARKERS.iter().any(|marker| location.contains(marker))
}
