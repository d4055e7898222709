// Thu Aug 27 2026 - Alex

use std::collections::{BTreeMap, BTreeSet};

/// Public/private symbol sets for one physical component
#[derive(Debug, Clone, Default)]
pub struct ComponentSymbols {
    pub public: BTreeSet<String>,
    pub private: BTreeSet<String>,
}

/// Accumulates classified symbols per component across all input documents.
/// One instance per process run, passed by reference through the walker.
///
/// Inserts are set-idempotent. A symbol recorded as public via one
/// declaration and private via another keeps both entries; the right
/// reconciliation policy is unspecified upstream, so neither wins silently.
#[derive(Debug, Default)]
pub struct SymbolAggregator {
    components: BTreeMap<String, ComponentSymbols>,
}

impl SymbolAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, component: &str, publish: bool, symbol: &str) {
        // Destructor markers are normalized to a printable substitute
        let symbol = symbol.replace('~', "?");

        let entry = self.components.entry(component.to_string()).or_default();
        if publish {
            log::debug!("PUBLISH in {}: {}", component, symbol);
            entry.public.insert(symbol);
        } else {
            log::debug!("NOPUBLISH in {}: {}", component, symbol);
            entry.private.insert(symbol);
        }
    }

    pub fn components(&self) -> impl Iterator<Item = (&String, &ComponentSymbols)> {
        self.components.iter()
    }

    pub fn get(&self, component: &str) -> Option<&ComponentSymbols> {
        self.components.get(component)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn public_count(&self) -> usize {
        self.components.values().map(|s| s.public.len()).sum()
    }

    pub fn private_count(&self) -> usize {
        self.components.values().map(|s| s.private.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_is_idempotent() {
        let mut aggregator = SymbolAggregator::new();
        for _ in 0..3 {
            aggregator.record("project-foo", true, "ns::Widget::draw*");
        }

        let symbols = aggregator.get("project-foo").unwrap();
        assert_eq!(symbols.public.len(), 1);
        assert!(symbols.private.is_empty());
    }

    #[test]
    fn test_destructor_marker_is_normalized() {
        let mut aggregator = SymbolAggregator::new();
        aggregator.record("project-foo", true, "ns::Widget::~Widget*");

        let symbols = aggregator.get("project-foo").unwrap();
        assert!(symbols.public.contains("ns::Widget::?Widget*"));
    }

    #[test]
    fn test_conflicting_visibility_persists_side_by_side() {
        let mut aggregator = SymbolAggregator::new();
        aggregator.record("project-foo", true, "ns::free_fn*");
        aggregator.record("project-foo", false, "ns::free_fn*");

        let symbols = aggregator.get("project-foo").unwrap();
        assert!(symbols.public.contains("ns::free_fn*"));
        assert!(symbols.private.contains("ns::free_fn*"));
    }

    #[test]
    fn test_components_are_independent() {
        let mut aggregator = SymbolAggregator::new();
        aggregator.record("project-foo", true, "ns::free_fn*");
        aggregator.record("project-bar", false, "ns::free_fn*");

        assert_eq!(aggregator.component_count(), 2);
        assert!(aggregator.get("project-foo").unwrap().private.is_empty());
        assert!(aggregator.get("project-bar").unwrap().public.is_empty());
    }

    #[test]
    fn test_counts() {
        let mut aggregator = SymbolAggregator::new();
        assert!(aggregator.is_empty());

        aggregator.record("project-foo", true, "a*");
        aggregator.record("project-foo", true, "b*");
        aggregator.record("project-bar", false, "c*");

        assert_eq!(aggregator.public_count(), 2);
        assert_eq!(aggregator.private_count(), 1);
        assert!(!aggregator.is_empty());
    }
}
