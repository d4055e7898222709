// Wed Aug 26 2026 - Alex

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

// Known compiler-optimization exceptions. g++ devirtualizes a virtual call
// in the option-handling path into a direct call to this technically
// private function, so it is part of the binary interface after all.
static DEFAULT_PUBLISH_OVERRIDES: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| BTreeSet::from(["options::DefaultConfiguration::the_options*"]));

pub fn default_publish_overrides() -> BTreeSet<String> {
    DEFAULT_PUBLISH_OVERRIDES
        .iter()
        .map(|symbol| symbol.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_overrides_are_qualified_symbol_keys() {
        let overrides = default_publish_overrides();
        assert!(!overrides.is_empty());
        for symbol in &overrides {
            assert!(symbol.ends_with('*'));
            assert!(symbol.contains("::"));
        }
    }
}
