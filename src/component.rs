// Wed Aug 26 2026 - Alex

pub const DEFAULT_PREFIX: &str = "project";

// Segments that open a physical-component subtree in the source layout
const COMPONENT_MARKERS: [&str; 2] = ["include", "src"];

/// Maps source-location paths onto physical library components using the
/// two-level `include/<component>/` / `src/<component>/` layout convention.
/// Paths outside the convention map to no component and the declaration is
/// dropped from the report.
#[derive(Debug, Clone)]
pub struct ComponentMapper {
    prefix: String,
}

impl ComponentMapper {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    pub fn map(&self, location: &str) -> Option<String> {
        let segment = raw_component(location)?;
        let segment = match segment.strip_prefix("lib") {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => segment,
        };
        let segment = if segment == "shared" { "common" } else { segment };
        Some(format!("{}-{}", self.prefix, segment))
    }
}

impl Default for ComponentMapper {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

fn raw_component(location: &str) -> Option<&str> {
    let mut segments = location.split('/');
    while let Some(segment) = segments.next() {
        if COMPONENT_MARKERS.contains(&segment) {
            return segments.next().filter(|next| !next.is_empty());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_path_maps_to_component() {
        let mapper = ComponentMapper::default();
        assert_eq!(
            mapper.map("include/server/display.h").as_deref(),
            Some("project-server")
        );
    }

    #[test]
    fn test_src_path_maps_to_component() {
        let mapper = ComponentMapper::default();
        assert_eq!(
            mapper.map("src/libbar/x.cpp").as_deref(),
            Some("project-bar")
        );
    }

    #[test]
    fn test_lib_prefix_is_stripped() {
        let mapper = ComponentMapper::default();
        assert_eq!(
            mapper.map("include/libfoo/widget.h").as_deref(),
            Some("project-foo")
        );
    }

    #[test]
    fn test_shared_renames_to_common() {
        let mapper = ComponentMapper::default();
        assert_eq!(
            mapper.map("src/shared/util.cpp").as_deref(),
            Some("project-common")
        );
    }

    #[test]
    fn test_first_marker_wins() {
        let mapper = ComponentMapper::default();
        assert_eq!(
            mapper.map("repo/include/client/src/detail.h").as_deref(),
            Some("project-client")
        );
    }

    #[test]
    fn test_path_without_marker_has_no_component() {
        let mapper = ComponentMapper::default();
        assert_eq!(mapper.map("tools/generate.py"), None);
        assert_eq!(mapper.map(""), None);
    }

    #[test]
    fn test_marker_as_last_segment_has_no_component() {
        let mapper = ComponentMapper::default();
        assert_eq!(mapper.map("repo/include"), None);
    }

    #[test]
    fn test_custom_prefix() {
        let mapper = ComponentMapper::new("acme");
        assert_eq!(
            mapper.map("include/core/api.h").as_deref(),
            Some("acme-core")
        );
    }
}
