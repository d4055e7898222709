// Wed Aug 26 2026 - Alex

use crate::decl::{CompoundRecord, DeclError, DeclKind, MemberRecord, Protection};

/// Validated attribute view of a member record. Records missing a field
/// required for their kind fail here and are skipped by the walker.
#[derive(Debug, Clone)]
pub struct MemberAttrs {
    pub kind: DeclKind,
    pub name: String,
    pub location: String,
    pub protection: Protection,
    pub is_static: bool,
    pub is_inline: bool,
    pub has_template_params: bool,
}

impl MemberAttrs {
    pub fn from_record(record: &MemberRecord) -> Result<Self, DeclError> {
        let name = record.name.as_deref().ok_or(DeclError::MissingAttribute {
            kind: record.kind,
            attribute: "name",
        })?;
        let location = record
            .location
            .as_deref()
            .ok_or(DeclError::MissingAttribute {
                kind: record.kind,
                attribute: "location",
            })?;

        Ok(Self {
            kind: record.kind,
            name: name.to_string(),
            location: location.to_string(),
            protection: record.protection.unwrap_or_default(),
            is_static: record.is_static,
            is_inline: record.is_inline,
            has_template_params: record.has_template_params,
        })
    }

    // Overload resolution is not tracked: every operator overload collapses
    // to the single `operator` token
    pub fn canonical_name(&self) -> &str {
        if self.name.starts_with("operator") {
            "operator"
        } else {
            &self.name
        }
    }
}

/// Validated attribute view of a class-like compound record
#[derive(Debug, Clone)]
pub struct CompoundAttrs {
    pub kind: DeclKind,
    pub name: String,
    pub location: String,
    pub protection: Protection,
    pub has_template_params: bool,
}

impl CompoundAttrs {
    pub fn from_record(record: &CompoundRecord) -> Result<Self, DeclError> {
        let name = record.name.as_deref().ok_or(DeclError::MissingAttribute {
            kind: record.kind,
            attribute: "name",
        })?;
        let location = record
            .location
            .as_deref()
            .ok_or(DeclError::MissingAttribute {
                kind: record.kind,
                attribute: "location",
            })?;

        Ok(Self {
            kind: record.kind,
            name: name.to_string(),
            location: location.to_string(),
            protection: record.protection.unwrap_or_default(),
            has_template_params: record.has_template_params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: Option<&str>, location: Option<&str>) -> MemberRecord {
        MemberRecord {
            kind: DeclKind::Function,
            name: name.map(String::from),
            location: location.map(String::from),
            protection: None,
            is_static: false,
            is_inline: false,
            has_template_params: false,
        }
    }

    #[test]
    fn test_member_attrs_defaults() {
        let attrs = MemberAttrs::from_record(&member(Some("draw"), Some("include/a/b.h"))).unwrap();
        assert_eq!(attrs.name, "draw");
        assert_eq!(attrs.protection, Protection::Public);
        assert!(!attrs.is_static);
        assert!(!attrs.is_inline);
    }

    #[test]
    fn test_member_missing_name_is_rejected() {
        let err = MemberAttrs::from_record(&member(None, Some("include/a/b.h"))).unwrap_err();
        assert!(matches!(
            err,
            DeclError::MissingAttribute {
                attribute: "name",
                ..
            }
        ));
    }

    #[test]
    fn test_member_missing_location_is_rejected() {
        let err = MemberAttrs::from_record(&member(Some("draw"), None)).unwrap_err();
        assert!(matches!(
            err,
            DeclError::MissingAttribute {
                attribute: "location",
                ..
            }
        ));
    }

    #[test]
    fn test_operator_names_collapse() {
        let attrs =
            MemberAttrs::from_record(&member(Some("operator=="), Some("include/a/b.h"))).unwrap();
        assert_eq!(attrs.canonical_name(), "operator");

        let attrs =
            MemberAttrs::from_record(&member(Some("operator[]"), Some("include/a/b.h"))).unwrap();
        assert_eq!(attrs.canonical_name(), "operator");
    }

    #[test]
    fn test_destructor_name_passes_through() {
        let attrs =
            MemberAttrs::from_record(&member(Some("~Widget"), Some("include/a/b.h"))).unwrap();
        assert_eq!(attrs.canonical_name(), "~Widget");
    }

    #[test]
    fn test_compound_attrs_require_location() {
        let record = CompoundRecord {
            kind: DeclKind::Class,
            name: Some("ns::Widget".to_string()),
            location: None,
            protection: Some(Protection::Public),
            has_template_params: false,
            members: Vec::new(),
        };
        assert!(CompoundAttrs::from_record(&record).is_err());
    }
}
