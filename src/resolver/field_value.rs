//! Canonical reference value types
//!
//! One immutable value per scope kind, each a plain decomposition into
//! project, location, resource type, and name, plus `relative_link()` to
//! project it back into the canonical relative path. A value with an empty
//! name is the empty-reference sentinel: it renders as `""` and carries no
//! other resolved parts.

/// A reference to a global resource (`projects/{p}/global/{type}/{name}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalFieldValue {
    pub project: String,
    pub resource_type: String,
    pub name: String,
}

/// A reference to a zonal resource (`projects/{p}/zones/{z}/{type}/{name}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonalFieldValue {
    pub project: String,
    pub zone: String,
    pub resource_type: String,
    pub name: String,
}

/// A reference to a regional resource
/// (`projects/{p}/regions/{r}/{type}/{name}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalFieldValue {
    pub project: String,
    pub region: String,
    pub resource_type: String,
    pub name: String,
}

/// A reference to an organization-level resource
/// (`organizations/{org_id}/{type}/{name}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationFieldValue {
    pub org_id: String,
    pub resource_type: String,
    pub name: String,
}

/// A reference to a project-scoped resource
/// (`projects/{p}/{type}/{name}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFieldValue {
    pub project: String,
    pub resource_type: String,
    pub name: String,
}

impl GlobalFieldValue {
    pub(crate) fn empty(resource_type: &str) -> Self {
        Self {
            project: String::new(),
            resource_type: resource_type.to_string(),
            name: String::new(),
        }
    }

    /// Canonical relative path, or `""` for the empty sentinel
    pub fn relative_link(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!(
            "projects/{}/global/{}/{}",
            self.project, self.resource_type, self.name
        )
    }
}

impl ZonalFieldValue {
    pub(crate) fn empty(resource_type: &str) -> Self {
        Self {
            project: String::new(),
            zone: String::new(),
            resource_type: resource_type.to_string(),
            name: String::new(),
        }
    }

    /// Canonical relative path, or `""` for the empty sentinel
    pub fn relative_link(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!(
            "projects/{}/zones/{}/{}/{}",
            self.project, self.zone, self.resource_type, self.name
        )
    }
}

impl RegionalFieldValue {
    pub(crate) fn empty(resource_type: &str) -> Self {
        Self {
            project: String::new(),
            region: String::new(),
            resource_type: resource_type.to_string(),
            name: String::new(),
        }
    }

    /// Canonical relative path, or `""` for the empty sentinel
    pub fn relative_link(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!(
            "projects/{}/regions/{}/{}/{}",
            self.project, self.region, self.resource_type, self.name
        )
    }
}

impl OrganizationFieldValue {
    pub(crate) fn empty(resource_type: &str) -> Self {
        Self {
            org_id: String::new(),
            resource_type: resource_type.to_string(),
            name: String::new(),
        }
    }

    /// Canonical relative path, or `""` for the empty sentinel
    pub fn relative_link(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!(
            "organizations/{}/{}/{}",
            self.org_id, self.resource_type, self.name
        )
    }
}

impl ProjectFieldValue {
    pub(crate) fn empty(resource_type: &str) -> Self {
        Self {
            project: String::new(),
            resource_type: resource_type.to_string(),
            name: String::new(),
        }
    }

    /// Canonical relative path, or `""` for the empty sentinel
    pub fn relative_link(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!(
            "projects/{}/{}/{}",
            self.project, self.resource_type, self.name
        )
    }
}
