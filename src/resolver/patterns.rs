//! Compiled reference patterns
//!
//! Each scope kind tries its patterns in priority order; the first full match
//! wins. A full self-link is recognized by the same pattern as the relative
//! path: the pattern may start at any path boundary but must consume the
//! input to the end, so the `https://.../{service}/{version}/` prefix is
//! skipped and ignored. Partial paths are anchored at the start of the input.
//!
//! The collection segment is captured generically and compared with the
//! caller's resource type afterwards; a mismatch counts as no match, letting
//! the input fall through to the next form (ultimately a bare name).

use regex::Regex;
use std::sync::OnceLock;

/// A reference with an explicit location segment (zone or region).
pub(crate) struct LocationMatch {
    /// Present for the relative/full-link form, absent for the partial form
    pub project: Option<String>,
    pub location: String,
    pub name: String,
}

/// A global reference (`.../global/{type}/{name}`).
pub(crate) struct GlobalMatch {
    pub project: Option<String>,
    pub name: String,
}

/// An organization-level reference.
pub(crate) struct OrgMatch {
    pub org_id: String,
    pub name: String,
}

/// A project-scoped reference (`projects/{p}/{type}/{name}`).
pub(crate) struct ProjectMatch {
    pub project: String,
    pub name: String,
}

fn zonal_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:^|/)projects/(?P<project>[^/]+)/zones/(?P<location>[^/]+)/(?P<collection>[^/]+)/(?P<name>[^/]+)$",
        )
        .expect("valid zonal link pattern")
    })
}

fn zonal_partial_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^zones/(?P<location>[^/]+)/(?P<collection>[^/]+)/(?P<name>[^/]+)$")
            .expect("valid zonal partial pattern")
    })
}

fn regional_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:^|/)projects/(?P<project>[^/]+)/regions/(?P<location>[^/]+)/(?P<collection>[^/]+)/(?P<name>[^/]+)$",
        )
        .expect("valid regional link pattern")
    })
}

fn regional_partial_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^regions/(?P<location>[^/]+)/(?P<collection>[^/]+)/(?P<name>[^/]+)$")
            .expect("valid regional partial pattern")
    })
}

fn global_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:^|/)projects/(?P<project>[^/]+)/global/(?P<collection>[^/]+)/(?P<name>[^/]+)$",
        )
        .expect("valid global link pattern")
    })
}

fn global_partial_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^global/(?P<collection>[^/]+)/(?P<name>[^/]+)$")
            .expect("valid global partial pattern")
    })
}

fn organization_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:^|/)organizations/(?P<org>[^/]+)/(?P<collection>[^/]+)/(?P<name>[^/]+)$",
        )
        .expect("valid organization link pattern")
    })
}

fn project_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|/)projects/(?P<project>[^/]+)/(?P<collection>[^/]+)/(?P<name>[^/]+)$")
            .expect("valid project link pattern")
    })
}

/// Match `value` against `re`, accepting only the caller's resource type as
/// the collection segment.
fn captures_for<'t>(
    re: &Regex,
    resource_type: &str,
    value: &'t str,
) -> Option<regex::Captures<'t>> {
    let caps = re.captures(value)?;
    (caps.name("collection")?.as_str() == resource_type).then_some(caps)
}

pub(crate) fn match_zonal(resource_type: &str, value: &str) -> Option<LocationMatch> {
    match_located(zonal_link_re(), zonal_partial_re(), resource_type, value)
}

pub(crate) fn match_regional(resource_type: &str, value: &str) -> Option<LocationMatch> {
    match_located(regional_link_re(), regional_partial_re(), resource_type, value)
}

fn match_located(
    link_re: &Regex,
    partial_re: &Regex,
    resource_type: &str,
    value: &str,
) -> Option<LocationMatch> {
    if let Some(caps) = captures_for(link_re, resource_type, value) {
        return Some(LocationMatch {
            project: Some(caps["project"].to_string()),
            location: caps["location"].to_string(),
            name: caps["name"].to_string(),
        });
    }
    let caps = captures_for(partial_re, resource_type, value)?;
    Some(LocationMatch {
        project: None,
        location: caps["location"].to_string(),
        name: caps["name"].to_string(),
    })
}

pub(crate) fn match_global(resource_type: &str, value: &str) -> Option<GlobalMatch> {
    if let Some(caps) = captures_for(global_link_re(), resource_type, value) {
        return Some(GlobalMatch {
            project: Some(caps["project"].to_string()),
            name: caps["name"].to_string(),
        });
    }
    let caps = captures_for(global_partial_re(), resource_type, value)?;
    Some(GlobalMatch {
        project: None,
        name: caps["name"].to_string(),
    })
}

pub(crate) fn match_organization(resource_type: &str, value: &str) -> Option<OrgMatch> {
    let caps = captures_for(organization_link_re(), resource_type, value)?;
    Some(OrgMatch {
        org_id: caps["org"].to_string(),
        name: caps["name"].to_string(),
    })
}

pub(crate) fn match_project(resource_type: &str, value: &str) -> Option<ProjectMatch> {
    let caps = captures_for(project_link_re(), resource_type, value)?;
    Some(ProjectMatch {
        project: caps["project"].to_string(),
        name: caps["name"].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zonal_full_link_ignores_host_and_version() {
        let m = match_zonal(
            "instances",
            "https://www.googleapis.com/compute/v1/projects/p/zones/us-east1-a/instances/vm",
        )
        .unwrap();
        assert_eq!(m.project.as_deref(), Some("p"));
        assert_eq!(m.location, "us-east1-a");
        assert_eq!(m.name, "vm");

        let beta = match_zonal(
            "instances",
            "https://www.googleapis.com/compute/beta/projects/p/zones/us-east1-a/instances/vm",
        )
        .unwrap();
        assert_eq!(beta.name, "vm");
    }

    #[test]
    fn test_zonal_relative_and_partial() {
        let rel = match_zonal("instances", "projects/p/zones/z/instances/vm").unwrap();
        assert_eq!(rel.project.as_deref(), Some("p"));

        let partial = match_zonal("instances", "zones/z/instances/vm").unwrap();
        assert!(partial.project.is_none());
        assert_eq!(partial.location, "z");
    }

    #[test]
    fn test_partial_must_start_at_location_segment() {
        assert!(match_zonal("instances", "foo/zones/z/instances/vm").is_none());
    }

    #[test]
    fn test_collection_mismatch_is_no_match() {
        assert!(match_zonal("instances", "zones/z/disks/d").is_none());
        assert!(match_zonal("instances", "projects/p/zones/z/disks/d").is_none());
    }

    #[test]
    fn test_bare_name_matches_nothing() {
        assert!(match_zonal("instances", "my-instance").is_none());
        assert!(match_global("networks", "my-network").is_none());
    }

    #[test]
    fn test_global_forms() {
        let full = match_global(
            "networks",
            "https://www.googleapis.com/compute/v1/projects/p/global/networks/net",
        )
        .unwrap();
        assert_eq!(full.project.as_deref(), Some("p"));
        assert_eq!(full.name, "net");

        let partial = match_global("networks", "global/networks/net").unwrap();
        assert!(partial.project.is_none());
    }

    #[test]
    fn test_organization_form() {
        let m = match_organization("roles", "organizations/123/roles/custom").unwrap();
        assert_eq!(m.org_id, "123");
        assert_eq!(m.name, "custom");

        assert!(match_organization("roles", "custom").is_none());
    }

    #[test]
    fn test_project_scope_does_not_swallow_zonal_paths() {
        assert!(match_project("instances", "projects/p/zones/z/instances/vm").is_none());
        let m = match_project("instances", "projects/p/instances/vm").unwrap();
        assert_eq!(m.project, "p");
    }
}
