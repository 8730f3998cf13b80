//! Per-scope resolvers
//!
//! One resolver per scope kind, all sharing the same contract: an empty
//! input yields the empty sentinel (or [`ResolveError::EmptyNotAllowed`]),
//! self-describing inputs are taken verbatim, and anything missing from the
//! input is filled from the fallback chains below.
//!
//! Project fallback chain: the caller's project schema field (when named),
//! then the provider default project.
//!
//! Location fallback chains differ per scope and are documented on each
//! resolver. All resolvers are pure; they read the supplied [`FieldReader`]
//! and [`ProviderConfig`] and touch nothing else, so concurrent calls need
//! no coordination.

use super::error::ResolveError;
use super::field_value::{
    GlobalFieldValue, OrganizationFieldValue, ProjectFieldValue, RegionalFieldValue,
    ZonalFieldValue,
};
use super::patterns;
use crate::config::ProviderConfig;
use crate::schema::FieldReader;

/// Derive the region containing a zone by stripping the final
/// hyphen-delimited segment (`us-central1-a` -> `us-central1`).
///
/// Returns `None` when the zone has no such suffix to strip.
pub fn region_from_zone(zone: &str) -> Option<&str> {
    zone.rsplit_once('-')
        .map(|(region, _)| region)
        .filter(|region| !region.is_empty())
}

fn resolve_project(
    resource_type: &str,
    field_value: &str,
    project_schema_field: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
) -> Result<String, ResolveError> {
    if !project_schema_field.is_empty() {
        if let Some(project) = reader.get_ok(project_schema_field) {
            return Ok(project);
        }
    }
    if !config.project.is_empty() {
        return Ok(config.project.clone());
    }
    Err(ResolveError::UnresolvableProject {
        resource_type: resource_type.to_string(),
        value: field_value.to_string(),
    })
}

fn resolve_zone(
    resource_type: &str,
    field_value: &str,
    zone_schema_field: &str,
    reader: &impl FieldReader,
) -> Result<String, ResolveError> {
    // Zonal resolution has no provider-level zone fallback: the caller must
    // name a zone field, and that field must be set.
    if !zone_schema_field.is_empty() {
        if let Some(zone) = reader.get_ok(zone_schema_field) {
            return Ok(zone);
        }
    }
    Err(ResolveError::MissingLocation {
        location: "zone",
        resource_type: resource_type.to_string(),
        value: field_value.to_string(),
    })
}

fn resolve_region(
    resource_type: &str,
    field_value: &str,
    region_schema_field: &str,
    zone_schema_field: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
) -> Result<String, ResolveError> {
    if !region_schema_field.is_empty() {
        if let Some(region) = reader.get_ok(region_schema_field) {
            return Ok(region);
        }
    }
    if !zone_schema_field.is_empty() {
        // A named-but-unset zone field does not re-enable the provider zone
        // fallback below; the chain moves on to the provider region.
        if let Some(zone) = reader.get_ok(zone_schema_field) {
            if let Some(region) = region_from_zone(&zone) {
                return Ok(region.to_string());
            }
        }
    } else if let Some(region) = region_from_zone(&config.zone) {
        return Ok(region.to_string());
    }
    if !config.region.is_empty() {
        return Ok(config.region.clone());
    }
    Err(ResolveError::MissingLocation {
        location: "region",
        resource_type: resource_type.to_string(),
        value: field_value.to_string(),
    })
}

/// Resolve a reference to a global resource.
///
/// Accepts a full self-link, `projects/{p}/global/{type}/{name}`,
/// `global/{type}/{name}`, a bare name, or `""` when `is_empty_valid`.
pub fn parse_global_field_value(
    resource_type: &str,
    field_value: &str,
    project_schema_field: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
    is_empty_valid: bool,
) -> Result<GlobalFieldValue, ResolveError> {
    if field_value.is_empty() {
        if is_empty_valid {
            return Ok(GlobalFieldValue::empty(resource_type));
        }
        return Err(ResolveError::EmptyNotAllowed {
            resource_type: resource_type.to_string(),
        });
    }

    let (project, name) = match patterns::match_global(resource_type, field_value) {
        Some(m) => (m.project, m.name),
        None => (None, field_value.to_string()),
    };
    let project = match project {
        Some(project) => project,
        None => resolve_project(
            resource_type,
            field_value,
            project_schema_field,
            reader,
            config,
        )?,
    };

    Ok(GlobalFieldValue {
        project,
        resource_type: resource_type.to_string(),
        name,
    })
}

/// Resolve a reference to a zonal resource.
///
/// Bare names take their zone from the caller's zone schema field; there is
/// no provider-level zone fallback for this scope.
pub fn parse_zonal_field_value(
    resource_type: &str,
    field_value: &str,
    project_schema_field: &str,
    zone_schema_field: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
    is_empty_valid: bool,
) -> Result<ZonalFieldValue, ResolveError> {
    if field_value.is_empty() {
        if is_empty_valid {
            return Ok(ZonalFieldValue::empty(resource_type));
        }
        return Err(ResolveError::EmptyNotAllowed {
            resource_type: resource_type.to_string(),
        });
    }

    if let Some(m) = patterns::match_zonal(resource_type, field_value) {
        let project = match m.project {
            Some(project) => project,
            None => resolve_project(
                resource_type,
                field_value,
                project_schema_field,
                reader,
                config,
            )?,
        };
        return Ok(ZonalFieldValue {
            project,
            zone: m.location,
            resource_type: resource_type.to_string(),
            name: m.name,
        });
    }

    let zone = resolve_zone(resource_type, field_value, zone_schema_field, reader)?;
    let project = resolve_project(
        resource_type,
        field_value,
        project_schema_field,
        reader,
        config,
    )?;

    Ok(ZonalFieldValue {
        project,
        zone,
        resource_type: resource_type.to_string(),
        name: field_value.to_string(),
    })
}

/// Resolve a reference to a regional resource.
///
/// The region for a bare name comes from, in order: the caller's region
/// schema field; the caller's zone schema field with the region derived from
/// the zone; the provider default zone (derived) when no zone field was
/// named; the provider default region.
pub fn parse_regional_field_value(
    resource_type: &str,
    field_value: &str,
    project_schema_field: &str,
    region_schema_field: &str,
    zone_schema_field: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
    is_empty_valid: bool,
) -> Result<RegionalFieldValue, ResolveError> {
    if field_value.is_empty() {
        if is_empty_valid {
            return Ok(RegionalFieldValue::empty(resource_type));
        }
        return Err(ResolveError::EmptyNotAllowed {
            resource_type: resource_type.to_string(),
        });
    }

    if let Some(m) = patterns::match_regional(resource_type, field_value) {
        let project = match m.project {
            Some(project) => project,
            None => resolve_project(
                resource_type,
                field_value,
                project_schema_field,
                reader,
                config,
            )?,
        };
        return Ok(RegionalFieldValue {
            project,
            region: m.location,
            resource_type: resource_type.to_string(),
            name: m.name,
        });
    }

    let region = resolve_region(
        resource_type,
        field_value,
        region_schema_field,
        zone_schema_field,
        reader,
        config,
    )?;
    let project = resolve_project(
        resource_type,
        field_value,
        project_schema_field,
        reader,
        config,
    )?;

    Ok(RegionalFieldValue {
        project,
        region,
        resource_type: resource_type.to_string(),
        name: field_value.to_string(),
    })
}

/// Resolve a reference to an organization-level resource.
///
/// The org id only ever comes from the reference itself; there is no bare
/// name form for this scope, so anything without an `organizations/{id}/`
/// prefix is malformed input.
pub fn parse_organization_field_value(
    resource_type: &str,
    field_value: &str,
    is_empty_valid: bool,
) -> Result<OrganizationFieldValue, ResolveError> {
    if field_value.is_empty() {
        if is_empty_valid {
            return Ok(OrganizationFieldValue::empty(resource_type));
        }
        return Err(ResolveError::EmptyNotAllowed {
            resource_type: resource_type.to_string(),
        });
    }

    let m = patterns::match_organization(resource_type, field_value).ok_or_else(|| {
        ResolveError::MalformedReference {
            resource_type: resource_type.to_string(),
            value: field_value.to_string(),
        }
    })?;

    Ok(OrganizationFieldValue {
        org_id: m.org_id,
        resource_type: resource_type.to_string(),
        name: m.name,
    })
}

/// Resolve a reference to a project-scoped resource (no location segment).
pub fn parse_project_field_value(
    resource_type: &str,
    field_value: &str,
    project_schema_field: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
    is_empty_valid: bool,
) -> Result<ProjectFieldValue, ResolveError> {
    if field_value.is_empty() {
        if is_empty_valid {
            return Ok(ProjectFieldValue::empty(resource_type));
        }
        return Err(ResolveError::EmptyNotAllowed {
            resource_type: resource_type.to_string(),
        });
    }

    if let Some(m) = patterns::match_project(resource_type, field_value) {
        return Ok(ProjectFieldValue {
            project: m.project,
            resource_type: resource_type.to_string(),
            name: m.name,
        });
    }

    let project = resolve_project(
        resource_type,
        field_value,
        project_schema_field,
        reader,
        config,
    )?;

    Ok(ProjectFieldValue {
        project,
        resource_type: resource_type.to_string(),
        name: field_value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MapFieldReader;

    fn cfg(project: &str, region: &str, zone: &str) -> ProviderConfig {
        ProviderConfig::new(project, region, zone)
    }

    #[test]
    fn test_region_from_zone_strips_suffix() {
        assert_eq!(region_from_zone("us-central1-a"), Some("us-central1"));
        assert_eq!(region_from_zone("europe-west1-b"), Some("europe-west1"));
        assert_eq!(region_from_zone("nohyphen"), None);
        assert_eq!(region_from_zone(""), None);
    }

    #[test]
    fn test_zonal_bare_name_uses_zone_field_and_default_project() {
        let reader = MapFieldReader::from_iter([("zone", "us-east1-a")]);
        let v = parse_zonal_field_value(
            "instances",
            "my-instance",
            "",
            "zone",
            &reader,
            &cfg("default-project", "", ""),
            false,
        )
        .unwrap();
        assert_eq!(
            v.relative_link(),
            "projects/default-project/zones/us-east1-a/instances/my-instance"
        );
    }

    #[test]
    fn test_zonal_bare_name_without_zone_field_name_fails() {
        let reader = MapFieldReader::new();
        let err = parse_zonal_field_value(
            "instances",
            "my-instance",
            "",
            "",
            &reader,
            &cfg("default-project", "", "us-east1-a"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::MissingLocation { location: "zone", .. }));
    }

    #[test]
    fn test_zonal_named_but_unset_zone_field_fails() {
        let reader = MapFieldReader::from_iter([("zone", "")]);
        let err = parse_zonal_field_value(
            "instances",
            "my-instance",
            "",
            "zone",
            &reader,
            &cfg("default-project", "", "us-east1-a"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::MissingLocation { location: "zone", .. }));
    }

    #[test]
    fn test_zonal_self_describing_forms_need_no_defaults() {
        let reader = MapFieldReader::new();
        let config = ProviderConfig::default();
        for input in [
            "https://www.googleapis.com/compute/v1/projects/p/zones/z/instances/vm",
            "projects/p/zones/z/instances/vm",
        ] {
            let v = parse_zonal_field_value("instances", input, "", "", &reader, &config, false)
                .unwrap();
            assert_eq!(v.relative_link(), "projects/p/zones/z/instances/vm");
        }
    }

    #[test]
    fn test_zonal_partial_path_needs_only_project() {
        let reader = MapFieldReader::new();
        let v = parse_zonal_field_value(
            "instances",
            "zones/us-east1-b/instances/vm",
            "",
            "",
            &reader,
            &cfg("p", "", ""),
            false,
        )
        .unwrap();
        assert_eq!(v.relative_link(), "projects/p/zones/us-east1-b/instances/vm");
    }

    #[test]
    fn test_project_schema_field_beats_provider_default() {
        let reader = MapFieldReader::from_iter([("project", "field-project"), ("zone", "z-a")]);
        let v = parse_zonal_field_value(
            "instances",
            "vm",
            "project",
            "zone",
            &reader,
            &cfg("config-project", "", ""),
            false,
        )
        .unwrap();
        assert_eq!(v.project, "field-project");
    }

    #[test]
    fn test_unresolvable_project() {
        let reader = MapFieldReader::from_iter([("zone", "z-a")]);
        let err = parse_zonal_field_value(
            "instances",
            "vm",
            "project",
            "zone",
            &reader,
            &ProviderConfig::default(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvableProject { .. }));
    }

    #[test]
    fn test_regional_region_field_beats_zone_derivation() {
        let reader =
            MapFieldReader::from_iter([("region", "us-west1"), ("zone", "us-central1-a")]);
        let v = parse_regional_field_value(
            "subnetworks",
            "subnet",
            "",
            "region",
            "zone",
            &reader,
            &cfg("p", "default-region", ""),
            false,
        )
        .unwrap();
        assert_eq!(v.region, "us-west1");
    }

    #[test]
    fn test_regional_region_derived_from_zone_field() {
        let reader = MapFieldReader::from_iter([("zone", "us-central1-a")]);
        let v = parse_regional_field_value(
            "subnetworks",
            "my-subnetwork",
            "",
            "region",
            "zone",
            &reader,
            &cfg("default-project", "default-region", ""),
            false,
        )
        .unwrap();
        assert_eq!(
            v.relative_link(),
            "projects/default-project/regions/us-central1/subnetworks/my-subnetwork"
        );
    }

    #[test]
    fn test_regional_unset_zone_field_skips_provider_zone() {
        // The zone field is named but blank: the provider zone must not be
        // consulted, and the chain lands on the provider region.
        let reader = MapFieldReader::from_iter([("zone", "")]);
        let v = parse_regional_field_value(
            "subnetworks",
            "subnet",
            "",
            "region",
            "zone",
            &reader,
            &cfg("p", "config-region", "us-central1-a"),
            false,
        )
        .unwrap();
        assert_eq!(v.region, "config-region");
    }

    #[test]
    fn test_regional_provider_zone_derivation_without_zone_field_name() {
        let reader = MapFieldReader::new();
        let v = parse_regional_field_value(
            "subnetworks",
            "subnet",
            "",
            "",
            "",
            &reader,
            &cfg("p", "config-region", "europe-west1-c"),
            false,
        )
        .unwrap();
        assert_eq!(v.region, "europe-west1");
    }

    #[test]
    fn test_regional_falls_back_to_provider_region() {
        let reader = MapFieldReader::new();
        let v = parse_regional_field_value(
            "subnetworks",
            "subnet",
            "",
            "region",
            "",
            &reader,
            &cfg("p", "config-region", ""),
            false,
        )
        .unwrap();
        assert_eq!(v.region, "config-region");
    }

    #[test]
    fn test_regional_no_region_source_fails() {
        let reader = MapFieldReader::new();
        let err = parse_regional_field_value(
            "subnetworks",
            "subnet",
            "",
            "region",
            "zone",
            &reader,
            &cfg("p", "", ""),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::MissingLocation { location: "region", .. }));
    }

    #[test]
    fn test_global_full_link() {
        let reader = MapFieldReader::new();
        let v = parse_global_field_value(
            "networks",
            "https://www.googleapis.com/compute/v1/projects/myproject/global/networks/my-network",
            "",
            &reader,
            &ProviderConfig::default(),
            false,
        )
        .unwrap();
        assert_eq!(
            v.relative_link(),
            "projects/myproject/global/networks/my-network"
        );
    }

    #[test]
    fn test_global_bare_name_uses_project_chain() {
        let reader = MapFieldReader::new();
        let v = parse_global_field_value(
            "networks",
            "my-network",
            "project",
            &reader,
            &cfg("p", "", ""),
            false,
        )
        .unwrap();
        assert_eq!(v.relative_link(), "projects/p/global/networks/my-network");
    }

    #[test]
    fn test_organization_reference_parts() {
        let v = parse_organization_field_value("roles", "organizations/123/roles/custom", false)
            .unwrap();
        assert_eq!(v.org_id, "123");
        assert_eq!(v.name, "custom");
        assert_eq!(v.relative_link(), "organizations/123/roles/custom");
    }

    #[test]
    fn test_organization_bare_name_is_malformed() {
        let err = parse_organization_field_value("roles", "custom", false).unwrap_err();
        assert!(matches!(err, ResolveError::MalformedReference { .. }));
    }

    #[test]
    fn test_project_scope_forms() {
        let reader = MapFieldReader::new();
        let config = cfg("default-project", "", "");

        let rel = parse_project_field_value(
            "topics",
            "projects/p/topics/t",
            "",
            &reader,
            &config,
            false,
        )
        .unwrap();
        assert_eq!(rel.relative_link(), "projects/p/topics/t");

        let bare =
            parse_project_field_value("topics", "t", "", &reader, &config, false).unwrap();
        assert_eq!(bare.relative_link(), "projects/default-project/topics/t");
    }

    #[test]
    fn test_empty_reference_handling() {
        let reader = MapFieldReader::new();
        let config = ProviderConfig::default();

        let v = parse_project_field_value("instances", "", "", &reader, &config, true).unwrap();
        assert_eq!(v.relative_link(), "");

        let err =
            parse_project_field_value("instances", "", "", &reader, &config, false).unwrap_err();
        assert!(matches!(err, ResolveError::EmptyNotAllowed { .. }));

        let org = parse_organization_field_value("roles", "", true).unwrap();
        assert_eq!(org.relative_link(), "");
    }

    #[test]
    fn test_relative_link_round_trips() {
        let reader = MapFieldReader::from_iter([("zone", "us-east1-a")]);
        let first = parse_zonal_field_value(
            "instances",
            "vm",
            "",
            "zone",
            &reader,
            &cfg("p", "", ""),
            false,
        )
        .unwrap();

        // The relative form is self-describing: no reader or config needed.
        let second = parse_zonal_field_value(
            "instances",
            &first.relative_link(),
            "",
            "",
            &MapFieldReader::new(),
            &ProviderConfig::default(),
            false,
        )
        .unwrap();
        assert_eq!(second, first);
    }
}
