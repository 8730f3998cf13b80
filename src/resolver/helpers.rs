//! Per-resource convenience wrappers
//!
//! Thin wrappers over the scope resolvers that bake in the resource type and
//! the conventional schema field names used by the corresponding resource
//! blocks.

use super::error::ResolveError;
use super::field_value::{GlobalFieldValue, RegionalFieldValue, ZonalFieldValue};
use super::parse::{parse_global_field_value, parse_regional_field_value, parse_zonal_field_value};
use crate::config::ProviderConfig;
use crate::schema::FieldReader;

/// Resolve a `network` field. Empty references are valid (the API applies
/// its own default network).
pub fn parse_network_field_value(
    network: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
) -> Result<GlobalFieldValue, ResolveError> {
    parse_global_field_value("networks", network, "project", reader, config, true)
}

/// Resolve a `subnetwork` field. Empty references are valid.
pub fn parse_subnetwork_field_value(
    subnetwork: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
) -> Result<RegionalFieldValue, ResolveError> {
    parse_regional_field_value(
        "subnetworks",
        subnetwork,
        "project",
        "region",
        "zone",
        reader,
        config,
        true,
    )
}

/// Resolve an `instance` field. A value is required.
pub fn parse_instance_field_value(
    instance: &str,
    reader: &impl FieldReader,
    config: &ProviderConfig,
) -> Result<ZonalFieldValue, ResolveError> {
    parse_zonal_field_value("instances", instance, "project", "zone", reader, config, false)
}
