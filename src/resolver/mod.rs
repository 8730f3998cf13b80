//! Reference resolution
//!
//! This module turns the many equivalent spellings of a GCP resource
//! reference into one canonical value per scope kind.
//!
//! # Module Structure
//!
//! - [`error`] - Typed resolution failures
//! - [`field_value`] - Canonical reference value types and `relative_link()`
//! - [`patterns`] - Compiled per-scope reference patterns
//! - [`parse`] - The per-scope resolvers and fallback chains
//! - [`helpers`] - Per-resource wrappers with conventional field names
//!
//! Accepted input forms, most specific first (zonal shown):
//!
//! 1. `https://www.googleapis.com/compute/v1/projects/P/zones/Z/instances/N`
//! 2. `projects/P/zones/Z/instances/N`
//! 3. `zones/Z/instances/N`
//! 4. `N`
//!
//! Forms 1 and 2 are self-describing. Form 3 resolves the project from the
//! resource's schema fields, then the provider defaults. Form 4 resolves the
//! location the same way.

pub mod error;
pub mod field_value;
pub mod helpers;
pub mod parse;
mod patterns;

pub use error::ResolveError;
pub use field_value::{
    GlobalFieldValue, OrganizationFieldValue, ProjectFieldValue, RegionalFieldValue,
    ZonalFieldValue,
};
pub use helpers::{
    parse_instance_field_value, parse_network_field_value, parse_subnetwork_field_value,
};
pub use parse::{
    parse_global_field_value, parse_organization_field_value, parse_project_field_value,
    parse_regional_field_value, parse_zonal_field_value, region_from_zone,
};
