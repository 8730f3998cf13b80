//! gcplink - canonicalize Google Cloud resource references
//!
//! A resource field in user configuration may name the same GCP resource in
//! several equivalent ways: a full self-link URL, a relative path, a partial
//! path starting at the location segment, or a bare name. This crate resolves
//! any of those forms, plus provider-level defaults for the missing pieces,
//! into one canonical reference decomposed into project, location, resource
//! type, and name.
//!
//! # Module Structure
//!
//! - [`config`] - Provider-level default project/region/zone
//! - [`schema`] - Narrow field-access trait over a resource's configured state
//! - [`resolver`] - Pattern matching, fallback chains, and the canonical
//!   reference value types
//!
//! # Example
//!
//! ```
//! use gcplink::config::ProviderConfig;
//! use gcplink::schema::MapFieldReader;
//! use gcplink::resolver::parse_zonal_field_value;
//!
//! let config = ProviderConfig::new("default-project", "", "");
//! let reader = MapFieldReader::from_iter([("zone", "us-east1-a")]);
//!
//! let instance = parse_zonal_field_value(
//!     "instances",
//!     "my-instance",
//!     "",
//!     "zone",
//!     &reader,
//!     &config,
//!     false,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     instance.relative_link(),
//!     "projects/default-project/zones/us-east1-a/instances/my-instance"
//! );
//! ```

pub mod config;
pub mod resolver;
pub mod schema;

pub use config::ProviderConfig;
pub use resolver::{
    parse_global_field_value, parse_instance_field_value, parse_network_field_value,
    parse_organization_field_value, parse_project_field_value, parse_regional_field_value,
    parse_subnetwork_field_value, parse_zonal_field_value, region_from_zone, GlobalFieldValue,
    OrganizationFieldValue, ProjectFieldValue, RegionalFieldValue, ResolveError, ZonalFieldValue,
};
pub use schema::{FieldReader, MapFieldReader};
