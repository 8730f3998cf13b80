//! Resolution errors
//!
//! Every failure mode is a typed variant returned to the caller; resolvers
//! never panic, never retry, and never log. The calling CRUD handler is
//! responsible for surfacing these as user-facing configuration errors.

/// A reference string could not be resolved into a canonical value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The field was empty and the caller marked it required.
    #[error("an empty reference is not allowed for {resource_type}")]
    EmptyNotAllowed {
        /// API collection the reference was for
        resource_type: String,
    },

    /// A location-dependent scope needed a zone or region and no source
    /// produced one.
    #[error("could not determine the {location} for {resource_type} reference {value:?}")]
    MissingLocation {
        /// Which location segment was missing ("zone" or "region")
        location: &'static str,
        resource_type: String,
        value: String,
    },

    /// Organization-scoped input did not match `organizations/{id}/...`.
    #[error("{value:?} is not a valid {resource_type} reference; expected organizations/{{org_id}}/{resource_type}/{{name}}")]
    MalformedReference {
        resource_type: String,
        value: String,
    },

    /// No project could be determined for a non-empty name.
    #[error("could not determine the project for {resource_type} reference {value:?}; set the project field or a provider default")]
    UnresolvableProject {
        resource_type: String,
        value: String,
    },
}
