//! Bundled portfolio content: project records, their media galleries, and the profile,
//! experience, awards, contact, and location data shown by the desktop windows.
//!
//! Content is authored as TOML under `content/`, validated by the build script, and embedded as
//! JSON. Consumers decode it once at startup through [`load_catalog`] and [`load_profile`].

mod catalog;
mod media;
mod profile;

use thiserror::Error;

pub use catalog::{Project, ProjectCatalog, ProjectCategory, ProjectContent};
pub use media::{primary_media, GalleryCursor, MediaKind};
pub use profile::{
    Award, Contact, Education, Experience, LocationMap, MapPin, Profile, ProfileContent,
    SkillGroup,
};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/content_catalog_generated.rs"));
}

#[derive(Debug, Error)]
/// Errors raised while decoding bundled content.
pub enum ContentError {
    /// The embedded project catalog could not be decoded.
    #[error("project catalog decode failed: {0}")]
    Catalog(#[source] serde_json::Error),
    /// The embedded profile content could not be decoded.
    #[error("profile content decode failed: {0}")]
    Profile(#[source] serde_json::Error),
    /// Two catalog entries share the same project id.
    #[error("duplicate project id `{0}`")]
    DuplicateProject(String),
}

/// Decodes the bundled project catalog.
///
/// # Errors
///
/// Returns [`ContentError`] when the embedded JSON does not match the catalog shape.
pub fn load_catalog() -> Result<ProjectCatalog, ContentError> {
    ProjectCatalog::from_json(generated::PROJECT_CATALOG_JSON)
}

/// Decodes the bundled profile, experience, awards, contact, and location content.
///
/// # Errors
///
/// Returns [`ContentError::Profile`] when the embedded JSON does not match.
pub fn load_profile() -> Result<ProfileContent, ContentError> {
    ProfileContent::from_json(generated::PROFILE_CONTENT_JSON)
}
