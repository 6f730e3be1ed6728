use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Two-way grouping of projects, used only to pick a layout origin on the desktop.
pub enum ProjectCategory {
    /// Research and computational work.
    ResearchComputation,
    /// Built and speculative architectural design work.
    ArchitecturalDesign,
}

impl ProjectCategory {
    /// Header label rendered above the category's window group.
    pub fn label(self) -> &'static str {
        match self {
            Self::ResearchComputation => "Research / Computation",
            Self::ArchitecturalDesign => "Architectural Design",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Long-form detail shown when a project window is expanded.
pub struct ProjectContent {
    pub description: String,
    pub role: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single portfolio project.
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: ProjectCategory,
    pub content: ProjectContent,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(flatten)]
    project: Project,
    #[serde(default)]
    media: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    projects: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Ordered, read-only project collection with per-project media galleries.
pub struct ProjectCatalog {
    projects: Vec<Project>,
    media: HashMap<String, Vec<String>>,
}

impl ProjectCatalog {
    /// Decodes a catalog from the build-time JSON shape (`{"projects": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Catalog`] for malformed JSON and
    /// [`ContentError::DuplicateProject`] when two entries share an id.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let file: CatalogFile = serde_json::from_str(raw).map_err(ContentError::Catalog)?;
        Self::from_entries(
            file.projects
                .into_iter()
                .map(|entry| (entry.project, entry.media)),
        )
    }

    /// Builds a catalog from `(project, media)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::DuplicateProject`] when two entries share an id.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Project, Vec<String>)>,
    ) -> Result<Self, ContentError> {
        let mut catalog = Self::default();
        for (project, media) in entries {
            if catalog.media.contains_key(&project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
            catalog.media.insert(project.id.clone(), media);
            catalog.projects.push(project);
        }
        Ok(catalog)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks up a project by id.
    pub fn get(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Ordered gallery for `project_id`; empty for unknown ids or projects without media.
    pub fn media_for(&self, project_id: &str) -> &[String] {
        self.media
            .get(project_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"{
        "schema_version": 1,
        "projects": [
            {
                "id": "a",
                "title": "Alpha",
                "short_description": "first",
                "thumbnail": "/a/thumb.png",
                "tags": ["x"],
                "category": "research-computation",
                "media": ["/a/a-1.mp4", "/a/a-2.png"],
                "content": { "description": "d", "role": "r", "technologies": ["t"] }
            },
            {
                "id": "b",
                "title": "Beta",
                "short_description": "second",
                "category": "architectural-design",
                "content": { "description": "d", "role": "r" }
            }
        ]
    }"#;

    #[test]
    fn decodes_entries_and_media() {
        let catalog = ProjectCatalog::from_json(SAMPLE).expect("sample catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.media_for("a"), ["/a/a-1.mp4", "/a/a-2.png"]);
        let beta = catalog.get("b").expect("beta");
        assert_eq!(beta.thumbnail, None);
        assert_eq!(beta.category, ProjectCategory::ArchitecturalDesign);
        assert!(beta.content.technologies.is_empty());
    }

    #[test]
    fn unknown_project_has_empty_media() {
        let catalog = ProjectCatalog::from_json(SAMPLE).expect("sample catalog");
        assert!(catalog.media_for("missing").is_empty());
        assert!(catalog.media_for("b").is_empty());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let catalog = ProjectCatalog::from_json(SAMPLE).expect("sample catalog");
        let dup = catalog.get("a").cloned().expect("alpha");
        let err = ProjectCatalog::from_entries(vec![(dup.clone(), Vec::new()), (dup, Vec::new())])
            .expect_err("duplicate");
        assert!(matches!(err, ContentError::DuplicateProject(id) if id == "a"));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        let err = ProjectCatalog::from_json("{\"projects\": 3}").expect_err("malformed");
        assert!(matches!(err, ContentError::Catalog(_)));
    }
}
