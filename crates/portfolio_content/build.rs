use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONTENT_SCHEMA_VERSION: u32 = 1;
const MEDIA_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "mp4"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectContent {
    description: String,
    role: String,
    #[serde(default)]
    technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectManifest {
    id: String,
    title: String,
    short_description: String,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    category: String,
    #[serde(default)]
    media: Vec<String>,
    content: ProjectContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectsFile {
    schema_version: u32,
    projects: Vec<ProjectManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileFile {
    schema_version: u32,
    profile: toml::Value,
    experience: Vec<toml::Value>,
    awards: Vec<toml::Value>,
    contact: toml::Value,
    location: toml::Value,
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn check_schema(path: &Path, found: u32) {
    if found != CONTENT_SCHEMA_VERSION {
        panic!(
            "content schema mismatch in {}: expected {CONTENT_SCHEMA_VERSION} found {found}",
            path.display()
        );
    }
}

fn media_index(path: &Path, project_id: &str, media: &str) -> u32 {
    let file_name = media.rsplit('/').next().unwrap_or(media);
    let (stem, ext) = file_name.rsplit_once('.').unwrap_or_else(|| {
        panic!(
            "media `{media}` of project `{project_id}` in {} has no extension",
            path.display()
        )
    });
    if !MEDIA_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        panic!(
            "media `{media}` of project `{project_id}` in {} has unsupported extension `{ext}`",
            path.display()
        );
    }
    let index = stem.rsplit('-').next().unwrap_or(stem);
    index.parse::<u32>().unwrap_or_else(|_| {
        panic!(
            "media `{media}` of project `{project_id}` in {} must end with a numeric index",
            path.display()
        )
    })
}

fn validate_projects(path: &Path, file: &mut ProjectsFile) {
    check_schema(path, file.schema_version);
    if file.projects.is_empty() {
        panic!("{} declares no projects", path.display());
    }

    let mut seen = HashSet::new();
    for project in &mut file.projects {
        if project.id.trim().is_empty() || project.title.trim().is_empty() {
            panic!("project with empty id or title in {}", path.display());
        }
        if !seen.insert(project.id.clone()) {
            panic!("duplicate project id `{}` in {}", project.id, path.display());
        }
        if !matches!(
            project.category.as_str(),
            "research-computation" | "architectural-design"
        ) {
            panic!(
                "project `{}` in {} has unknown category `{}`",
                project.id,
                path.display(),
                project.category
            );
        }

        let mut last_index = 0;
        for media in &project.media {
            let index = media_index(path, &project.id, media);
            if index <= last_index {
                panic!(
                    "media of project `{}` in {} is not in ascending order at `{media}`",
                    project.id,
                    path.display()
                );
            }
            last_index = index;
        }

        if project.thumbnail.is_none() {
            project.thumbnail = project.media.first().cloned();
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let content_dir = crate_root.join("content");

    let projects_path = content_dir.join("projects.toml");
    let mut projects: ProjectsFile = read_toml(&projects_path);
    validate_projects(&projects_path, &mut projects);

    let profile_path = content_dir.join("profile.toml");
    let profile: ProfileFile = read_toml(&profile_path);
    check_schema(&profile_path, profile.schema_version);

    let projects_json =
        serde_json::to_string_pretty(&projects).expect("serialize project catalog");
    let profile_json = serde_json::to_string_pretty(&profile).expect("serialize profile content");
    let generated = format!(
        "/// Build-time generated project catalog JSON.\n\
pub const PROJECT_CATALOG_JSON: &str = r##\"{}\"##;\n\n\
/// Build-time generated profile content JSON.\n\
pub const PROFILE_CONTENT_JSON: &str = r##\"{}\"##;\n",
        projects_json, profile_json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("content_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
