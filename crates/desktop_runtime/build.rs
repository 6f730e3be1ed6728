use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    design_width: i32,
    design_height: i32,
    expanded_width: i32,
    expanded_height: i32,
    edge_padding: i32,
    title_bar_height: i32,
    drag_click_cooldown_ms: u32,
    research_group_size: usize,
    loading_splash_ms: u32,
}

fn require_positive(path: &std::path::Path, field: &str, value: i32) {
    if value <= 0 {
        panic!(
            "`{field}` in {} must be positive, found {value}",
            path.display()
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "desktop config schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    require_positive(&path, "design_width", manifest.design_width);
    require_positive(&path, "design_height", manifest.design_height);
    require_positive(&path, "expanded_width", manifest.expanded_width);
    require_positive(&path, "expanded_height", manifest.expanded_height);
    require_positive(&path, "title_bar_height", manifest.title_bar_height);
    if manifest.edge_padding < 0 {
        panic!("`edge_padding` in {} must not be negative", path.display());
    }
    if manifest.expanded_width + 2 * manifest.edge_padding > manifest.design_width {
        panic!(
            "expanded footprint in {} does not fit the design canvas",
            path.display()
        );
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated desktop layout config JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
