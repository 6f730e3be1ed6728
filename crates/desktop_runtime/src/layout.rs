//! Initial window collection: the fixed profile windows plus one card per catalog project.

use portfolio_content::{ProjectCatalog, ProjectCategory};

use crate::{
    config::DesktopConfig,
    model::{DesktopState, WindowId, WindowKind, WindowPosition, WindowRecord, WindowSize},
};

const PROJECT_CARD_SIZE: WindowSize = WindowSize { w: 320, h: 240 };
const PROJECT_GRID_COLUMNS: usize = 3;
const PROJECT_COLUMN_STRIDE: i32 = 340;
const PROJECT_ROW_STRIDE: i32 = 260;
const RESEARCH_ORIGIN: WindowPosition = WindowPosition { x: 650, y: 120 };
const DESIGN_ORIGIN: WindowPosition = WindowPosition { x: 650, y: 720 };
const CATEGORY_HEADER_OFFSET: i32 = 60;

struct FixedWindow {
    id: &'static str,
    title: &'static str,
    kind: WindowKind,
    z_index: u32,
    position: WindowPosition,
    size: WindowSize,
    minimized: bool,
}

fn fixed_windows() -> [FixedWindow; 5] {
    [
        FixedWindow {
            id: "profile",
            title: "Profile - Roma Luo",
            kind: WindowKind::Profile,
            z_index: 10,
            position: WindowPosition { x: 100, y: 100 },
            size: WindowSize { w: 480, h: 600 },
            minimized: false,
        },
        FixedWindow {
            id: "awards",
            title: "Awards",
            kind: WindowKind::Awards,
            z_index: 13,
            position: WindowPosition { x: 100, y: 720 },
            size: WindowSize { w: 280, h: 310 },
            minimized: true,
        },
        FixedWindow {
            id: "contact",
            title: "Contact",
            kind: WindowKind::Contact,
            z_index: 12,
            position: WindowPosition { x: 100, y: 770 },
            size: WindowSize { w: 280, h: 250 },
            minimized: true,
        },
        FixedWindow {
            id: "experience",
            title: "Professional Experience",
            kind: WindowKind::Experience,
            z_index: 11,
            position: WindowPosition { x: 100, y: 820 },
            size: WindowSize { w: 280, h: 400 },
            minimized: true,
        },
        FixedWindow {
            id: "location",
            title: "Location",
            kind: WindowKind::Location,
            z_index: 10,
            position: WindowPosition { x: 1670, y: 120 },
            size: WindowSize { w: 500, h: 240 },
            minimized: false,
        },
    ]
}

fn grid_position(origin: WindowPosition, index: usize) -> WindowPosition {
    let col = (index % PROJECT_GRID_COLUMNS) as i32;
    let row = (index / PROJECT_GRID_COLUMNS) as i32;
    WindowPosition {
        x: origin.x + col * PROJECT_COLUMN_STRIDE,
        y: origin.y + row * PROJECT_ROW_STRIDE,
    }
}

/// Grid slot of the `index`-th catalog project.
///
/// The first `research_group_size` projects fill the upper grid; the rest start a second grid.
pub fn project_position(index: usize, config: &DesktopConfig) -> WindowPosition {
    if index < config.research_group_size {
        grid_position(RESEARCH_ORIGIN, index)
    } else {
        grid_position(DESIGN_ORIGIN, index - config.research_group_size)
    }
}

/// Builds the startup window collection. Every record starts open and collapsed.
pub fn initial_desktop_state(catalog: &ProjectCatalog, config: &DesktopConfig) -> DesktopState {
    let fixed = fixed_windows().into_iter().map(|w| WindowRecord {
        id: WindowId::new(w.id),
        title: w.title.to_string(),
        kind: w.kind,
        is_open: true,
        is_minimized: w.minimized,
        is_expanded: false,
        z_index: w.z_index,
        position: w.position,
        size: w.size,
    });

    let projects = catalog
        .projects()
        .iter()
        .enumerate()
        .map(|(index, project)| WindowRecord {
            id: WindowId::for_project(&project.id),
            title: project.title.clone(),
            kind: WindowKind::Project {
                project_id: project.id.clone(),
            },
            is_open: true,
            is_minimized: false,
            is_expanded: false,
            z_index: index as u32 + 1,
            position: project_position(index, config),
            size: PROJECT_CARD_SIZE,
        });

    DesktopState {
        windows: fixed.chain(projects).collect(),
        lightbox: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A category label drawn on the canvas above its project group.
pub struct CategoryHeader {
    pub label: &'static str,
    pub position: WindowPosition,
}

/// Headers for the two project groups, omitting a group that has no projects.
pub fn category_headers(catalog: &ProjectCatalog, config: &DesktopConfig) -> Vec<CategoryHeader> {
    let split = config.research_group_size.min(catalog.len());
    [
        (ProjectCategory::ResearchComputation, RESEARCH_ORIGIN, split > 0),
        (
            ProjectCategory::ArchitecturalDesign,
            DESIGN_ORIGIN,
            catalog.len() > split,
        ),
    ]
    .into_iter()
    .filter(|(_, _, present)| *present)
    .map(|(category, origin, _)| CategoryHeader {
        label: category.label(),
        position: WindowPosition {
            x: origin.x,
            y: origin.y - CATEGORY_HEADER_OFFSET,
        },
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> ProjectCatalog {
        portfolio_content::load_catalog().expect("bundled catalog")
    }

    #[test]
    fn builds_fixed_and_project_windows() {
        let state = initial_desktop_state(&catalog(), &DesktopConfig::default());
        assert_eq!(state.windows.len(), 15);
        assert!(state.windows.iter().all(|w| w.is_open && !w.is_expanded));

        let ids: Vec<&str> = state.windows.iter().take(5).map(|w| w.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["profile", "awards", "contact", "experience", "location"]
        );
        let minimized: Vec<&str> = state
            .windows
            .iter()
            .filter(|w| w.is_minimized)
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(minimized, vec!["awards", "contact", "experience"]);
    }

    #[test]
    fn projects_fill_two_grids() {
        let state = initial_desktop_state(&catalog(), &DesktopConfig::default());
        let p1 = state.window(&WindowId::for_project("p1")).expect("p1");
        assert_eq!(p1.position, WindowPosition { x: 650, y: 120 });
        assert_eq!(p1.z_index, 1);
        assert_eq!(p1.size, PROJECT_CARD_SIZE);

        let p5 = state.window(&WindowId::for_project("p5")).expect("p5");
        assert_eq!(p5.position, WindowPosition { x: 990, y: 380 });

        let p6 = state.window(&WindowId::for_project("p6")).expect("p6");
        assert_eq!(p6.position, WindowPosition { x: 650, y: 720 });
        assert_eq!(p6.z_index, 6);

        let p10 = state.window(&WindowId::for_project("p10")).expect("p10");
        assert_eq!(p10.position, WindowPosition { x: 990, y: 980 });
    }

    #[test]
    fn headers_sit_above_each_group() {
        let headers = category_headers(&catalog(), &DesktopConfig::default());
        assert_eq!(
            headers,
            vec![
                CategoryHeader {
                    label: "Research / Computation",
                    position: WindowPosition { x: 650, y: 60 },
                },
                CategoryHeader {
                    label: "Architectural Design",
                    position: WindowPosition { x: 650, y: 660 },
                },
            ]
        );
    }

    #[test]
    fn empty_catalog_keeps_fixed_windows_only() {
        let empty = ProjectCatalog::default();
        let state = initial_desktop_state(&empty, &DesktopConfig::default());
        assert_eq!(state.windows.len(), 5);
        assert!(category_headers(&empty, &DesktopConfig::default()).is_empty());
    }
}
