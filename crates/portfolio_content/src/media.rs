use crate::catalog::{Project, ProjectCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a media path should be rendered.
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies a media path by extension; only `.mp4` is treated as video.
    pub fn from_path(path: &str) -> Self {
        let is_video = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.eq_ignore_ascii_case("mp4"))
            .unwrap_or(false);
        if is_video {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// First gallery entry for `project`, falling back to its thumbnail.
///
/// `None` means the view should render its "No Image" placeholder.
pub fn primary_media<'a>(catalog: &'a ProjectCatalog, project: &'a Project) -> Option<&'a str> {
    catalog
        .media_for(&project.id)
        .first()
        .map(String::as_str)
        .or(project.thumbnail.as_deref())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Position within a project's gallery. Navigation stops at either end.
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn has_prev(self) -> bool {
        self.index > 0
    }

    pub fn has_next(self) -> bool {
        self.index + 1 < self.len
    }

    #[must_use]
    pub fn prev(self) -> Self {
        if self.has_prev() {
            Self {
                index: self.index - 1,
                ..self
            }
        } else {
            self
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.has_next() {
            Self {
                index: self.index + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Navigation controls and the counter only show for multi-item galleries.
    pub fn shows_navigation(self) -> bool {
        self.len > 1
    }

    /// One-based `current / total` label.
    pub fn counter_label(self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }

    /// Current entry of `media`, or `fallback` when the gallery is empty.
    pub fn current<'a>(self, media: &'a [String], fallback: Option<&'a str>) -> Option<&'a str> {
        media.get(self.index).map(String::as_str).or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{ProjectCategory, ProjectContent};

    fn project(id: &str, thumbnail: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            short_description: String::new(),
            thumbnail: thumbnail.map(str::to_string),
            tags: Vec::new(),
            category: ProjectCategory::ResearchComputation,
            content: ProjectContent {
                description: String::new(),
                role: String::new(),
                technologies: Vec::new(),
            },
        }
    }

    #[test]
    fn classifies_mp4_as_video_case_insensitively() {
        assert_eq!(MediaKind::from_path("/p/p1-1.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("/p/p1-1.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("/p/p1-5.JPG"), MediaKind::Image);
        assert_eq!(MediaKind::from_path("/p/no-extension"), MediaKind::Image);
    }

    #[test]
    fn primary_media_falls_back_to_thumbnail_then_none() {
        let catalog = ProjectCatalog::from_entries(vec![
            (project("a", Some("/a/thumb.png")), vec!["/a/a-1.mp4".to_string()]),
            (project("b", Some("/b/thumb.png")), Vec::new()),
            (project("c", None), Vec::new()),
        ])
        .expect("catalog");

        let lookup = |id: &str| catalog.get(id).expect("project");
        assert_eq!(primary_media(&catalog, lookup("a")), Some("/a/a-1.mp4"));
        assert_eq!(primary_media(&catalog, lookup("b")), Some("/b/thumb.png"));
        assert_eq!(primary_media(&catalog, lookup("c")), None);
    }

    #[test]
    fn cursor_stops_at_both_ends() {
        let cursor = GalleryCursor::new(3);
        assert!(!cursor.has_prev());
        assert_eq!(cursor.prev(), cursor);

        let last = cursor.next().next();
        assert!(last.has_prev());
        assert!(!last.has_next());
        assert_eq!(last.next(), last);
        assert_eq!(last.counter_label(), "3 / 3");
    }

    #[test]
    fn single_item_gallery_hides_navigation() {
        assert!(!GalleryCursor::new(1).shows_navigation());
        assert!(!GalleryCursor::new(0).shows_navigation());
        assert!(GalleryCursor::new(2).shows_navigation());
    }

    #[test]
    fn current_uses_fallback_for_empty_gallery() {
        let media = vec!["/x-1.png".to_string(), "/x-2.png".to_string()];
        let cursor = GalleryCursor::new(media.len()).next();
        assert_eq!(cursor.current(&media, None), Some("/x-2.png"));
        assert_eq!(GalleryCursor::new(0).current(&[], Some("/thumb.png")), Some("/thumb.png"));
        assert_eq!(GalleryCursor::new(0).current(&[], None), None);
    }
}
