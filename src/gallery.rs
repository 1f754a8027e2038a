//! Project media browsing: the derived media sequence, the cursor over
//! it, and the modal state machine that owns both.

use crate::catalog::Project;

/// One displayable unit in a project's gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaItem {
    Video {
        source: &'static str,
        poster: Option<&'static str>,
    },
    Image {
        source: &'static str,
    },
}

impl MediaItem {
    pub fn source(&self) -> &'static str {
        match self {
            MediaItem::Video { source, .. } | MediaItem::Image { source } => source,
        }
    }
}

/// Derives the ordered media sequence for a project.
///
/// The rule, in order:
/// 1. a `video` contributes one video item, with the primary `image` as
///    its poster;
/// 2. a non-empty `images` list contributes one image item per entry;
/// 3. otherwise the primary `image` contributes one image item, but only
///    when there is no video (with a video the primary image is already
///    spoken for as the poster).
///
/// The result may be empty; an empty gallery renders nothing.
pub fn media_items(project: &Project) -> Vec<MediaItem> {
    let mut items = Vec::new();
    if let Some(source) = project.video {
        items.push(MediaItem::Video {
            source,
            poster: project.image,
        });
    }
    if !project.images.is_empty() {
        items.extend(
            project
                .images
                .iter()
                .map(|source| MediaItem::Image { source }),
        );
    } else if project.video.is_none() {
        if let Some(source) = project.image {
            items.push(MediaItem::Image { source });
        }
    }
    items
}

/// Cursor over one modal session's media sequence.
///
/// Navigation wraps circularly rather than clamping, so `previous` from
/// the first item lands on the last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryCursor {
    items: Vec<MediaItem>,
    index: usize,
}

impl GalleryCursor {
    pub fn new(project: &Project) -> Self {
        GalleryCursor {
            items: media_items(project),
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.index)
    }

    /// Advance one item, wrapping. No-op on an empty sequence.
    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    /// Step back one item, wrapping. No-op on an empty sequence.
    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
        }
    }

    /// Jump straight to `index`. Callers only offer valid indices (one
    /// indicator per item), so out-of-range is a precondition violation;
    /// release builds ignore it.
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(index < self.items.len(), "gallery index out of range");
        if index < self.items.len() {
            self.index = index;
        }
    }
}

/// The modal's state machine over `{Closed, Open}` plus the session data.
///
/// `close` deliberately keeps the selected project so the exit transition
/// never shows an empty modal; the page shell calls [`clear_selection`]
/// once the transition is done.
///
/// [`clear_selection`]: ModalState::clear_selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
    selected: Option<Project>,
    cursor: GalleryCursor,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn cursor(&self) -> &GalleryCursor {
        &self.cursor
    }

    /// `Closed → Open`: select the project and rebuild the cursor at 0.
    pub fn open(&mut self, project: Project) {
        self.cursor = GalleryCursor::new(&project);
        self.selected = Some(project);
        self.is_open = true;
    }

    /// `Open → Closed`: only the flag flips; the selection survives.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Drops the session data after the close transition has played out.
    /// Ignored while open: a stale transition timer must not blank a
    /// modal that was reopened in the meantime.
    pub fn clear_selection(&mut self) {
        if self.is_open {
            return;
        }
        self.selected = None;
        self.cursor = GalleryCursor::default();
    }

    pub fn next_media(&mut self) {
        self.cursor.next();
    }

    pub fn previous_media(&mut self) {
        self.cursor.previous();
    }

    pub fn jump_to_media(&mut self, index: usize) {
        self.cursor.jump_to(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectIcon;

    fn project(
        image: Option<&'static str>,
        images: &'static [&'static str],
        video: Option<&'static str>,
    ) -> Project {
        Project {
            id: "test-project",
            title: "Test Project",
            description: "A project used in tests.",
            long_description: None,
            image,
            images,
            video,
            technologies: &[],
            icon: ProjectIcon::Code,
            demo_link: None,
            code_link: None,
        }
    }

    #[test]
    fn images_list_supersedes_primary_image() {
        let p = project(Some("cover.png"), &["a.png", "b.png", "c.png"], None);
        assert_eq!(
            media_items(&p),
            vec![
                MediaItem::Image { source: "a.png" },
                MediaItem::Image { source: "b.png" },
                MediaItem::Image { source: "c.png" },
            ]
        );
    }

    #[test]
    fn video_takes_primary_image_as_poster() {
        let p = project(Some("cover.png"), &[], Some("demo.mp4"));
        assert_eq!(
            media_items(&p),
            vec![MediaItem::Video {
                source: "demo.mp4",
                poster: Some("cover.png"),
            }]
        );
    }

    #[test]
    fn video_then_images_when_both_present() {
        let p = project(Some("cover.png"), &["a.png", "b.png"], Some("demo.mp4"));
        let items = media_items(&p);
        assert_eq!(items.len(), 3);
        assert!(matches!(items[0], MediaItem::Video { .. }));
        assert_eq!(items[1].source(), "a.png");
        assert_eq!(items[2].source(), "b.png");
    }

    #[test]
    fn lone_primary_image_is_the_whole_gallery() {
        let p = project(Some("cover.png"), &[], None);
        assert_eq!(
            media_items(&p),
            vec![MediaItem::Image {
                source: "cover.png"
            }]
        );
    }

    #[test]
    fn no_media_yields_empty_gallery() {
        let p = project(None, &[], None);
        assert!(media_items(&p).is_empty());
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let p = project(None, &["a.png", "b.png", "c.png"], None);
        let mut cursor = GalleryCursor::new(&p);
        assert_eq!(cursor.position(), 0);

        cursor.previous();
        assert_eq!(cursor.position(), 2);

        cursor.next();
        assert_eq!(cursor.position(), 0);
        cursor.next();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.position(), 0, "three next calls on three items");
    }

    #[test]
    fn navigation_is_a_noop_on_single_item() {
        let p = project(Some("cover.png"), &[], Some("demo.mp4"));
        let mut cursor = GalleryCursor::new(&p);
        cursor.next();
        assert_eq!(cursor.position(), 0);
        cursor.previous();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn navigation_is_a_noop_on_empty_gallery() {
        let p = project(None, &[], None);
        let mut cursor = GalleryCursor::new(&p);
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn jump_to_selects_a_valid_index() {
        let p = project(None, &["a.png", "b.png", "c.png"], None);
        let mut cursor = GalleryCursor::new(&p);
        cursor.jump_to(2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current().map(MediaItem::source), Some("c.png"));
    }

    #[test]
    fn opening_a_second_project_resets_the_cursor() {
        let a = project(None, &["a1.png", "a2.png", "a3.png"], None);
        let b = project(None, &["b1.png", "b2.png"], None);

        let mut modal = ModalState::default();
        modal.open(a);
        modal.next_media();
        modal.next_media();
        assert_eq!(modal.cursor().position(), 2);

        modal.open(b);
        assert_eq!(modal.cursor().position(), 0);
        assert_eq!(modal.cursor().len(), 2);
    }

    #[test]
    fn reopening_the_same_project_resets_the_cursor() {
        let p = project(None, &["a.png", "b.png"], None);
        let mut modal = ModalState::default();

        modal.open(p);
        modal.next_media();
        assert_eq!(modal.cursor().position(), 1);

        modal.close();
        modal.clear_selection();
        modal.open(p);
        assert_eq!(modal.cursor().position(), 0);
    }

    #[test]
    fn close_keeps_the_selection_until_cleared() {
        let p = project(Some("cover.png"), &[], None);
        let mut modal = ModalState::default();

        modal.open(p);
        assert!(modal.is_open());
        assert!(modal.selected().is_some());

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.selected().is_some(), "selection survives the close");

        modal.clear_selection();
        assert!(modal.selected().is_none());
        assert!(modal.cursor().is_empty());
    }

    #[test]
    fn stale_clear_does_not_blank_a_reopened_modal() {
        let a = project(None, &["a.png"], None);
        let b = project(None, &["b.png"], None);
        let mut modal = ModalState::default();

        modal.open(a);
        modal.close();
        modal.open(b);
        // The timer from closing A fires after B is already open.
        modal.clear_selection();
        assert!(modal.is_open());
        assert!(modal.selected().is_some());
        assert_eq!(
            modal.cursor().current().map(MediaItem::source),
            Some("b.png")
        );
    }

    #[test]
    fn gallery_navigation_never_changes_the_open_flag() {
        let p = project(None, &["a.png", "b.png"], None);
        let mut modal = ModalState::default();
        modal.open(p);
        modal.next_media();
        modal.previous_media();
        modal.jump_to_media(1);
        assert!(modal.is_open());
    }
}
