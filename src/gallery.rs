//! Gallery State
//!
//! The artwork list behind the gallery walls and public profile pages:
//! category filtering, optimistic likes kept in step with the backend,
//! and the horizontal carousel.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use crate::error::{ArtzyError, ArtzyResult};
use crate::model::{Artwork, ArtworkId};

/// Artwork categories offered by the filter dropdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Painting,
    DigitalArt,
    Photography,
    Sketch,
    Abstract,
    Sculpture,
    Other,
}

impl Category {
    /// Filter choices in display order
    pub const ALL_CHOICES: [Category; 8] = [
        Category::All,
        Category::Painting,
        Category::DigitalArt,
        Category::Photography,
        Category::Sketch,
        Category::Abstract,
        Category::Sculpture,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Painting => "Painting",
            Category::DigitalArt => "Digital Art",
            Category::Photography => "Photography",
            Category::Sketch => "Sketch",
            Category::Abstract => "Abstract",
            Category::Sculpture => "Sculpture",
            Category::Other => "Other",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL_CHOICES
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    /// Stored categories are free text; only an exact label matches
    pub fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            Category::All => true,
            other => artwork.category.as_deref() == Some(other.label()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Record of one optimistic like toggle, used to undo it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeTicket {
    pub id: ArtworkId,
    /// Like state after the toggle
    pub liked: bool,
    /// Change applied to `like_count`
    delta: i8,
}

/// Artworks shown on a page plus the active category filter
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtworkBoard {
    artworks: Vec<Artwork>,
    category: Category,
    /// Artworks with a like request in flight
    pending: HashSet<ArtworkId>,
}

impl ArtworkBoard {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self {
            artworks,
            ..Self::default()
        }
    }

    /// Swap in a freshly fetched list; the filter is kept
    pub fn replace(&mut self, artworks: Vec<Artwork>) {
        self.artworks = artworks;
    }

    pub fn select(&mut self, category: Category) {
        self.category = category;
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn all(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Artworks passing the category filter, in backend order
    pub fn visible(&self) -> Vec<&Artwork> {
        self.artworks
            .iter()
            .filter(|a| self.category.matches(a))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn get(&self, id: &ArtworkId) -> Option<&Artwork> {
        self.artworks.iter().find(|a| &a.id == id)
    }

    pub fn remove(&mut self, id: &ArtworkId) -> Option<Artwork> {
        let pos = self.artworks.iter().position(|a| &a.id == id)?;
        self.pending.remove(id);
        Some(self.artworks.remove(pos))
    }

    /// Whether a like request for this artwork has not settled yet
    pub fn is_pending(&self, id: &ArtworkId) -> bool {
        self.pending.contains(id)
    }

    /// Flip the like state of an artwork before the backend confirms it.
    ///
    /// Returns `None` for unknown artworks and while an earlier toggle of
    /// the same artwork is still unsettled, so every ticket undoes exactly
    /// the state the backend last agreed with.
    pub fn toggle_like(&mut self, id: &ArtworkId) -> Option<LikeTicket> {
        if self.pending.contains(id) {
            return None;
        }
        let art = self.artworks.iter_mut().find(|a| &a.id == id)?;

        let delta = if art.is_liked {
            if art.like_count > 0 {
                art.like_count -= 1;
                -1
            } else {
                0
            }
        } else {
            art.like_count += 1;
            1
        };
        art.is_liked = !art.is_liked;
        self.pending.insert(id.clone());

        Some(LikeTicket {
            id: id.clone(),
            liked: art.is_liked,
            delta,
        })
    }

    /// Finish an optimistic toggle; a failed request undoes it
    pub fn settle(&mut self, ticket: &LikeTicket, ok: bool) {
        if !self.pending.remove(&ticket.id) || ok {
            return;
        }

        let Some(art) = self.artworks.iter_mut().find(|a| a.id == ticket.id) else {
            return;
        };

        tracing::warn!(artwork = %ticket.id, "Like request failed, reverting");
        art.is_liked = !ticket.liked;
        match ticket.delta {
            1 => art.like_count = art.like_count.saturating_sub(1),
            -1 => art.like_count += 1,
            _ => {}
        }
    }
}

/// A board that stays reachable across an `.await`
pub trait BoardCell {
    /// Run `f` on the board, `None` once the board is gone
    fn with_board<R>(&self, f: impl FnOnce(&mut ArtworkBoard) -> R) -> Option<R>;
}

impl BoardCell for RefCell<ArtworkBoard> {
    fn with_board<R>(&self, f: impl FnOnce(&mut ArtworkBoard) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Backend side of a like toggle
#[async_trait(?Send)]
pub trait LikeSync {
    async fn send_like(&self, id: &ArtworkId) -> ArtzyResult<()>;
}

/// Toggle a like optimistically, send it, and undo it if the request fails.
///
/// Returns the like state the board ends up with. A click on an artwork
/// whose previous like is still in flight sends nothing and reports the
/// current state.
pub async fn sync_like<C, B>(board: &C, backend: &B, id: &ArtworkId) -> ArtzyResult<bool>
where
    C: BoardCell + ?Sized,
    B: LikeSync + ?Sized,
{
    let started = board
        .with_board(|b| match b.toggle_like(id) {
            Some(ticket) => Some(Ok(ticket)),
            None => b.get(id).map(|art| Err(art.is_liked)),
        })
        .flatten();

    let ticket = match started {
        Some(Ok(ticket)) => ticket,
        Some(Err(liked)) => return Ok(liked),
        None => {
            return Err(ArtzyError::NotFound(format!(
                "Artwork {} is not on this page",
                id
            )))
        }
    };

    let result = backend.send_like(id).await;
    board.with_board(|b| b.settle(&ticket, result.is_ok()));
    result.map(|()| ticket.liked)
}

/// How far one carousel arrow click scrolls
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// One full viewport width
    Viewport,
    Fixed(f64),
}

/// Horizontal artwork slider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
    offset: f64,
    viewport: f64,
    content: f64,
    step: Step,
}

impl Carousel {
    /// Public profile pages scroll by this many pixels per click
    pub const PROFILE_STEP: f64 = 350.0;

    pub fn new(step: Step) -> Self {
        Self {
            offset: 0.0,
            viewport: 0.0,
            content: 0.0,
            step,
        }
    }

    /// Update measured sizes; the offset is re-clamped
    pub fn resize(&mut self, viewport: f64, content: f64) {
        self.viewport = viewport.max(0.0);
        self.content = content.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Record a scroll made without the arrows (touch, wheel)
    pub fn scrolled_to(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    fn max_offset(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    fn step_px(&self) -> f64 {
        match self.step {
            Step::Viewport => self.viewport,
            Step::Fixed(px) => px,
        }
    }

    pub fn next(&mut self) -> f64 {
        self.offset = (self.offset + self.step_px()).min(self.max_offset());
        self.offset
    }

    pub fn prev(&mut self) -> f64 {
        self.offset = (self.offset - self.step_px()).max(0.0);
        self.offset
    }

    pub fn can_prev(&self) -> bool {
        self.offset > 0.0
    }

    pub fn can_next(&self) -> bool {
        self.offset < self.max_offset()
    }
}

/// Open/closed state of a menu or dropdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggle(bool);

impl Toggle {
    pub fn is_open(&self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn close(&mut self) {
        self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(id: &str, category: &str, likes: u64, liked: bool) -> Artwork {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Artwork {}", id),
            "artist": "Someone",
            "category": category,
            "like_count": likes,
            "is_liked": liked,
        }))
        .unwrap()
    }

    fn board() -> ArtworkBoard {
        ArtworkBoard::new(vec![
            art("1", "Painting", 3, false),
            art("2", "Digital Art", 0, true),
            art("3", "painting", 1, true),
        ])
    }

    struct FakeBackend {
        fail: bool,
        calls: RefCell<Vec<ArtworkId>>,
    }

    #[async_trait(?Send)]
    impl LikeSync for FakeBackend {
        async fn send_like(&self, id: &ArtworkId) -> ArtzyResult<()> {
            self.calls.borrow_mut().push(id.clone());
            if self.fail {
                Err(ArtzyError::Network("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_category_filter() {
        let mut board = board();
        assert_eq!(board.visible().len(), 3);

        board.select(Category::Painting);
        let ids: Vec<&str> = board.visible().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);

        board.select(Category::DigitalArt);
        assert_eq!(board.visible().len(), 1);

        board.select(Category::Sculpture);
        assert!(board.visible().is_empty());

        // Refreshing the list keeps the filter
        board.replace(vec![art("9", "Sculpture", 0, false)]);
        assert_eq!(board.visible().len(), 1);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::from_label("digital art"), Some(Category::DigitalArt));
        assert_eq!(Category::from_label("Nope"), None);
        assert_eq!(Category::ALL_CHOICES[0], Category::All);
        assert_eq!(Category::DigitalArt.to_string(), "Digital Art");
    }

    #[test]
    fn test_toggle_and_revert() {
        let mut board = board();
        let id = ArtworkId::new("1");

        let ticket = board.toggle_like(&id).unwrap();
        assert!(ticket.liked);
        assert_eq!(board.get(&id).unwrap().like_count, 4);

        board.settle(&ticket, false);
        let art = board.get(&id).unwrap();
        assert!(!art.is_liked);
        assert_eq!(art.like_count, 3);
    }

    #[test]
    fn test_unlike_never_goes_negative() {
        let mut board = board();
        let id = ArtworkId::new("2");

        let ticket = board.toggle_like(&id).unwrap();
        assert!(!ticket.liked);
        assert_eq!(board.get(&id).unwrap().like_count, 0);

        board.settle(&ticket, false);
        let art = board.get(&id).unwrap();
        assert!(art.is_liked);
        assert_eq!(art.like_count, 0);
    }

    #[test]
    fn test_overlapping_toggles_settle_to_backend_state() {
        let mut board = board();
        let id = ArtworkId::new("1");

        let first = board.toggle_like(&id).unwrap();
        assert!(board.is_pending(&id));
        // Second click while the first request is in flight
        assert!(board.toggle_like(&id).is_none());
        assert_eq!(board.get(&id).unwrap().like_count, 4);

        board.settle(&first, false);
        let art = board.get(&id).unwrap();
        assert!(!art.is_liked);
        assert_eq!(art.like_count, 3);
        assert!(!board.is_pending(&id));

        // Settling the same ticket twice changes nothing
        board.settle(&first, false);
        assert_eq!(board.get(&id).unwrap().like_count, 3);

        let second = board.toggle_like(&id).unwrap();
        board.settle(&second, true);
        let art = board.get(&id).unwrap();
        assert!(art.is_liked);
        assert_eq!(art.like_count, 4);
    }

    #[test]
    fn test_toggle_unknown_artwork() {
        let mut board = board();
        assert!(board.toggle_like(&ArtworkId::new("missing")).is_none());
    }

    #[test]
    fn test_remove() {
        let mut board = board();
        assert!(board.remove(&ArtworkId::new("2")).is_some());
        assert!(board.remove(&ArtworkId::new("2")).is_none());
        assert_eq!(board.len(), 2);
    }

    #[tokio::test]
    async fn test_sync_like_success() {
        let board = RefCell::new(board());
        let backend = FakeBackend { fail: false, calls: RefCell::new(Vec::new()) };

        let liked = sync_like(&board, &backend, &ArtworkId::new("3")).await.unwrap();
        assert!(!liked);
        assert_eq!(board.borrow().get(&ArtworkId::new("3")).unwrap().like_count, 0);
        assert!(!board.borrow().is_pending(&ArtworkId::new("3")));
        assert_eq!(backend.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_sync_like_failure_reverts() {
        let before = board();
        let board = RefCell::new(before.clone());
        let backend = FakeBackend { fail: true, calls: RefCell::new(Vec::new()) };

        let result = sync_like(&board, &backend, &ArtworkId::new("1")).await;
        assert!(matches!(result, Err(ArtzyError::Network(_))));
        assert_eq!(*board.borrow(), before);
    }

    #[tokio::test]
    async fn test_sync_like_while_pending_sends_nothing() {
        let board = RefCell::new(board());
        let id = ArtworkId::new("1");
        let ticket = board.borrow_mut().toggle_like(&id).unwrap();
        let backend = FakeBackend { fail: false, calls: RefCell::new(Vec::new()) };

        let liked = sync_like(&board, &backend, &id).await.unwrap();
        assert!(liked);
        assert!(backend.calls.borrow().is_empty());
        assert_eq!(board.borrow().get(&id).unwrap().like_count, 4);

        board.borrow_mut().settle(&ticket, true);
        assert!(!board.borrow().is_pending(&id));
    }

    #[tokio::test]
    async fn test_sync_like_unknown_skips_request() {
        let board = RefCell::new(board());
        let backend = FakeBackend { fail: false, calls: RefCell::new(Vec::new()) };

        let result = sync_like(&board, &backend, &ArtworkId::new("x")).await;
        assert!(matches!(result, Err(ArtzyError::NotFound(_))));
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn test_carousel_viewport_step() {
        let mut carousel = Carousel::new(Step::Viewport);
        carousel.resize(1000.0, 2500.0);

        assert!(!carousel.can_prev());
        assert_eq!(carousel.next(), 1000.0);
        assert_eq!(carousel.next(), 1500.0);
        assert!(!carousel.can_next());
        assert_eq!(carousel.next(), 1500.0);
        assert_eq!(carousel.prev(), 500.0);
        assert_eq!(carousel.prev(), 0.0);
    }

    #[test]
    fn test_carousel_fixed_step_and_shrink() {
        let mut carousel = Carousel::new(Step::Fixed(Carousel::PROFILE_STEP));
        carousel.resize(800.0, 2000.0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.offset(), 700.0);

        // Content shrank after filtering
        carousel.resize(800.0, 1000.0);
        assert_eq!(carousel.offset(), 200.0);

        carousel.resize(800.0, 300.0);
        assert_eq!(carousel.offset(), 0.0);
        assert!(!carousel.can_next());
    }

    #[test]
    fn test_carousel_manual_scroll() {
        let mut carousel = Carousel::new(Step::Fixed(Carousel::PROFILE_STEP));
        carousel.resize(500.0, 1500.0);

        carousel.scrolled_to(900.0);
        assert_eq!(carousel.offset(), 900.0);
        assert_eq!(carousel.prev(), 550.0);

        carousel.scrolled_to(5000.0);
        assert_eq!(carousel.offset(), 1000.0);
        carousel.scrolled_to(-10.0);
        assert!(!carousel.can_prev());
    }

    #[test]
    fn test_toggle_state() {
        let mut menu = Toggle::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
