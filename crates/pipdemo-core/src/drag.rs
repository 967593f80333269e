//! Pointer drag tracking for the minimized thumbnail.
//!
//! The offset is cosmetic: it is not part of the session and a new
//! thumbnail always starts at its anchored corner.

/// Pointer travel (px) after which a press counts as a drag, not a click.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Grab {
    pointer: (f64, f64),
    offset: (f64, f64),
    moved: bool,
}

/// Free-floating offset of the thumbnail relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThumbnailDrag {
    offset: (f64, f64),
    grab: Option<Grab>,
}

impl ThumbnailDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some_and(|g| g.moved)
    }

    /// Pointer pressed at `(x, y)`.
    pub fn start(&mut self, x: f64, y: f64) {
        self.grab = Some(Grab {
            pointer: (x, y),
            offset: self.offset,
            moved: false,
        });
    }

    /// Pointer moved to `(x, y)`. Returns `true` if the offset changed.
    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        let Some(grab) = self.grab.as_mut() else {
            return false;
        };

        let dx = x - grab.pointer.0;
        let dy = y - grab.pointer.1;
        if !grab.moved && dx.hypot(dy) < DRAG_THRESHOLD_PX {
            return false;
        }

        grab.moved = true;
        let next = (grab.offset.0 + dx, grab.offset.1 + dy);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Pointer released. Returns `true` when the gesture was a click.
    pub fn end(&mut self) -> bool {
        match self.grab.take() {
            Some(grab) => !grab.moved,
            None => false,
        }
    }

    /// Abandons the gesture without treating it as a click.
    pub fn cancel(&mut self) {
        self.grab = None;
    }

    /// CSS transform for the current offset.
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.offset.0, self.offset.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_anchor() {
        let drag = ThumbnailDrag::new();
        assert_eq!(drag.offset(), (0.0, 0.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.transform(), "translate(0px, 0px)");
    }

    #[test]
    fn test_small_jitter_is_a_click() {
        let mut drag = ThumbnailDrag::new();
        drag.start(100.0, 100.0);
        assert!(!drag.move_to(101.0, 102.0));
        assert!(drag.end());
        assert_eq!(drag.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_moves_and_is_not_a_click() {
        let mut drag = ThumbnailDrag::new();
        drag.start(100.0, 100.0);
        assert!(drag.move_to(80.0, 70.0));
        assert!(drag.is_dragging());
        assert_eq!(drag.offset(), (-20.0, -30.0));
        assert!(!drag.end());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_offset_accumulates_across_drags() {
        let mut drag = ThumbnailDrag::new();
        drag.start(0.0, 0.0);
        drag.move_to(-50.0, 0.0);
        drag.end();

        drag.start(10.0, 10.0);
        drag.move_to(10.0, -40.0);
        drag.end();

        assert_eq!(drag.offset(), (-50.0, -50.0));
        assert_eq!(drag.transform(), "translate(-50px, -50px)");
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut drag = ThumbnailDrag::new();
        assert!(!drag.move_to(500.0, 500.0));
        assert!(!drag.end());
        assert_eq!(drag.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_cancel_is_not_a_click() {
        let mut drag = ThumbnailDrag::new();
        drag.start(0.0, 0.0);
        drag.cancel();
        assert!(!drag.end());
    }
}
