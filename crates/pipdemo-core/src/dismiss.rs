//! Backdrop click tracking for the modal overlay.
//!
//! A click only dismisses the modal when the press and the release both land
//! on the backdrop itself. A drag that starts inside the dialog (for example
//! on the zoom slider) and ends over the backdrop is not a dismissal, even
//! though the browser reports the resulting click on the backdrop.

/// Press state of the modal backdrop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackdropClick {
    pressed_on_backdrop: bool,
}

impl BackdropClick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed. `on_backdrop` is whether the press target is the
    /// backdrop element itself rather than something inside the dialog.
    pub fn press(&mut self, on_backdrop: bool) {
        self.pressed_on_backdrop = on_backdrop;
    }

    /// Click delivered to the backdrop. Returns `true` when it should
    /// dismiss the modal. Consumes the recorded press either way.
    pub fn click(&mut self, on_backdrop: bool) -> bool {
        let pressed = std::mem::take(&mut self.pressed_on_backdrop);
        pressed && on_backdrop
    }
}
