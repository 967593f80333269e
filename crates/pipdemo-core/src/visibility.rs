//! Tri-state lifecycle position of a preview.

/// Where the preview currently lives on screen.
///
/// A single enum rather than separate `open` / `minimized` flags, so the
/// incoherent "open and minimized" combination cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Nothing shown except the trigger button
    #[default]
    Closed,
    /// Modal dialog shown
    Open,
    /// Modal hidden, draggable thumbnail shown
    Minimized,
}

impl Visibility {
    /// `Closed` or `Minimized` -> `Open`.
    pub fn open(self) -> Self {
        Visibility::Open
    }

    /// Any state -> `Closed`.
    pub fn close(self) -> Self {
        Visibility::Closed
    }

    /// `Open` -> `Minimized`; every other state is left alone.
    pub fn minimize(self) -> Self {
        match self {
            Visibility::Open => Visibility::Minimized,
            other => other,
        }
    }

    /// `Minimized` -> `Open`; every other state is left alone.
    pub fn restore(self) -> Self {
        match self {
            Visibility::Minimized => Visibility::Open,
            other => other,
        }
    }

    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    pub fn is_minimized(self) -> bool {
        self == Visibility::Minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Visibility; 3] = [Visibility::Closed, Visibility::Open, Visibility::Minimized];

    #[test]
    fn test_default_is_closed() {
        assert_eq!(Visibility::default(), Visibility::Closed);
    }

    #[test]
    fn test_open_from_every_state() {
        for state in ALL {
            assert_eq!(state.open(), Visibility::Open);
        }
    }

    #[test]
    fn test_close_from_every_state() {
        for state in ALL {
            assert_eq!(state.close(), Visibility::Closed);
        }
    }

    #[test]
    fn test_minimize_only_from_open() {
        assert_eq!(Visibility::Open.minimize(), Visibility::Minimized);
        assert_eq!(Visibility::Closed.minimize(), Visibility::Closed);
        assert_eq!(Visibility::Minimized.minimize(), Visibility::Minimized);
    }

    #[test]
    fn test_restore_only_from_minimized() {
        assert_eq!(Visibility::Minimized.restore(), Visibility::Open);
        assert_eq!(Visibility::Closed.restore(), Visibility::Closed);
        assert_eq!(Visibility::Open.restore(), Visibility::Open);
    }

    #[test]
    fn test_predicates() {
        assert!(Visibility::Open.is_open());
        assert!(!Visibility::Open.is_minimized());
        assert!(Visibility::Minimized.is_minimized());
        assert!(!Visibility::Closed.is_open());
    }
}
