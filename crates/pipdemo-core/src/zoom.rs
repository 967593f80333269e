//! Zoom factor for raster previews.

/// Smallest zoom factor (natural size).
pub const MIN_ZOOM: f64 = 1.0;

/// Largest zoom factor.
pub const MAX_ZOOM: f64 = 3.0;

/// Slider granularity.
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom factor, always inside `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Zoom(f64);

impl Zoom {
    /// Clamps any input into range. NaN maps to the default.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    /// Parses slider input. Non-numeric text maps to the default.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<f64>()
            .map(Self::clamped)
            .unwrap_or_default()
    }

    pub fn factor(self) -> f64 {
        self.0
    }

    pub fn is_default(self) -> bool {
        self.0 == MIN_ZOOM
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(MIN_ZOOM)
    }
}

impl std::fmt::Display for Zoom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Zoom::default().factor(), 1.0);
        assert!(Zoom::default().is_default());
    }

    #[test]
    fn test_clamped_in_range() {
        assert_eq!(Zoom::clamped(1.5).factor(), 1.5);
        assert_eq!(Zoom::clamped(3.0).factor(), 3.0);
    }

    #[test]
    fn test_clamped_out_of_range() {
        assert_eq!(Zoom::clamped(5.0).factor(), MAX_ZOOM);
        assert_eq!(Zoom::clamped(0.2).factor(), MIN_ZOOM);
        assert_eq!(Zoom::clamped(-4.0).factor(), MIN_ZOOM);
        assert_eq!(Zoom::clamped(f64::INFINITY).factor(), MAX_ZOOM);
        assert_eq!(Zoom::clamped(f64::NEG_INFINITY).factor(), MIN_ZOOM);
    }

    #[test]
    fn test_clamped_nan() {
        assert_eq!(Zoom::clamped(f64::NAN), Zoom::default());
    }

    #[test]
    fn test_clamp_matches_std_for_sampled_inputs() {
        let mut v = -2.0;
        while v < 6.0 {
            assert_eq!(Zoom::clamped(v).factor(), v.clamp(MIN_ZOOM, MAX_ZOOM));
            v += 0.37;
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Zoom::parse("2.3").factor(), 2.3);
        assert_eq!(Zoom::parse(" 9 ").factor(), MAX_ZOOM);
        assert_eq!(Zoom::parse("abc"), Zoom::default());
        assert_eq!(Zoom::parse(""), Zoom::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(Zoom::clamped(2.34).to_string(), "2.3x");
        assert_eq!(Zoom::default().to_string(), "1.0x");
    }
}
