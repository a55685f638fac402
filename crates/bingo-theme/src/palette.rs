//! Card color roles — what the sheet renderer paints with.
//!
//! A 75-ball card colors its B-I-N-G-O header bar and free-space cell;
//! a 90-ball card wears a gradient border. One [`CardPalette`] carries
//! all three roles so either card kind can be themed from the same
//! value.

use std::fmt;

use crate::color::Color;

// ---------------------------------------------------------------------------
// Gradient
// ---------------------------------------------------------------------------

/// A CSS linear gradient with evenly spaced stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    angle: u16,
    stops: Vec<Color>,
}

impl Gradient {
    /// Create a gradient from its angle (degrees) and color stops.
    ///
    /// # Panics
    ///
    /// Panics on an empty stop list.
    #[must_use]
    pub fn new(angle: u16, stops: &[Color]) -> Self {
        assert!(!stops.is_empty(), "a gradient needs at least one stop");
        Self {
            angle,
            stops: stops.to_vec(),
        }
    }

    /// Gradient direction in degrees.
    #[must_use]
    pub const fn angle(&self) -> u16 {
        self.angle
    }

    /// The color stops, first to last.
    #[must_use]
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }
}

impl fmt::Display for Gradient {
    /// CSS `linear-gradient(...)` text. Two-stop gradients omit the
    /// stop positions; longer ones spell out even percentages, matching
    /// the stylesheet the sheets were designed against.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg", self.angle)?;
        let n = self.stops.len();
        for (i, stop) in self.stops.iter().enumerate() {
            if n > 2 {
                write!(f, ", {} {}%", stop.hex(), i * 100 / (n - 1))?;
            } else {
                write!(f, ", {}", stop.hex())?;
            }
        }
        write!(f, ")")
    }
}

// ---------------------------------------------------------------------------
// CardPalette
// ---------------------------------------------------------------------------

/// The three color roles a card renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPalette {
    /// 75-ball header bar (the B-I-N-G-O strip).
    pub header: Color,

    /// 75-ball free-space cell background.
    pub free_space: Color,

    /// 90-ball card border gradient.
    pub gradient: Gradient,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stop_gradient_omits_percentages() {
        let g = Gradient::new(45, &[Color::rgb(0, 119, 182), Color::rgb(0, 180, 216)]);
        assert_eq!(g.to_string(), "linear-gradient(45deg, #0077b6, #00b4d8)");
    }

    #[test]
    fn five_stop_gradient_spells_out_percentages() {
        let g = Gradient::new(
            90,
            &[
                Color::rgb(255, 105, 180),
                Color::rgb(218, 112, 214),
                Color::rgb(186, 85, 211),
                Color::rgb(153, 50, 204),
                Color::rgb(139, 0, 139),
            ],
        );
        assert_eq!(
            g.to_string(),
            "linear-gradient(90deg, #ff69b4 0%, #da70d6 25%, #ba55d3 50%, #9932cc 75%, #8b008b 100%)"
        );
    }

    #[test]
    fn single_stop_gradient_renders() {
        let g = Gradient::new(0, &[Color::rgb(1, 2, 3)]);
        assert_eq!(g.to_string(), "linear-gradient(0deg, #010203)");
    }

    #[test]
    #[should_panic(expected = "at least one stop")]
    fn empty_gradient_panics() {
        let _ = Gradient::new(45, &[]);
    }

    #[test]
    fn accessors_expose_parts() {
        let stops = [Color::rgb(1, 1, 1), Color::rgb(2, 2, 2)];
        let g = Gradient::new(180, &stops);
        assert_eq!(g.angle(), 180);
        assert_eq!(g.stops(), &stops);
    }
}
