//! Named preset themes — ready-to-use card color configurations.
//!
//! Each preset pairs a header/free-space color with a border gradient.
//! The values are the shipped stylesheet's originals, kept verbatim so
//! regenerated sheets match existing printed sets.

use crate::color::Color;
use crate::palette::{CardPalette, Gradient};

/// A complete, named card color theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTheme {
    /// Theme name as selected in the controls ("purple", "blue", …).
    pub name: String,

    /// The color roles for this theme.
    pub palette: CardPalette,
}

impl CardTheme {
    /// CSS custom-property pairs for the style injector.
    ///
    /// The renderer applies these at the document root; cards reference
    /// them via `var(--header-bg-color)` and friends.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        vec![
            ("--header-bg-color".to_string(), self.palette.header.hex()),
            (
                "--free-space-bg-color".to_string(),
                self.palette.free_space.hex(),
            ),
            (
                format!("--color-{}-gradient", self.name),
                self.palette.gradient.to_string(),
            ),
        ]
    }
}

/// Look up a builtin theme by name.
///
/// Returns `None` if the name is not recognized. "default" resolves to
/// the purple theme.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<CardTheme> {
    let (name, header, free_space, gradient) = match name {
        "default" | "purple" => (
            "purple",
            Color::rgb(128, 0, 128),  // #800080
            Color::rgb(186, 85, 211), // #ba55d3
            Gradient::new(
                90,
                &[
                    Color::rgb(255, 105, 180), // #ff69b4
                    Color::rgb(218, 112, 214), // #da70d6
                    Color::rgb(186, 85, 211),  // #ba55d3
                    Color::rgb(153, 50, 204),  // #9932cc
                    Color::rgb(139, 0, 139),   // #8b008b
                ],
            ),
        ),
        "blue" => (
            "blue",
            Color::rgb(70, 130, 180),  // #4682b4
            Color::rgb(100, 149, 237), // #6495ed
            Gradient::new(
                45,
                &[
                    Color::rgb(0, 119, 182), // #0077b6
                    Color::rgb(0, 180, 216), // #00b4d8
                ],
            ),
        ),
        "green" => (
            "green",
            Color::rgb(60, 179, 113),  // #3cb371
            Color::rgb(102, 205, 170), // #66cdaa
            Gradient::new(
                45,
                &[
                    Color::rgb(76, 150, 76),   // #4c964c
                    Color::rgb(112, 199, 112), // #70c770
                ],
            ),
        ),
        "red" => (
            "red",
            Color::rgb(204, 0, 0),  // #cc0000
            Color::rgb(255, 69, 0), // #ff4500
            Gradient::new(
                45,
                &[
                    Color::rgb(192, 57, 43), // #c0392b
                    Color::rgb(231, 76, 60), // #e74c3c
                ],
            ),
        ),
        _ => return None,
    };
    Some(CardTheme {
        name: name.to_string(),
        palette: CardPalette {
            header,
            free_space,
            gradient,
        },
    })
}

/// List all available builtin theme names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "purple", "blue", "green", "red"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
