//! # bingo-theme — card color themes for bingo-print
//!
//! Named color themes for printable bingo sheets. A theme is plain
//! data: a header color, a free-space color, and a border gradient,
//! plus the CSS custom-property pairs the web sheet injects at the
//! document root. The generator never sees any of this — theming is
//! strictly a rendering concern.
//!
//! - **[`color`]** — minimal sRGB `Color` with hex parsing/formatting
//! - **[`palette`]** — `Gradient` and the `CardPalette` color roles
//! - **[`builtin`]** — the named presets ("purple", "blue", "green", "red")

pub mod builtin;
pub mod color;
pub mod palette;

pub use builtin::{CardTheme, builtin_names, builtin_theme};
pub use color::Color;
pub use palette::{CardPalette, Gradient};
