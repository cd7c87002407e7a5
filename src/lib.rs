//! # Hershey font chart
//!
//! Generates a PostScript document that displays every printable ASCII
//! character (codes 32 to 126) in one of the [Hershey fonts], each glyph
//! flanked by two short tick marks, on a fixed 16-column grid.
//!
//! [Hershey fonts]: https://en.wikipedia.org/wiki/Hershey_fonts

pub mod chart;
pub mod ps;
