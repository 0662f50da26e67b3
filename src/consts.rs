use super::*;

//Physical constants
/// Fundamental charge in Coulombs.
pub const Q: f64 = 1.602176634E-19;
/// Electron mass in kilograms.
pub const ME: f64 = 9.1093837015E-31;
/// Proton mass in kilograms.
pub const MP: f64 = 1.67262192369E-27;

//Numeric floors
/// Annular envelope value below which the lens field is exactly zero.
pub const ENVELOPE_FLOOR: f64 = 1E-20;
/// Minimum half-extent when auto-scaling an orthographic view.
pub const MIN_VIEW_EXTENT: f64 = 1E-9;
/// Relative arrow length below which glyphs are suppressed.
pub const MIN_ARROW_FRACTION: f64 = 0.02;
