use super::*;
use std::sync::Once;

static DEGENERATE_SPREAD: Once = Once::new();
static NONFINITE_PROFILE: Once = Once::new();

/// Unit-peak Gaussian bump exp(-0.5 ((x - offset)/spread)^2).
///
/// A zero or non-finite spread evaluates to 0 instead of poisoning the field
/// with NaN; each failure class reports once rather than per call.
pub fn gaussian(x: f64, offset: f64, spread: f64) -> f64 {
    if (spread == 0.) | !spread.is_finite() {
        DEGENERATE_SPREAD.call_once(|| {
            eprintln!("Warning: degenerate Gaussian spread {}; profile evaluates to 0.", spread);
        });
        return 0.;
    }
    let k = (x - offset)/spread;
    let value = (-0.5*k*k).exp();
    if !value.is_finite() {
        NONFINITE_PROFILE.call_once(|| {
            eprintln!("Warning: Gaussian profile at x = {} offset = {} spread = {} was non-finite; evaluating to 0.", x, offset, spread);
        });
        return 0.;
    }
    value
}

/// Magnetic lens field at a point.
///
/// Two Gaussian profiles shape the field along the depth coordinate (height
/// below the source plane at y = 0): a vertical "down" lobe and a signed
/// radial lobe whose reverse Gaussian makes the radial profile bipolar. The
/// radial direction is the horizontal unit vector from the axis. An annular
/// envelope in horizontal radius confines the field to the lens bore; below
/// the floor the field is exactly zero and no normalization is attempted.
/// The result is scaled by 10^strength.
pub fn field_at(pos: &Vector, params: &FieldParameters) -> Vector {
    let r = pos.radius();

    let envelope = gaussian(r, params.bore_radius, params.bore_spread)
        + gaussian(r, -params.bore_radius, params.bore_spread);
    if envelope < ENVELOPE_FLOOR {
        return Vector::zero();
    }

    let depth = -pos.y;
    let down = gaussian(depth, params.down_offset, params.down_spread);
    let radial = gaussian(depth, params.radial_offset, params.radial_spread)
        - gaussian(depth, params.reverse_offset, params.radial_spread);

    //On the axis the horizontal direction is undefined and the radial term
    //vanishes by symmetry.
    let (ux, uz) = if r > 0. {
        (pos.x/r, pos.z/r)
    } else {
        (0., 0.)
    };

    Vector::new(ux*radial, -down, uz*radial)
        .scale(envelope)
        .scale(10_f64.powf(params.strength))
}
