use super::*;

/// Operand order and scaling used to form the magnetic force on a body.
#[derive(Deserialize, PartialEq, Clone, Copy)]
pub enum LorentzConvention {
    /// F = q (B x v), the convention of the reference lens model.
    FIELD_CROSS_VELOCITY,
    /// F = q (v x B), the textbook Lorentz relation.
    VELOCITY_CROSS_FIELD,
}

impl fmt::Display for LorentzConvention {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LorentzConvention::FIELD_CROSS_VELOCITY => write!(f, "F = q (B x v)"),
            LorentzConvention::VELOCITY_CROSS_FIELD => write!(f, "F = q (v x B)"),
        }
    }
}

/// Mapping from relative vector magnitude to arrow glyph length.
#[derive(Deserialize, PartialEq, Clone, Copy)]
pub enum ArrowScale {
    /// Glyph length proportional to magnitude over the beam maximum.
    LINEAR,
    /// Compressed mapping for channels spanning many orders of magnitude.
    LOG,
}

impl fmt::Display for ArrowScale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArrowScale::LINEAR => write!(f, "Linear arrow scaling"),
            ArrowScale::LOG => write!(f, "Logarithmic arrow scaling"),
        }
    }
}

/// Which auxiliary vector an arrow glyph visualizes.
#[derive(PartialEq, Clone, Copy)]
pub enum VectorChannel {
    VELOCITY,
    FORCE,
    FIELD,
}

impl fmt::Display for VectorChannel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            VectorChannel::VELOCITY => write!(f, "Velocity"),
            VectorChannel::FORCE => write!(f, "Force"),
            VectorChannel::FIELD => write!(f, "Field"),
        }
    }
}

/// How a traced path ended.
#[derive(Clone, Copy)]
pub enum Termination {
    /// Position went non-finite at the given step; the path is truncated.
    DIVERGED{step: usize},
    /// Crossed the detector plane and was clamped exactly onto it.
    DETECTOR,
    /// Used the whole step budget without reaching the detector.
    EXHAUSTED,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Termination::DIVERGED{step} => write!(f, "Diverged at step {}", step),
            Termination::DETECTOR => write!(f, "Reached detector plane"),
            Termination::EXHAUSTED => write!(f, "Exhausted step budget"),
        }
    }
}

impl PartialEq for Termination {
    fn eq(&self, other: &Self) -> bool {
        discriminant(self) == discriminant(other)
    }
}

/// Named particle presets for the editing surface. Selecting one
/// bulk-overwrites the mass/charge exponents and sign flags.
#[derive(Deserialize, PartialEq, Clone, Copy)]
pub enum ParticlePreset {
    ELECTRON,
    POSITRON,
    PROTON,
}

impl fmt::Display for ParticlePreset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParticlePreset::ELECTRON => write!(f, "Electron"),
            ParticlePreset::POSITRON => write!(f, "Positron"),
            ParticlePreset::PROTON => write!(f, "Proton"),
        }
    }
}

/// Editable numeric fields exposed to the parameter panel.
#[derive(PartialEq, Clone, Copy)]
pub enum ParamField {
    STRENGTH,
    DOWN_OFFSET,
    DOWN_SPREAD,
    RADIAL_OFFSET,
    RADIAL_SPREAD,
    REVERSE_OFFSET,
    BORE_RADIUS,
    BORE_SPREAD,
    MASS_EXPONENT,
    CHARGE_EXPONENT,
    SEPARATION,
    SPEED,
    COUNT,
    STEPS,
    TIME_STEP,
    CADENCE,
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParamField::STRENGTH => write!(f, "Strength OoM"),
            ParamField::DOWN_OFFSET => write!(f, "Down Offset / m"),
            ParamField::DOWN_SPREAD => write!(f, "Down Std Dev / m"),
            ParamField::RADIAL_OFFSET => write!(f, "Radial Offset / m"),
            ParamField::RADIAL_SPREAD => write!(f, "Radial Std Dev / m"),
            ParamField::REVERSE_OFFSET => write!(f, "Reverse Lobe Offset / m"),
            ParamField::BORE_RADIUS => write!(f, "Bore Radius / m"),
            ParamField::BORE_SPREAD => write!(f, "Bore Std Dev / m"),
            ParamField::MASS_EXPONENT => write!(f, "Mass OoM"),
            ParamField::CHARGE_EXPONENT => write!(f, "Charge OoM"),
            ParamField::SEPARATION => write!(f, "Separation / m"),
            ParamField::SPEED => write!(f, "Down Vel / ms^-1"),
            ParamField::COUNT => write!(f, "Rays"),
            ParamField::STEPS => write!(f, "Steps"),
            ParamField::TIME_STEP => write!(f, "Time Step"),
            ParamField::CADENCE => write!(f, "Arrow Cadence"),
        }
    }
}
