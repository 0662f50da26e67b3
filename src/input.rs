use super::*;

///This helper function is a workaround to issue #368 in serde
fn default_false() -> bool {
    false
}

///This helper function is a workaround to issue #368 in serde
fn default_true() -> bool {
    true
}

fn default_down_offset() -> f64 {
    4.66
}

fn default_down_spread() -> f64 {
    0.5
}

fn default_radial_offset() -> f64 {
    3.40
}

fn default_radial_spread() -> f64 {
    0.645
}

///Reverse lobe sits three standard deviations past the radial lobe.
fn default_reverse_offset() -> f64 {
    default_radial_offset() + 3.*default_radial_spread()
}

fn default_bore_radius() -> f64 {
    1.2
}

fn default_bore_spread() -> f64 {
    0.35
}

fn default_strength() -> f64 {
    -11.
}

fn default_mass_exponent() -> f64 {
    ME.log10()
}

fn default_charge_exponent() -> f64 {
    Q.log10()
}

fn default_separation() -> f64 {
    1.
}

fn default_speed() -> f64 {
    10.
}

fn default_count() -> usize {
    2
}

fn default_rows() -> usize {
    1
}

fn default_width() -> f64 {
    0.
}

fn default_steps() -> usize {
    1000
}

fn default_time_step() -> f64 {
    0.01
}

fn default_aux_cadence() -> usize {
    10
}

fn default_vertical_gap() -> f64 {
    10.
}

fn default_vel_scale() -> f64 {
    1.
}

fn default_lorentz_convention() -> LorentzConvention {
    LorentzConvention::FIELD_CROSS_VELOCITY
}

fn default_arrow_scale() -> ArrowScale {
    ArrowScale::LINEAR
}

fn default_arrow_length() -> f64 {
    1.
}

fn default_view_size() -> f64 {
    300.
}

fn default_color_a() -> Color {
    Color::new(1., 0., 0.)
}

fn default_color_b() -> Color {
    Color::new(0., 0., 1.)
}

fn default_background() -> Color {
    Color::new(1., 1., 1.)
}

/// Gaussian lobe shape and overall strength of the lens field.
#[derive(Deserialize, Clone)]
pub struct FieldParameters {
    #[serde(default = "default_down_offset")]
    pub down_offset: f64,
    #[serde(default = "default_down_spread")]
    pub down_spread: f64,
    #[serde(default = "default_radial_offset")]
    pub radial_offset: f64,
    #[serde(default = "default_radial_spread")]
    pub radial_spread: f64,
    #[serde(default = "default_reverse_offset")]
    pub reverse_offset: f64,
    #[serde(default = "default_bore_radius")]
    pub bore_radius: f64,
    #[serde(default = "default_bore_spread")]
    pub bore_spread: f64,
    /// Base-10 exponent of the overall field strength.
    #[serde(default = "default_strength")]
    pub strength: f64,
}

impl Default for FieldParameters {
    fn default() -> FieldParameters {
        FieldParameters {
            down_offset: default_down_offset(),
            down_spread: default_down_spread(),
            radial_offset: default_radial_offset(),
            radial_spread: default_radial_spread(),
            reverse_offset: default_reverse_offset(),
            bore_radius: default_bore_radius(),
            bore_spread: default_bore_spread(),
            strength: default_strength(),
        }
    }
}

/// Mass and charge as base-10 magnitude exponents plus sign flags; the
/// magnitudes are always positive before the sign is applied. Defaults are
/// an electron beam.
#[derive(Deserialize, Clone)]
pub struct ParticleParameters {
    #[serde(default = "default_mass_exponent")]
    pub mass_exponent: f64,
    #[serde(default = "default_false")]
    pub mass_negative: bool,
    #[serde(default = "default_charge_exponent")]
    pub charge_exponent: f64,
    #[serde(default = "default_true")]
    pub charge_negative: bool,
}

impl ParticleParameters {
    /// Signed mass in kilograms.
    pub fn resolved_mass(&self) -> f64 {
        resolve_signed_exponent(self.mass_exponent, self.mass_negative)
    }

    /// Signed charge in Coulombs.
    pub fn resolved_charge(&self) -> f64 {
        resolve_signed_exponent(self.charge_exponent, self.charge_negative)
    }

    /// Bulk overwrite from a named preset.
    pub fn from_preset(preset: ParticlePreset) -> ParticleParameters {
        match preset {
            ParticlePreset::ELECTRON => ParticleParameters {
                mass_exponent: ME.log10(),
                mass_negative: false,
                charge_exponent: Q.log10(),
                charge_negative: true,
            },
            ParticlePreset::POSITRON => ParticleParameters {
                mass_exponent: ME.log10(),
                mass_negative: false,
                charge_exponent: Q.log10(),
                charge_negative: false,
            },
            ParticlePreset::PROTON => ParticleParameters {
                mass_exponent: MP.log10(),
                mass_negative: false,
                charge_exponent: Q.log10(),
                charge_negative: false,
            },
        }
    }
}

impl Default for ParticleParameters {
    fn default() -> ParticleParameters {
        ParticleParameters::from_preset(ParticlePreset::ELECTRON)
    }
}

/// Source region geometry and launch speed. `count` rays interpolate
/// between the edge points at (+-separation/2, 0, 0); `rows` > 1 with a
/// nonzero `width` sweeps the same line across z for a 2D lattice.
#[derive(Deserialize, Clone)]
pub struct SourceParameters {
    #[serde(default = "default_separation")]
    pub separation: f64,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_width")]
    pub width: f64,
}

impl Default for SourceParameters {
    fn default() -> SourceParameters {
        SourceParameters {
            separation: default_separation(),
            speed: default_speed(),
            count: default_count(),
            rows: default_rows(),
            width: default_width(),
        }
    }
}

/// Simulation-level options.
#[derive(Deserialize, Clone)]
pub struct Options {
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    /// Every k-th path point carries the auxiliary vectors.
    #[serde(default = "default_aux_cadence")]
    pub aux_cadence: usize,
    /// Distance from the source plane down to the detector plane.
    #[serde(default = "default_vertical_gap")]
    pub vertical_gap: f64,
    #[serde(default = "default_lorentz_convention")]
    pub lorentz_convention: LorentzConvention,
    /// Velocity pre-scale applied before the cross product.
    #[serde(default = "default_vel_scale")]
    pub vel_scale: f64,
}

impl Options {
    /// Height of the detector plane; the source plane sits at y = 0.
    pub fn detector_y(&self) -> f64 {
        -self.vertical_gap
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            steps: default_steps(),
            time_step: default_time_step(),
            aux_cadence: default_aux_cadence(),
            vertical_gap: default_vertical_gap(),
            lorentz_convention: default_lorentz_convention(),
            vel_scale: default_vel_scale(),
        }
    }
}

/// Display options consumed by the projector.
#[derive(Deserialize, Clone)]
pub struct DisplayParameters {
    #[serde(default = "default_color_a")]
    pub color_a: Color,
    #[serde(default = "default_color_b")]
    pub color_b: Color,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default = "default_arrow_scale")]
    pub arrow_scale: ArrowScale,
    #[serde(default = "default_arrow_length")]
    pub arrow_length: f64,
    #[serde(default = "default_view_size")]
    pub view_size: f64,
    /// Emit 3D curve/arrow primitives in addition to the 2D views.
    #[serde(default = "default_true")]
    pub emit_3d: bool,
}

impl Default for DisplayParameters {
    fn default() -> DisplayParameters {
        DisplayParameters {
            color_a: default_color_a(),
            color_b: default_color_b(),
            background: default_background(),
            arrow_scale: default_arrow_scale(),
            arrow_length: default_arrow_length(),
            view_size: default_view_size(),
            emit_3d: true,
        }
    }
}

/// Maglens' internal representation of an input file. One immutable
/// snapshot of this drives one recompute.
#[derive(Deserialize, Clone, Default)]
pub struct Input {
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub field: FieldParameters,
    #[serde(default)]
    pub particle: ParticleParameters,
    #[serde(default)]
    pub source: SourceParameters,
    #[serde(default)]
    pub display: DisplayParameters,
}

impl Input {
    /// Parse a TOML input file; missing fields fall back to the compiled-in
    /// defaults.
    pub fn from_file(path: &str) -> Result<Input> {
        let string = std::fs::read_to_string(path)
            .context(format!("Could not read input file {}.", path))?;
        let input: Input = toml::from_str(&string)
            .context("Could not parse TOML input file.")?;
        Ok(input)
    }
}
