use super::*;

/// Mutable parameter state behind the editing surface, plus the published
/// output of the last recompute. Edits clamp at this boundary so the
/// pipeline below never sees an out-of-range value. Publication is
/// whole-object: readers of `beam`/`render` never observe a partial update.
pub struct Session {
    input: Input,
    pub camera: Camera,
    beam: Option<Beam>,
    render: Option<RenderSet>,
}

impl Session {
    pub fn new(input: Input) -> Session {
        Session {
            input,
            camera: Camera::new(),
            beam: None,
            render: None,
        }
    }

    /// Current parameter snapshot.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Published beam from the last recompute, if any.
    pub fn beam(&self) -> Option<&Beam> {
        self.beam.as_ref()
    }

    /// Published renderables from the last recompute, if any.
    pub fn render(&self) -> Option<&RenderSet> {
        self.render.as_ref()
    }

    /// Edit one named numeric field, clamped to the panel's working range.
    /// Integer-valued fields round to the nearest step.
    pub fn set_field(&mut self, field: ParamField, value: f64) {
        match field {
            ParamField::STRENGTH => self.input.field.strength = value.clamp(-20., 0.),
            ParamField::DOWN_OFFSET => self.input.field.down_offset = value.clamp(0., 10.),
            ParamField::DOWN_SPREAD => self.input.field.down_spread = value.clamp(1E-3, 10.),
            ParamField::RADIAL_OFFSET => self.input.field.radial_offset = value.clamp(0., 10.),
            ParamField::RADIAL_SPREAD => self.input.field.radial_spread = value.clamp(1E-3, 10.),
            ParamField::REVERSE_OFFSET => self.input.field.reverse_offset = value.clamp(0., 40.),
            ParamField::BORE_RADIUS => self.input.field.bore_radius = value.clamp(0.1, 10.),
            ParamField::BORE_SPREAD => self.input.field.bore_spread = value.clamp(1E-3, 10.),
            ParamField::MASS_EXPONENT => self.input.particle.mass_exponent = value.clamp(-40., -10.),
            ParamField::CHARGE_EXPONENT => self.input.particle.charge_exponent = value.clamp(-40., -10.),
            ParamField::SEPARATION => self.input.source.separation = value.clamp(0.1, 10.),
            ParamField::SPEED => self.input.source.speed = value.clamp(0.1, 50.),
            ParamField::COUNT => self.input.source.count = value.clamp(1., 200.).round() as usize,
            ParamField::STEPS => self.input.options.steps = value.clamp(1., 1E4).round() as usize,
            ParamField::TIME_STEP => self.input.options.time_step = value.clamp(1E-6, 1.),
            ParamField::CADENCE => self.input.options.aux_cadence = value.clamp(1., 1000.).round() as usize,
        }
    }

    /// Overwrite the endpoint and background colors.
    pub fn set_colors(&mut self, color_a: Color, color_b: Color, background: Color) {
        self.input.display.color_a = color_a;
        self.input.display.color_b = color_b;
        self.input.display.background = background;
    }

    /// Bulk-overwrite mass/charge from a named preset and regenerate.
    pub fn apply_preset(&mut self, preset: ParticlePreset) {
        self.input.particle = ParticleParameters::from_preset(preset);
        self.recompute();
    }

    /// Run the full pipeline on the current parameters and publish the
    /// result. Blocks until the whole beam is regenerated and projected.
    pub fn recompute(&mut self) -> &RenderSet {
        let beam = generate_beam(&self.input, None);
        let render = project(&beam);
        self.beam = Some(beam);
        self.render.insert(render)
    }
}

/// Orbit camera state. Advanced only by the embedding animation loop; the
/// simulation pipeline never reads or writes it, so no lock is needed
/// between animation and recompute.
pub struct Camera {
    pub azimuth: f64,
    pub pitch: f64,
    pub zoom: f64,
    pub zoom_target: f64,
    pub auto_spin: bool,
    pub target: Vector,
}

/// Auto-spin rate in radians per second.
const SPIN_RATE: f64 = 0.5;

impl Camera {
    pub fn new() -> Camera {
        Camera {
            azimuth: 0.,
            pitch: -0.5,
            zoom: 20.,
            zoom_target: 20.,
            auto_spin: false,
            target: Vector::zero(),
        }
    }

    /// One animation tick: smooth the zoom halfway toward its target and
    /// advance the auto-spin orbit.
    pub fn tick(&mut self, dt: f64) {
        self.zoom = (self.zoom_target + self.zoom)/2.;
        if self.auto_spin {
            self.azimuth += SPIN_RATE*dt;
        }
    }

    /// Request a zoom change; the target clamps to the working range.
    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom_target = (self.zoom_target + delta).clamp(5., 1000.);
    }

    /// Aim the orbit. Pitch clamps just short of straight-on and straight
    /// overhead.
    pub fn set_direction(&mut self, azimuth: f64, pitch: f64) {
        self.azimuth = azimuth;
        self.pitch = pitch.clamp(-PI/2. + 0.1, -0.1);
    }

    /// World position of the camera on its orbit sphere around `target`.
    pub fn position(&self) -> Vector {
        let orbit = Vector::new(
            self.azimuth.sin()*self.pitch.cos()*self.zoom,
            (-self.pitch).sin()*self.zoom,
            self.azimuth.cos()*self.pitch.cos()*self.zoom,
        );
        self.target.add(&orbit)
    }
}

impl Default for Camera {
    fn default() -> Camera {
        Camera::new()
    }
}
