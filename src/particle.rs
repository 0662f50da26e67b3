use super::*;

/// Resolve a base-10 magnitude exponent and a sign flag into a signed value.
/// The magnitude 10^exponent is always positive; the flag applies the sign.
pub fn resolve_signed_exponent(exponent: f64, negative: bool) -> f64 {
    let magnitude = 10_f64.powf(exponent);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Simulation state for one traced particle. Created per lattice point,
/// mutated in place across integration steps, discarded once its path is
/// recorded.
#[derive(Clone)]
pub struct Body {
    pub pos: Vector,
    pub vel: Vector,
    pub force: Vector,
    pub B: Vector,
    pub m: f64,
    pub q: f64,
    pub t: f64,
}

impl Body {
    pub fn new(pos: Vector, vel: Vector, m: f64, q: f64) -> Body {
        Body {
            pos,
            vel,
            force: Vector::zero(),
            B: Vector::zero(),
            m,
            q,
            t: 0.,
        }
    }

    /// Advance one explicit symplectic-Euler step: drift on the current
    /// velocity, then kick the velocity from the stored force. Accuracy is
    /// the caller's responsibility via step count and step size.
    pub fn step(&mut self, dt: f64) {
        self.pos.scaled_add(&self.vel, dt);
        let accel = self.force.scale(1./self.m);
        self.vel.scaled_add(&accel, dt);
        self.t += dt;
    }

    /// Evaluate the lens field at the current position and store the
    /// magnetic force on the body under the configured operand convention.
    pub fn update_force(&mut self, field: &FieldParameters, options: &Options) {
        let B = field_at(&self.pos, field);
        let v = self.vel.scale(options.vel_scale);
        let force = match options.lorentz_convention {
            LorentzConvention::FIELD_CROSS_VELOCITY => B.cross(&v).scale(self.q),
            LorentzConvention::VELOCITY_CROSS_FIELD => v.cross(&B).scale(self.q),
        };
        self.force.assign(&force);
        self.B.assign(&B);
    }
}
