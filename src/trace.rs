use super::*;

/// A traced particle path: ordered samples plus how tracing ended. Seeded
/// with the body's initial position, so a path is never empty even when the
/// first step fails. Color and opacity are assigned by the beam generator.
#[derive(Clone)]
pub struct Path {
    pub points: Vec<PathPoint>,
    pub termination: Termination,
    pub elapsed: f64,
    pub color: Color,
    pub opacity: f64,
}

impl Path {
    /// Terminal position of the path.
    pub fn terminal(&self) -> &Vector {
        &self.points[self.points.len() - 1].pos
    }
}

/// Trace one particle through the lens field for at most `options.steps`
/// steps of `options.time_step`.
///
/// Each iteration updates the force from the field at the current position,
/// advances the body one step, then classifies the new position: non-finite
/// stops the path where it is (divergence), crossing the detector plane
/// clamps the position exactly onto the plane and appends a position-only
/// terminal sample. Auxiliary vectors are attached every
/// `options.aux_cadence`-th step to bound the per-point payload and the
/// number of arrow glyphs. Deterministic for fixed inputs; the body is owned
/// and consumed by the call.
pub fn trace_particle(mut body: Body, field: &FieldParameters, options: &Options) -> Path {
    let mut points = Vec::with_capacity(options.steps + 1);
    points.push(PathPoint::plain(body.pos.clone()));

    let detector_y = options.detector_y();
    let cadence = options.aux_cadence.max(1);
    let mut termination = Termination::EXHAUSTED;

    for i in 1..=options.steps {
        body.update_force(field, options);
        body.step(options.time_step);

        if !body.pos.is_finite() {
            eprintln!("Warning: path diverged at step {}", i);
            termination = Termination::DIVERGED{step: i};
            break;
        }

        if body.pos.y <= detector_y {
            //The particle hit the screen; clamp exactly onto the plane.
            body.pos.y = detector_y;
            points.push(PathPoint::plain(body.pos.clone()));
            termination = Termination::DETECTOR;
            break;
        }

        if i % cadence == 0 {
            points.push(PathPoint::sampled(body.pos.clone(), body.vel.clone(), body.force.clone(), body.B.clone()));
        } else {
            points.push(PathPoint::plain(body.pos.clone()));
        }
    }

    Path {
        points,
        termination,
        elapsed: body.t,
        color: Color::new(1., 1., 1.),
        opacity: 1.,
    }
}
