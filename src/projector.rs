use super::*;

/// One polyline per traced path, in world coordinates.
pub struct Polyline3 {
    pub points: Vec<Vector>,
    pub color: Color,
    pub opacity: f64,
}

/// Directional glyph at a sampled path point. `dir` is unit length; `length`
/// is already mapped through the configured arrow scaling.
pub struct Arrow3 {
    pub origin: Vector,
    pub dir: Vector,
    pub length: f64,
    pub channel: VectorChannel,
}

/// Translucent torus marking the lens coil around the beam axis.
pub struct CoilMarker {
    pub radius: f64,
    pub tube_radius: f64,
    pub opacity: f64,
}

/// A path projected onto one coordinate-pair plane.
pub struct Polyline2 {
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub opacity: f64,
}

/// One orthographic projection of the beam, auto-scaled so the busiest path
/// fits the view with a fixed margin.
pub struct View2d {
    pub label: &'static str,
    /// World-to-surface scale factor; always finite and positive.
    pub scale: f64,
    /// World-space center of the projected bounding box.
    pub center: (f64, f64),
    pub polylines: Vec<Polyline2>,
}

/// Complete renderable output of one recompute. Handed to the embedding
/// scene/surfaces as a whole object and replaced, never patched.
pub struct RenderSet {
    pub curves: Vec<Polyline3>,
    pub arrows: Vec<Arrow3>,
    pub coil: CoilMarker,
    pub views: [View2d; 3],
}

/// Largest magnitude per auxiliary channel across the whole beam, used to
/// normalize arrow lengths independently per channel.
fn channel_maxima(beam: &Beam) -> [f64; 3] {
    let mut maxima = [0_f64; 3];
    for path in &beam.paths {
        for point in &path.points {
            if let Some(v) = &point.vel {
                maxima[0] = maxima[0].max(v.magnitude());
            }
            if let Some(f) = &point.force {
                maxima[1] = maxima[1].max(f.magnitude());
            }
            if let Some(b) = &point.B {
                maxima[2] = maxima[2].max(b.magnitude());
            }
        }
    }
    maxima
}

fn emit_curves(beam: &Beam) -> Vec<Polyline3> {
    beam.paths.iter().map(|path| Polyline3 {
        points: path.points.iter().map(|point| point.pos.clone()).collect(),
        color: path.color.clone(),
        opacity: path.opacity,
    }).collect()
}

/// Arrow glyphs for every sampled point, normalized per channel against the
/// beam-wide maximum. Vectors whose mapped relative length falls below the
/// suppression floor produce no glyph.
fn emit_arrows(beam: &Beam) -> Vec<Arrow3> {
    let display = &beam.input.display;
    let channels = [VectorChannel::VELOCITY, VectorChannel::FORCE, VectorChannel::FIELD];
    let maxima = channel_maxima(beam);

    let mut arrows = Vec::new();
    for path in &beam.paths {
        for point in &path.points {
            let vectors = [&point.vel, &point.force, &point.B];
            for (channel, vector, max) in izip!(channels, vectors, maxima) {
                if let Some(v) = vector {
                    let magnitude = v.magnitude();
                    if (max == 0.) | (magnitude == 0.) {
                        continue;
                    }
                    let relative = match display.arrow_scale {
                        ArrowScale::LINEAR => magnitude/max,
                        ArrowScale::LOG => (1. + 9.*magnitude/max).log10(),
                    };
                    if relative < MIN_ARROW_FRACTION {
                        continue;
                    }
                    let mut dir = v.clone();
                    dir.normalize();
                    arrows.push(Arrow3 {
                        origin: point.pos.clone(),
                        dir,
                        length: relative*display.arrow_length,
                        channel,
                    });
                }
            }
        }
    }
    arrows
}

/// Project every path onto one plane and auto-scale from the beam's
/// bounding box there. Zero-extent boxes are clamped to a minimum extent so
/// a single-point beam still yields a finite positive scale.
fn make_view(beam: &Beam, label: &'static str, extract: fn(&Vector) -> (f64, f64)) -> View2d {
    let view_size = beam.input.display.view_size;

    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for path in &beam.paths {
        for point in &path.points {
            let (u, v) = extract(&point.pos);
            min.0 = min.0.min(u);
            min.1 = min.1.min(v);
            max.0 = max.0.max(u);
            max.1 = max.1.max(v);
        }
    }
    if !min.0.is_finite() {
        min = (0., 0.);
        max = (0., 0.);
    }

    let center = ((min.0 + max.0)/2., (min.1 + max.1)/2.);
    let half_extent = ((max.0 - min.0)/2.)
        .max((max.1 - min.1)/2.)
        .max(MIN_VIEW_EXTENT);
    //10% margin on each side of the viewport.
    let scale = view_size*0.45/half_extent;

    let polylines = beam.paths.iter().map(|path| Polyline2 {
        points: path.points.iter().map(|point| extract(&point.pos)).collect(),
        color: path.color.clone(),
        opacity: path.opacity,
    }).collect();

    View2d {
        label,
        scale,
        center,
        polylines,
    }
}

/// Turn a beam into renderable primitives: 3D polylines and arrow glyphs
/// (when enabled), the coil marker, and the three orthographic views. Pure
/// data transform; every recompute rebuilds the whole set.
pub fn project(beam: &Beam) -> RenderSet {
    let (curves, arrows) = if beam.input.display.emit_3d {
        (emit_curves(beam), emit_arrows(beam))
    } else {
        (Vec::new(), Vec::new())
    };

    let coil = CoilMarker {
        radius: 1.2*beam.input.source.separation,
        tube_radius: 0.2,
        opacity: 0.2,
    };

    let views = [
        make_view(beam, "x-y", |p| (p.x, p.y)),
        make_view(beam, "z-y", |p| (p.z, p.y)),
        make_view(beam, "x-z", |p| (p.x, p.z)),
    ];

    RenderSet {
        curves,
        arrows,
        coil,
        views,
    }
}
