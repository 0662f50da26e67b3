#[cfg(test)]
use super::*;
#[cfg(test)]
use float_cmp::*;

#[test]
fn test_gaussian_unit_peak() {
    //A unit-peak profile evaluates to exactly 1 at its own offset for any
    //nonzero spread.
    for offset in vec![-5., 0., 1.7, 4.66, 13.7] {
        for spread in vec![0.01, 0.135, 0.5, 2., 10.] {
            assert!(approx_eq!(f64, gaussian(offset, offset, spread), 1.0),
                "gaussian({}, {}, {}) should peak at 1.", offset, offset, spread);
        }
    }
}

#[test]
fn test_gaussian_degenerate_spread() {
    let value = gaussian(1., 2., 0.);
    assert_eq!(value, 0.);
    assert!(value.is_finite());

    assert_eq!(gaussian(1., 2., f64::NAN), 0.);
    assert_eq!(gaussian(1., 2., f64::INFINITY), 0.);
}

#[test]
fn test_field_zero_outside_envelope() {
    let field = FieldParameters::default();

    //Far outside the bore the annular envelope underflows below the floor
    //and the field must be the exact zero vector.
    let B = field_at(&Vector::new(1000., -4., 0.), &field);
    assert_eq!(B.x, 0.);
    assert_eq!(B.y, 0.);
    assert_eq!(B.z, 0.);
}

#[test]
fn test_field_rotational_symmetry() {
    let field = FieldParameters::default();

    //Two points at the same height and the same horizontal distance from
    //the axis, different azimuth.
    let r = 0.8;
    let p1 = Vector::new(r, -3.4, 0.);
    let p2 = Vector::new(r*(0.25*PI).cos(), -3.4, r*(0.25*PI).sin());

    let B1 = field_at(&p1, &field);
    let B2 = field_at(&p2, &field);

    let h1 = (B1.x*B1.x + B1.z*B1.z).sqrt();
    let h2 = (B2.x*B2.x + B2.z*B2.z).sqrt();
    assert!(approx_eq!(f64, h1, h2, epsilon = 1E-20), "horizontal magnitudes {} {} should match", h1, h2);
    assert!(approx_eq!(f64, B1.y, B2.y, epsilon = 1E-20));

    //With both radial lobes centered at zero offset they cancel and the
    //horizontal field vanishes everywhere.
    let mut cancelled = FieldParameters::default();
    cancelled.radial_offset = 0.;
    cancelled.reverse_offset = 0.;
    let B3 = field_at(&p1, &cancelled);
    assert_eq!(B3.x, 0.);
    assert_eq!(B3.z, 0.);
}

#[test]
fn test_zero_force_step() {
    let mut body = Body::new(Vector::new(1., 2., 3.), Vector::new(0.5, -1., 2.), 2., 1.);

    body.step(0.1);

    //With zero force the step is a pure drift and the velocity is unchanged.
    assert_eq!(body.pos.x, 1. + 0.5*0.1);
    assert_eq!(body.pos.y, 2. + -1.*0.1);
    assert_eq!(body.pos.z, 3. + 2.*0.1);
    assert_eq!(body.vel.x, 0.5);
    assert_eq!(body.vel.y, -1.);
    assert_eq!(body.vel.z, 2.);
    assert_eq!(body.t, 0.1);
}

#[test]
fn test_lorentz_conventions_opposite() {
    let field = FieldParameters::default();
    let mut options = Options::default();

    let mut body_a = Body::new(Vector::new(0.8, -3.4, 0.), Vector::new(1., 2., 3.), ME, -Q);
    let mut body_b = body_a.clone();

    options.lorentz_convention = LorentzConvention::FIELD_CROSS_VELOCITY;
    body_a.update_force(&field, &options);
    options.lorentz_convention = LorentzConvention::VELOCITY_CROSS_FIELD;
    body_b.update_force(&field, &options);

    //Swapping the cross product operands negates the force exactly.
    assert_eq!(body_a.force.x, -body_b.force.x);
    assert_eq!(body_a.force.y, -body_b.force.y);
    assert_eq!(body_a.force.z, -body_b.force.z);
    assert!(body_a.force.magnitude() > 0., "test point should sit inside the active field region");
}

#[test]
fn test_trace_respects_step_budget() {
    let input = Input::default();
    let mut options = input.options.clone();
    options.steps = 50;

    let body = Body::new(Vector::new(0.5, 0., 0.), Vector::new(0., -10., 0.),
        input.particle.resolved_mass(), input.particle.resolved_charge());
    let path = trace_particle(body, &input.field, &options);

    //50 steps only cover half the vertical gap, so the budget runs out.
    assert_eq!(path.points.len(), options.steps + 1);
    assert!(path.termination == Termination::EXHAUSTED);
}

#[test]
fn test_trace_divergence_truncates() {
    let input = Input::default();

    let body = Body::new(Vector::new(f64::NAN, 0., 0.), Vector::new(0., -10., 0.),
        input.particle.resolved_mass(), input.particle.resolved_charge());
    let path = trace_particle(body, &input.field, &input.options);

    //The path is truncated at the first step but still records the seed
    //point.
    assert!(path.termination == Termination::DIVERGED{step: 1});
    assert_eq!(path.points.len(), 1);
}

#[test]
fn test_straight_flight_reaches_detector() {
    let mut input = Input::default();
    //Strength underflows to zero field: an unbent particle launched on the
    //axis falls straight onto the detector plane.
    input.field.strength = -1000.;

    let body = Body::new(Vector::new(0., 0., 0.), Vector::new(0., -input.source.speed, 0.),
        input.particle.resolved_mass(), input.particle.resolved_charge());
    let path = trace_particle(body, &input.field, &input.options);

    assert!(path.termination == Termination::DETECTOR);
    assert!(path.points.len() < input.options.steps + 1);

    //Flight time is verticalGap/speed to within one step.
    let expected = input.options.vertical_gap/input.source.speed;
    assert!((path.elapsed - expected).abs() <= input.options.time_step + 1E-12,
        "elapsed {} should be within one step of {}", path.elapsed, expected);

    //The terminal sample is clamped exactly onto the plane.
    assert_eq!(path.terminal().y, input.options.detector_y());
}

#[test]
fn test_beam_never_empty() {
    let mut input = Input::default();

    input.source.count = 0;
    assert_eq!(generate_beam(&input, None).paths.len(), 1);

    input.source.count = 1;
    assert_eq!(generate_beam(&input, None).paths.len(), 1);

    //Zero edge separation collapses the lattice to a single ray.
    input.source.count = 5;
    input.source.separation = 0.;
    assert_eq!(generate_beam(&input, None).paths.len(), 1);
}

#[test]
fn test_beam_colors_and_opacity() {
    let mut input = Input::default();
    input.source.count = 3;

    let beam = generate_beam(&input, None);
    assert_eq!(beam.paths.len(), 3);

    //Endpoint rays carry the endpoint colors; the middle ray is the blend.
    assert_eq!(beam.paths[0].color.r, input.display.color_a.r);
    assert_eq!(beam.paths[0].color.b, input.display.color_a.b);
    assert_eq!(beam.paths[2].color.r, input.display.color_b.r);
    assert_eq!(beam.paths[2].color.b, input.display.color_b.b);
    assert!(approx_eq!(f64, beam.paths[1].color.r, 0.5));
    assert!(approx_eq!(f64, beam.paths[1].color.b, 0.5));

    //Boundary rays are opaque, interior rays dimmed.
    assert_eq!(beam.paths[0].opacity, 1.);
    assert_eq!(beam.paths[2].opacity, 1.);
    assert!(beam.paths[1].opacity < 1.);
}

#[test]
fn test_image_points_on_detector() {
    let mut input = Input::default();
    input.field.strength = -1000.;

    let beam = generate_beam(&input, None);

    assert_eq!(beam.image_points.len(), 2);
    assert_eq!(beam.source_points.len(), 2);
    for point in &beam.image_points {
        assert_eq!(point.y, input.options.detector_y());
    }
    //Unbent rays keep their source x coordinates.
    assert!(approx_eq!(f64, beam.image_points[0].x, 0.5));
    assert!(approx_eq!(f64, beam.image_points[1].x, -0.5));
}

#[test]
fn test_view_scale_single_point_beam() {
    let mut input = Input::default();
    //No steps: every path is its seed point and the x-z bounding box of a
    //zero-separation beam has zero extent.
    input.options.steps = 0;
    input.source.separation = 0.;

    let beam = generate_beam(&input, None);
    let render = project(&beam);

    for view in &render.views {
        assert!(view.scale.is_finite());
        assert!(view.scale > 0., "view {} scale {} should be positive", view.label, view.scale);
    }
}

#[test]
fn test_arrow_channels_and_suppression() {
    let mut input = Input::default();
    input.field.strength = -1000.;
    //95 steps stop short of the detector plane, so every cadence sample
    //survives to the projector.
    input.options.steps = 95;

    let beam = generate_beam(&input, None);
    let render = project(&beam);

    //Force and field are identically zero, so their channels emit nothing;
    //the velocity channel is at its own maximum everywhere.
    assert!(!render.arrows.is_empty());
    for arrow in &render.arrows {
        assert!(arrow.channel == VectorChannel::VELOCITY);
        assert!(approx_eq!(f64, arrow.length, input.display.arrow_length));
        assert!(approx_eq!(f64, arrow.dir.magnitude(), 1.0));
    }

    //Two rays, one sampled point per cadence interval.
    let samples_per_path = input.options.steps/input.options.aux_cadence;
    assert_eq!(render.arrows.len(), 2*samples_per_path);
}

#[test]
fn test_session_clamps_edits() {
    let mut session = Session::new(Input::default());

    session.set_field(ParamField::TIME_STEP, -5.);
    assert_eq!(session.input().options.time_step, 1E-6);

    session.set_field(ParamField::STEPS, 1E9);
    assert_eq!(session.input().options.steps, 10000);

    session.set_field(ParamField::DOWN_SPREAD, 0.);
    assert_eq!(session.input().field.down_spread, 1E-3);

    session.set_field(ParamField::SEPARATION, 0.);
    assert_eq!(session.input().source.separation, 0.1);

    session.set_field(ParamField::STRENGTH, 5.);
    assert_eq!(session.input().field.strength, 0.);
}

#[test]
fn test_preset_overwrites_particle() {
    let mut session = Session::new(Input::default());

    session.apply_preset(ParticlePreset::PROTON);
    assert!(session.input().particle.resolved_charge() > 0.);
    assert!(approx_eq!(f64, session.input().particle.resolved_mass()/MP, 1., epsilon = 1E-12));

    //Preset application publishes a fresh recompute.
    assert!(session.beam().is_some());
    assert!(session.render().is_some());

    session.apply_preset(ParticlePreset::ELECTRON);
    assert!(session.input().particle.resolved_charge() < 0.);
    assert!(approx_eq!(f64, session.input().particle.resolved_mass()/ME, 1., epsilon = 1E-12));
}

#[test]
fn test_camera_zoom_and_pitch_clamps() {
    let mut camera = Camera::new();

    camera.zoom_by(-100.);
    assert_eq!(camera.zoom_target, 5.);
    camera.tick(0.016);
    assert_eq!(camera.zoom, (5. + 20.)/2.);

    camera.set_direction(1., 0.);
    assert_eq!(camera.pitch, -0.1);
    camera.set_direction(1., -10.);
    assert_eq!(camera.pitch, -PI/2. + 0.1);

    let azimuth = camera.azimuth;
    camera.auto_spin = true;
    camera.tick(0.016);
    assert!(camera.azimuth > azimuth);
}

#[test]
fn test_simple_lens_entry() {
    let image = simple_lens(1., 10., 1000, 0.01);

    assert_eq!(image.len(), 2);
    for point in &image {
        assert_eq!(point[1], -10.);
    }
}

#[test]
fn test_color_blend_and_packing() {
    let red = Color::new(1., 0., 0.);
    let blue = Color::new(0., 0., 1.);

    assert_eq!(red.packed(), 0xFF0000);
    assert_eq!(blue.packed(), 0x0000FF);

    let mid = red.lerp(&blue, 0.5);
    assert!(approx_eq!(f64, mid.r, 0.5));
    assert!(approx_eq!(f64, mid.b, 0.5));
}

#[test]
fn test_lens_regression_determinism() {
    let mut input = Input::default();
    input.field.down_offset = 4.49;
    input.field.down_spread = 0.135;
    input.field.radial_offset = 3.355;
    input.field.radial_spread = 0.16;
    input.field.reverse_offset = 13.7;
    input.field.strength = -11.;
    input.particle = ParticleParameters::from_preset(ParticlePreset::ELECTRON);
    input.source.separation = 1.;
    input.source.speed = 10.;
    input.options.vertical_gap = 10.;
    input.options.steps = 1000;
    input.options.time_step = 0.01;

    let first = generate_beam(&input, None);
    let second = generate_beam(&input, None);

    //Both rays hit the screen well before the step budget runs out.
    for path in &first.paths {
        assert!(path.termination == Termination::DETECTOR);
        assert!(path.points.len() < input.options.steps + 1);
    }

    //Repeated runs reproduce the terminal image points bit for bit.
    assert_eq!(first.image_points.len(), second.image_points.len());
    for (a, b) in first.image_points.iter().zip(second.image_points.iter()) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
    }
}
