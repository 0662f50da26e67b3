#![allow(non_snake_case)]
#![allow(non_camel_case_types)]

use std::fmt;
use std::mem::discriminant;

//Error handling crate
use anyhow::Result;
use anyhow::*;

//Serializing/Deserializing crate
use serde::*;

//itertools
use itertools::izip;

//Math
use std::f64::consts::PI;

//Load internal modules
pub mod consts;
pub mod structs;
pub mod enums;
pub mod field;
pub mod particle;
pub mod trace;
pub mod beam;
pub mod projector;
pub mod input;
pub mod session;
pub mod tests;

pub use crate::consts::*;
pub use crate::structs::*;
pub use crate::enums::*;
pub use crate::field::{gaussian, field_at};
pub use crate::particle::{Body, resolve_signed_exponent};
pub use crate::trace::{Path, trace_particle};
pub use crate::beam::{Beam, BeamSummary, source_lattice, generate_beam, run_beam};
pub use crate::projector::{Polyline3, Arrow3, CoilMarker, Polyline2, View2d, RenderSet, project};
pub use crate::input::{Input, Options, FieldParameters, ParticleParameters, SourceParameters, DisplayParameters};
pub use crate::session::{Session, Camera};

/// One-call tracing entry: the compiled-in defaults with the given source
/// separation, launch speed, and step budget. Returns the image points as
/// (x, y, z) triples.
pub fn simple_lens(separation: f64, speed: f64, steps: usize, time_step: f64) -> Vec<[f64; 3]> {

    assert!(separation >= 0.0, "Error: source separation cannot be negative.");
    assert!(speed > 0.0, "Error: launch speed must be greater than zero.");
    assert!(time_step > 0.0, "Error: time step must be greater than zero.");

    let mut input = Input::default();
    input.source.separation = separation;
    input.source.speed = speed;
    input.options.steps = steps;
    input.options.time_step = time_step;

    let beam = beam::generate_beam(&input, None);

    beam.image_points.iter().map(|point| [point.x, point.y, point.z]).collect()
}
