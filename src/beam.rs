use super::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Opacity of interior lattice rays; boundary rays render fully opaque to
/// emphasize the beam edge.
const INTERIOR_OPACITY: f64 = 0.35;

/// The set of paths produced from one source sweep, with the derived point
/// sets and the parameter snapshot they were generated under. Replaced
/// whole-object on every recompute.
pub struct Beam {
    pub paths: Vec<Path>,
    /// Terminal positions of paths that reached the detector plane.
    pub image_points: Vec<Vector>,
    /// Initial positions of all launched particles.
    pub source_points: Vec<Vector>,
    pub input: Input,
}

/// Per-termination-class counts for console output.
pub struct BeamSummary {
    pub detector: usize,
    pub diverged: usize,
    pub exhausted: usize,
}

impl BeamSummary {
    pub fn new(beam: &Beam) -> BeamSummary {
        let mut summary = BeamSummary {
            detector: 0,
            diverged: 0,
            exhausted: 0
        };
        for path in &beam.paths {
            match path.termination {
                Termination::DETECTOR => summary.detector += 1,
                Termination::DIVERGED{..} => summary.diverged += 1,
                Termination::EXHAUSTED => summary.exhausted += 1,
            }
        }
        summary
    }

    pub fn print(&self) {
        println!("Detector hits: {} Diverged: {} Exhausted: {}",
            self.detector, self.diverged, self.exhausted);
    }
}

/// Build the lattice of starting positions between the two source edge
/// points at (+-separation/2, 0, 0), optionally swept across `rows` rows in
/// z. Returns (position, lattice fraction, boundary flag) per particle.
/// Degenerate densities or zero separation collapse to a single ray - the
/// lattice is never empty.
pub fn source_lattice(source: &SourceParameters) -> Vec<(Vector, f64, bool)> {
    let count = if source.separation == 0. {
        1
    } else {
        source.count.max(1)
    };
    let rows = if source.width == 0. {
        1
    } else {
        source.rows.max(1)
    };

    let mut lattice = Vec::with_capacity(count*rows);
    for row in 0..rows {
        let row_fraction = if rows > 1 {
            row as f64/(rows as f64 - 1.)
        } else {
            0.5
        };
        let z = source.width*(row_fraction - 0.5);

        for i in 0..count {
            let fraction = if count > 1 {
                i as f64/(count as f64 - 1.)
            } else {
                0.5
            };
            let x = source.separation/2. - source.separation*fraction;
            let boundary = (i == 0) | (i == count - 1)
                | ((rows > 1) & ((row == 0) | (row == rows - 1)));
            lattice.push((Vector::new(x, 0., z), fraction, boundary));
        }
    }
    lattice
}

/// Generate a full beam: trace every lattice particle under one immutable
/// parameter snapshot. Colors are blended endpoint-to-endpoint by lattice
/// fraction. A recompute always regenerates the whole beam; there is no
/// partial update.
pub fn generate_beam(input: &Input, progress: Option<&ProgressBar>) -> Beam {
    let mass = input.particle.resolved_mass();
    let charge = input.particle.resolved_charge();

    let lattice = source_lattice(&input.source);
    let mut paths = Vec::with_capacity(lattice.len());
    let mut image_points = Vec::new();
    let mut source_points = Vec::with_capacity(lattice.len());

    for (pos, fraction, boundary) in lattice {
        if let Some(bar) = progress {
            bar.tick();
            bar.inc(1);
        }

        let vel = Vector::new(0., -input.source.speed, 0.);
        let body = Body::new(pos.clone(), vel, mass, charge);
        let mut path = trace_particle(body, &input.field, &input.options);

        path.color = input.display.color_a.lerp(&input.display.color_b, fraction);
        path.opacity = if boundary {
            1.
        } else {
            INTERIOR_OPACITY
        };

        if path.termination == Termination::DETECTOR {
            image_points.push(path.terminal().clone());
        }
        source_points.push(pos);
        paths.push(path);
    }

    Beam {
        paths,
        image_points,
        source_points,
        input: input.clone(),
    }
}

/// Console driver around [`generate_beam`]: progress bar over the lattice
/// and a termination summary once the sweep finishes.
pub fn run_beam(input: &Input) -> Beam {
    let total_count = source_lattice(&input.source).len() as u64;
    println!("Tracing {} rays...", total_count);

    //Create and configure progress bar
    let bar: ProgressBar = ProgressBar::new(total_count);
    bar.set_style(ProgressStyle::default_bar()
        .template("[{elapsed_precise}][{bar:40.cyan/blue}][{eta_precise}] {percent}%")
        .progress_chars("#>-"));

    let beam = generate_beam(input, Some(&bar));

    bar.finish();
    BeamSummary::new(&beam).print();
    println!("Finished!");

    beam
}
