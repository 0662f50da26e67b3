use std::env;

use anyhow::Result;

use maglens::*;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let input = match args.get(1) {
        Some(path) => Input::from_file(path)?,
        None => Input::default(),
    };

    println!("Force convention: {}", input.options.lorentz_convention);
    println!("Arrow scaling: {}", input.display.arrow_scale);
    println!("Detector plane at y = {}", input.options.detector_y());

    let beam = run_beam(&input);
    let render = project(&beam);

    println!("Curves: {} Arrows: {} Coil radius: {}",
        render.curves.len(), render.arrows.len(), render.coil.radius);
    for view in &render.views {
        println!("View {}: scale = {} center = ({}, {})",
            view.label, view.scale, view.center.0, view.center.1);
    }

    for (i, point) in beam.image_points.iter().enumerate() {
        println!("image[{}] = ({:.6}, {:.6}, {:.6})", i, point.x, point.y, point.z);
    }

    Ok(())
}
