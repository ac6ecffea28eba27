//! Generate the sky for one observation and compose it for a drawing surface
//!
//! Prints a summary of the frame and, with `--output`, writes the full list of
//! draw instructions as JSON for an external renderer.

use clap::Parser;
use planisphere::shared_args::SharedSkyArgs;
use planisphere::{compose, DrawInstruction, Frame};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Sky Render",
    about = "Generates a deterministic night sky and projects it onto a drawing surface",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    shared: SharedSkyArgs,

    /// Write the composed scene as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let location = args.shared.observer_location()?;
    let time = args.shared.observation_time();
    let surface = args.shared.surface()?;
    let config = args.shared.sky_config()?;

    println!("Sky Render");
    println!("==========");
    println!("Location: {}", location);
    println!("Time: {}", time);
    println!(
        "Surface: {}x{} (padding {}, horizon radius {})",
        surface.width(),
        surface.height(),
        surface.padding(),
        surface.radius()
    );

    let frame = Frame::generate(time, location, &config);
    let scene = compose(&frame, &surface, &config.style)?;

    println!(
        "Bodies: {} generated, {} above the horizon",
        frame.bodies.len(),
        frame.visible_count()
    );
    for constellation in &frame.constellations {
        if constellation.is_empty() {
            println!("  {:<12} not drawable", constellation.name);
        } else {
            println!(
                "  {:<12} {} stars, center {}",
                constellation.name,
                constellation.members.len(),
                constellation.center
            );
        }
    }

    if args.shared.debug {
        for instruction in &scene.instructions {
            if let DrawInstruction::Star(star) = instruction {
                if let Some(label) = &star.label {
                    println!(
                        "  {:<10} at ({:.1}, {:.1}) radius {:.2}",
                        label, star.position.x, star.position.y, star.radius
                    );
                }
            }
        }
    }

    log::info!(
        "Composed {} instructions: {} stars, {} segments, {} labels",
        scene.instructions.len(),
        scene.star_count(),
        scene.segment_count(),
        scene.label_count()
    );

    if let Some(path) = &args.output {
        std::fs::write(path, scene.to_json()?)?;
        println!("Scene written to {}", path.display());
    }

    Ok(())
}
