//! HT16K33 7-segment simulator for desktop.
//!
//! Replays a fixed script of display requests through the shared renderer and
//! writes one PNG per frame, so output can be checked without hardware:
//!
//! ```bash
//! cargo run -p segment-simulator -- frames/
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod frame;
mod scenes;

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use segment_common::preview::PreviewStyle;
use segment_common::text::buffer_text;

use crate::frame::{draw_frame, frame_size};
use crate::scenes::scenes;

/// Output directory when none is given.
const DEFAULT_OUT_DIR: &str = "frames";

/// Pixel scale of the written PNGs.
const OUTPUT_SCALE: u32 = 2;

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = std::env::args().nth(1).map_or_else(|| PathBuf::from(DEFAULT_OUT_DIR), PathBuf::from);
    fs::create_dir_all(&out_dir)?;

    let style = PreviewStyle::default();
    let output_settings = OutputSettingsBuilder::new().scale(OUTPUT_SCALE).build();
    let started = Instant::now();

    let scenes = scenes();
    for (index, scene) in scenes.iter().enumerate() {
        let segments = scene.render();
        let shown = buffer_text(segments.buffer());
        let caption = scene.request.describe();

        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(frame_size(&style));
        draw_frame(&mut display, &caption, shown.as_str(), segments.buffer(), &style);

        let path = out_dir.join(format!("frame_{index:02}_{}.png", scene.name));
        display.to_rgb_output_image(&output_settings).save_png(&path)?;

        println!("{caption:<28} -> {:<7} {}", format!("\"{}\"", shown.as_str()), path.display());
    }

    println!(
        "Wrote {} frames to {} in {} ms",
        scenes.len(),
        out_dir.display(),
        started.elapsed().as_millis()
    );
    Ok(())
}
