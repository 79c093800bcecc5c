//! CLI logic for the fretboard diagram tool.
//!
//! Builds a board from configuration, draws the markers and shapes of an
//! annotation file, replays simulated taps and writes the SVG.

pub mod annotations;
pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::CliError;

use log::info;

use fretboard::{
    Fretboard,
    rotation::{PointerEvent, RotationToggle},
    viewport::FixedViewport,
};

use annotations::Annotations;

/// Run the fretboard CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Annotation reading, parsing or color errors
/// - Invalid style colors
/// - File I/O errors while writing the output
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path:? = args.input,
        output_path = args.output,
        viewport_width = args.viewport_width;
        "Rendering fretboard"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let mut board = Fretboard::from_app_config(&FixedViewport(args.viewport_width), &app_config)?;

    if let Some(input) = &args.input {
        let annotations = Annotations::load(input)?;
        annotations.apply(&mut board)?;
    }

    if args.taps > 0 {
        let mode = args.mode.clone();
        let mut toggle = RotationToggle::new(move || mode.clone());
        let tap = PointerEvent::TapEnded {
            position: board.geometry().board_bounds().center(),
        };
        for _ in 0..args.taps {
            toggle.handle_event(tap, &mut board);
        }
        info!(taps = args.taps, degrees = toggle.rotation().degrees(); "Replayed taps");
    }

    board.write_svg(&args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
