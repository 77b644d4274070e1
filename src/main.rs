// An interactive Bézier degree-elevation playground made with the Bevy game engine.

mod app;
mod camera;
mod cli;
mod draw;
mod editor;
mod geometry;
mod hud;
mod input;
mod logger;
mod performance;
mod setup;
mod theme;

mod tests;

use crate::cli::CliArgs;

fn main() -> anyhow::Result<()> {
    logger::init_custom_logger()?;

    let args = CliArgs::parse_args();
    app::create_app(args).run();

    Ok(())
}
