//! paintgrid - paint-by-number puzzle in a window

mod runtime;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use paintgrid::cli::CliArgs;

use runtime::App;

fn main() -> Result<()> {
    paintgrid::tracing::init();

    let args = CliArgs::parse();
    let config = args.game.load_config();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&config)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
