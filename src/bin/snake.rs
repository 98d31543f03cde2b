use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use color_eyre::{eyre::WrapErr, Result};
use fingertip_snake::{
    config::Config,
    engine::SnakeGame,
    frontend::{text::TextRenderer, trace::TraceInput, FrameLoop},
};
use log::info;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn open_trace(path: Option<&str>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some("-") | None => Box::new(BufReader::new(io::stdin())),
        Some(path) => Box::new(BufReader::new(
            File::open(path)
                .wrap_err_with(|| format!("failed to open trace {path}"))?,
        )),
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    info!("{NAME} {VERSION}");

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let config_path = env::var_os("SNAKE_CONFIG").map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    let show_outline = env::var_os("SNAKE_OUTLINE").is_some();

    let trace_path = env::args().nth(1);
    let input = TraceInput::new(open_trace(trace_path.as_deref())?);
    let renderer = TextRenderer::new(io::stdout().lock(), config.display)
        .with_outline(show_outline);

    let mut frame_loop =
        FrameLoop::new(SnakeGame::new(config.engine), input, renderer);
    let summary = frame_loop.run()?;

    info!(
        "done after {} frames ({:?}): {} games, best score {}",
        summary.frames, summary.exit, summary.games, summary.best_score
    );

    Ok(())
}
