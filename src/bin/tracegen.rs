use std::{env, f64::consts::TAU, io};

use color_eyre::{eyre::WrapErr, Result};
use fingertip_snake::{
    frontend::{trace::write_frames, Command, Frame},
    geometry::types::Point,
};
use rand::Rng;

struct TraceOptions {
    frames:  u64,
    centre:  Point,
    radius:  f64,
    laps:    f64,
    jitter:  i64,
    /// Every this many frames the hand is "lost" for one frame.
    dropout: u64,
}

fn make_trace(options: &TraceOptions) -> Vec<Frame> {
    let mut rng = rand::thread_rng();

    let mut frames: Vec<_> = (0..options.frames)
        .map(|i| {
            if options.dropout > 0 && i % options.dropout == options.dropout - 1
            {
                return Frame::default();
            }

            let angle = TAU * options.laps * i as f64 / options.frames as f64;
            let x = options.radius.mul_add(angle.cos(), options.centre.x as f64);
            let y = options.radius.mul_add(angle.sin(), options.centre.y as f64);

            Frame {
                fingertip: Some(Point {
                    x: x.round() as i64
                        + rng.gen_range(-options.jitter..=options.jitter),
                    y: y.round() as i64
                        + rng.gen_range(-options.jitter..=options.jitter),
                }),
                command:   None,
            }
        })
        .collect();

    frames.push(Frame {
        fingertip: None,
        command:   Some(Command::Quit),
    });

    frames
}

fn arg<T: std::str::FromStr>(index: usize, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::args().nth(index).map_or(Ok(default), |value| {
        value
            .parse()
            .wrap_err_with(|| format!("invalid argument {index}: {value}"))
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let options = TraceOptions {
        frames:  arg(1, 600)?,
        centre:  Point::new(640, 360),
        radius:  arg(2, 200.0)?,
        laps:    arg(3, 3.0)?,
        jitter:  2,
        dropout: 25,
    };

    let frames = make_trace(&options);
    log::info!("writing {} frames", frames.len());

    write_frames(&mut io::stdout().lock(), &frames)
}
