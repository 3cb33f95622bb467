use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::Parser;
use quadrant::prelude::*;
use tracing_subscriber::EnvFilter;

const PLAYER_POSITION: Rect = Rect::new(300, 300, 64, 64);

#[derive(Parser, Debug)]
#[command(name = "quadrant", version, about = "Draw a few shapes and sprites in a window")]
struct Args {
    /// Window title.
    #[arg(long, default_value = "My 2D Game")]
    title: String,

    /// Window width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Image shown as a 64x64 sprite at (300, 300), e.g. `player.bmp`.
    #[arg(long)]
    sprite: Option<PathBuf>,

    /// Also draw a circle outline.
    #[arg(long)]
    circle: bool,

    /// Frame rate cap; 0 leaves the loop unthrottled.
    #[arg(long, default_value_t = 0)]
    fps: u32,

    /// Render a single frame off-screen, save it to this path and exit.
    #[arg(long)]
    screenshot: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            quadrant::error_log!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if let Some(path) = &args.screenshot {
        return screenshot(args, path);
    }

    let mut runner = quadrant::create_runner().context("failed to initialise the event loop")?;
    runner.set_target_fps(args.fps);

    let mut window = runner
        .create_window(&args.title, Point2::new(args.width, args.height))
        .pos(WindowPosition::Centered)
        .build()
        .context("failed to create window")?;

    let pixel_buffer =
        quadrant::create_pixel_buffer(&mut window).context("failed to create drawing surface")?;

    let mut queue = quadrant::create_render_queue(pixel_buffer);
    populate(&mut queue, args)?;

    quadrant::log!(
        "Rendering {} shape(s) and {} sprite(s); release any key to quit",
        queue.shapes().len(),
        queue.sprites().len()
    );

    let mut frames = 0u64;
    while runner.pool_events(PollMode::Poll) {
        let quit = runner
            .events()
            .iter()
            .any(|event| event.is_key_release() || matches!(event, Event::WindowClosed { .. }));

        if quit {
            break;
        }

        queue.render().context("failed to render frame")?;
        frames += 1;
    }

    quadrant::log!("Exiting after {} frame(s)", frames);

    Ok(())
}

fn populate<P: Present>(queue: &mut RenderQueue<P>, args: &Args) -> anyhow::Result<()> {
    queue.add_shape(Shape::rectangle(Rect::new(100, 100, 200, 100), Color::RED));

    if args.circle {
        queue.add_shape(Shape::circle(
            Rect::new(500, 150, 160, 160),
            Color::CORNFLOWERBLUE,
        ));
    }

    if let Some(path) = &args.sprite {
        let texture = queue
            .load_texture(path)
            .with_context(|| format!("failed to load sprite {}", path.display()))?;

        queue.add_sprite(Sprite::new(texture, PLAYER_POSITION));
    }

    Ok(())
}

fn screenshot(args: &Args, path: &Path) -> anyhow::Result<()> {
    let mut queue = quadrant::create_render_queue(Headless::new(Point2::new(args.width, args.height)));
    populate(&mut queue, args)?;

    queue.render().context("failed to render frame")?;

    let frame = queue
        .presenter()
        .last_frame()
        .context("nothing was rendered; is the size zero?")?;

    frame
        .to_image()
        .save(path)
        .with_context(|| format!("failed to save screenshot {}", path.display()))?;

    quadrant::log!("Saved {}x{} frame to {}", frame.width(), frame.height(), path.display());

    Ok(())
}
