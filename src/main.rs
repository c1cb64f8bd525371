use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;

mod carousel;
mod constants;
mod content;
mod page;
mod particles;
mod sections;
mod texture_loader;

use crate::carousel::{CarouselConfig, CarouselController};
use crate::constants::*;
use crate::page::Page;

/// Single-page tribute wall with an autoplaying hero slideshow.
#[derive(Parser, Debug)]
#[command(name = "tribute-wall", version, about)]
struct Args {
    /// Directory containing the tribute images (hero-*.jpg, portrait.jpg, award-*.jpg)
    assets: PathBuf,

    /// Seconds between automatic slide advances
    #[arg(long, default_value_t = SLIDE_INTERVAL_SECS)]
    interval: f32,

    /// Horizontal drag distance, in pixels, that counts as a swipe
    #[arg(long, default_value_t = SWIPE_THRESHOLD_PX)]
    swipe_threshold: f32,

    /// Start with reduced motion: no particles, near-instant transitions
    #[arg(long)]
    reduced_motion: bool,

    /// Restart the autoplay countdown after every manual navigation
    #[arg(long)]
    reset_on_nav: bool,

    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = CarouselConfig {
        interval_secs: args.interval,
        swipe_threshold_px: args.swipe_threshold,
        reset_on_manual_nav: args.reset_on_nav,
        reduced_motion: args.reduced_motion,
    };
    let controller = CarouselController::new(content::hero_deck(), config)
        .context("building the hero slideshow")?;

    info!(
        slides = controller.slide_count(),
        interval = args.interval,
        reduced_motion = args.reduced_motion,
        "starting tribute wall"
    );

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("John Anderson, A Tribute")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut page = Page::new(&mut rl, &thread, &args.assets, controller)
        .context("loading tribute assets")?;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        page.handle_input(&mut rl);
        page.update(dt);

        let mut d = rl.begin_drawing(&thread);
        page.draw(&mut d);
    }

    Ok(())
}
