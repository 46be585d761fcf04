//! The christmas-lights countdown: strands of independently flickering bulbs
//! around a big-text days-until-Christmas message, redrawn incrementally.

pub mod calendar;
pub mod layout;
pub mod render;
pub mod strand;

use std::{
    io::{stdout, Write},
    time::Duration,
};

use chrono::Local;
use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use tokio_util::sync::CancellationToken;

use crate::{
    bigtext::BigFont,
    countdown::{
        render::Renderer,
        strand::{Strand, DEFAULT_BULB_COUNT, TOGGLE_PROBABILITY},
    },
    term::Term,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct CountdownConfig {
    /// Freeze every bulb lit and render exactly once.
    pub all_on: bool,
    /// Blank lines between the strands and the message block.
    pub gap: u16,
    /// One or two strands of lights.
    pub strands: usize,
    /// Bulbs per strand; the terminal width may truncate what is drawn.
    pub bulbs: usize,
    /// Fixed RNG seed for reproducible flicker.
    pub seed: Option<u64>,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self { all_on: false, gap: 3, strands: 2, bulbs: DEFAULT_BULB_COUNT, seed: None }
    }
}

/// Run the countdown until Ctrl-C. The cursor is hidden for the duration and
/// restored on every exit path.
pub async fn run(config: CountdownConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut strands: Vec<Strand> = (0..config.strands.clamp(1, 2))
        .map(|_| {
            if config.all_on {
                Strand::lit(config.bulbs)
            } else {
                Strand::random(config.bulbs, &mut rng)
            }
        })
        .collect();

    let token = CancellationToken::new();
    let watcher = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            watcher.cancel();
        }
    });

    let mut term = Term::new();
    term.enter();
    let mut renderer = Renderer::new(stdout(), BigFont::locate(), config.gap);
    let result = animate(&config, &mut strands, &mut rng, &mut renderer, || term.width(), &token).await;
    term.exit();
    result
}

/// The frame loop, driven against an injected renderer and width source so
/// steady-state behavior is observable in tests.
async fn animate<W: Write>(
    config: &CountdownConfig,
    strands: &mut [Strand],
    rng: &mut StdRng,
    renderer: &mut Renderer<W>,
    width: impl Fn() -> Option<u16>,
    token: &CancellationToken,
) -> Result<()> {
    let render_count = layout::render_count(config.bulbs, width());
    let days = calendar::days_until_christmas(Local::now().date_naive());
    renderer.full_draw(&strands, render_count, days)?;
    log::info!("countdown started: {} to go, {render_count} bulbs visible", calendar::days_label(days));

    if config.all_on {
        // Nothing changes; render once and hold until cancelled.
        token.cancelled().await;
        return Ok(());
    }

    let mut interval = tokio::time::interval(FRAME_INTERVAL);
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                let render_count = layout::render_count(config.bulbs, width());
                let days = calendar::days_until_christmas(Local::now().date_naive());

                // Resize or day boundary: rebuild the whole block. Rare
                // enough that a full clear beats tracking partial diffs.
                if render_count != renderer.render_count() || days != renderer.last_days() {
                    log::debug!("full redraw: {render_count} bulbs, {days} days");
                    renderer.full_draw(&strands, render_count, days)?;
                }

                for strand in strands.iter_mut() {
                    strand.flicker(rng, TOGGLE_PROBABILITY);
                }
                renderer.draw_diffs(&strands)?;
            }
        }
    }
    Ok(())
}
