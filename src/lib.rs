//! Spirograph Studio: animate hypotrochoid curves onto a persistent canvas.
//!
//! The core is [`spiro`] (curve math), [`fit`] (scaling into the canvas) and
//! [`engine`] (the stroke animation with undo/clear). Everything else is the
//! minifb front end: [`controls`], [`preview`], [`panel`] and [`draw`].

pub mod background;
pub mod color;
pub mod config;
pub mod controls;
pub mod draw;
pub mod engine;
pub mod error;
pub mod fit;
pub mod panel;
pub mod preview;
pub mod save;
pub mod spiro;
pub mod theme;
pub mod types;
pub mod undo;

pub use color::ColorSource;
pub use config::Config;
pub use engine::DrawingEngine;
pub use error::{Error, Result};
pub use types::{FrameBuffer, MechanismParams, Point, PointSequence, Rgb};

/// Install the tracing subscriber. `RUST_LOG` overrides the INFO default.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
