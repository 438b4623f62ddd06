pub mod animator;
pub mod config;
pub mod target;

pub use animator::{
    AnimatorState, ZoomAnimation, ZoomAnimator, ZoomRequestOutcome, ZoomTickOutcome,
};
pub use config::ZoomConfig;
pub use target::{ZoomDirection, zoom_target};
