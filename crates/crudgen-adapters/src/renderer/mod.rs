//! Artifact renderers.

mod express;

pub use express::ExpressRenderer;
