#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod interp;
pub mod layout;
pub mod layout_dump;
pub mod model;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, ConfigError, LayoutConfig, load_config};
pub use engine::LayoutEngine;
pub use interp::PositionInterpolator;
pub use layout::{Layout, Vec3, compute_layout, compute_layout_with_rng};
pub use model::{Category, LayoutMode, LinkData, ThoughtNode};
