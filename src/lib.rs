//! polar-bars: radial bar chart geometry and transitions.
//!
//! The crate turns data plus polar axis scales into annular sector
//! descriptors and animates between successive descriptor sets. Drawing is
//! left to a `Renderer` backend.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{RadialBarChart, RadialBarConfig, SeriesContext};
pub use error::{PolarChartError, PolarChartResult};
