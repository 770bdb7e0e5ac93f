pub mod bar_position;
pub mod builder;
pub mod data;
pub mod percent;
pub mod scale;
pub mod sector;
pub mod stacking;
pub mod types;

pub use bar_position::{BarGroup, BarGroupLayout, BarPosition, BarSlot};
pub use builder::{SectorBuildInput, SectorBuildOptions, apply_min_point_size, build_sectors};
pub use data::{DataEntry, DataValue};
pub use percent::{PercentOrPixels, resolve_corner_radius};
pub use scale::{AxisScale, AxisType, AxisView, BandScale, LinearScale, Tick};
pub use sector::{BackgroundSector, SectorDescriptor, SectorValue, TooltipItem, TooltipType};
pub use stacking::{StackedValues, truncate_by_domain};
pub use types::{Point, PolarCenter, PolarLayout, RADIAN, polar_to_cartesian};
