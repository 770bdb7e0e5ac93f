mod chart;
mod config;
mod json_contract;
mod legend;
mod observer_registry;

pub use chart::{RadialBarChart, SeriesContext};
pub use config::RadialBarConfig;
pub use json_contract::{RADIAL_BAR_CONFIG_JSON_SCHEMA_V1, RadialBarConfigJsonContractV1};
pub use crate::core::TooltipType;
pub use legend::{
    LegendEntry, LegendType, TooltipEntrySettings, legend_payload, tooltip_entry_settings,
};
