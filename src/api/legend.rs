use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{DataEntry, TooltipType};

use super::RadialBarConfig;

/// Icon drawn next to a legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegendType {
    Line,
    PlainLine,
    Square,
    #[default]
    Rect,
    Circle,
    Cross,
    Diamond,
    Star,
    Triangle,
    Wye,
    None,
}

/// One legend row; radial bars emit one per data record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub legend_type: LegendType,
    pub value: Option<String>,
    pub payload: Value,
}

/// Series-level tooltip settings consumed by an external tooltip dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntrySettings {
    pub data_key: String,
    pub name: String,
    pub hide: bool,
    pub tooltip_type: TooltipType,
    pub unit: String,
    pub data_defined_on_item: Vec<Value>,
}

#[must_use]
pub fn legend_payload(entries: &[DataEntry], legend_type: LegendType) -> Vec<LegendEntry> {
    entries
        .iter()
        .map(|entry| LegendEntry {
            legend_type,
            value: entry.name().map(str::to_owned),
            payload: entry.payload.clone(),
        })
        .collect()
}

/// Tooltip settings; the display name falls back to the data key.
#[must_use]
pub fn tooltip_entry_settings(
    config: &RadialBarConfig,
    entries: &[DataEntry],
) -> TooltipEntrySettings {
    TooltipEntrySettings {
        data_key: config.data_key.clone(),
        name: config
            .name
            .clone()
            .unwrap_or_else(|| config.data_key.clone()),
        hide: config.hide,
        tooltip_type: config.tooltip_type,
        unit: String::new(),
        data_defined_on_item: entries.iter().map(|entry| entry.payload.clone()).collect(),
    }
}
