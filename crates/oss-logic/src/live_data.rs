//! Live per-zone data consumed by the scorer: utility uptime and plot inventory.
//!
//! Both lookups are synchronous and infallible. Uptime is keyed by zone
//! name, plot inventory by zone id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Uptime of a single utility, as a percentage (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UtilityStatus {
    pub uptime: f64,
}

/// Rolling uptime for the three utilities the scorer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UtilityUptime {
    pub power: UtilityStatus,
    pub gas: UtilityStatus,
    pub water: UtilityStatus,
}

impl UtilityUptime {
    pub fn new(power: f64, gas: f64, water: f64) -> Self {
        Self {
            power: UtilityStatus { uptime: power },
            gas: UtilityStatus { uptime: gas },
            water: UtilityStatus { uptime: water },
        }
    }
}

/// Lease status of an industrial plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotStatus {
    Available,
    Reserved,
    Occupied,
    UnderDevelopment,
}

/// One industrial plot inside a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub id: String,
    pub status: PlotStatus,
    pub size_acres: f64,
}

impl Plot {
    pub fn is_available(&self) -> bool {
        self.status == PlotStatus::Available
    }
}

/// Source of utility uptime, keyed by zone name.
pub trait UtilityUptimeSource {
    fn uptime_for_zone(&self, zone_name: &str) -> UtilityUptime;
}

/// Source of plot inventory, keyed by zone id. May return an empty list.
pub trait PlotInventorySource {
    fn plots_for_zone(&self, zone_id: &str) -> Vec<Plot>;
}

/// Number of available plots and total plots.
pub fn availability(plots: &[Plot]) -> (usize, usize) {
    let available = plots.iter().filter(|p| p.is_available()).count();
    (available, plots.len())
}

/// Explicit in-memory tables. Unknown zones report zero uptime and no plots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticLiveData {
    pub uptime: HashMap<String, UtilityUptime>,
    pub plots: HashMap<String, Vec<Plot>>,
}

impl StaticLiveData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uptime(mut self, zone_name: &str, uptime: UtilityUptime) -> Self {
        self.uptime.insert(zone_name.to_string(), uptime);
        self
    }

    pub fn with_plots(mut self, zone_id: &str, plots: Vec<Plot>) -> Self {
        self.plots.insert(zone_id.to_string(), plots);
        self
    }
}

impl UtilityUptimeSource for StaticLiveData {
    fn uptime_for_zone(&self, zone_name: &str) -> UtilityUptime {
        self.uptime.get(zone_name).copied().unwrap_or_default()
    }
}

impl PlotInventorySource for StaticLiveData {
    fn plots_for_zone(&self, zone_id: &str) -> Vec<Plot> {
        self.plots.get(zone_id).cloned().unwrap_or_default()
    }
}
