//! Zone suitability scoring: ranks zones against an investor requirement.
//!
//! Each zone earns points on eight criteria and the points are summed.
//! The nominal budget is 100 but the total is deliberately not capped or
//! normalized, so a near-perfect zone can land around 115.
//!
//! | Criterion | Max |
//! |-----------|-----|
//! | Sector match | 30 |
//! | Power fit | 25 |
//! | Port access | 20 |
//! | Gas uptime | 15 |
//! | Plot availability | 15 |
//! | Water fit | 10 |
//! | Land size match | 10 |
//! | City proximity | 5 |
//!
//! Zones are ranked by descending total; equal totals keep catalog order.
//!
//! ```
//! use oss_logic::fixtures::SeededLiveData;
//! use oss_logic::requirement::InvestorRequirement;
//! use oss_logic::scoring::recommend;
//! use oss_logic::zones::default_catalog;
//!
//! let catalog = default_catalog();
//! let live = SeededLiveData::generate(42, &catalog);
//! let req = InvestorRequirement {
//!     sector: "textiles".into(),
//!     ..Default::default()
//! };
//! let ranked = recommend(&req, &catalog, &live, &live);
//! assert_eq!(ranked.len(), catalog.len());
//! assert!(ranked[0].score >= ranked[ranked.len() - 1].score);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::live_data::{
    availability, Plot, PlotInventorySource, UtilityUptime, UtilityUptimeSource,
};
use crate::requirement::{InvestorRequirement, NeedLevel};
use crate::zones::{GasAvailability, PlotSizeRange, PortProximity, SupplyRating, Zone};

pub const SECTOR_MAX: f64 = 30.0;
pub const POWER_MAX: f64 = 25.0;
pub const PORT_MAX: f64 = 20.0;
pub const GAS_MAX: f64 = 15.0;
pub const PLOTS_MAX: f64 = 15.0;
pub const WATER_MAX: f64 = 10.0;
pub const LAND_MAX: f64 = 10.0;
pub const PROXIMITY_MAX: f64 = 5.0;

/// Port credit when the investor does not need a port.
const PORT_NOT_REQUESTED: f64 = 10.0;
/// Credit for a catalog plot-size band match (no concrete plot fits).
const LAND_CATALOG_MATCH: f64 = 5.0;

/// Relative tolerance for land-size matching on the two match paths.
///
/// `plot` applies to concrete available plots, `catalog` to the zone's
/// advertised plot-size bands. Both default to ±20%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandTolerance {
    pub plot: f64,
    pub catalog: f64,
}

impl Default for LandTolerance {
    fn default() -> Self {
        Self {
            plot: 0.2,
            catalog: 0.2,
        }
    }
}

/// Points earned on each criterion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sector: f64,
    pub power: f64,
    pub port: f64,
    pub gas: f64,
    pub plots: f64,
    pub water: f64,
    pub land: f64,
    pub proximity: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.sector
            + self.power
            + self.port
            + self.gas
            + self.plots
            + self.water
            + self.land
            + self.proximity
    }

    /// `(name, points, max)` for each criterion, in table order.
    pub fn criteria(&self) -> [(&'static str, f64, f64); 8] {
        [
            ("sector", self.sector, SECTOR_MAX),
            ("power", self.power, POWER_MAX),
            ("port", self.port, PORT_MAX),
            ("gas", self.gas, GAS_MAX),
            ("plots", self.plots, PLOTS_MAX),
            ("water", self.water, WATER_MAX),
            ("land", self.land, LAND_MAX),
            ("proximity", self.proximity, PROXIMITY_MAX),
        ]
    }
}

/// A zone with its suitability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredZone {
    #[serde(flatten)]
    pub zone: Zone,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Position in the input catalog; breaks score ties.
    pub catalog_index: usize,
}

// ── Criteria ────────────────────────────────────────────────────────────

/// 30 if the trimmed sector is a case-insensitive substring of any
/// `best_for` entry. An empty sector never matches.
pub fn sector_points(sector: &str, zone: &Zone) -> f64 {
    let needle = sector.trim().to_lowercase();
    if needle.is_empty() {
        return 0.0;
    }
    if zone
        .best_for
        .iter()
        .any(|s| s.to_lowercase().contains(&needle))
    {
        SECTOR_MAX
    } else {
        0.0
    }
}

/// Power uptime bucket: 3 for ≥99%, 2 for ≥97%, 1 for ≥95%, else 0.
fn power_bucket(uptime: f64) -> usize {
    if uptime >= 99.0 {
        3
    } else if uptime >= 97.0 {
        2
    } else if uptime >= 95.0 {
        1
    } else {
        0
    }
}

/// Power fit by need level and uptime bucket.
///
/// Heavy consumers need a very stable grid; light users are fine on most.
pub fn power_points(need: NeedLevel, uptime: f64) -> f64 {
    // Indexed by bucket: [below 95, ≥95, ≥97, ≥99]
    let table: [f64; 4] = match need {
        NeedLevel::High => [0.0, 10.0, 18.0, 25.0],
        NeedLevel::Medium => [0.0, 15.0, 22.0, 25.0],
        NeedLevel::Low => [0.0, 20.0, 25.0, 25.0],
    };
    table[power_bucket(uptime)]
}

pub fn port_points(port_access: bool, port: PortProximity) -> f64 {
    if !port_access {
        return PORT_NOT_REQUESTED;
    }
    match port {
        PortProximity::Adjacent => PORT_MAX,
        PortProximity::Nearby => 10.0,
        PortProximity::Distant => 0.0,
    }
}

/// Gas availability factor × uptime bucket.
pub fn gas_points(gas: GasAvailability, uptime: f64) -> f64 {
    let factor = match gas {
        GasAvailability::Available => 1.0,
        GasAvailability::Planned => 0.5,
        GasAvailability::None => 0.0,
    };
    let bucket = if uptime >= 98.0 {
        GAS_MAX
    } else if uptime >= 95.0 {
        10.0
    } else if uptime >= 90.0 {
        6.0
    } else {
        0.0
    };
    factor * bucket
}

/// `available / total * 15`, or 0 for a zone with no plots.
pub fn plot_points(plots: &[Plot]) -> f64 {
    let (available, total) = availability(plots);
    if total == 0 {
        return 0.0;
    }
    available as f64 / total as f64 * PLOTS_MAX
}

fn rating_points(rating: SupplyRating) -> f64 {
    match rating {
        SupplyRating::Excellent => 10.0,
        SupplyRating::Good => 8.0,
        SupplyRating::Adequate => 5.0,
    }
}

/// Water fit by requirement level, infrastructure rating and uptime.
pub fn water_points(need: NeedLevel, rating: SupplyRating, uptime: f64) -> f64 {
    match need {
        NeedLevel::Low => {
            if uptime >= 90.0 {
                WATER_MAX
            } else {
                0.0
            }
        }
        NeedLevel::Medium => {
            let base = rating_points(rating);
            if uptime >= 95.0 {
                base
            } else if uptime >= 90.0 {
                (base - 3.0).max(0.0)
            } else {
                0.0
            }
        }
        NeedLevel::High => match rating {
            SupplyRating::Excellent if uptime >= 98.0 => WATER_MAX,
            SupplyRating::Good if uptime >= 98.0 => 7.0,
            _ if uptime >= 95.0 => rating_points(rating) / 2.0,
            _ => 0.0,
        },
    }
}

/// Land-size match.
///
/// A numeric request earns full points when an available plot is within
/// `tolerance.plot` of it, otherwise partial points when it falls inside a
/// catalog band widened by `tolerance.catalog`. A non-numeric request can
/// only earn the partial points, by text match against the catalog bands.
pub fn land_points(land_size: &str, zone: &Zone, plots: &[Plot], tolerance: LandTolerance) -> f64 {
    let text = land_size.trim();
    if text.is_empty() {
        return 0.0;
    }

    match crate::requirement::parse_land_size(text) {
        Some(acres) => {
            let slack = tolerance.plot.max(0.0);
            let lo = acres * (1.0 - slack);
            let hi = acres * (1.0 + slack);
            let plot_fit = plots
                .iter()
                .filter(|p| p.is_available())
                .any(|p| p.size_acres >= lo && p.size_acres <= hi);
            if plot_fit {
                return LAND_MAX;
            }
            let band_fit = zone
                .plot_sizes
                .iter()
                .filter_map(|band| PlotSizeRange::parse(band))
                .any(|range| range.contains_with_tolerance(acres, tolerance.catalog));
            if band_fit {
                LAND_CATALOG_MATCH
            } else {
                0.0
            }
        }
        None => {
            let needle = text.to_lowercase();
            if zone
                .plot_sizes
                .iter()
                .any(|band| band.to_lowercase().contains(&needle))
            {
                LAND_CATALOG_MATCH
            } else {
                0.0
            }
        }
    }
}

/// City proximity, using "port not distant" as the locality proxy.
pub fn proximity_points(proximity_to_city: bool, port: PortProximity) -> f64 {
    if proximity_to_city && port != PortProximity::Distant {
        PROXIMITY_MAX
    } else {
        0.0
    }
}

// ── Aggregation ─────────────────────────────────────────────────────────

/// Score one zone given its live data.
pub fn score_zone(
    req: &InvestorRequirement,
    zone: &Zone,
    uptime: &UtilityUptime,
    plots: &[Plot],
    tolerance: LandTolerance,
) -> ScoreBreakdown {
    let infra = &zone.infrastructure;
    ScoreBreakdown {
        sector: sector_points(&req.sector, zone),
        power: power_points(req.power_need, uptime.power.uptime),
        port: port_points(req.port_access, infra.port),
        gas: gas_points(infra.gas, uptime.gas.uptime),
        plots: plot_points(plots),
        water: water_points(req.water_requirements, infra.water, uptime.water.uptime),
        land: land_points(&req.land_size, zone, plots, tolerance),
        proximity: proximity_points(req.proximity_to_city, infra.port),
    }
}

/// Descending score, then ascending catalog index.
fn rank_order(a: &ScoredZone, b: &ScoredZone) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.catalog_index.cmp(&b.catalog_index))
}

/// Scores zones using a pair of live-data sources.
pub struct Recommender<'a> {
    uptime: &'a dyn UtilityUptimeSource,
    plots: &'a dyn PlotInventorySource,
    tolerance: LandTolerance,
}

impl<'a> Recommender<'a> {
    pub fn new(uptime: &'a dyn UtilityUptimeSource, plots: &'a dyn PlotInventorySource) -> Self {
        Self {
            uptime,
            plots,
            tolerance: LandTolerance::default(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: LandTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> LandTolerance {
        self.tolerance
    }

    /// Score every zone and rank them, best first.
    pub fn recommend(&self, req: &InvestorRequirement, zones: &[Zone]) -> Vec<ScoredZone> {
        let mut scored: Vec<ScoredZone> = zones
            .iter()
            .enumerate()
            .map(|(catalog_index, zone)| {
                let uptime = self.uptime.uptime_for_zone(&zone.name);
                let plots = self.plots.plots_for_zone(&zone.id);
                let breakdown = score_zone(req, zone, &uptime, &plots, self.tolerance);
                ScoredZone {
                    zone: zone.clone(),
                    score: breakdown.total(),
                    breakdown,
                    catalog_index,
                }
            })
            .collect();
        scored.sort_by(rank_order);

        if let Some(best) = scored.first() {
            log::debug!(
                "ranked {} zones for sector {:?}; best {} ({:.1})",
                scored.len(),
                req.sector,
                best.zone.name,
                best.score
            );
        }
        scored
    }

    /// The best `n` zones.
    pub fn top(&self, req: &InvestorRequirement, zones: &[Zone], n: usize) -> Vec<ScoredZone> {
        let mut ranked = self.recommend(req, zones);
        ranked.truncate(n);
        ranked
    }
}

/// Rank `zones` for `req` with default land tolerances.
pub fn recommend(
    req: &InvestorRequirement,
    zones: &[Zone],
    uptime: &dyn UtilityUptimeSource,
    plots: &dyn PlotInventorySource,
) -> Vec<ScoredZone> {
    Recommender::new(uptime, plots).recommend(req, zones)
}
