//! Economic zone catalog: EPZs, SEZs and hi-tech parks.
//!
//! Zones are static, read-only records. The built-in catalog mirrors the
//! zones an investor can pick from on the portal; a custom catalog can be
//! loaded from JSON with the same shape.
//!
//! ```
//! use oss_logic::zones::{default_catalog, find_zone};
//!
//! let catalog = default_catalog();
//! let cepz = find_zone(&catalog, "chattogram-epz").unwrap();
//! assert_eq!(cepz.name, "Chattogram EPZ");
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{OssError, Result};

/// Which authority runs a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// Export processing zone (BEPZA).
    Epz,
    /// Special economic zone (BEZA).
    Sez,
    /// Hi-tech park (BHTPA).
    HiTech,
}

impl ZoneKind {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "epz" => Some(Self::Epz),
            "sez" | "ez" => Some(Self::Sez),
            "hitech" | "hi-tech" | "htp" => Some(Self::HiTech),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Epz => "EPZ",
            Self::Sez => "SEZ",
            Self::HiTech => "Hi-Tech Park",
        }
    }
}

/// Quality rating for grid power and water supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyRating {
    Excellent,
    Good,
    Adequate,
}

/// Whether a gas connection exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasAvailability {
    Available,
    Planned,
    None,
}

/// Distance to the nearest sea or river port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortProximity {
    Adjacent,
    Nearby,
    Distant,
}

/// Infrastructure profile of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    pub power: SupplyRating,
    pub gas: GasAvailability,
    pub water: SupplyRating,
    pub port: PortProximity,
}

/// A government-designated economic zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Stable identifier, used to key plot inventory.
    pub id: String,
    /// Display name, used to key utility uptime.
    pub name: String,
    pub kind: ZoneKind,
    pub location: String,
    /// Sectors the zone is designed for.
    pub best_for: Vec<String>,
    pub infrastructure: Infrastructure,
    /// Catalog plot-size bands, e.g. `"1-5 acres"` or `"20+ acres"`.
    pub plot_sizes: Vec<String>,
    /// Percentage of land already leased (0–100).
    pub occupancy_rate: f64,
    pub established_companies: Vec<String>,
    pub incentives: Vec<String>,
}

/// A numeric plot-size band in acres. `max == None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSizeRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PlotSizeRange {
    /// Parse a catalog band such as `"1-5 acres"`, `"20+ acres"` or `"2 acres"`.
    ///
    /// Returns `None` when no leading number can be read.
    pub fn parse(text: &str) -> Option<Self> {
        let lowered = text.trim().to_ascii_lowercase();
        let body = lowered
            .trim_end_matches("acres")
            .trim_end_matches("acre")
            .trim();
        if body.is_empty() {
            return None;
        }

        if let Some(open) = body.strip_suffix('+') {
            let min = open.trim().parse::<f64>().ok()?;
            return (min >= 0.0).then_some(Self { min, max: None });
        }

        if let Some((lo, hi)) = body.split_once(|c: char| c == '-' || c == '–') {
            let min = lo.trim().parse::<f64>().ok()?;
            let max = hi.trim().parse::<f64>().ok()?;
            if min < 0.0 || max < min {
                return None;
            }
            return Some(Self {
                min,
                max: Some(max),
            });
        }

        let exact = body.parse::<f64>().ok()?;
        (exact >= 0.0).then_some(Self {
            min: exact,
            max: Some(exact),
        })
    }

    /// Whether `acres` falls inside the band widened by `tolerance` (0.2 = ±20%).
    pub fn contains_with_tolerance(&self, acres: f64, tolerance: f64) -> bool {
        let tolerance = tolerance.max(0.0);
        let lower = self.min * (1.0 - tolerance);
        match self.max {
            Some(max) => acres >= lower && acres <= max * (1.0 + tolerance),
            None => acres >= lower,
        }
    }
}

/// Look up a zone by id.
pub fn find_zone<'a>(catalog: &'a [Zone], id: &str) -> Option<&'a Zone> {
    catalog.iter().find(|z| z.id == id)
}

/// All distinct sectors named in a catalog, in first-seen order.
pub fn all_sectors(catalog: &[Zone]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for sector in catalog.iter().flat_map(|z| z.best_for.iter()) {
        if seen.insert(sector.to_ascii_lowercase()) {
            out.push(sector.as_str());
        }
    }
    out
}

/// Parse a custom catalog from JSON. Duplicate ids are rejected.
pub fn load_catalog(json: &str) -> Result<Vec<Zone>> {
    let zones: Vec<Zone> = serde_json::from_str(json)?;
    let mut ids = HashSet::new();
    for zone in &zones {
        if !ids.insert(zone.id.as_str()) {
            return Err(OssError::InvalidCatalog {
                details: format!("duplicate zone id {:?}", zone.id),
            });
        }
        if !(0.0..=100.0).contains(&zone.occupancy_rate) {
            return Err(OssError::InvalidCatalog {
                details: format!(
                    "zone {:?} occupancy rate {} outside 0-100",
                    zone.id, zone.occupancy_rate
                ),
            });
        }
    }
    log::debug!("loaded custom catalog with {} zones", zones.len());
    Ok(zones)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn zone(
    id: &str,
    name: &str,
    kind: ZoneKind,
    location: &str,
    best_for: &[&str],
    infrastructure: Infrastructure,
    plot_sizes: &[&str],
    occupancy_rate: f64,
    established_companies: &[&str],
    incentives: &[&str],
) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        location: location.to_string(),
        best_for: strings(best_for),
        infrastructure,
        plot_sizes: strings(plot_sizes),
        occupancy_rate,
        established_companies: strings(established_companies),
        incentives: strings(incentives),
    }
}

/// The built-in zone catalog.
pub fn default_catalog() -> Vec<Zone> {
    use GasAvailability as G;
    use PortProximity as P;
    use SupplyRating as S;

    let infra = |power, gas, water, port| Infrastructure {
        power,
        gas,
        water,
        port,
    };

    vec![
        zone(
            "chattogram-epz",
            "Chattogram EPZ",
            ZoneKind::Epz,
            "Chattogram",
            &["Textiles", "Garments", "Electronics", "Footwear"],
            infra(S::Excellent, G::Available, S::Good, P::Adjacent),
            &["0.5-2 acres", "2-5 acres"],
            92.0,
            &["Youngone Corporation", "Pacific Jeans", "Regency Garments"],
            &[
                "10-year tax holiday",
                "Duty-free import of capital machinery",
                "100% foreign ownership",
            ],
        ),
        zone(
            "dhaka-epz",
            "Dhaka EPZ",
            ZoneKind::Epz,
            "Savar, Dhaka",
            &["Garments", "Textiles", "Electronics", "Light Engineering"],
            infra(S::Excellent, G::Available, S::Good, P::Distant),
            &["0.5-2 acres", "2-4 acres"],
            95.0,
            &["Hamza Textiles", "Sun Garments", "Shinsung Electronics"],
            &[
                "10-year tax holiday",
                "Duty-free import of raw materials",
                "Repatriation of profits",
            ],
        ),
        zone(
            "mongla-epz",
            "Mongla EPZ",
            ZoneKind::Epz,
            "Mongla, Bagerhat",
            &["Food Processing", "Fisheries", "Jute Products", "Shipbuilding"],
            infra(S::Good, G::Planned, S::Adequate, P::Adjacent),
            &["1-5 acres", "5-10 acres"],
            61.0,
            &["Mongla Cement", "Bay Fishing"],
            &["10-year tax holiday", "Reduced lease rates", "Port fee rebates"],
        ),
        zone(
            "karnaphuli-epz",
            "Karnaphuli EPZ",
            ZoneKind::Epz,
            "Patenga, Chattogram",
            &["Garments", "Textiles", "Plastics", "Accessories"],
            infra(S::Excellent, G::Available, S::Good, P::Nearby),
            &["0.5-3 acres"],
            88.0,
            &["Kenpark Bangladesh", "Youngone Karnaphuli"],
            &["10-year tax holiday", "Duty-free import of capital machinery"],
        ),
        zone(
            "ishwardi-epz",
            "Ishwardi EPZ",
            ZoneKind::Epz,
            "Ishwardi, Pabna",
            &["Agro Processing", "Textiles", "Light Engineering"],
            infra(S::Good, G::Available, S::Good, P::Distant),
            &["1-3 acres", "3-8 acres"],
            54.0,
            &["Uttara Jute Fibers"],
            &["10-year tax holiday", "Subsidized utilities for first 3 years"],
        ),
        zone(
            "mirsarai-sez",
            "Bangabandhu Shilpa Nagar",
            ZoneKind::Sez,
            "Mirsarai, Chattogram",
            &[
                "Heavy Industry",
                "Steel",
                "Automobile",
                "Chemicals",
                "Textiles",
                "Pharmaceuticals",
            ],
            infra(S::Good, G::Available, S::Excellent, P::Adjacent),
            &["5-20 acres", "20-100 acres", "100+ acres"],
            34.0,
            &["Bashundhara Group", "Asian Paints", "Nippon Steel"],
            &[
                "10-year tax holiday",
                "Exemption from stamp duty on land",
                "Dedicated port jetty",
            ],
        ),
        zone(
            "bangladesh-japan-sez",
            "Bangladesh Special Economic Zone (Araihazar)",
            ZoneKind::Sez,
            "Araihazar, Narayanganj",
            &["Automobile", "Electronics", "Light Engineering", "Consumer Goods"],
            infra(S::Excellent, G::Available, S::Excellent, P::Nearby),
            &["2-10 acres", "10-50 acres"],
            47.0,
            &["Singer Bangladesh", "Honda Motor"],
            &[
                "10-year tax holiday",
                "One-stop service desk",
                "Japanese-standard infrastructure",
            ],
        ),
        zone(
            "sreehatta-sez",
            "Sreehatta Economic Zone",
            ZoneKind::Sez,
            "Moulvibazar, Sylhet",
            &["Agro Processing", "Tea", "Food Processing", "Cosmetics"],
            infra(S::Adequate, G::Available, S::Good, P::Distant),
            &["2-10 acres"],
            22.0,
            &[],
            &["10-year tax holiday", "Land lease at concessional rate"],
        ),
        zone(
            "kaliakair-htp",
            "Bangabandhu Hi-Tech City",
            ZoneKind::HiTech,
            "Kaliakair, Gazipur",
            &["IT", "Software", "Electronics", "Data Centers", "BPO"],
            infra(S::Excellent, G::None, S::Good, P::Distant),
            &["0.5-2 acres", "2-5 acres"],
            58.0,
            &["Walton Hi-Tech", "Fair Electronics"],
            &[
                "10-year tax holiday",
                "Duty-free import of IT equipment",
                "Dedicated fiber backbone",
            ],
        ),
        zone(
            "anwara-sez",
            "Anwara Chinese Economic Zone",
            ZoneKind::Sez,
            "Anwara, Chattogram",
            &["Chemicals", "Pharmaceuticals", "Electronics", "Steel"],
            infra(S::Good, G::Available, S::Good, P::Nearby),
            &["5-25 acres", "25+ acres"],
            18.0,
            &[],
            &[
                "10-year tax holiday",
                "Government-to-government facilitation",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_ids_unique() {
        let catalog = default_catalog();
        let ids: HashSet<_> = catalog.iter().map(|z| z.id.as_str()).collect();
        let names: HashSet<_> = catalog.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(names.len(), catalog.len());
        assert!(catalog.len() >= 8);
    }

    #[test]
    fn test_default_catalog_occupancy_in_range() {
        for zone in default_catalog() {
            assert!(
                (0.0..=100.0).contains(&zone.occupancy_rate),
                "{} occupancy {}",
                zone.id,
                zone.occupancy_rate
            );
        }
    }

    #[test]
    fn test_default_catalog_plot_sizes_parse() {
        for zone in default_catalog() {
            for band in &zone.plot_sizes {
                assert!(
                    PlotSizeRange::parse(band).is_some(),
                    "{}: unparseable band {band:?}",
                    zone.id
                );
            }
        }
    }

    #[test]
    fn test_find_zone() {
        let catalog = default_catalog();
        assert!(find_zone(&catalog, "mongla-epz").is_some());
        assert!(find_zone(&catalog, "atlantis").is_none());
    }

    #[test]
    fn test_all_sectors_dedupes_case_insensitively() {
        let catalog = default_catalog();
        let sectors = all_sectors(&catalog);
        let textiles = sectors
            .iter()
            .filter(|s| s.eq_ignore_ascii_case("textiles"))
            .count();
        assert_eq!(textiles, 1);
    }

    #[test]
    fn test_parse_range() {
        let r = PlotSizeRange::parse("1-5 acres").unwrap();
        assert_eq!(r.min, 1.0);
        assert_eq!(r.max, Some(5.0));
    }

    #[test]
    fn test_parse_open_ended() {
        let r = PlotSizeRange::parse("20+ acres").unwrap();
        assert_eq!(r.min, 20.0);
        assert_eq!(r.max, None);
    }

    #[test]
    fn test_parse_exact_and_singular() {
        let r = PlotSizeRange::parse("2 acre").unwrap();
        assert_eq!(r.min, 2.0);
        assert_eq!(r.max, Some(2.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(PlotSizeRange::parse("large").is_none());
        assert!(PlotSizeRange::parse("acres").is_none());
        assert!(PlotSizeRange::parse("5-1 acres").is_none());
        assert!(PlotSizeRange::parse("").is_none());
    }

    #[test]
    fn test_range_tolerance() {
        let r = PlotSizeRange::parse("5-10 acres").unwrap();
        assert!(r.contains_with_tolerance(7.0, 0.0));
        assert!(!r.contains_with_tolerance(11.0, 0.0));
        assert!(r.contains_with_tolerance(11.0, 0.2)); // widened to 12
        assert!(r.contains_with_tolerance(4.5, 0.2)); // widened to 4
        assert!(!r.contains_with_tolerance(3.9, 0.2));
    }

    #[test]
    fn test_open_range_tolerance() {
        let r = PlotSizeRange::parse("100+ acres").unwrap();
        assert!(r.contains_with_tolerance(500.0, 0.2));
        assert!(r.contains_with_tolerance(85.0, 0.2));
        assert!(!r.contains_with_tolerance(79.0, 0.2));
    }

    #[test]
    fn test_zone_kind_parse() {
        assert_eq!(ZoneKind::parse("EPZ"), Some(ZoneKind::Epz));
        assert_eq!(ZoneKind::parse("sez"), Some(ZoneKind::Sez));
        assert_eq!(ZoneKind::parse("hi-tech"), Some(ZoneKind::HiTech));
        assert_eq!(ZoneKind::parse("free port"), None);
    }

    #[test]
    fn test_load_catalog_roundtrips_default() {
        let json = serde_json::to_string(&default_catalog()).unwrap();
        let loaded = load_catalog(&json).unwrap();
        assert_eq!(loaded, default_catalog());
    }

    #[test]
    fn test_load_catalog_empty_is_ok() {
        assert!(load_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_catalog_rejects_duplicates() {
        let mut catalog = default_catalog();
        catalog[1].id = catalog[0].id.clone();
        let json = serde_json::to_string(&catalog).unwrap();
        let err = load_catalog(&json).unwrap_err();
        assert_eq!(err.code(), "OSS-2001");
    }

    #[test]
    fn test_load_catalog_rejects_bad_occupancy() {
        let mut catalog = default_catalog();
        catalog[0].occupancy_rate = 140.0;
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(load_catalog(&json).is_err());
    }

    #[test]
    fn test_infrastructure_serde_lowercase() {
        let json = serde_json::to_string(&default_catalog()[0].infrastructure).unwrap();
        assert!(json.contains("\"excellent\""));
        assert!(json.contains("\"adjacent\""));
        assert!(json.contains("\"available\""));
    }
}
