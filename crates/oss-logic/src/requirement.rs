//! Investor requirement: what the enquiry form collects.
//!
//! Requirements are transient: built from form input, scored, discarded.
//! Validation only produces advisory issues; the scorer accepts any
//! requirement, including an empty sector or free-text land size.

use serde::{Deserialize, Serialize};

use crate::zones::{all_sectors, Zone};

/// Low / medium / high demand for a utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl NeedLevel {
    /// Case-insensitive parse of `low`, `medium` or `high`.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// One investor's stated requirements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvestorRequirement {
    /// Industry sector, matched against a zone's `best_for`. May be empty.
    pub sector: String,
    pub power_need: NeedLevel,
    pub port_access: bool,
    pub water_requirements: NeedLevel,
    /// Free text, e.g. `"10 acres"`, `"2.5 hectares"` or `"large"`.
    pub land_size: String,
    pub proximity_to_city: bool,
}

impl InvestorRequirement {
    /// Requested land in acres, if the free-text size can be read.
    pub fn land_acres(&self) -> Option<f64> {
        parse_land_size(&self.land_size)
    }
}

const ACRES_PER_HECTARE: f64 = 2.471;
const ACRES_PER_BIGHA: f64 = 0.33;
const ACRES_PER_DECIMAL: f64 = 0.01;
const SQFT_PER_ACRE: f64 = 43_560.0;

/// Parse a free-text land size into acres.
///
/// Reads a leading number followed by an optional unit (acres when absent).
/// Returns `None` for non-numeric, non-positive, or unknown-unit input.
pub fn parse_land_size(text: &str) -> Option<f64> {
    let text = text.trim();
    let split = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == ','))
        .map_or(text.len(), |(i, _)| i);
    let (number, unit) = text.split_at(split);
    let value: f64 = number.replace(',', "").parse().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let unit = unit.trim().trim_end_matches('.').to_ascii_lowercase();
    let factor = match unit.as_str() {
        "" | "acre" | "acres" | "ac" => 1.0,
        "hectare" | "hectares" | "ha" => ACRES_PER_HECTARE,
        "bigha" | "bighas" => ACRES_PER_BIGHA,
        "decimal" | "decimals" => ACRES_PER_DECIMAL,
        "sqft" | "sq ft" | "sq. ft" | "square feet" => 1.0 / SQFT_PER_ACRE,
        _ => return None,
    };
    Some(value * factor)
}

/// Advisory problems with a requirement. None of these stop scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementIssue {
    /// No sector given; sector match will score zero.
    EmptySector,
    /// Sector does not appear in any zone's `best_for`.
    SectorNotInCatalog(String),
    /// Land size is not numeric; only catalog text matching applies.
    UnparseableLandSize(String),
}

/// Check a requirement against a catalog and report advisory issues.
pub fn validate_requirement(req: &InvestorRequirement, catalog: &[Zone]) -> Vec<RequirementIssue> {
    let mut issues = Vec::new();

    let sector = req.sector.trim();
    if sector.is_empty() {
        issues.push(RequirementIssue::EmptySector);
    } else {
        let needle = sector.to_lowercase();
        let known = all_sectors(catalog)
            .iter()
            .any(|s| s.to_lowercase().contains(&needle));
        if !known {
            issues.push(RequirementIssue::SectorNotInCatalog(sector.to_string()));
        }
    }

    if !req.land_size.trim().is_empty() && req.land_acres().is_none() {
        issues.push(RequirementIssue::UnparseableLandSize(req.land_size.clone()));
    }

    issues
}
