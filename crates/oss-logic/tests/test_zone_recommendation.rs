//! Integration tests for the full recommendation pipeline.
//!
//! Exercises: AdvisorConfig → catalog → SeededLiveData → Recommender
//! → ranked zones, plus the draft round trip through a file store.
//!
//! All tests are pure logic: no UI, no browser storage.

use oss_logic::config::AdvisorConfig;
use oss_logic::drafts::{list_drafts, load_draft, save_draft};
use oss_logic::fixtures::SeededLiveData;
use oss_logic::live_data::{Plot, PlotStatus, StaticLiveData, UtilityUptime};
use oss_logic::requirement::{validate_requirement, InvestorRequirement, NeedLevel};
use oss_logic::scoring::{recommend, Recommender};
use oss_logic::store::JsonFileStore;
use oss_logic::zones::{
    default_catalog, GasAvailability, Infrastructure, PortProximity, SupplyRating, Zone, ZoneKind,
};

// ── Helpers ────────────────────────────────────────────────────────────

fn textile_requirement() -> InvestorRequirement {
    InvestorRequirement {
        sector: "Textiles".into(),
        power_need: NeedLevel::High,
        port_access: true,
        water_requirements: NeedLevel::Medium,
        land_size: "10 acres".into(),
        proximity_to_city: false,
    }
}

fn harbour_zone() -> Zone {
    Zone {
        id: "harbour-epz".into(),
        name: "Harbour EPZ".into(),
        kind: ZoneKind::Epz,
        location: "Chattogram".into(),
        best_for: vec!["Textiles".into()],
        infrastructure: Infrastructure {
            power: SupplyRating::Excellent,
            gas: GasAvailability::Available,
            water: SupplyRating::Good,
            port: PortProximity::Adjacent,
        },
        plot_sizes: vec!["1-5 acres".into(), "5-15 acres".into()],
        occupancy_rate: 50.0,
        established_companies: vec![],
        incentives: vec!["10-year tax holiday".into()],
    }
}

/// 5 of 10 plots available, one of them 10.2 acres.
fn harbour_plots() -> Vec<Plot> {
    (0..10)
        .map(|i| Plot {
            id: format!("HARBOUR-P{i:02}"),
            status: if i < 5 {
                PlotStatus::Available
            } else {
                PlotStatus::Occupied
            },
            size_acres: if i == 0 { 10.2 } else { 2.0 },
        })
        .collect()
}

fn harbour_live_data() -> StaticLiveData {
    StaticLiveData::new()
        .with_uptime("Harbour EPZ", UtilityUptime::new(99.5, 98.0, 96.0))
        .with_plots("harbour-epz", harbour_plots())
}

// ── Worked example ─────────────────────────────────────────────────────

#[test]
fn worked_example_scores_115_5() {
    let zones = vec![harbour_zone()];
    let live = harbour_live_data();
    let ranked = recommend(&textile_requirement(), &zones, &live, &live);

    assert_eq!(ranked.len(), 1);
    let b = ranked[0].breakdown;
    assert_eq!(b.sector, 30.0);
    assert_eq!(b.power, 25.0);
    assert_eq!(b.port, 20.0);
    assert_eq!(b.gas, 15.0);
    assert_eq!(b.plots, 7.5);
    assert_eq!(b.water, 8.0);
    assert_eq!(b.land, 10.0);
    assert_eq!(b.proximity, 0.0);
    assert!((ranked[0].score - 115.5).abs() < 1e-9);
}

#[test]
fn lowercase_sector_scores_the_same() {
    let zones = vec![harbour_zone()];
    let live = harbour_live_data();
    let mut req = textile_requirement();
    req.sector = "textiles".into();
    let ranked = recommend(&req, &zones, &live, &live);
    assert_eq!(ranked[0].breakdown.sector, 30.0);
}

#[test]
fn empty_catalog_returns_empty() {
    let live = harbour_live_data();
    assert!(recommend(&textile_requirement(), &[], &live, &live).is_empty());
}

// ── Default catalog pipeline ───────────────────────────────────────────

#[test]
fn deterministic_output() {
    let catalog = default_catalog();
    let live = SeededLiveData::generate(42, &catalog);
    let a = recommend(&textile_requirement(), &catalog, &live, &live);

    let live_again = SeededLiveData::generate(42, &catalog);
    let b = recommend(&textile_requirement(), &catalog, &live_again, &live_again);

    assert_eq!(a, b);
}

#[test]
fn ranking_is_sorted_with_index_tiebreak() {
    let catalog = default_catalog();
    let live = SeededLiveData::generate(7, &catalog);
    let ranked = recommend(&textile_requirement(), &catalog, &live, &live);

    assert_eq!(ranked.len(), catalog.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].catalog_index < pair[1].catalog_index);
        }
    }
}

#[test]
fn best_textile_zone_is_a_textile_zone() {
    let catalog = default_catalog();
    let live = SeededLiveData::generate(42, &catalog);
    let ranked = recommend(&textile_requirement(), &catalog, &live, &live);

    assert_eq!(ranked[0].breakdown.sector, 30.0, "{}", ranked[0].zone.name);
}

#[test]
fn hitech_city_wins_for_software() {
    let catalog = default_catalog();
    let mut live = StaticLiveData::new();
    for zone in &catalog {
        live = live.with_uptime(&zone.name, UtilityUptime::new(99.5, 99.0, 99.0));
    }
    let req = InvestorRequirement {
        sector: "software".into(),
        power_need: NeedLevel::High,
        port_access: false,
        water_requirements: NeedLevel::Low,
        land_size: String::new(),
        proximity_to_city: false,
    };
    let ranked = recommend(&req, &catalog, &live, &live);
    assert_eq!(ranked[0].zone.id, "kaliakair-htp");
    assert_eq!(ranked[0].score, 75.0);
}

#[test]
fn config_drives_recommender() {
    let config = AdvisorConfig::from_toml_str("seed = 5\ntop_n = 3").unwrap();
    let catalog = config.catalog().unwrap();
    let live = SeededLiveData::generate(config.seed, &catalog);
    let top = Recommender::new(&live, &live)
        .with_tolerance(config.land_tolerance)
        .top(&textile_requirement(), &catalog, config.top_n);
    assert_eq!(top.len(), 3);
}

#[test]
fn catalog_passes_requirement_validation() {
    let issues = validate_requirement(&textile_requirement(), &default_catalog());
    assert!(issues.is_empty(), "{issues:?}");
}

// ── Drafts ─────────────────────────────────────────────────────────────

#[test]
fn drafts_survive_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oss-store.json");
    let bbid = "BBID-2026-ZX42QP";

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        save_draft(&mut store, bbid, &textile_requirement()).unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(list_drafts(&store).unwrap(), vec![bbid]);
    assert_eq!(
        load_draft(&store, bbid).unwrap(),
        Some(textile_requirement())
    );
}
