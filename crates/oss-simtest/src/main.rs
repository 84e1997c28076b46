//! OSS Zone Advisor Headless Harness
//!
//! Validates the zone catalog and the suitability scorer in-process.
//! No UI, no browser storage, no network.
//!
//! Usage:
//!   cargo run -p oss-simtest
//!   cargo run -p oss-simtest -- --verbose
//!   cargo run -p oss-simtest -- --seeds 200

use oss_logic::bbid::{generate_bbid, is_valid_bbid};
use oss_logic::drafts::{clear_draft, load_draft, save_draft};
use oss_logic::fixtures::SeededLiveData;
use oss_logic::live_data::{
    availability, Plot, PlotInventorySource, PlotStatus, StaticLiveData, UtilityUptime,
    UtilityUptimeSource,
};
use oss_logic::requirement::{InvestorRequirement, NeedLevel};
use oss_logic::scoring::{self, recommend, score_zone, LandTolerance};
use oss_logic::store::MemoryStore;
use oss_logic::zones::{self, PlotSizeRange, Zone};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let seeds = args
        .iter()
        .position(|a| a == "--seeds")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(50);

    println!("=== OSS Zone Advisor Harness ===\n");

    let catalog = zones::default_catalog();
    let mut results = Vec::new();

    // 1. Catalog validation
    results.extend(validate_catalog(&catalog, verbose));

    // 2. Seeded fixture sweep
    results.extend(validate_fixtures(&catalog, seeds, verbose));

    // 3. Scorer invariants over many seeds
    results.extend(validate_scoring(&catalog, seeds, verbose));

    // 4. Worked example
    results.extend(validate_worked_example(verbose));

    // 5. Drafts & identifiers
    results.extend(validate_drafts());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(catalog: &[Zone], verbose: bool) -> Vec<TestResult> {
    println!("--- Zone Catalog ---");
    let mut results = Vec::new();

    results.push(TestResult::new(
        "catalog_not_empty",
        catalog.len() >= 8,
        format!("{} zones loaded", catalog.len()),
    ));

    let mut ids: Vec<_> = catalog.iter().map(|z| z.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    results.push(TestResult::new(
        "catalog_unique_ids",
        ids.len() == catalog.len(),
        format!("{} unique ids", ids.len()),
    ));

    let no_sectors: Vec<_> = catalog
        .iter()
        .filter(|z| z.best_for.is_empty())
        .map(|z| z.id.as_str())
        .collect();
    results.push(TestResult::new(
        "catalog_sectors_present",
        no_sectors.is_empty(),
        if no_sectors.is_empty() {
            "every zone lists target sectors".to_string()
        } else {
            format!("zones without sectors: {}", no_sectors.join(", "))
        },
    ));

    let bad_bands: Vec<_> = catalog
        .iter()
        .flat_map(|z| z.plot_sizes.iter().map(move |b| (z.id.as_str(), b.as_str())))
        .filter(|(_, band)| PlotSizeRange::parse(band).is_none())
        .collect();
    results.push(TestResult::new(
        "catalog_plot_bands_parse",
        bad_bands.is_empty(),
        if bad_bands.is_empty() {
            "all plot-size bands parse".to_string()
        } else {
            format!("{} unparseable bands: {:?}", bad_bands.len(), bad_bands)
        },
    ));

    let bad_occupancy = catalog
        .iter()
        .filter(|z| !(0.0..=100.0).contains(&z.occupancy_rate))
        .count();
    results.push(TestResult::new(
        "catalog_occupancy_range",
        bad_occupancy == 0,
        format!("{bad_occupancy} zones outside 0-100%"),
    ));

    let json_ok = serde_json::to_string(catalog)
        .ok()
        .and_then(|raw| zones::load_catalog(&raw).ok())
        .is_some_and(|loaded| loaded == catalog);
    results.push(TestResult::new(
        "catalog_json_reload",
        json_ok,
        "catalog survives JSON export and reload",
    ));

    if verbose {
        println!("  sectors: {}", zones::all_sectors(catalog).join(", "));
    }

    results
}

// ── 2. Fixtures ─────────────────────────────────────────────────────────

fn validate_fixtures(catalog: &[Zone], seeds: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Seeded Live Data ---");
    let mut results = Vec::new();

    let a = SeededLiveData::generate(42, catalog);
    let b = SeededLiveData::generate(42, catalog);
    let reproducible = catalog.iter().all(|z| {
        a.uptime_for_zone(&z.name) == b.uptime_for_zone(&z.name)
            && a.plots_for_zone(&z.id) == b.plots_for_zone(&z.id)
    });
    results.push(TestResult::new(
        "fixtures_reproducible",
        reproducible,
        "seed 42 generates identical data twice",
    ));

    let mut out_of_range = 0;
    let mut empty_inventory = 0;
    for seed in 0..seeds {
        let live = SeededLiveData::generate(seed, catalog);
        for zone in catalog {
            let up = live.uptime_for_zone(&zone.name);
            for value in [up.power.uptime, up.gas.uptime, up.water.uptime] {
                if !(0.0..=100.0).contains(&value) {
                    out_of_range += 1;
                }
            }
            if live.plots_for_zone(&zone.id).is_empty() {
                empty_inventory += 1;
            }
        }
    }
    results.push(TestResult::new(
        "fixtures_uptime_range",
        out_of_range == 0,
        format!("{out_of_range} uptime values outside 0-100% over {seeds} seeds"),
    ));
    results.push(TestResult::new(
        "fixtures_inventory_present",
        empty_inventory == 0,
        format!("{empty_inventory} empty inventories over {seeds} seeds"),
    ));

    if verbose {
        for zone in catalog {
            let (free, total) = availability(&a.plots_for_zone(&zone.id));
            let up = a.uptime_for_zone(&zone.name);
            println!(
                "  {:<45} power {:>5.1}% gas {:>5.1}% water {:>5.1}% plots {}/{}",
                zone.name, up.power.uptime, up.gas.uptime, up.water.uptime, free, total
            );
        }
    }

    results
}

// ── 3. Scoring ──────────────────────────────────────────────────────────

fn sweep_requirements() -> Vec<InvestorRequirement> {
    let sectors = ["", "Textiles", "electronics", "Pharma", "Space Mining"];
    let lands = ["", "10 acres", "2.5 hectares", "large"];
    let levels = [NeedLevel::Low, NeedLevel::Medium, NeedLevel::High];
    let mut out = Vec::new();
    for sector in sectors {
        for land in lands {
            for &level in &levels {
                for flag in [false, true] {
                    out.push(InvestorRequirement {
                        sector: sector.to_string(),
                        power_need: level,
                        port_access: flag,
                        water_requirements: level,
                        land_size: land.to_string(),
                        proximity_to_city: !flag,
                    });
                }
            }
        }
    }
    out
}

fn validate_scoring(catalog: &[Zone], seeds: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Suitability Scorer ---");
    let mut results = Vec::new();
    let requirements = sweep_requirements();

    let mut over_max = Vec::new();
    let mut unsorted = 0;
    let mut nondeterministic = 0;
    let mut evaluations = 0;

    for seed in 0..seeds {
        let live = SeededLiveData::generate(seed, catalog);
        for req in &requirements {
            let ranked = recommend(req, catalog, &live, &live);
            let again = recommend(req, catalog, &live, &live);
            if ranked != again {
                nondeterministic += 1;
            }
            for pair in ranked.windows(2) {
                let ordered = pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score
                        && pair[0].catalog_index < pair[1].catalog_index);
                if !ordered {
                    unsorted += 1;
                }
            }
            for scored in &ranked {
                evaluations += 1;
                for (name, points, max) in scored.breakdown.criteria() {
                    if !(0.0..=max).contains(&points) && over_max.len() < 5 {
                        over_max.push(format!("{} {name}={points}", scored.zone.id));
                    }
                }
            }
        }
    }

    results.push(TestResult::new(
        "scoring_criteria_bounded",
        over_max.is_empty(),
        if over_max.is_empty() {
            format!("{evaluations} zone evaluations within per-criterion max")
        } else {
            format!("violations: {}", over_max.join("; "))
        },
    ));
    results.push(TestResult::new(
        "scoring_sorted",
        unsorted == 0,
        format!("{unsorted} mis-ordered neighbours"),
    ));
    results.push(TestResult::new(
        "scoring_deterministic",
        nondeterministic == 0,
        format!("{nondeterministic} runs differed on repeat"),
    ));

    // Monotonicity in power uptime
    let zone = &catalog[0];
    let plots = vec![Plot {
        id: "M-1".into(),
        status: PlotStatus::Available,
        size_acres: 5.0,
    }];
    let mut monotone = true;
    for req in &requirements {
        let mut last = f64::NEG_INFINITY;
        for step in 0..=100 {
            let uptime = UtilityUptime::new(90.0 + f64::from(step) / 10.0, 97.0, 97.0);
            let total = score_zone(req, zone, &uptime, &plots, LandTolerance::default()).total();
            if total < last {
                monotone = false;
            }
            last = total;
        }
    }
    results.push(TestResult::new(
        "scoring_power_monotone",
        monotone,
        "score never drops as power uptime rises 90% → 100%",
    ));

    let empty_live = StaticLiveData::new();
    results.push(TestResult::new(
        "scoring_empty_catalog",
        recommend(&requirements[0], &[], &empty_live, &empty_live).is_empty(),
        "empty catalog yields empty ranking",
    ));

    let zero_plots = scoring::plot_points(&[]);
    results.push(TestResult::new(
        "scoring_zero_plots",
        zero_plots == 0.0,
        format!("zero-plot zone scores {zero_plots} on availability"),
    ));

    if verbose {
        let live = SeededLiveData::generate(42, catalog);
        let sample = requirements
            .iter()
            .position(|r| r.sector == "Textiles" && r.land_size == "10 acres")
            .unwrap_or(0);
        let req = &requirements[sample];
        println!("  sample ranking (seed 42, sector {:?}):", req.sector);
        for scored in recommend(req, catalog, &live, &live).iter().take(5) {
            println!("    {:>6.1}  {}", scored.score, scored.zone.name);
        }
    }

    results
}

// ── 4. Worked example ───────────────────────────────────────────────────

fn validate_worked_example(verbose: bool) -> Vec<TestResult> {
    println!("--- Worked Example ---");
    let mut zone = zones::default_catalog().remove(0);
    zone.best_for = vec!["Textiles".into()];

    let plots: Vec<Plot> = (0..10)
        .map(|i| Plot {
            id: format!("W-{i}"),
            status: if i % 2 == 0 {
                PlotStatus::Available
            } else {
                PlotStatus::Reserved
            },
            size_acres: if i == 0 { 10.2 } else { 1.0 },
        })
        .collect();
    let live = StaticLiveData::new()
        .with_uptime(&zone.name, UtilityUptime::new(99.5, 98.0, 96.0))
        .with_plots(&zone.id, plots);
    let req = InvestorRequirement {
        sector: "Textiles".into(),
        power_need: NeedLevel::High,
        port_access: true,
        water_requirements: NeedLevel::Medium,
        land_size: "10 acres".into(),
        proximity_to_city: false,
    };

    let ranked = recommend(&req, std::slice::from_ref(&zone), &live, &live);
    let score = ranked.first().map_or(f64::NAN, |s| s.score);
    if verbose {
        if let Some(first) = ranked.first() {
            for (name, points, max) in first.breakdown.criteria() {
                println!("  {name:<10} {points:>5.1} / {max}");
            }
        }
    }

    vec![TestResult::new(
        "worked_example_total",
        (score - 115.5).abs() < 1e-9,
        format!("expected 115.5, got {score}"),
    )]
}

// ── 5. Drafts ───────────────────────────────────────────────────────────

fn validate_drafts() -> Vec<TestResult> {
    println!("--- Drafts & BBIDs ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(2026);
    let ids: Vec<String> = (0..100).map(|_| generate_bbid(&mut rng, 2026)).collect();
    results.push(TestResult::new(
        "bbid_well_formed",
        ids.iter().all(|id| is_valid_bbid(id)),
        format!("{} generated ids validated", ids.len()),
    ));

    let mut store = MemoryStore::new();
    let req = InvestorRequirement {
        sector: "Electronics".into(),
        ..Default::default()
    };
    let round_trip = save_draft(&mut store, &ids[0], &req)
        .and_then(|()| load_draft(&store, &ids[0]))
        .map(|loaded| loaded.as_ref() == Some(&req))
        .unwrap_or(false);
    results.push(TestResult::new(
        "draft_round_trip",
        round_trip,
        "draft saved and reloaded from store",
    ));

    let cleared = clear_draft(&mut store, &ids[0]).unwrap_or(false) && store.is_empty();
    results.push(TestResult::new(
        "draft_clear",
        cleared,
        "draft removed and store empty",
    ));

    results.push(TestResult::new(
        "draft_rejects_bad_bbid",
        save_draft(&mut store, "not-a-bbid", &req).is_err(),
        "malformed BBID refused",
    ));

    results
}
