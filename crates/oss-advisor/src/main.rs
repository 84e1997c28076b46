//! OSS zone advisor CLI.
//!
//! Usage:
//!   oss-advisor zones [--kind epz] [--json]
//!   oss-advisor recommend --sector Textiles --power high --port --land "10 acres"
//!   oss-advisor draft save --bbid BBID-2026-K7QZ4M --sector Electronics
//!   oss-advisor recommend --bbid BBID-2026-K7QZ4M
//!
//! Log level comes from `OSS_LOG` (default `info`).

mod cli;
mod logging;

use std::num::NonZeroUsize;

use clap::Parser;
use oss_logic::bbid::generate_bbid;
use oss_logic::config::AdvisorConfig;
use oss_logic::drafts::{clear_draft, list_drafts, load_draft, save_draft};
use oss_logic::fixtures::SeededLiveData;
use oss_logic::requirement::{validate_requirement, InvestorRequirement, RequirementIssue};
use oss_logic::scoring::{Recommender, ScoredZone};
use oss_logic::store::JsonFileStore;
use oss_logic::zones::{Zone, ZoneKind};
use oss_logic::{OssError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{Cli, Command, DraftAction};

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AdvisorConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Zones { kind, json } => {
            let catalog = config.catalog()?;
            let wanted = kind.map(ZoneKind::from);
            let zones: Vec<&Zone> = catalog
                .iter()
                .filter(|z| wanted.is_none_or(|k| z.kind == k))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&zones)?);
            } else {
                print_zones(&zones);
            }
        }
        Command::Recommend {
            requirement,
            top,
            seed,
            bbid,
            json,
        } => {
            let req = match bbid {
                Some(bbid) => {
                    let store = JsonFileStore::open(&config.store_path)?;
                    load_draft(&store, &bbid)?.ok_or_else(|| OssError::Store {
                        key: bbid.clone(),
                        details: "no saved draft for this BBID".into(),
                    })?
                }
                None => InvestorRequirement::from(requirement),
            };
            let catalog = config.catalog()?;
            report_issues(&validate_requirement(&req, &catalog));

            let seed = seed.unwrap_or(config.seed);
            let live = SeededLiveData::generate(seed, &catalog);
            let ranked = Recommender::new(&live, &live)
                .with_tolerance(config.land_tolerance)
                .top(&req, &catalog, top.map_or(config.top_n, NonZeroUsize::get));
            log::info!(
                "recommended {} of {} zones (seed={})",
                ranked.len(),
                catalog.len(),
                seed
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print_ranking(&ranked);
            }
        }
        Command::Draft { action } => {
            let mut store = JsonFileStore::open(&config.store_path)?;
            match action {
                DraftAction::Save { bbid, requirement } => {
                    let req = InvestorRequirement::from(requirement);
                    save_draft(&mut store, &bbid, &req)?;
                    println!("saved draft for {bbid}");
                }
                DraftAction::Show { bbid } => match load_draft(&store, &bbid)? {
                    Some(req) => println!("{}", serde_json::to_string_pretty(&req)?),
                    None => println!("no draft for {bbid}"),
                },
                DraftAction::Clear { bbid } => {
                    if clear_draft(&mut store, &bbid)? {
                        println!("cleared draft for {bbid}");
                    } else {
                        println!("no draft for {bbid}");
                    }
                }
                DraftAction::List => {
                    for bbid in list_drafts(&store)? {
                        println!("{bbid}");
                    }
                }
            }
        }
        Command::NewBbid { year, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            println!("{}", generate_bbid(&mut rng, year));
        }
    }
    Ok(())
}

fn report_issues(issues: &[RequirementIssue]) {
    for issue in issues {
        match issue {
            RequirementIssue::EmptySector => {
                log::warn!("no sector given; sector match will not score");
            }
            RequirementIssue::SectorNotInCatalog(sector) => {
                log::warn!("sector {sector:?} is not a target sector of any zone");
            }
            RequirementIssue::UnparseableLandSize(land) => {
                log::warn!("land size {land:?} is not numeric; matching plot-size text only");
            }
        }
    }
}

fn print_zones(zones: &[&Zone]) {
    for zone in zones {
        println!(
            "{:<22} {:<45} {:<13} {:>5.1}% occupied",
            zone.id,
            zone.name,
            zone.kind.label(),
            zone.occupancy_rate
        );
        println!("    {} — {}", zone.location, zone.best_for.join(", "));
    }
}

fn print_ranking(ranked: &[ScoredZone]) {
    if ranked.is_empty() {
        println!("no zones in catalog");
        return;
    }
    for (rank, scored) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {:<45} {:>6.1}",
            rank + 1,
            scored.zone.name,
            scored.score
        );
        let parts: Vec<String> = scored
            .breakdown
            .criteria()
            .iter()
            .map(|(name, points, max)| format!("{name} {points:.1}/{max}"))
            .collect();
        println!("    {}", parts.join("  "));
    }
}
