//! Top-level CLI definition.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use oss_logic::bbid::MAX_YEAR;
use oss_logic::requirement::{InvestorRequirement, NeedLevel};
use oss_logic::zones::ZoneKind;

/// OSS zone advisor: match investor requirements to economic zones.
#[derive(Debug, Parser)]
#[command(name = "oss-advisor", version, about)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the zone catalog.
    Zones {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Rank zones for a requirement.
    Recommend {
        #[command(flatten)]
        requirement: RequirementArgs,
        /// Number of zones to show (overrides config).
        #[arg(long)]
        top: Option<NonZeroUsize>,
        /// Seed for mock live data (overrides config).
        #[arg(long)]
        seed: Option<u64>,
        /// Use the saved draft for this BBID instead of flags.
        #[arg(
            long,
            conflicts_with_all = ["sector", "power", "water", "port", "city", "land"]
        )]
        bbid: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Manage saved requirement drafts.
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
    /// Mint a new mock investor BBID.
    NewBbid {
        #[arg(
            long,
            default_value_t = 2026,
            value_parser = clap::value_parser!(u16).range(..=i64::from(MAX_YEAR))
        )]
        year: u16,
        /// Seed for reproducible ids; random when absent.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum DraftAction {
    /// Save a requirement draft.
    Save {
        #[arg(long)]
        bbid: String,
        #[command(flatten)]
        requirement: RequirementArgs,
    },
    /// Print a saved draft.
    Show {
        #[arg(long)]
        bbid: String,
    },
    /// Delete a saved draft.
    Clear {
        #[arg(long)]
        bbid: String,
    },
    /// List BBIDs with saved drafts.
    List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Epz,
    Sez,
    Hitech,
}

impl From<KindArg> for ZoneKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Epz => Self::Epz,
            KindArg::Sez => Self::Sez,
            KindArg::Hitech => Self::HiTech,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Low,
    Medium,
    High,
}

impl From<LevelArg> for NeedLevel {
    fn from(value: LevelArg) -> Self {
        match value {
            LevelArg::Low => Self::Low,
            LevelArg::Medium => Self::Medium,
            LevelArg::High => Self::High,
        }
    }
}

/// Requirement form fields.
#[derive(Debug, Clone, Args)]
pub struct RequirementArgs {
    /// Industry sector, e.g. "Textiles".
    #[arg(long, default_value = "")]
    pub sector: String,
    #[arg(long, value_enum, default_value = "medium")]
    pub power: LevelArg,
    #[arg(long, value_enum, default_value = "medium")]
    pub water: LevelArg,
    /// Needs sea/river port access.
    #[arg(long)]
    pub port: bool,
    /// Wants to be close to a city.
    #[arg(long)]
    pub city: bool,
    /// Land size, e.g. "10 acres" or "2 hectares".
    #[arg(long, default_value = "")]
    pub land: String,
}

impl From<RequirementArgs> for InvestorRequirement {
    fn from(args: RequirementArgs) -> Self {
        Self {
            sector: args.sector,
            power_need: args.power.into(),
            port_access: args.port,
            water_requirements: args.water.into(),
            land_size: args.land,
            proximity_to_city: args.city,
        }
    }
}
