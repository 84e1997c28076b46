//! Pure zone-advisor logic for the OSS investment portal.
//!
//! This crate contains the investor-facing zone recommendation logic,
//! independent of any UI or browser storage. Functions take plain data and
//! return results, so the scorer can be unit-tested and driven from the
//! command-line advisor and the headless harness alike.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`bbid`] | Mock investor-tracking identifiers |
//! | [`config`] | TOML advisor configuration |
//! | [`drafts`] | Saved requirement drafts keyed by BBID |
//! | [`error`] | Crate error type with stable codes |
//! | [`fixtures`] | Seeded mock uptime and plot inventory |
//! | [`live_data`] | Uptime / plot lookups consumed by the scorer |
//! | [`requirement`] | Investor requirement, land-size parsing, validation |
//! | [`scoring`] | Weighted multi-criteria zone suitability scorer |
//! | [`store`] | Key-value storage (in-memory and JSON file) |
//! | [`zones`] | Zone catalog and plot-size bands |

pub mod bbid;
pub mod config;
pub mod drafts;
pub mod error;
pub mod fixtures;
pub mod live_data;
pub mod requirement;
pub mod scoring;
pub mod store;
pub mod zones;

pub use error::{OssError, Result};
