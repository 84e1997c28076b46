//! Saved requirement drafts, keyed by investor BBID.
//!
//! The enquiry form can be saved half-filled and resumed later. Drafts
//! live in a [`KeyValueStore`] under `oss.draft.<BBID>`.

use crate::bbid::is_valid_bbid;
use crate::error::{OssError, Result};
use crate::requirement::InvestorRequirement;
use crate::store::{load_json, save_json, KeyValueStore};

const KEY_PREFIX: &str = "oss.draft.";

fn draft_key(bbid: &str) -> Result<String> {
    if !is_valid_bbid(bbid) {
        return Err(OssError::InvalidBbid {
            bbid: bbid.to_string(),
        });
    }
    Ok(format!("{KEY_PREFIX}{bbid}"))
}

/// Save (or replace) the draft for `bbid`.
pub fn save_draft(
    store: &mut dyn KeyValueStore,
    bbid: &str,
    req: &InvestorRequirement,
) -> Result<()> {
    let key = draft_key(bbid)?;
    save_json(store, &key, req)?;
    log::info!("saved requirement draft for {bbid}");
    Ok(())
}

pub fn load_draft(store: &dyn KeyValueStore, bbid: &str) -> Result<Option<InvestorRequirement>> {
    let key = draft_key(bbid)?;
    load_json(store, &key)
}

/// Delete the draft for `bbid`. Returns whether one existed.
pub fn clear_draft(store: &mut dyn KeyValueStore, bbid: &str) -> Result<bool> {
    let key = draft_key(bbid)?;
    let existed = store.remove(&key)?.is_some();
    if existed {
        log::info!("cleared requirement draft for {bbid}");
    }
    Ok(existed)
}

/// BBIDs that currently have a draft, sorted.
pub fn list_drafts(store: &dyn KeyValueStore) -> Result<Vec<String>> {
    Ok(store
        .keys()?
        .into_iter()
        .filter_map(|k| k.strip_prefix(KEY_PREFIX).map(str::to_string))
        .collect())
}
