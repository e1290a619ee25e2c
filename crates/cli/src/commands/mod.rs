//! CLI command implementations.

pub mod admin;
pub mod seed;

use std::path::PathBuf;

/// Resolve the snapshot path from the environment.
///
/// Reads `TIFFIN_STORE_PATH` after loading `.env`, falling back to
/// `tiffin-store.json` in the working directory.
pub fn store_path() -> PathBuf {
    dotenvy::dotenv().ok();
    std::env::var("TIFFIN_STORE_PATH")
        .map_or_else(|_| PathBuf::from("tiffin-store.json"), PathBuf::from)
}
