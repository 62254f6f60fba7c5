use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for client-side persistence
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// JSON file holding the session token; `None` keeps it in memory
    pub token_path: Option<PathBuf>,
    /// Directory where downloaded files are written
    pub download_dir: PathBuf,
}
