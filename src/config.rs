use std::path::Path;

use anyhow::{bail, Context};
use confique::Config as DeriveConfig;

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "diadoc.toml";

#[derive(Debug, DeriveConfig)]
pub struct Config {
    /// Number of spaces per nesting level used by `diadoc fmt`. `0` writes compact documents
    /// on a single line.
    #[config(env = "DIADOC_INDENT_FACTOR", default = 2)]
    pub indent_factor: usize,

    /// Deepest nesting of objects and arrays accepted when reading a document. Deeper
    /// documents are rejected instead of risking a stack overflow.
    #[config(env = "DIADOC_MAX_DEPTH", default = 512)]
    pub max_depth: usize,
}

impl Config {
    /// Layer environment variables over `explicit` (which must exist if given), then
    /// `diadoc.toml` in the working directory, then defaults.
    pub fn load_layered(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().env();
        if let Some(path) = explicit {
            if !path.is_file() {
                bail!("config file `{}` does not exist", path.display());
            }
            builder = builder.file(path);
        }
        builder
            .file(DEFAULT_CONFIG_FILE)
            .load()
            .context("failed to load configuration")
    }

    pub fn limits(&self) -> jsondoc::Limits {
        jsondoc::Limits {
            max_depth: self.max_depth,
        }
    }
}
