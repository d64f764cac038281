use std::{env, path::Path, path::PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::TranslationTree,
    source::{ResourceFile, ResourceFormat, collect_resource_files},
};

/// Everything a file-processing command needs before it starts.
pub struct CommandContext {
    pub config: Config,
    pub files: Vec<PathBuf>,
    pub default_format: ResourceFormat,
    pub print_file: bool,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir()?;
        let loaded = load_config(&cwd)?;
        if loaded.from_file {
            debug!("loaded configuration file");
        }
        let config = loaded.config;

        let scan = collect_resource_files(&common.paths, &config.ignores);
        if scan.skipped_count > 0 {
            warn!(count = scan.skipped_count, "some paths could not be accessed");
        }

        Ok(Self {
            default_format: common.default_format.unwrap_or(config.default_format),
            files: scan.files,
            print_file: common.print_file,
            config,
        })
    }
}

/// Read a resource file and build its translation tree.
pub fn load_tree(path: &Path, default_format: ResourceFormat) -> Result<(ResourceFile, TranslationTree)> {
    let file = ResourceFile::load(path, default_format)?;
    let tree = file.tree()?;
    Ok((file, tree))
}
