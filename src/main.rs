use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use ariadne::Source;
use clap::{Parser as ClapParser, Subcommand};
use jsondoc::Value;
use tracing::*;

use crate::config::Config;

mod config;
mod diagnostics;
mod logging;

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file. `diadoc.toml` in the working directory is also read if it
    /// exists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that diagram documents are well-formed.
    Check {
        /// Paths to diagram documents.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Rewrite a diagram document in canonical form.
    Fmt {
        /// Path to a diagram document.
        input: PathBuf,
        /// Spaces per nesting level; `0` for compact output. Overrides the config file.
        #[arg(long)]
        indent: Option<usize>,
        /// Overwrite the input file instead of printing to stdout.
        #[arg(long)]
        write: bool,
    },
}

/// A document as read from disk.
struct Document {
    path: String,
    src: String,
}

impl Document {
    fn read(path: &Path) -> anyhow::Result<Self> {
        let src = match std::fs::read_to_string(path) {
            Ok(file) => file,
            Err(e) => {
                error!(?path, "failed to read input");
                return Err(e).with_context(|| format!("failed to read file `{}`", path.display()));
            }
        };
        Ok(Document {
            path: path.display().to_string(),
            src,
        })
    }

    /// Parse the document, printing a report to stderr if it is not a valid diagram document.
    fn load(&self, config: &Config) -> anyhow::Result<Option<Value>> {
        let value = match jsondoc::parse_with_limits(&self.src, config.limits()) {
            Ok(value) => value,
            Err(e) => {
                debug!(path = %self.path, position = e.position, "parse failed");
                diagnostics::parse_error(&self.path, &self.src, &e)
                    .eprint((&self.path, Source::from(&self.src)))?;
                return Ok(None);
            }
        };

        if !matches!(value, Value::Object(_)) {
            diagnostics::top_level_not_object(&self.path, &self.src, &value)
                .eprint((&self.path, Source::from(&self.src)))?;
            return Ok(None);
        }

        Ok(Some(value))
    }
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let cli = Args::parse();
    debug!(?cli);

    let config = Config::load_layered(cli.config.as_deref())?;
    debug!(?config);

    match cli.command {
        Command::Check { inputs } => check(&config, &inputs),
        Command::Fmt {
            input,
            indent,
            write,
        } => fmt(&config, &input, indent, write),
    }
}

#[instrument(skip(config))]
fn check(config: &Config, inputs: &[PathBuf]) -> anyhow::Result<()> {
    let mut failed = 0;
    for input in inputs {
        let doc = Document::read(input)?;
        if doc.load(config)?.is_none() {
            failed += 1;
        } else {
            info!(path = %doc.path, "ok");
        }
    }

    if failed > 0 {
        bail!("{failed} of {} documents failed the check", inputs.len());
    }
    Ok(())
}

#[instrument(skip(config))]
fn fmt(config: &Config, input: &Path, indent: Option<usize>, write: bool) -> anyhow::Result<()> {
    let doc = Document::read(input)?;
    let Some(value) = doc.load(config)? else {
        bail!("failed to parse diagram document `{}`", doc.path);
    };

    let indent_factor = indent.unwrap_or(config.indent_factor);
    let mut text = jsondoc::write(&value, indent_factor);
    text.push('\n');

    if write {
        std::fs::write(input, &text)
            .with_context(|| format!("failed to write file `{}`", input.display()))?;
        info!(path = %doc.path, indent_factor, "formatted");
    } else {
        print!("{text}");
    }
    Ok(())
}
