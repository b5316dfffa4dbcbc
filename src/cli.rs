// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{BASE_URL, USER_AGENT};
use crate::config::options::{AppOptions, ExportFormat, ExportOptions, FetchOptions};
use crate::core::sanitize::normalize_ws;
use crate::file;
use crate::filmography::FilmographyFetcher;
use crate::progress::{Progress, Stage};

#[derive(Parser, Debug)]
#[command(name = "filmography", version, about = "Fetch an actor's filmography, newest first")]
pub struct Args {
    /// Actor name; prompted for when omitted
    pub actor: Vec<String>,

    /// Site root for search and profile pages
    #[arg(long, env = "FILMOGRAPHY_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "FILMOGRAPHY_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,

    /// Request timeout in seconds (client default when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Also write the table to PATH (a file, or a directory ending in '/')
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Leave the Title/Year header row out of the export
    #[arg(long)]
    pub no_headers: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        AppOptions {
            fetch: FetchOptions {
                base_url: self.base_url.clone(),
                user_agent: self.user_agent.clone(),
                timeout: self.timeout.map(Duration::from_secs),
            },
            export: ExportOptions {
                format: self.format,
                out: self.out.clone(),
                include_headers: !self.no_headers,
            },
        }
    }

    /// Positional words joined into one name, `None` when there are none.
    pub fn actor_name(&self) -> Option<String> {
        let name = normalize_ws(&self.actor.join(" "));
        (!name.is_empty()).then_some(name)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    let opts = args.options();

    let actor = match args.actor_name() {
        Some(name) => name,
        None => prompt_actor_name().wrap_err("could not read the actor's name")?,
    };

    let fetcher = match FilmographyFetcher::from_options(&opts.fetch) {
        Ok(f) => f,
        Err(e) => {
            loge!("{e}");
            return Ok(());
        }
    };

    let mut progress = StderrProgress;
    let Some(table) = fetcher.get_actor_filmography(&actor, Some(&mut progress)) else {
        return Ok(());
    };

    println!("{table}");

    if opts.export.enabled() {
        let path = file::write_export(&opts.export, &actor, &table)
            .wrap_err("could not write the export file")?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

fn prompt_actor_name() -> io::Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "Enter the actor's name: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(normalize_ws(&line))
}

/// Status lines on stderr so stdout carries only the table.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn stage_done(&mut self, stage: Stage) {
        logd!("stage done: {}", stage.label());
    }
}
