use crate::inspect::{self, Report};
use crate::project::{ProjectLayout, DEFAULT_SRC_DIR};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(author, version, about = "Project inspection and validation tools", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, default_value = ".", help = "Project root directory")]
    pub root: PathBuf,

    #[arg(long, global = true, default_value = DEFAULT_SRC_DIR, help = "Source directory, relative to the project root")]
    pub src_dir: PathBuf,

    #[arg(long, global = true, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(short, long, global = true, help = "Show verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show module dependencies")]
    Deps {
        #[arg(long, help = "Module name to inspect")]
        module: String,
    },

    #[command(about = "Validate config vs .env.example")]
    CheckConfig,

    #[command(about = "Find type/interface/class definition")]
    FindType {
        #[arg(help = "Type name to search for")]
        name: String,
    },

    #[command(about = "List all API route definitions")]
    ApiRoutes,
}

impl Cli {
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::with_src_dir(&self.root, &self.src_dir)
    }
}

fn emit<R: Report>(report: &R, json: bool, out: &mut impl Write) -> Result<ExitCode> {
    if json {
        let rendered = serde_json::to_string_pretty(report)?;
        writeln!(out, "{}", rendered)?;
    } else {
        write!(out, "{}", report)?;
    }
    out.flush().context("Failed to write report")?;
    Ok(ExitCode::from(report.exit_code()))
}

/// Runs one command and writes its report to `out`.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
    let Some(command) = &cli.command else {
        let help = Cli::command().render_help();
        write!(out, "{}", help)?;
        return Ok(ExitCode::SUCCESS);
    };

    let layout = cli.layout();
    debug!(
        "Project root: {}, source dir: {}",
        layout.root().display(),
        layout.src_dir().display()
    );

    match command {
        Commands::Deps { module } => {
            info!("Inspecting dependencies of {}", module);
            emit(&inspect::inspect_deps(&layout, module)?, cli.json, out)
        }
        Commands::CheckConfig => emit(&inspect::check_config(&layout)?, cli.json, out),
        Commands::FindType { name } => {
            info!("Looking for type {}", name);
            emit(&inspect::find_type(&layout, name)?, cli.json, out)
        }
        Commands::ApiRoutes => emit(&inspect::list_routes(&layout)?, cli.json, out),
    }
}

pub fn run_cli(cli: Cli) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}
