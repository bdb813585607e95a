use crate::inspect::{write_list, Report};
use crate::project::ProjectLayout;
use crate::scanner::read_lossy;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info};

const ENV_ACCESS_PATTERN: &str = r"process\.env\.(\w+)";
const ENV_ASSIGNMENT_PATTERN: &str = r"(?m)^(\w+)=";

/// Outcome of comparing `config.ts` against `.env.example`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EnvCheck {
    /// The config file does not exist; this is the only failing outcome.
    MissingConfig { config_file: String },
    /// No `.env.example` to compare against, so only the references are listed.
    Unchecked { referenced: Vec<String> },
    Compared {
        /// Referenced by the config but not declared in the example.
        missing_from_example: Vec<String>,
        /// Declared in the example but never referenced by the config.
        unused_in_example: Vec<String>,
    },
}

impl EnvCheck {
    pub fn in_sync(&self) -> bool {
        matches!(
            self,
            EnvCheck::Compared { missing_from_example, unused_in_example }
                if missing_from_example.is_empty() && unused_in_example.is_empty()
        )
    }
}

fn capture_names(pattern: &Regex, content: &str) -> BTreeSet<String> {
    pattern
        .captures_iter(content)
        .map(|captures| captures[1].to_string())
        .collect()
}

pub fn check_config(layout: &ProjectLayout) -> Result<EnvCheck> {
    let config_file = layout.config_file();
    if !config_file.is_file() {
        return Ok(EnvCheck::MissingConfig {
            config_file: layout.display_path(&config_file),
        });
    }

    let config_content = read_lossy(&config_file)
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    let referenced = capture_names(&Regex::new(ENV_ACCESS_PATTERN)?, &config_content);
    debug!("Config references {} env vars", referenced.len());

    let env_example = layout.env_example();
    if !env_example.is_file() {
        info!("No {} found, listing references only", env_example.display());
        return Ok(EnvCheck::Unchecked {
            referenced: referenced.into_iter().collect(),
        });
    }

    let env_content = read_lossy(&env_example)
        .with_context(|| format!("Failed to read {}", env_example.display()))?;
    let declared = capture_names(&Regex::new(ENV_ASSIGNMENT_PATTERN)?, &env_content);

    Ok(EnvCheck::Compared {
        missing_from_example: referenced.difference(&declared).cloned().collect(),
        unused_in_example: declared.difference(&referenced).cloned().collect(),
    })
}

impl fmt::Display for EnvCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvCheck::MissingConfig { config_file } => {
                writeln!(f, "ERROR: {} not found", config_file)
            }
            EnvCheck::Unchecked { referenced } => {
                writeln!(
                    f,
                    "Config references {} env vars (no .env.example to check against)",
                    referenced.len()
                )?;
                write_list(f, referenced)
            }
            EnvCheck::Compared {
                missing_from_example,
                unused_in_example,
            } => {
                if !missing_from_example.is_empty() {
                    writeln!(f, "Config vars NOT in .env.example:")?;
                    write_list(f, missing_from_example)?;
                }
                if !unused_in_example.is_empty() {
                    writeln!(f, "Env vars NOT referenced in config.ts:")?;
                    write_list(f, unused_in_example)?;
                }
                if self.in_sync() {
                    writeln!(f, "Config and .env.example are in sync.")?;
                }
                Ok(())
            }
        }
    }
}

impl Report for EnvCheck {
    fn exit_code(&self) -> u8 {
        match self {
            EnvCheck::MissingConfig { .. } => 1,
            _ => 0,
        }
    }
}
