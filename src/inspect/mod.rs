pub mod deps;
pub mod env;
pub mod routes;
pub mod types;

pub use deps::{inspect_deps, DepsReport};
pub use env::{check_config, EnvCheck};
pub use routes::{list_routes, Route, RoutesReport};
pub use types::{find_type, TypeDefinition, TypeReport};

use serde::Serialize;
use std::fmt;

/// Result of one inspection command.
///
/// `Display` gives the human-readable report, `Serialize` the `--json` one.
pub trait Report: fmt::Display + Serialize {
    /// Process exit code the command should finish with.
    fn exit_code(&self) -> u8 {
        0
    }
}

/// Writes an indented list of entries, one per line.
pub(crate) fn write_list<I, S>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = S>,
    S: fmt::Display,
{
    for item in items {
        writeln!(f, "  {}", item)?;
    }
    Ok(())
}
