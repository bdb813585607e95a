use crate::inspect::Report;
use crate::project::ProjectLayout;
use crate::scanner::SourceScanner;
use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// `app.get('/path'` or `router.post("/path"` and the other verbs.
const ROUTE_PATTERN: &str =
    r#"(app|router)\.(get|post|put|patch|delete)\s*\(\s*['"]([^'"]+)['"]"#;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Route {
    pub method: String,
    pub path: String,
    pub file: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoutesReport {
    pub routes: Vec<Route>,
}

pub fn list_routes(layout: &ProjectLayout) -> Result<RoutesReport> {
    let pattern = Regex::new(ROUTE_PATTERN)?;
    let mut routes = Vec::new();

    for file in SourceScanner::new(layout).source_files() {
        for captures in pattern.captures_iter(&file.content) {
            routes.push(Route {
                method: captures[2].to_uppercase(),
                path: captures[3].to_string(),
                file: file.display_project_path(),
            });
        }
    }

    // Stable, so routes sharing a path keep their scan order
    routes.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(RoutesReport { routes })
}

impl fmt::Display for RoutesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.routes.is_empty() {
            return writeln!(f, "No route definitions found.");
        }

        for route in &self.routes {
            writeln!(f, "  {:<7} {:<30}  ({})", route.method, route.path, route.file)?;
        }
        Ok(())
    }
}

impl Report for RoutesReport {}
