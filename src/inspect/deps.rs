use crate::inspect::{write_list, Report};
use crate::project::ProjectLayout;
use crate::scanner::{SourceFile, SourceScanner};
use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Matches any `from '...'` import specifier.
const IMPORT_PATTERN: &str = r#"from\s+['"]([^'"]+)['"]"#;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepsReport {
    pub module: String,
    /// Import specifiers found in the module's own files.
    pub depends_on: Vec<String>,
    /// Files (relative to the source directory) that import the module.
    pub imported_by: Vec<String>,
}

struct ModuleMatcher {
    module: String,
    imports_module: Regex,
    import_source: Regex,
}

impl ModuleMatcher {
    fn new(module: &str) -> Result<Self> {
        Ok(Self {
            module: module.to_string(),
            imports_module: Regex::new(&format!(
                r#"from\s+['"].*\b{}\b"#,
                regex::escape(module)
            ))?,
            import_source: Regex::new(IMPORT_PATTERN)?,
        })
    }

    /// The file lives at or under a path segment named exactly after the module.
    fn is_inside_module(&self, file: &SourceFile) -> bool {
        file.segments().any(|segment| segment == self.module.as_str())
    }

    /// The file belongs to the module: a segment equal to it, or `module.<ext>`.
    fn belongs_to_module(&self, file: &SourceFile) -> bool {
        let prefix = format!("{}.", self.module);
        file.segments()
            .any(|segment| segment == self.module.as_str() || segment.starts_with(&prefix))
    }
}

pub fn inspect_deps(layout: &ProjectLayout, module: &str) -> Result<DepsReport> {
    let matcher = ModuleMatcher::new(module)?;
    let mut depends_on = BTreeSet::new();
    let mut imported_by = BTreeSet::new();

    for file in SourceScanner::new(layout).source_files() {
        if matcher.imports_module.is_match(&file.content) && !matcher.is_inside_module(&file) {
            debug!("{} imports {}", file.display_src_path(), module);
            imported_by.insert(file.display_src_path());
        }

        if matcher.belongs_to_module(&file) {
            for captures in matcher.import_source.captures_iter(&file.content) {
                depends_on.insert(captures[1].to_string());
            }
        }
    }

    Ok(DepsReport {
        module: module.to_string(),
        depends_on: depends_on.into_iter().collect(),
        imported_by: imported_by.into_iter().collect(),
    })
}

impl fmt::Display for DepsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{} depends on:", self.module)?;
        write_list(f, &self.depends_on)?;

        writeln!(f)?;
        writeln!(f, "Imported by:")?;
        write_list(f, &self.imported_by)
    }
}

impl Report for DepsReport {}
