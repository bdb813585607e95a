use crate::inspect::Report;
use crate::project::ProjectLayout;
use crate::scanner::{split_lines, SourceScanner};
use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeDefinition {
    pub file: String,
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeReport {
    pub name: String,
    pub src_dir: String,
    pub definitions: Vec<TypeDefinition>,
}

fn definition_pattern(name: &str) -> Result<Regex> {
    let pattern = format!(
        r"(export\s+)?(type|interface|class|enum)\s+{}\b",
        regex::escape(name)
    );
    Ok(Regex::new(&pattern)?)
}

/// Finds every `type`, `interface`, `class` or `enum` declaration of `name`.
pub fn find_type(layout: &ProjectLayout, name: &str) -> Result<TypeReport> {
    let pattern = definition_pattern(name)?;
    let mut definitions = Vec::new();

    for file in SourceScanner::new(layout).source_files() {
        for (line_num, line) in split_lines(&file.content).into_iter().enumerate() {
            if pattern.is_match(line) {
                definitions.push(TypeDefinition {
                    file: file.display_project_path(),
                    line: line_num + 1,
                    text: line.trim().to_string(),
                });
            }
        }
    }

    Ok(TypeReport {
        name: name.to_string(),
        src_dir: layout.display_path(layout.src_dir()),
        definitions,
    })
}

impl fmt::Display for TypeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.definitions.is_empty() {
            return writeln!(f, "Type '{}' not found in {}/", self.name, self.src_dir);
        }

        for definition in &self.definitions {
            writeln!(f, "{}:{}  {}", definition.file, definition.line, definition.text)?;
        }
        Ok(())
    }
}

impl Report for TypeReport {}
