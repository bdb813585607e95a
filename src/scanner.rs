use crate::project::ProjectLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File names containing this marker are treated as source files
/// (`*.ts*` covers `.ts`, `.tsx`, `.d.ts`, `.spec.ts`).
const SOURCE_MARKER: &str = ".ts";

#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Relative to the project root, used when reporting locations.
    pub project_relative: PathBuf,
    /// Relative to the source directory, used for module segment matching.
    pub src_relative: PathBuf,
    pub content: String,
}

impl SourceFile {
    /// Path components relative to the source directory.
    pub fn segments(&self) -> impl Iterator<Item = std::borrow::Cow<'_, str>> {
        self.src_relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
    }

    pub fn display_project_path(&self) -> String {
        self.project_relative.to_string_lossy().to_string()
    }

    pub fn display_src_path(&self) -> String {
        self.src_relative.to_string_lossy().to_string()
    }
}

pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(SOURCE_MARKER))
        .unwrap_or(false)
}

/// Reads a file fully, replacing bytes that are not valid UTF-8.
pub fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text into lines on every Unicode line boundary, treating `\r\n`
/// as a single break. A trailing break does not produce an empty last line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

pub struct SourceScanner<'a> {
    layout: &'a ProjectLayout,
}

impl<'a> SourceScanner<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        Self { layout }
    }

    /// Every source file under the source directory, in file-name order.
    ///
    /// Unreadable entries are logged and skipped; a missing source directory
    /// simply yields nothing.
    pub fn source_files(&self) -> impl Iterator<Item = SourceFile> + 'a {
        let layout = self.layout;
        let src_dir = layout.src_dir();

        if !src_dir.is_dir() {
            debug!("Source directory not found: {}", src_dir.display());
        }

        WalkDir::new(src_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping walk entry: {}", e);
                    None
                }
            })
            // Follows symlinked files; symlinked directories are not descended
            .filter(|entry| entry.path().is_file())
            .filter(|entry| is_source_file(entry.path()))
            .filter_map(move |entry| {
                let path = entry.path();
                let content = match read_lossy(path) {
                    Ok(content) => content,
                    Err(e) => {
                        warn!("Failed to read {}: {}", path.display(), e);
                        return None;
                    }
                };

                debug!("Scanning: {}", path.display());

                let src_relative = path
                    .strip_prefix(layout.src_dir())
                    .unwrap_or(path)
                    .to_path_buf();
                let project_relative = path
                    .strip_prefix(layout.root())
                    .unwrap_or(path)
                    .to_path_buf();

                Some(SourceFile {
                    project_relative,
                    src_relative,
                    content,
                })
            })
    }
}
