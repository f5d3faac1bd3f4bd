//! Selected-file listing for multi-file inputs.
//!
//! DESIGN
//! ======
//! Native file inputs replace their whole selection on every change, so the
//! tracker never merges: each change rebuilds the list from scratch. The
//! display block appears on the first change and is afterwards only
//! re-rendered or emptied, never dropped.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::util::format::format_file_size;

/// Upload types the server accepts.
pub const ALLOWED_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "mp4", "mov", "avi"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self { name: name.into(), size_bytes }
    }
}

/// Whether `name` has an allowed upload extension (case-insensitive).
pub fn allowed_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// One rendered row of the file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub name: String,
    pub size_label: String,
    pub allowed: bool,
}

/// Rendered content of the display block; `None` heading means cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileListBlock {
    pub heading: Option<String>,
    pub rows: Vec<FileRow>,
}

impl FileListBlock {
    pub fn is_cleared(&self) -> bool {
        self.heading.is_none() && self.rows.is_empty()
    }
}

/// Per-control selection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<SelectedFile>,
    block: Option<FileListBlock>,
}

impl FileSelection {
    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    /// The display block, absent until the first change event.
    pub fn block(&self) -> Option<&FileListBlock> {
        self.block.as_ref()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }

    pub fn has_disallowed(&self) -> bool {
        self.files.iter().any(|f| !allowed_file(&f.name))
    }

    /// Replace the selection with exactly `files` and re-render the block.
    pub fn replace(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
        self.block = Some(render_block(&self.files));
    }
}

fn render_block(files: &[SelectedFile]) -> FileListBlock {
    if files.is_empty() {
        return FileListBlock::default();
    }
    let heading = match files.len() {
        1 => "1 file selected".to_owned(),
        n => format!("{n} files selected"),
    };
    let rows = files
        .iter()
        .map(|f| FileRow {
            name: f.name.clone(),
            size_label: format_file_size(f.size_bytes),
            allowed: allowed_file(&f.name),
        })
        .collect();
    FileListBlock { heading: Some(heading), rows }
}
