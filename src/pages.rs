use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{PipelineError, Result};

/// Anything that can hand back the raw text of a page by zero-based index.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, index: usize) -> Result<String>;
}

fn check_index(index: usize, count: usize) -> Result<()> {
    if index >= count {
        return Err(PipelineError::PageOutOfRange { index, count });
    }
    Ok(())
}

// ── PDF-backed source ────────────────────────────────────────────────────

pub struct PdfPages {
    doc: lopdf::Document,
    count: usize,
}

impl PdfPages {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PipelineError::ResourceNotFound(path.to_path_buf()));
        }
        let doc = lopdf::Document::load(path)?;
        let count = doc.get_pages().len();
        Ok(Self { doc, count })
    }
}

impl PageSource for PdfPages {
    fn page_count(&self) -> usize {
        self.count
    }

    fn page_text(&self, index: usize) -> Result<String> {
        check_index(index, self.count)?;
        // lopdf numbers pages from 1
        let page_number = u32::try_from(index + 1).map_err(|_| PipelineError::PageText {
            index,
            reason: "page number does not fit in u32".to_string(),
        })?;
        self.doc
            .extract_text(&[page_number])
            .map_err(|e| PipelineError::PageText {
                index,
                reason: e.to_string(),
            })
    }
}

// ── Directory of pre-extracted pages ─────────────────────────────────────

/// A directory holding one `.txt` file per page. Files are ordered by name,
/// so zero-padded names (`page_0014.txt`) sort the way the pages do.
pub struct PageDir {
    files: Vec<PathBuf>,
}

impl PageDir {
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(PipelineError::ResourceNotFound(dir.to_path_buf()));
        }
        let mut files = Vec::new();
        // a skipped entry would shift every later page index
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                PipelineError::io(path, e.into())
            })?;
            let path = entry.into_path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
                files.push(path);
            }
        }
        Ok(Self { files })
    }
}

impl PageSource for PageDir {
    fn page_count(&self) -> usize {
        self.files.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        check_index(index, self.files.len())?;
        let path = &self.files[index];
        fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))
    }
}

/// Open a directory as a [`PageDir`], anything else as a PDF.
pub fn open_source(path: &Path) -> Result<Box<dyn PageSource>> {
    if path.is_dir() {
        Ok(Box::new(PageDir::open(path)?))
    } else {
        Ok(Box::new(PdfPages::open(path)?))
    }
}

// ── Reconstruction ───────────────────────────────────────────────────────

/// Physical pages `[start, end)` plus the number printed on page `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
    pub first_reported: u32,
}

impl Default for PageRange {
    /// The report's first three sections: physical pages 14..=326, the
    /// first of which is printed as page 3.
    fn default() -> Self {
        Self {
            start: 14,
            end: 327,
            first_reported: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub text: String,
    /// The reported number the page after the range would carry.
    pub next_reported: u32,
    pub pages: usize,
}

/// How many leading characters the printed page number occupies.
pub fn page_number_width(reported: u32) -> usize {
    if reported <= 9 {
        1
    } else if reported <= 99 {
        2
    } else {
        3
    }
}

/// Trimmed from page edges: Unicode whitespace plus the separators
/// U+001C..=U+001F.
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim the raw page, drop the page-number prefix, and join its lines.
///
/// The prefix is cut by width alone. A page whose text does not start with
/// its number (a blank page or a header) loses real characters instead.
pub fn strip_page_body(raw: &str, reported: u32) -> String {
    let trimmed = raw.trim_matches(is_strip_char);
    let width = page_number_width(reported);
    let body = match trimmed.char_indices().nth(width) {
        Some((offset, _)) => &trimmed[offset..],
        None => "",
    };
    body.replace('\n', "")
}

/// Concatenate the stripped bodies of every page in `range`, in order.
pub fn reconstruct(source: &dyn PageSource, range: PageRange) -> Result<Reconstruction> {
    let (text, next_reported) = (range.start..range.end).try_fold(
        (String::new(), range.first_reported),
        |(mut text, reported), index| {
            let raw = source.page_text(index)?;
            let body = strip_page_body(&raw, reported);
            debug!(index, reported, chars = body.chars().count(), "page");
            text.push_str(&body);
            Ok::<_, PipelineError>((text, reported + 1))
        },
    )?;

    Ok(Reconstruction {
        text,
        next_reported,
        pages: range.end.saturating_sub(range.start),
    })
}
