//! Page generation: markdown files in, templated HTML files out.

use super::Template;
use crate::error::{Error, Result};
use crate::{parser, render};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Extract the page title from raw markdown.
///
/// Scans the raw lines for the first level-1 heading (`# ` prefix) and
/// returns its trimmed remainder. This is a textual scan, independent of the
/// parse tree.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}

/// Generate a single HTML page from a markdown file.
///
/// Reads the source as UTF-8, extracts the title, parses and renders the
/// document, applies the template, and writes the result (creating parent
/// directories as needed).
pub fn generate_page(
    from: &Path,
    template: &Template,
    dest: &Path,
    base_path: &str,
) -> Result<()> {
    log::info!("generating {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from)?;
    let title = extract_title(&markdown)?;
    let document = parser::parse_document(&markdown)?;
    let content = render::to_html(&document)?;
    let page = template.apply(&title, &content, base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Recursively generate HTML pages for every `.md` file under `content_dir`.
///
/// Destination paths mirror the content tree under `dest_dir` with the
/// extension changed to `.html`. Documents are independent and the core is
/// pure, so generation runs in parallel per document. A document that fails
/// to convert is logged and skipped rather than aborting the batch. Returns
/// the number of pages generated.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    if !content_dir.exists() {
        return Err(Error::InvalidPath(content_dir.display().to_string()));
    }

    let mut jobs = Vec::new();
    collect_pages(content_dir, dest_dir, &mut jobs)?;

    let generated = jobs
        .par_iter()
        .filter(|(from, dest)| match generate_page(from, template, dest, base_path) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("skipping {}: {}", from.display(), err);
                false
            }
        })
        .count();

    Ok(generated)
}

/// Walk the content tree and pair each markdown file with its destination.
fn collect_pages(
    content_dir: &Path,
    dest_dir: &Path,
    jobs: &mut Vec<(PathBuf, PathBuf)>,
) -> Result<()> {
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let from = entry.path();
        let dest = dest_dir.join(entry.file_name());

        if from.is_dir() {
            collect_pages(&from, &dest, jobs)?;
        } else if from.extension().is_some_and(|ext| ext == "md") {
            jobs.push((from, dest.with_extension("html")));
        }
    }
    Ok(())
}
