//! Static site generation on top of the core parser and renderer.
//!
//! These are the filesystem collaborators around the pure core: template
//! substitution, title extraction, recursive page generation, and static
//! asset copying.

mod assets;
mod generate;
mod template;

pub use assets::copy_recursive;
pub use generate::{extract_title, generate_page, generate_pages_recursive};
pub use template::Template;
