//! Line-oriented wiki markup: `=`-delimited headings and `[[title|target]]`
//! links.

pub mod document;
pub mod line;
pub mod link;
pub mod section;

pub use document::{MAX_HEADING_LEVEL, render_document};
pub use line::render_line;
pub use link::{LinkToken, find_next_link};
pub use section::{Section, detect_section};
