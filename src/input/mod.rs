//! Input resolution.
//!
//! Turns a spreadsheet, delimited file or free text into the ordered list of
//! URLs a report is built from.

mod load;
mod source;
mod table;

pub use load::{load_source, STDIN_PATH};
pub use source::{resolve, InputSource};
pub use table::{Table, UrlColumn};
