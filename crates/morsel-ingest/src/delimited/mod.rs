//! CSV reading utilities.

mod delimiter;
mod reader;
mod table;

pub use delimiter::{CANDIDATE_DELIMITERS, DEFAULT_DELIMITER, detect_delimiter};
pub use reader::{parse_raw_table, read_raw_table};
pub use table::RawTable;
