//! CSV input and output
//!
//! The output is the input table, row for row, with the resolution columns
//! added.

pub mod reader;
pub mod writer;

pub use reader::{required_columns, AbnormalityTable};
pub use writer::{result_columns, write_table, write_table_to};
