//! In-place array exercises: merging two sorted sequences and removing a value.

pub mod merge_sorted;
pub mod remove_element;
pub mod report;

pub use merge_sorted::merge;
pub use remove_element::{remove_element, retained};
pub use report::{merge_demo, merge_report, remove_demo, remove_report, MergeReport, RemoveReport};
