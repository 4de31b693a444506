pub mod issue_formatter;
pub mod relative_time;

pub use issue_formatter::{comments_label, format_issue, format_summary};
pub use relative_time::{UNKNOWN_TIME, format_relative};
