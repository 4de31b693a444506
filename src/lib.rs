pub mod formatters;
pub mod github;
pub mod interactive_ratatui;
pub mod logging;
pub mod print;
pub mod schemas;

pub use formatters::{format_issue, format_summary};
pub use github::{ClientConfig, GitHubClient, SearchBackend, SearchError, SearchPage};
pub use interactive_ratatui::domain::filter::Filter;
pub use interactive_ratatui::{InteractiveOptions, InteractiveSearch};
pub use print::{PrintReport, collect_pages};
pub use schemas::Issue;
