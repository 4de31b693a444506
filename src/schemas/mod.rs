pub mod issue;

pub use issue::{
    ErrorWire, Issue, IssueWire, Label, RepositoryWire, SearchIssuesWire, ViewerWire,
};
