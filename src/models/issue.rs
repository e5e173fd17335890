use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub body: Option<String>,
    pub assignee: Option<IssueAssignee>,
    pub milestone: Option<Milestone>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueAssignee {
    pub login: String,
}

/// PATCH body for issue assignment. An empty assignee clears the field.
#[derive(Debug, Serialize)]
pub struct IssueAssignment<'a> {
    pub assignee: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub description: Option<String>,
    pub open_issues: u32,
    pub closed_issues: u32,
    pub due_on: Option<DateTime<Utc>>,
}
