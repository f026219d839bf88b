//! Portfolio content DTOs shared by the server and the page.
//!
//! DESIGN
//! ======
//! Field names follow the CMS GraphQL schema (camelCase on the wire). The
//! server deserializes CMS responses into these types and the page receives
//! them unchanged through the content server function.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Uploaded media reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub url: String,
}

/// One entry of the work history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub company: String,
    pub position: String,
    /// ISO date (`YYYY-MM-DD`).
    pub start_date: String,
    /// ISO date, `None` for the current role.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Markdown.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub logo: Option<Asset>,
}

impl Job {
    /// Human-readable tenure, e.g. `"Jun 2021 – Present"`.
    #[must_use]
    pub fn period(&self) -> String {
        let start = month_year(&self.start_date);
        let end = self
            .end_date
            .as_deref()
            .map_or_else(|| "Present".to_owned(), month_year);
        format!("{start} – {end}")
    }
}

/// A showcased project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Markdown.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image: Option<Asset>,
}

/// A listed skill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<Asset>,
}

/// Everything the page renders from the CMS.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl PortfolioContent {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.projects.is_empty() && self.skills.is_empty()
    }
}

/// Format an ISO date as `"Mon YYYY"`. Unparseable input is returned as-is.
fn month_year(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    let year = parts.next().filter(|y| y.len() == 4 && y.chars().all(|c| c.is_ascii_digit()));
    let month = parts
        .next()
        .and_then(|m| m.parse::<usize>().ok())
        .and_then(|m| m.checked_sub(1))
        .and_then(|i| MONTHS.get(i));
    match (year, month) {
        (Some(year), Some(month)) => format!("{month} {year}"),
        _ => date.to_owned(),
    }
}
