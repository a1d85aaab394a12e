//! Hipolabs universities list: `GET /search?country={country}`.

use serde::Deserialize;
use url::Url;

use crate::error::{Result, ToolError};
use crate::tools::universities::University;

#[derive(Debug, Deserialize)]
pub(super) struct UniversityRecord {
    name: String,
    #[serde(default)]
    web_pages: Vec<String>,
    #[serde(default)]
    domains: Vec<String>,
    #[serde(default)]
    country: String,
}

pub(super) fn url(base: &str, country: &str) -> Result<Url> {
    Ok(Url::parse_with_params(base, [("country", country)])?)
}

/// An empty list is a miss: there is nothing to show.
pub(super) fn into_universities(records: Vec<UniversityRecord>) -> Result<Vec<University>> {
    if records.is_empty() {
        return Err(ToolError::Missing("universities"));
    }
    Ok(records
        .into_iter()
        .map(|record| University {
            name: record.name,
            web_pages: record.web_pages,
            domains: record.domains,
            country: record.country,
        })
        .collect())
}
