//! agify.io: `GET /?name={name}`.

use serde::Deserialize;
use url::Url;

use crate::error::{Result, ToolError};
use crate::tools::age::AgePrediction;

#[derive(Debug, Deserialize)]
pub(super) struct AgifyResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    count: Option<u64>,
}

pub(super) fn url(base: &str, name: &str) -> Result<Url> {
    Ok(Url::parse_with_params(base, [("name", name)])?)
}

impl AgifyResponse {
    /// A null or zero age means the service knows nothing about the name.
    pub(super) fn into_prediction(self, queried: &str) -> Result<AgePrediction> {
        let age = self
            .age
            .filter(|&age| age > 0)
            .ok_or(ToolError::Missing("age"))?;
        let count = self.count.ok_or(ToolError::Missing("count"))?;

        Ok(AgePrediction {
            name: self.name.unwrap_or_else(|| queried.to_string()),
            age,
            count,
        })
    }
}
