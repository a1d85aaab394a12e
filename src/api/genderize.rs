//! genderize.io: `GET /?name={name}`.

use serde::Deserialize;
use url::Url;

use crate::error::{Result, ToolError};
use crate::tools::gender::{Gender, GenderPrediction};

/// Unknown names come back with `gender: null` and `count: 0`.
#[derive(Debug, Deserialize)]
pub(super) struct GenderizeResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    probability: Option<f64>,
    #[serde(default)]
    count: Option<u64>,
}

pub(super) fn url(base: &str, name: &str) -> Result<Url> {
    Ok(Url::parse_with_params(base, [("name", name)])?)
}

impl GenderizeResponse {
    pub(super) fn into_prediction(self, queried: &str) -> Result<GenderPrediction> {
        let gender = self
            .gender
            .as_deref()
            .and_then(Gender::from_api)
            .ok_or(ToolError::Missing("gender"))?;
        let probability = self.probability.ok_or(ToolError::Missing("probability"))?;
        let count = self.count.ok_or(ToolError::Missing("count"))?;

        Ok(GenderPrediction {
            name: self.name.unwrap_or_else(|| queried.to_string()),
            gender,
            probability,
            count,
        })
    }
}
