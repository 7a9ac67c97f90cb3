use crate::{
    app::McCostCliError,
    model::{
        cost::{McCostParams, McCostParamsBuilder},
        smoothness::OsmSmoothness,
        McCostError,
    },
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// user overrides for multi-criteria cost parameters. every field is optional;
/// fields left unset keep the value of whatever the builder was seeded with.
///
/// the optional parameters (transit reluctance factors, minimum smoothness and
/// maximum tracktype grade) distinguish a missing key from an explicit `null`:
/// a missing key keeps the seeded value, `null` clears it. TOML has no null,
/// so clearing a seeded value requires a JSON file.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct McCostParamsConfig {
    /// fixed cost added once per boarding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_cost: Option<i32>,
    /// fixed cost added once per transfer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_cost: Option<i32>,
    /// per-trip reluctance factors, indexed by transit reluctance index.
    /// `Some(None)` resets to a uniform reluctance of 1.0.
    #[serde(
        default,
        deserialize_with = "deserialize_clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub transit_reluctance_factors: Option<Option<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_reluctance_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_reluctance_factor: Option<f64>,
    /// reluctance factor by OSM surface tag. replaces the seeded mapping as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_reluctance_factors: Option<BTreeMap<String, f64>>,
    /// OSM smoothness tag, matched case-insensitively. `Some(None)` disables
    /// smoothness filtering.
    #[serde(
        default,
        deserialize_with = "deserialize_clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_smoothness: Option<Option<OsmSmoothness>>,
    /// `Some(None)` disables tracktype filtering.
    #[serde(
        default,
        deserialize_with = "deserialize_clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_tracktype_grade: Option<Option<i32>>,
}

/// a present key decodes to `Some`, with an explicit null decoding to `Some(None)`.
/// missing keys never reach this function and fall back to the serde default `None`.
fn deserialize_clearable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl McCostParamsConfig {
    /// writes every override present in this configuration onto the builder.
    pub fn apply<'a>(&self, builder: &'a mut McCostParamsBuilder) -> &'a mut McCostParamsBuilder {
        if let Some(board_cost) = self.board_cost {
            builder.set_board_cost(board_cost);
        }
        if let Some(transfer_cost) = self.transfer_cost {
            builder.set_transfer_cost(transfer_cost);
        }
        if let Some(factors) = &self.transit_reluctance_factors {
            builder.set_transit_reluctance_factors(factors.clone());
        }
        if let Some(walk) = self.walk_reluctance_factor {
            builder.set_walk_reluctance_factor(walk);
        }
        if let Some(wait) = self.wait_reluctance_factor {
            builder.set_wait_reluctance_factor(wait);
        }
        if let Some(surfaces) = &self.surface_reluctance_factors {
            builder.set_surface_reluctance_factors(surfaces.clone());
        }
        if let Some(min_smoothness) = self.min_smoothness {
            builder.set_min_smoothness(min_smoothness);
        }
        if let Some(grade) = self.max_tracktype_grade {
            builder.set_max_tracktype_grade(grade);
        }
        builder
    }

    /// applies these overrides on top of `seed` and builds the result.
    pub fn build(&self, seed: &McCostParams) -> Result<McCostParams, McCostError> {
        let mut builder = McCostParamsBuilder::new(seed);
        self.apply(&mut builder).build()
    }

    /// combines two configurations. fields set in `other` take precedence.
    pub fn merge(self, other: McCostParamsConfig) -> McCostParamsConfig {
        McCostParamsConfig {
            board_cost: other.board_cost.or(self.board_cost),
            transfer_cost: other.transfer_cost.or(self.transfer_cost),
            transit_reluctance_factors: other
                .transit_reluctance_factors
                .or(self.transit_reluctance_factors),
            walk_reluctance_factor: other.walk_reluctance_factor.or(self.walk_reluctance_factor),
            wait_reluctance_factor: other.wait_reluctance_factor.or(self.wait_reluctance_factor),
            surface_reluctance_factors: other
                .surface_reluctance_factors
                .or(self.surface_reluctance_factors),
            min_smoothness: other.min_smoothness.or(self.min_smoothness),
            max_tracktype_grade: other.max_tracktype_grade.or(self.max_tracktype_grade),
        }
    }

    /// reads overrides from environment variables with the given prefix, for
    /// example `MCCOST_BOARD_COST=900` or `MCCOST_TRANSIT_RELUCTANCE_FACTORS=1.0,0.9`.
    pub fn from_environment(prefix: &str) -> Result<McCostParamsConfig, McCostCliError> {
        McCostParamsConfig::from_source(environment_source(prefix))
    }

    fn from_source<S>(source: S) -> Result<McCostParamsConfig, McCostCliError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let conf = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize::<McCostParamsConfig>()?;
        Ok(conf)
    }
}

fn environment_source(prefix: &str) -> config::Environment {
    config::Environment::with_prefix(prefix)
        .prefix_separator("_")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("transit_reluctance_factors")
}

impl From<&McCostParams> for McCostParamsConfig {
    /// a configuration that reproduces `params` regardless of the seed it is
    /// applied to. unset optional parameters become explicit clears.
    fn from(params: &McCostParams) -> Self {
        McCostParamsConfig {
            board_cost: Some(params.board_cost()),
            transfer_cost: Some(params.transfer_cost()),
            transit_reluctance_factors: Some(
                params.transit_reluctance_factors().map(|f| f.collect()),
            ),
            walk_reluctance_factor: Some(params.walk_reluctance_factor()),
            wait_reluctance_factor: Some(params.wait_reluctance_factor()),
            surface_reluctance_factors: Some(params.surface_reluctance_factors().to_map()),
            min_smoothness: Some(params.min_smoothness()),
            max_tracktype_grade: Some(params.max_tracktype_grade()),
        }
    }
}

impl TryFrom<&String> for McCostParamsConfig {
    type Error = McCostCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                McCostCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                McCostCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                McCostCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                McCostCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(McCostCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
