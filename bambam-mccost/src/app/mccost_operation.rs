use super::{McCostCliError, OutputFormat};
use crate::{
    config::McCostParamsConfig,
    model::{cost::McCostParams, smoothness::OsmSmoothness},
};
use clap::{value_parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum McCostOperation {
    /// build cost parameters from the defaults plus any overrides and print them
    Params {
        #[arg(long, help = "path to .toml or .json file with cost parameter overrides")]
        configuration_file: Option<String>,
        #[arg(
            long,
            help = "prefix of environment variables with cost parameter overrides, such as MCCOST"
        )]
        env_prefix: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// parse an OSM smoothness tag and report its rank
    Smoothness {
        /// raw smoothness tag value
        tag: String,
        #[arg(
            long,
            value_parser = value_parser!(OsmSmoothness),
            help = "minimum smoothness an edge must have to be admissible"
        )]
        min_smoothness: Option<OsmSmoothness>,
    },
}

impl McCostOperation {
    pub fn run(&self) -> Result<String, McCostCliError> {
        match self {
            McCostOperation::Params {
                configuration_file,
                env_prefix,
                format,
            } => {
                let file_conf = match configuration_file {
                    None => McCostParamsConfig::default(),
                    Some(f) => {
                        log::info!("reading cost parameter overrides from {f}");
                        McCostParamsConfig::try_from(f)?
                    }
                };
                let env_conf = match env_prefix {
                    None => McCostParamsConfig::default(),
                    Some(prefix) => {
                        log::info!("reading cost parameter overrides from {prefix}_* variables");
                        McCostParamsConfig::from_environment(prefix)?
                    }
                };
                let conf = file_conf.merge(env_conf);
                let params = conf.build(&McCostParams::defaults())?;
                let out = McCostParamsConfig::from(&params);
                match format {
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&out)?),
                    OutputFormat::Toml => Ok(toml::to_string(&out)?),
                }
            }
            McCostOperation::Smoothness {
                tag,
                min_smoothness,
            } => {
                let smoothness = OsmSmoothness::parse_from(tag)?;
                let mut lines = vec![format!("{smoothness}: rank {}", smoothness.rank())];
                if let Some(min) = *min_smoothness {
                    let mut builder = McCostParams::defaults().to_builder();
                    let params = builder.set_min_smoothness(Some(min)).build()?;
                    let admissible = params.is_admissible_street_edge(Some(smoothness), None);
                    lines.push(format!("admissible with minimum {min}: {admissible}"));
                }
                Ok(lines.join("\n"))
            }
        }
    }
}
