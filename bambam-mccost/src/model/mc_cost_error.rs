use thiserror::Error;

use super::cost::TransitReluctanceIndex;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum McCostError {
    #[error("'{0}' is not a valid OSM smoothness value")]
    ValidationError(String),
    #[error("invalid multi-criteria cost parameters: {0}")]
    ConfigurationError(String),
    #[error("transit reluctance index {index} is out of bounds for {len} transit reluctance factors")]
    TransitReluctanceIndexOutOfBounds {
        index: TransitReluctanceIndex,
        len: usize,
    },
}
