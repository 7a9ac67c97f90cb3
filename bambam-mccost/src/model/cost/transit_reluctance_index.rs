use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// index into the transit reluctance factors of a [`super::McCostParams`].
///
/// indices are assigned by the trip schedule component, which guarantees they
/// are stable and in bounds for the duration of one search. the cost parameters
/// only consume them and make no assumption about how they are assigned.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct TransitReluctanceIndex(pub usize);

impl From<usize> for TransitReluctanceIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl Display for TransitReluctanceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
