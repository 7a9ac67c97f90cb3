pub mod cost;
mod mc_cost_error;
pub mod smoothness;

pub use mc_cost_error::McCostError;
