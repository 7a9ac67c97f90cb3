pub mod defaults;
mod mc_cost_ops;
mod mc_cost_params;
mod mc_cost_params_builder;
mod surface_reluctance_factors;
mod transit_reluctance_index;

pub use mc_cost_params::McCostParams;
pub use mc_cost_params_builder::McCostParamsBuilder;
pub use surface_reluctance_factors::SurfaceReluctanceFactors;
pub use transit_reluctance_index::TransitReluctanceIndex;
