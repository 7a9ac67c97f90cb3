mod mc_cost_params_config;

pub use mc_cost_params_config::McCostParamsConfig;
