//! baseline values for multi-criteria cost parameters. these are used whenever
//! a request does not override them.

/// fixed cost added once per boarding
pub const DEFAULT_BOARD_COST: i32 = 600;

/// fixed cost added once per transfer
pub const DEFAULT_TRANSFER_COST: i32 = 0;

/// the normal transit reluctance, which is the baseline for all other costs.
/// used for every trip when no transit reluctance factors are set.
pub const DEFAULT_TRANSIT_RELUCTANCE: f64 = 1.0;

/// a rider would rather sit 4 minutes extra on a bus than walk 1 minute extra.
pub const DEFAULT_WALK_RELUCTANCE: f64 = 4.0;

pub const DEFAULT_WAIT_RELUCTANCE: f64 = 1.0;

/// multiplier for a surface tag with no configured reluctance
pub const DEFAULT_SURFACE_RELUCTANCE: f64 = 1.0;
