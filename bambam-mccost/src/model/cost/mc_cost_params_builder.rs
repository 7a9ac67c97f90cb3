use super::McCostParams;
use crate::model::{smoothness::OsmSmoothness, McCostError};
use std::collections::BTreeMap;

/// mutable version of [`McCostParams`].
///
/// seeded from an existing set of parameters (usually [`McCostParams::defaults`]),
/// so a configuration layer only needs to set the fields it overrides. not meant
/// to be shared between threads; build one per request.
#[derive(Debug, Clone, PartialEq)]
pub struct McCostParamsBuilder {
    board_cost: i32,
    transfer_cost: i32,
    transit_reluctance_factors: Option<Vec<f64>>,
    walk_reluctance_factor: f64,
    wait_reluctance_factor: f64,
    surface_reluctance_factors: BTreeMap<String, f64>,
    min_smoothness: Option<OsmSmoothness>,
    max_tracktype_grade: Option<i32>,
}

impl McCostParamsBuilder {
    pub fn new(seed: &McCostParams) -> McCostParamsBuilder {
        McCostParamsBuilder {
            board_cost: seed.board_cost(),
            transfer_cost: seed.transfer_cost(),
            transit_reluctance_factors: seed.transit_reluctance_factors().map(|f| f.collect()),
            walk_reluctance_factor: seed.walk_reluctance_factor(),
            wait_reluctance_factor: seed.wait_reluctance_factor(),
            surface_reluctance_factors: seed.surface_reluctance_factors().to_map(),
            min_smoothness: seed.min_smoothness(),
            max_tracktype_grade: seed.max_tracktype_grade(),
        }
    }

    /// finalizes the current values into a new [`McCostParams`].
    ///
    /// values are validated and copied, so later changes to this builder never
    /// reach a previously built instance. may be called repeatedly.
    pub fn build(&self) -> Result<McCostParams, McCostError> {
        let params = McCostParams::try_from(self).inspect_err(|e| {
            log::warn!("rejected multi-criteria cost parameters: {e}");
        })?;
        log::debug!("built {params}");
        Ok(params)
    }

    pub fn board_cost(&self) -> i32 {
        self.board_cost
    }

    pub fn set_board_cost(&mut self, board_cost: i32) -> &mut Self {
        self.board_cost = board_cost;
        self
    }

    pub fn transfer_cost(&self) -> i32 {
        self.transfer_cost
    }

    pub fn set_transfer_cost(&mut self, transfer_cost: i32) -> &mut Self {
        self.transfer_cost = transfer_cost;
        self
    }

    pub fn transit_reluctance_factors(&self) -> Option<&[f64]> {
        self.transit_reluctance_factors.as_deref()
    }

    /// sets the per-trip transit reluctance factors, or `None` for a uniform
    /// reluctance of 1.0.
    pub fn set_transit_reluctance_factors(
        &mut self,
        transit_reluctance_factors: Option<Vec<f64>>,
    ) -> &mut Self {
        self.transit_reluctance_factors = transit_reluctance_factors;
        self
    }

    pub fn walk_reluctance_factor(&self) -> f64 {
        self.walk_reluctance_factor
    }

    pub fn set_walk_reluctance_factor(&mut self, walk_reluctance_factor: f64) -> &mut Self {
        self.walk_reluctance_factor = walk_reluctance_factor;
        self
    }

    pub fn wait_reluctance_factor(&self) -> f64 {
        self.wait_reluctance_factor
    }

    pub fn set_wait_reluctance_factor(&mut self, wait_reluctance_factor: f64) -> &mut Self {
        self.wait_reluctance_factor = wait_reluctance_factor;
        self
    }

    pub fn surface_reluctance_factors(&self) -> &BTreeMap<String, f64> {
        &self.surface_reluctance_factors
    }

    /// replaces all surface reluctance factors. entries are copied into
    /// storage owned by this builder.
    pub fn set_surface_reluctance_factors<I, K>(&mut self, factors: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.surface_reluctance_factors = factors
            .into_iter()
            .map(|(surface, factor)| (surface.into(), factor))
            .collect();
        self
    }

    /// sets the reluctance factor for a single surface, keeping all others.
    pub fn set_surface_reluctance_factor(
        &mut self,
        surface: impl Into<String>,
        factor: f64,
    ) -> &mut Self {
        self.surface_reluctance_factors.insert(surface.into(), factor);
        self
    }

    pub fn min_smoothness(&self) -> Option<OsmSmoothness> {
        self.min_smoothness
    }

    pub fn set_min_smoothness(&mut self, min_smoothness: Option<OsmSmoothness>) -> &mut Self {
        self.min_smoothness = min_smoothness;
        self
    }

    pub fn max_tracktype_grade(&self) -> Option<i32> {
        self.max_tracktype_grade
    }

    pub fn set_max_tracktype_grade(&mut self, max_tracktype_grade: Option<i32>) -> &mut Self {
        self.max_tracktype_grade = max_tracktype_grade;
        self
    }
}

impl Default for McCostParamsBuilder {
    fn default() -> Self {
        McCostParamsBuilder::new(&McCostParams::defaults())
    }
}
