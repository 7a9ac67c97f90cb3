use super::{
    defaults::*, McCostParamsBuilder, SurfaceReluctanceFactors, TransitReluctanceIndex,
};
use crate::model::{smoothness::OsmSmoothness, McCostError};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::{
    collections::BTreeMap,
    fmt::Display,
    sync::{Arc, LazyLock},
};

static DEFAULTS: LazyLock<McCostParams> = LazyLock::new(|| McCostParams {
    board_cost: DEFAULT_BOARD_COST,
    transfer_cost: DEFAULT_TRANSFER_COST,
    transit_reluctance_factors: None,
    walk_reluctance_factor: OrderedFloat(DEFAULT_WALK_RELUCTANCE),
    wait_reluctance_factor: OrderedFloat(DEFAULT_WAIT_RELUCTANCE),
    surface_reluctance_factors: SurfaceReluctanceFactors::default(),
    min_smoothness: None,
    max_tracktype_grade: None,
});

/// defines how to calculate the cost when cost is part of the multi-criteria
/// pareto function.
///
/// an instance is immutable once built and is shared by reference with every
/// search worker for the lifetime of one request. the only ways to obtain one
/// are [`McCostParams::defaults`] and [`McCostParamsBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct McCostParams {
    board_cost: i32,
    transfer_cost: i32,
    transit_reluctance_factors: Option<Arc<[OrderedFloat<f64>]>>,
    walk_reluctance_factor: OrderedFloat<f64>,
    wait_reluctance_factor: OrderedFloat<f64>,
    surface_reluctance_factors: SurfaceReluctanceFactors,
    min_smoothness: Option<OsmSmoothness>,
    max_tracktype_grade: Option<i32>,
}

impl McCostParams {
    /// the baseline parameters used when nothing overrides them.
    pub fn defaults() -> McCostParams {
        DEFAULTS.clone()
    }

    /// a builder seeded with these parameters
    pub fn to_builder(&self) -> McCostParamsBuilder {
        McCostParamsBuilder::new(self)
    }

    pub fn board_cost(&self) -> i32 {
        self.board_cost
    }

    pub fn transfer_cost(&self) -> i32 {
        self.transfer_cost
    }

    /// reluctance factors for specific trips. the normal transit reluctance
    /// is 1.0; setting a factor below that for, say, rail gives it a small
    /// advantage over other modes. the trip schedule component owns the mapping
    /// between these factors and a [`TransitReluctanceIndex`].
    ///
    /// returns `None` if no factors are set, in which case every trip uses
    /// [`DEFAULT_TRANSIT_RELUCTANCE`].
    pub fn transit_reluctance_factors(&self) -> Option<impl ExactSizeIterator<Item = f64> + '_> {
        self.transit_reluctance_factors
            .as_ref()
            .map(|factors| factors.iter().map(|f| f.into_inner()))
    }

    /// reluctance to apply to in-vehicle time for a trip.
    ///
    /// # Arguments
    ///
    /// * `index` - transit reluctance index assigned to the trip
    ///
    /// # Returns
    ///
    /// the factor at this index, or [`DEFAULT_TRANSIT_RELUCTANCE`] if no factors
    /// are set. an index outside the factors is an error.
    pub fn transit_reluctance_factor(
        &self,
        index: TransitReluctanceIndex,
    ) -> Result<f64, McCostError> {
        match &self.transit_reluctance_factors {
            None => Ok(DEFAULT_TRANSIT_RELUCTANCE),
            Some(factors) => factors.get(index.0).map(|f| f.into_inner()).ok_or(
                McCostError::TransitReluctanceIndexOutOfBounds {
                    index,
                    len: factors.len(),
                },
            ),
        }
    }

    pub fn walk_reluctance_factor(&self) -> f64 {
        self.walk_reluctance_factor.into_inner()
    }

    pub fn wait_reluctance_factor(&self) -> f64 {
        self.wait_reluctance_factor.into_inner()
    }

    pub fn surface_reluctance_factors(&self) -> &SurfaceReluctanceFactors {
        &self.surface_reluctance_factors
    }

    /// reluctance for a street edge with the given surface tag, 1.0 if not configured.
    pub fn surface_reluctance_factor(&self, surface: &str) -> f64 {
        self.surface_reluctance_factors.reluctance(surface)
    }

    pub fn min_smoothness(&self) -> Option<OsmSmoothness> {
        self.min_smoothness
    }

    pub fn max_tracktype_grade(&self) -> Option<i32> {
        self.max_tracktype_grade
    }

    /// tests whether a street edge may be used at all. an edge is excluded if its
    /// smoothness ranks below the minimum smoothness or its tracktype grade exceeds
    /// the maximum grade. edge attributes that are not tagged are not filtered.
    pub fn is_admissible_street_edge(
        &self,
        smoothness: Option<OsmSmoothness>,
        tracktype_grade: Option<i32>,
    ) -> bool {
        let smooth_enough = match (self.min_smoothness, smoothness) {
            (Some(min), Some(edge)) => edge.is_at_least_as_smooth_as(&min),
            _ => true,
        };
        let firm_enough = match (self.max_tracktype_grade, tracktype_grade) {
            (Some(max), Some(edge)) => edge <= max,
            _ => true,
        };
        smooth_enough && firm_enough
    }
}

impl Default for McCostParams {
    fn default() -> Self {
        McCostParams::defaults()
    }
}

impl TryFrom<&McCostParamsBuilder> for McCostParams {
    type Error = McCostError;

    /// validates the builder values and copies them into new storage that is
    /// not shared with the builder.
    fn try_from(builder: &McCostParamsBuilder) -> Result<Self, Self::Error> {
        use super::mc_cost_ops as ops;
        ops::validate_cost("board cost", builder.board_cost())?;
        ops::validate_cost("transfer cost", builder.transfer_cost())?;
        ops::validate_reluctance("walk reluctance factor", builder.walk_reluctance_factor())?;
        ops::validate_reluctance("wait reluctance factor", builder.wait_reluctance_factor())?;
        if let Some(factors) = builder.transit_reluctance_factors() {
            ops::validate_transit_reluctance_factors(factors)?;
        }
        let surfaces: &BTreeMap<String, f64> = builder.surface_reluctance_factors();
        ops::validate_surface_reluctance_factors(surfaces)?;

        let transit_reluctance_factors = builder
            .transit_reluctance_factors()
            .map(|factors| factors.iter().map(|f| OrderedFloat(*f)).collect::<Arc<[_]>>());

        Ok(McCostParams {
            board_cost: builder.board_cost(),
            transfer_cost: builder.transfer_cost(),
            transit_reluctance_factors,
            walk_reluctance_factor: OrderedFloat(builder.walk_reluctance_factor()),
            wait_reluctance_factor: OrderedFloat(builder.wait_reluctance_factor()),
            surface_reluctance_factors: SurfaceReluctanceFactors::copied_from(surfaces),
            min_smoothness: builder.min_smoothness(),
            max_tracktype_grade: builder.max_tracktype_grade(),
        })
    }
}

impl Display for McCostParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let transit = match self.transit_reluctance_factors() {
            Some(factors) => format!("[{}]", factors.map(|f| format!("{f:?}")).join(", ")),
            None => String::from("None"),
        };
        let min_smoothness = self
            .min_smoothness
            .map(|s| s.to_string())
            .unwrap_or_else(|| String::from("None"));
        let max_tracktype_grade = self
            .max_tracktype_grade
            .map(|g| g.to_string())
            .unwrap_or_else(|| String::from("None"));
        write!(
            f,
            "McCostParams {{ board_cost: {}, transfer_cost: {}, transit_reluctance_factors: {}, walk_reluctance_factor: {:?}, wait_reluctance_factor: {:?}, surface_reluctance_factors: {}, min_smoothness: {}, max_tracktype_grade: {} }}",
            self.board_cost,
            self.transfer_cost,
            transit,
            self.walk_reluctance_factor(),
            self.wait_reluctance_factor(),
            self.surface_reluctance_factors,
            min_smoothness,
            max_tracktype_grade,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::McCostParams;
    use crate::model::{cost::TransitReluctanceIndex, smoothness::OsmSmoothness, McCostError};
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    fn hash_of(params: &McCostParams) -> u64 {
        let mut hasher = DefaultHasher::new();
        params.hash(&mut hasher);
        hasher.finish()
    }

    fn build(f: impl FnOnce(&mut super::McCostParamsBuilder)) -> McCostParams {
        let mut builder = McCostParams::defaults().to_builder();
        f(&mut builder);
        match builder.build() {
            Ok(params) => params,
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn test_defaults() {
        let params = McCostParams::defaults();
        assert_eq!(params.board_cost(), 600);
        assert_eq!(params.transfer_cost(), 0);
        assert!(params.transit_reluctance_factors().is_none());
        assert_eq!(params.walk_reluctance_factor(), 4.0);
        assert_eq!(params.wait_reluctance_factor(), 1.0);
        assert!(params.surface_reluctance_factors().is_empty());
        assert_eq!(params.min_smoothness(), None);
        assert_eq!(params.max_tracktype_grade(), None);
        assert_eq!(params, McCostParams::default());
    }

    #[test]
    fn test_equal_values_hash_identically() {
        let a = build(|b| {
            b.set_board_cost(300)
                .set_surface_reluctance_factor("gravel", 2.0)
                .set_min_smoothness(Some(OsmSmoothness::Good));
        });
        let b = build(|b| {
            b.set_min_smoothness(Some(OsmSmoothness::Good))
                .set_surface_reluctance_factor("gravel", 2.0)
                .set_board_cost(300);
        });
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_single_field_change_breaks_equality() {
        let base = McCostParams::defaults();
        let changed = build(|b| {
            b.set_max_tracktype_grade(Some(3));
        });
        assert_ne!(base, changed);

        let transit = build(|b| {
            b.set_transit_reluctance_factors(Some(vec![1.0, 0.9]));
        });
        assert_ne!(base, transit);
    }

    #[test]
    fn test_transit_reluctance_lookup() {
        let uniform = McCostParams::defaults();
        assert_eq!(uniform.transit_reluctance_factor(TransitReluctanceIndex(42)), Ok(1.0));

        let params = build(|b| {
            b.set_transit_reluctance_factors(Some(vec![1.0, 0.9, 1.3]));
        });
        assert_eq!(params.transit_reluctance_factor(TransitReluctanceIndex(1)), Ok(0.9));
        match params.transit_reluctance_factor(TransitReluctanceIndex(3)) {
            Err(McCostError::TransitReluctanceIndexOutOfBounds { index, len }) => {
                assert_eq!(index, TransitReluctanceIndex(3));
                assert_eq!(len, 3);
            }
            other => panic!("expected out of bounds error, found {other:?}"),
        }
        let factors = params
            .transit_reluctance_factors()
            .map(|f| f.collect::<Vec<_>>());
        assert_eq!(factors, Some(vec![1.0, 0.9, 1.3]));
    }

    #[test]
    fn test_surface_reluctance_lookup() {
        let params = build(|b| {
            b.set_surface_reluctance_factor("gravel", 1.8);
        });
        assert_eq!(params.surface_reluctance_factor("gravel"), 1.8);
        assert_eq!(params.surface_reluctance_factor("asphalt"), 1.0);
    }

    #[test]
    fn test_admissible_street_edge() {
        let unfiltered = McCostParams::defaults();
        assert!(unfiltered.is_admissible_street_edge(Some(OsmSmoothness::Impassable), Some(5)));

        let params = build(|b| {
            b.set_min_smoothness(Some(OsmSmoothness::Intermediate))
                .set_max_tracktype_grade(Some(2));
        });
        assert!(params.is_admissible_street_edge(Some(OsmSmoothness::Intermediate), Some(2)));
        assert!(params.is_admissible_street_edge(Some(OsmSmoothness::Excellent), Some(1)));
        assert!(!params.is_admissible_street_edge(Some(OsmSmoothness::Bad), Some(1)));
        assert!(!params.is_admissible_street_edge(Some(OsmSmoothness::Good), Some(3)));
        assert!(params.is_admissible_street_edge(None, None));
    }

    #[test]
    fn test_display() {
        let params = build(|b| {
            b.set_transit_reluctance_factors(Some(vec![1.0, 0.9]))
                .set_surface_reluctance_factor("sand", 3.0)
                .set_min_smoothness(Some(OsmSmoothness::VeryBad))
                .set_max_tracktype_grade(Some(3));
        });
        assert_eq!(
            params.to_string(),
            "McCostParams { board_cost: 600, transfer_cost: 0, transit_reluctance_factors: [1.0, 0.9], walk_reluctance_factor: 4.0, wait_reluctance_factor: 1.0, surface_reluctance_factors: {sand=3.0}, min_smoothness: very_bad, max_tracktype_grade: 3 }"
        );
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<McCostParams>();

        let params = std::sync::Arc::new(build(|b| {
            b.set_walk_reluctance_factor(2.0);
        }));
        let handles = (0..4)
            .map(|_| {
                let shared = params.clone();
                std::thread::spawn(move || shared.walk_reluctance_factor())
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2.0);
        }
    }
}
