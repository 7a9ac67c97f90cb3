use super::defaults::DEFAULT_SURFACE_RELUCTANCE;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::{collections::BTreeMap, fmt::Display, sync::Arc};

/// read-only mapping from OSM surface tag to reluctance factor.
///
/// the storage is owned by this view and never shared with a builder or with any
/// container handed to one, so a finalized [`super::McCostParams`] cannot change
/// underneath the search workers reading it. there are no methods that write to
/// the mapping:
///
/// ```compile_fail
/// use bambam_mccost::model::cost::McCostParams;
///
/// let params = McCostParams::defaults();
/// params
///     .surface_reluctance_factors()
///     .insert(String::from("gravel"), 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SurfaceReluctanceFactors(Arc<BTreeMap<String, OrderedFloat<f64>>>);

impl SurfaceReluctanceFactors {
    /// deep copies the entries into new storage.
    pub(crate) fn copied_from(entries: &BTreeMap<String, f64>) -> SurfaceReluctanceFactors {
        let copied = entries
            .iter()
            .map(|(surface, factor)| (surface.clone(), OrderedFloat(*factor)))
            .collect::<BTreeMap<_, _>>();
        SurfaceReluctanceFactors(Arc::new(copied))
    }

    /// the configured reluctance for a surface, if any
    pub fn get(&self, surface: &str) -> Option<f64> {
        self.0.get(surface).map(|f| f.into_inner())
    }

    /// the reluctance to apply for a surface. surfaces without a configured
    /// factor are not penalized.
    pub fn reluctance(&self, surface: &str) -> f64 {
        self.get(surface).unwrap_or(DEFAULT_SURFACE_RELUCTANCE)
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.0.contains_key(surface)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// iterates over (surface, factor) pairs in surface tag order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0
            .iter()
            .map(|(surface, factor)| (surface.as_str(), factor.into_inner()))
    }

    /// an owned copy of the mapping. changes to the copy have no effect on this view.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(surface, factor)| (String::from(surface), factor))
            .collect()
    }

    /// true if both views read from the same storage
    #[cfg(test)]
    pub(crate) fn shares_storage_with(&self, other: &SurfaceReluctanceFactors) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Display for SurfaceReluctanceFactors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .iter()
            .map(|(surface, factor)| format!("{surface}={factor:?}"))
            .join(", ");
        write!(f, "{{{entries}}}")
    }
}
