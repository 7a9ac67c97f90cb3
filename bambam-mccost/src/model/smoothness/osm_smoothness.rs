use crate::model::McCostError;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display, str::FromStr};

/// OSM smoothness values found at [https://wiki.openstreetmap.org/wiki/Key:smoothness].
///
/// levels are ordered from worst to best surface quality. the ordering is carried
/// by [`OsmSmoothness::rank`] and not by the variant declaration order, so
/// [`Ord`] and [`OsmSmoothness::is_at_least_as_smooth_as`] always agree with the
/// OSM wiki ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum OsmSmoothness {
    Impassable,
    VeryHorrible,
    Horrible,
    VeryBad,
    Bad,
    Intermediate,
    Good,
    Excellent,
}

impl OsmSmoothness {
    /// all smoothness levels, worst first.
    pub const ALL: [OsmSmoothness; 8] = [
        OsmSmoothness::Impassable,
        OsmSmoothness::VeryHorrible,
        OsmSmoothness::Horrible,
        OsmSmoothness::VeryBad,
        OsmSmoothness::Bad,
        OsmSmoothness::Intermediate,
        OsmSmoothness::Good,
        OsmSmoothness::Excellent,
    ];

    /// position of this level in the quality ordering, where 0 is impassable
    /// and 7 is excellent.
    pub const fn rank(&self) -> u8 {
        match self {
            OsmSmoothness::Impassable => 0,
            OsmSmoothness::VeryHorrible => 1,
            OsmSmoothness::Horrible => 2,
            OsmSmoothness::VeryBad => 3,
            OsmSmoothness::Bad => 4,
            OsmSmoothness::Intermediate => 5,
            OsmSmoothness::Good => 6,
            OsmSmoothness::Excellent => 7,
        }
    }

    /// the OSM tag value for this level
    pub const fn as_str(&self) -> &'static str {
        match self {
            OsmSmoothness::Impassable => "impassable",
            OsmSmoothness::VeryHorrible => "very_horrible",
            OsmSmoothness::Horrible => "horrible",
            OsmSmoothness::VeryBad => "very_bad",
            OsmSmoothness::Bad => "bad",
            OsmSmoothness::Intermediate => "intermediate",
            OsmSmoothness::Good => "good",
            OsmSmoothness::Excellent => "excellent",
        }
    }

    /// strict parsing of a smoothness tag, for call sites where a valid value
    /// is expected. matching is case-insensitive.
    ///
    /// # Arguments
    ///
    /// * `tag` - raw smoothness tag value
    ///
    /// # Returns
    ///
    /// the matching level, or a [`McCostError::ValidationError`] carrying the raw tag
    pub fn parse_from(tag: &str) -> Result<OsmSmoothness, McCostError> {
        OsmSmoothness::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| McCostError::ValidationError(String::from(tag)))
    }

    /// lenient parsing of a smoothness tag, for optional way tags that may be
    /// unset or malformed. never fails.
    pub fn parse_or_none(tag: Option<&str>) -> Option<OsmSmoothness> {
        let tag = tag?;
        match OsmSmoothness::parse_from(tag) {
            Ok(smoothness) => Some(smoothness),
            Err(e) => {
                log::debug!("ignoring smoothness tag: {e}");
                None
            }
        }
    }

    /// true if this level ranks at or above `other`.
    pub fn is_at_least_as_smooth_as(&self, other: &OsmSmoothness) -> bool {
        self.rank() >= other.rank()
    }
}

impl PartialOrd for OsmSmoothness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OsmSmoothness {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl FromStr for OsmSmoothness {
    type Err = McCostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OsmSmoothness::parse_from(s)
    }
}

impl TryFrom<String> for OsmSmoothness {
    type Error = McCostError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        OsmSmoothness::parse_from(&value)
    }
}

impl Display for OsmSmoothness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::OsmSmoothness;
    use crate::model::McCostError;

    const NAMES: [&str; 8] = [
        "impassable",
        "very_horrible",
        "horrible",
        "very_bad",
        "bad",
        "intermediate",
        "good",
        "excellent",
    ];

    #[test]
    fn test_parse_from_any_case() {
        for (name, expected) in NAMES.iter().zip(OsmSmoothness::ALL) {
            for tag in [
                name.to_string(),
                name.to_uppercase(),
                capitalize_alternating(name),
            ] {
                match OsmSmoothness::parse_from(&tag) {
                    Ok(result) => assert_eq!(result, expected, "tag '{tag}'"),
                    Err(e) => panic!("{e}"),
                }
            }
        }
    }

    #[test]
    fn test_parse_from_invalid() {
        match OsmSmoothness::parse_from("not_a_level") {
            Err(McCostError::ValidationError(tag)) => assert_eq!(tag, "not_a_level"),
            other => panic!("expected validation error, found {other:?}"),
        }
        assert!(OsmSmoothness::parse_from("very horrible").is_err());
        assert!(OsmSmoothness::parse_from("").is_err());
    }

    #[test]
    fn test_parse_or_none() {
        assert_eq!(OsmSmoothness::parse_or_none(None), None);
        assert_eq!(OsmSmoothness::parse_or_none(Some("not_a_level")), None);
        assert_eq!(
            OsmSmoothness::parse_or_none(Some("Very_Bad")),
            Some(OsmSmoothness::VeryBad)
        );
    }

    #[test]
    fn test_rank_strictly_increasing() {
        let expected = [
            OsmSmoothness::Impassable,
            OsmSmoothness::VeryHorrible,
            OsmSmoothness::Horrible,
            OsmSmoothness::VeryBad,
            OsmSmoothness::Bad,
            OsmSmoothness::Intermediate,
            OsmSmoothness::Good,
            OsmSmoothness::Excellent,
        ];
        assert_eq!(OsmSmoothness::ALL, expected);
        for pair in expected.windows(2) {
            assert!(pair[0].rank() < pair[1].rank(), "{} < {}", pair[0], pair[1]);
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(OsmSmoothness::Impassable.rank(), 0);
        assert_eq!(OsmSmoothness::Excellent.rank(), 7);
    }

    #[test]
    fn test_at_least_as_smooth_as() {
        use OsmSmoothness as S;
        assert!(S::Good.is_at_least_as_smooth_as(&S::Good));
        assert!(S::Excellent.is_at_least_as_smooth_as(&S::Intermediate));
        assert!(!S::Bad.is_at_least_as_smooth_as(&S::Intermediate));
        assert!(S::Impassable.is_at_least_as_smooth_as(&S::Impassable));
    }

    #[test]
    fn test_display_matches_tag() {
        for (name, level) in NAMES.iter().zip(OsmSmoothness::ALL) {
            assert_eq!(&level.to_string(), name);
        }
    }

    #[test]
    fn test_serde_case_insensitive() {
        let result: OsmSmoothness = match serde_json::from_str("\"VERY_HORRIBLE\"") {
            Ok(s) => s,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(result, OsmSmoothness::VeryHorrible);
        let encoded = serde_json::to_string(&OsmSmoothness::VeryHorrible).unwrap();
        assert_eq!(encoded, "\"very_horrible\"");
        assert!(serde_json::from_str::<OsmSmoothness>("\"smooth\"").is_err());
    }

    fn capitalize_alternating(s: &str) -> String {
        s.chars()
            .enumerate()
            .map(|(i, c)| {
                if i % 2 == 0 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }
}
