mod osm_smoothness;

pub use osm_smoothness::OsmSmoothness;
