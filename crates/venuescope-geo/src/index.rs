use crate::distance::{bounding_boxes, distance_m};
use rstar::{RTree, RTreeObject, AABB};
use venuescope_core::models::GeoPoint;

/// Venue position stored in the R-tree, keyed by the owner's slot number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedVenue {
    /// Caller-defined key, e.g. the venue's position in creation order
    pub key: usize,

    /// Position as `[longitude, latitude]`
    position: [f64; 2],
}

impl IndexedVenue {
    pub fn new(key: usize, point: &GeoPoint) -> Self {
        Self { key, position: point.lon_lat() }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::from_lon_lat(self.position)
    }
}

impl RTreeObject for IndexedVenue {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

/// Spatial index answering great-circle radius queries over venue points
#[derive(Debug, Clone)]
pub struct VenueIndex {
    tree: RTree<IndexedVenue>,
}

impl VenueIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index from keyed points
    pub fn from_points(points: Vec<(usize, GeoPoint)>) -> Self {
        let indexed: Vec<IndexedVenue> =
            points.iter().map(|(key, point)| IndexedVenue::new(*key, point)).collect();

        Self { tree: RTree::bulk_load(indexed) }
    }

    /// Insert a point into the index
    pub fn insert(&mut self, key: usize, point: &GeoPoint) {
        self.tree.insert(IndexedVenue::new(key, point));
    }

    /// Entries whose position falls inside a lon/lat bounding box
    pub fn query_bbox(&self, min: [f64; 2], max: [f64; 2]) -> Vec<&IndexedVenue> {
        let bbox = AABB::from_corners(min, max);
        self.tree.locate_in_envelope(&bbox).collect()
    }

    /// Keys within `radius_m` of `center` with their distance in meters,
    /// nearest first. Ties are ordered by key.
    ///
    /// Candidates come from the bounding boxes of the search circle, then
    /// each one is checked with the exact Haversine distance.
    pub fn query_within(&self, center: &GeoPoint, radius_m: f64) -> Vec<(usize, f64)> {
        // The boxes never overlap, so no key is visited twice
        let mut hits: Vec<(usize, f64)> = bounding_boxes(center, radius_m)
            .iter()
            .flat_map(|rect| {
                let min = rect.min();
                let max = rect.max();
                self.query_bbox([min.x, min.y], [max.x, max.y])
            })
            .filter_map(|indexed| {
                let distance = distance_m(center, &indexed.point());
                (distance <= radius_m).then_some((indexed.key, distance))
            })
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        hits
    }

    /// Get the total number of points in the index
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for VenueIndex {
    fn default() -> Self {
        Self::new()
    }
}
