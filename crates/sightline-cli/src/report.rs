//! JSON shape of a printed hit.

use serde::Serialize;
use sightline_raycast::RayHit;
use sightline_scene::Scene;

/// One hit, flattened for output.
#[derive(Debug, Serialize)]
pub struct HitRecord {
    pub node: String,
    pub distance: f64,
    pub point: [f64; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_index: Option<usize>,
}

impl HitRecord {
    pub fn new(scene: &Scene, hit: &RayHit<'_>) -> Self {
        let node = scene
            .get(hit.object)
            .map(|n| n.name.clone())
            .unwrap_or_default();
        Self {
            node,
            distance: hit.distance,
            point: [hit.point.x, hit.point.y, hit.point.z],
            face_index: hit.face_index,
        }
    }
}
