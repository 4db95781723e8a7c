//! The public entry point: scene traversal and result ordering.

use log::debug;
use sightline_math::{Point3, Vec3};
use sightline_scene::{NodeId, Scene};

use crate::object::{intersect_node, Scratch};
use crate::settings::{RaycastSettings, DEFAULT_PRECISION};
use crate::{Ray, RayHit, RaycastError, Result};

/// Casts one ray against scene nodes and reports every hit, nearest first.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sightline_math::{Point3, Vec3};
/// use sightline_raycast::Raycaster;
/// use sightline_scene::{Geometry, Material, Node, Scene};
///
/// let mut scene = Scene::new();
/// let floor = scene.add(Node::mesh("floor", Arc::new(Geometry::plane(10.0, 10.0)), Material::default()));
/// scene.update_world_transforms();
///
/// let raycaster = Raycaster::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
/// let hits = raycaster.intersect_object(&scene, floor, false).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert!((hits[0].distance - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raycaster {
    /// The world-space ray being cast.
    pub ray: Ray,
    /// Minimum hit distance.
    pub near: f64,
    /// Maximum hit distance.
    pub far: f64,
    /// Plane distances below this magnitude count as parallel.
    pub precision: f64,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self::from_ray(Ray::default())
    }
}

impl Raycaster {
    /// Unbounded raycaster with the default precision.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self::from_ray(Ray::new(origin, direction))
    }

    /// Raycaster that only reports hits within `[near, far]`.
    ///
    /// Fails with [`RaycastError::InvalidSettings`] unless
    /// `0 <= near <= far`.
    pub fn with_range(origin: Point3, direction: Vec3, near: f64, far: f64) -> Result<Self> {
        let settings = RaycastSettings {
            near,
            far,
            ..RaycastSettings::default()
        };
        Self::with_settings(Ray::new(origin, direction), &settings)
    }

    /// Raycaster configured from validated settings.
    pub fn with_settings(ray: Ray, settings: &RaycastSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            ray,
            near: settings.near,
            far: settings.far,
            precision: settings.precision,
        })
    }

    fn from_ray(ray: Ray) -> Self {
        Self {
            ray,
            near: 0.0,
            far: f64::INFINITY,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Current window and precision.
    pub fn settings(&self) -> RaycastSettings {
        RaycastSettings {
            near: self.near,
            far: self.far,
            precision: self.precision,
        }
    }

    /// Re-aim the ray, keeping window and precision.
    pub fn set(&mut self, origin: Point3, direction: Vec3) {
        self.ray.set(origin, direction);
    }

    /// Intersect one node, and with `recursive` all of its descendants.
    ///
    /// Descendants are tested before the node itself, so among hits at
    /// equal distance the descendants come first.
    pub fn intersect_object<'a>(&self, scene: &'a Scene, id: NodeId, recursive: bool) -> Result<Vec<RayHit<'a>>> {
        let node = scene.get(id).ok_or(RaycastError::UnknownNode(id))?;

        let mut scratch = Scratch::default();
        let mut hits = Vec::new();

        if recursive {
            self.intersect_descendants(scene, id, &mut scratch, &mut hits)?;
        }
        intersect_node(self, id, node, &mut scratch, &mut hits)?;

        sort_hits(&mut hits);
        debug!("intersect_object: {} hits", hits.len());
        Ok(hits)
    }

    /// Intersect several nodes in order, each followed by its descendants
    /// when `recursive` is set.
    pub fn intersect_objects<'a>(
        &self,
        scene: &'a Scene,
        ids: &[NodeId],
        recursive: bool,
    ) -> Result<Vec<RayHit<'a>>> {
        let mut scratch = Scratch::default();
        let mut hits = Vec::new();

        for &id in ids {
            self.intersect_subtree(scene, id, recursive, &mut scratch, &mut hits)?;
        }

        sort_hits(&mut hits);
        debug!("intersect_objects: {} hits over {} nodes", hits.len(), ids.len());
        Ok(hits)
    }

    /// [`intersect_objects`](Self::intersect_objects) with one rayon task
    /// per listed node. Returns exactly the same hits in the same order.
    #[cfg(feature = "parallel")]
    pub fn par_intersect_objects<'a>(
        &self,
        scene: &'a Scene,
        ids: &[NodeId],
        recursive: bool,
    ) -> Result<Vec<RayHit<'a>>> {
        use rayon::prelude::*;

        let per_node = ids
            .par_iter()
            .map_init(Scratch::default, |scratch, &id| {
                let mut hits = Vec::new();
                self.intersect_subtree(scene, id, recursive, scratch, &mut hits)?;
                Ok(hits)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut hits: Vec<_> = per_node.into_iter().flatten().collect();
        sort_hits(&mut hits);
        debug!("par_intersect_objects: {} hits over {} nodes", hits.len(), ids.len());
        Ok(hits)
    }

    fn intersect_subtree<'a>(
        &self,
        scene: &'a Scene,
        id: NodeId,
        recursive: bool,
        scratch: &mut Scratch,
        hits: &mut Vec<RayHit<'a>>,
    ) -> Result<()> {
        let node = scene.get(id).ok_or(RaycastError::UnknownNode(id))?;
        intersect_node(self, id, node, scratch, hits)?;
        if recursive {
            self.intersect_descendants(scene, id, scratch, hits)?;
        }
        Ok(())
    }

    /// Every descendant of `id` in depth-first pre-order, `id` excluded.
    fn intersect_descendants<'a>(
        &self,
        scene: &'a Scene,
        id: NodeId,
        scratch: &mut Scratch,
        hits: &mut Vec<RayHit<'a>>,
    ) -> Result<()> {
        for child in scene.descendants(id) {
            let node = scene.get(child).ok_or(RaycastError::UnknownNode(child))?;
            intersect_node(self, child, node, scratch, hits)?;
        }
        Ok(())
    }
}

/// Stable ascending sort; equal distances keep discovery order.
fn sort_hits(hits: &mut [RayHit<'_>]) {
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}
