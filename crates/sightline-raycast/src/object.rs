//! Per-node intersection: particle distance test, or mesh broad phase
//! followed by a scan over every face.

use log::{debug, warn};
use sightline_math::{Point3, Sphere};
use sightline_scene::{Mesh, Node, NodeId, NodeKind};

use crate::intersect::{intersect_face, ray_intersects_sphere, FaceQuery};
use crate::{Ray, RayHit, Raycaster, Result};

/// Working values reused from one node to the next within a single query.
///
/// Each query, or each worker of a parallel query, owns its own.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    bounds: Sphere,
    local_ray: Ray,
}

/// Append the hits of `node` to `hits`.
///
/// Mesh hits are appended in face order; sorting is the caller's job.
pub(crate) fn intersect_node<'a>(
    raycaster: &Raycaster,
    id: NodeId,
    node: &'a Node,
    scratch: &mut Scratch,
    hits: &mut Vec<RayHit<'a>>,
) -> Result<()> {
    match &node.kind {
        NodeKind::Group => Ok(()),
        NodeKind::Particle => {
            intersect_particle(raycaster, id, node, hits);
            Ok(())
        }
        NodeKind::Mesh(mesh) => intersect_mesh(raycaster, id, node, mesh, scratch, hits),
    }
}

fn intersect_particle<'a>(raycaster: &Raycaster, id: NodeId, node: &'a Node, hits: &mut Vec<RayHit<'a>>) {
    let distance = raycaster.ray.distance_to_point(&node.world.position());

    if distance > node.scale.x || distance < raycaster.near || distance > raycaster.far {
        return;
    }

    hits.push(RayHit {
        distance,
        point: Point3::from(node.position),
        face: None,
        face_index: None,
        object: id,
    });
}

fn intersect_mesh<'a>(
    raycaster: &Raycaster,
    id: NodeId,
    node: &'a Node,
    mesh: &'a Mesh,
    scratch: &mut Scratch,
    hits: &mut Vec<RayHit<'a>>,
) -> Result<()> {
    let geometry = &*mesh.geometry;

    scratch.bounds = Sphere::new(
        node.world.position(),
        geometry.bounding_radius * node.world.max_scale_on_axis(),
    );
    if !ray_intersects_sphere(&raycaster.ray, &scratch.bounds) {
        debug!("'{}': bounding sphere missed", node.name);
        return Ok(());
    }

    let Some(inverse) = node.world.inverse() else {
        warn!("'{}': world transform is not invertible, skipping", node.name);
        return Ok(());
    };
    scratch.local_ray = raycaster.ray.transformed(&inverse);

    let query = FaceQuery {
        world_ray: &raycaster.ray,
        local_ray: &scratch.local_ray,
        near: raycaster.near,
        far: raycaster.far,
        precision: raycaster.precision,
    };

    let before = hits.len();
    for (face_index, face) in geometry.faces.iter().enumerate() {
        let Some(material) = mesh.material.resolve(face) else {
            continue;
        };

        if let Some(hit) = intersect_face(&query, face_index, face, &geometry.vertices, material.side)? {
            hits.push(RayHit {
                distance: hit.distance,
                point: hit.point,
                face: Some(face),
                face_index: Some(face_index),
                object: id,
            });
        }
    }

    debug!(
        "'{}': {} of {} faces hit",
        node.name,
        hits.len() - before,
        geometry.faces.len()
    );
    Ok(())
}
