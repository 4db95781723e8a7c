#![warn(missing_docs)]

//! Brute-force ray casting against a sightline scene graph.
//!
//! A [`Raycaster`] tests one ray against scene nodes in two phases:
//!
//! 1. **Broad phase**: each mesh's bounding sphere, scaled by its world
//!    transform, is checked against the ray and skipped on a miss.
//! 2. **Narrow phase**: the ray is moved into the mesh's local space and
//!    tested against every face, honoring the face material's [`Side`].
//!
//! Particles are tested by their distance to the ray. Hits come back as
//! [`RayHit`]s sorted nearest first.
//!
//! Enable the `parallel` feature for
//! [`Raycaster::par_intersect_objects`], which spreads the listed nodes
//! over rayon workers.
//!
//! [`Side`]: sightline_scene::Side

pub mod error;
pub mod intersect;
mod object;
mod ray;
mod raycaster;
mod settings;

pub use error::{RaycastError, Result};
pub use ray::{Ray, RayHit};
pub use raycaster::Raycaster;
pub use settings::{RaycastSettings, DEFAULT_PRECISION};
