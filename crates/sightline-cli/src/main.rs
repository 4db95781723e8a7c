//! sightline CLI - ray casting against JSON scene files
//!
//! `sightline cast` prints every hit as JSON, nearest first.
//! `sightline info` summarizes a scene.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use std::fs;
use std::path::{Path, PathBuf};

use sightline_math::{Point3, Vec3};
use sightline_raycast::{Ray, RaycastSettings, Raycaster};
use sightline_scene::{NodeKind, Scene};

mod report;

use report::HitRecord;

#[derive(Parser)]
#[command(name = "sightline")]
#[command(about = "Brute-force ray casting over a scene graph", long_about = None)]
struct Cli {
    /// Log broad-phase rejects and hit counts
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a ray into a scene and print the hits as JSON
    Cast {
        /// Scene description (.json)
        scene: PathBuf,
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,
        /// Ray direction as x,y,z (need not be unit length)
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        direction: Vec3,
        /// Raycast settings file (.json); flags below override it
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Minimum hit distance
        #[arg(long)]
        near: Option<f64>,
        /// Maximum hit distance
        #[arg(long)]
        far: Option<f64>,
        /// Plane-distance epsilon
        #[arg(long)]
        precision: Option<f64>,
        /// Also test descendants
        #[arg(short, long)]
        recursive: bool,
        /// Only cast against the node with this name (default: all roots)
        #[arg(short, long)]
        node: Option<String>,
    },
    /// Display node, mesh, face and particle counts
    Info {
        /// Scene description (.json)
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    match cli.command {
        Commands::Cast {
            scene,
            origin,
            direction,
            settings,
            near,
            far,
            precision,
            recursive,
            node,
        } => {
            let mut resolved = match settings {
                Some(path) => load_settings(&path)?,
                None => RaycastSettings::default(),
            };
            resolved.near = near.unwrap_or(resolved.near);
            resolved.far = far.unwrap_or(resolved.far);
            resolved.precision = precision.unwrap_or(resolved.precision);

            let raycaster = Raycaster::with_settings(Ray::new(Point3::from(origin), direction), &resolved)?;
            cast(&scene, &raycaster, recursive, node.as_deref())?;
        }
        Commands::Info { scene } => {
            show_info(&scene)?;
        }
    }

    Ok(())
}

/// Parse `x,y,z` into a vector.
fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{p}': {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z, got {} components", parts.len())),
    }
}

fn load_scene(path: &Path) -> Result<Scene> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let scene = Scene::from_json(&json).with_context(|| format!("loading scene {}", path.display()))?;
    debug!("loaded {} nodes from {}", scene.len(), path.display());
    Ok(scene)
}

fn load_settings(path: &Path) -> Result<RaycastSettings> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing settings {}", path.display()))
}

fn cast(path: &Path, raycaster: &Raycaster, recursive: bool, node: Option<&str>) -> Result<()> {
    let scene = load_scene(path)?;

    let hits = match node {
        Some(name) => {
            let id = scene
                .find_by_name(name)
                .with_context(|| format!("no node named '{name}'"))?;
            raycaster.intersect_object(&scene, id, recursive)?
        }
        None => raycaster.intersect_objects(&scene, scene.roots(), recursive)?,
    };

    let records: Vec<HitRecord> = hits.iter().map(|hit| HitRecord::new(&scene, hit)).collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    let scene = load_scene(path)?;

    let mut groups = 0;
    let mut meshes = 0;
    let mut particles = 0;
    let mut faces = 0;
    for (_, node) in scene.iter() {
        match &node.kind {
            NodeKind::Group => groups += 1,
            NodeKind::Mesh(mesh) => {
                meshes += 1;
                faces += mesh.geometry.faces.len();
            }
            NodeKind::Particle => particles += 1,
        }
    }

    println!("sightline scene: {}", path.display());
    println!("  Nodes: {}", scene.len());
    println!("  Roots: {}", scene.roots().len());
    println!("  Groups: {}", groups);
    println!("  Meshes: {} ({} faces)", meshes, faces);
    println!("  Particles: {}", particles);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_vec3() {
        assert_relative_eq!(parse_vec3("1,-2.5, 3").unwrap(), Vec3::new(1.0, -2.5, 3.0));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,x").is_err());
    }

    #[test]
    fn test_cli_parses_negative_vectors() {
        let cli = Cli::try_parse_from([
            "sightline",
            "cast",
            "scene.json",
            "--origin",
            "0,0,5",
            "--direction",
            "0,0,-1",
            "--far",
            "10",
            "-r",
        ])
        .unwrap();
        match cli.command {
            Commands::Cast {
                direction, far, recursive, ..
            } => {
                assert_relative_eq!(direction, Vec3::new(0.0, 0.0, -1.0));
                assert_eq!(far, Some(10.0));
                assert!(recursive);
            }
            Commands::Info { .. } => panic!("expected cast"),
        }
    }
}
