mod force;
mod grouped;
pub mod links;
pub mod simulation;
mod sphere;
mod spiral;
pub(crate) mod types;

pub use grouped::category_anchor;
pub use types::*;

use force::*;
use grouped::*;
use sphere::*;
use spiral::*;

use crate::config::{LayoutConfig, SphereConfig, SpiralConfig};
use crate::model::{Category, LayoutMode, LinkData, ThoughtNode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simulation::{ForceSet, Particle, Positioning, Spring, run_simulation};
use std::collections::BTreeMap;

/// Compute target positions (and the derived link list) for a node set.
///
/// Pure apart from the rng: the link builder's skip edges and the physics
/// modes' initial scatter draw from it. A seed in the config makes the whole
/// computation reproducible; without one the rng comes from OS entropy.
pub fn compute_layout(nodes: &[ThoughtNode], mode: LayoutMode, config: &LayoutConfig) -> Layout {
    match config.seed {
        Some(seed) => {
            compute_layout_with_rng(nodes, mode, config, &mut StdRng::seed_from_u64(seed))
        }
        None => compute_layout_with_rng(nodes, mode, config, &mut rand::rng()),
    }
}

/// As `compute_layout`, with the random source injected by the caller.
pub fn compute_layout_with_rng<R: Rng + ?Sized>(
    nodes: &[ThoughtNode],
    mode: LayoutMode,
    config: &LayoutConfig,
    rng: &mut R,
) -> Layout {
    // The relationship graph depends only on the node set and is rebuilt on
    // every call, so topology may drift between timeline scrubs unless a
    // seed is fixed.
    let links = links::build_links(nodes, &config.links, rng);

    let positions = match mode {
        LayoutMode::Spiral => compute_spiral_layout(nodes, &config.spiral),
        LayoutMode::Sphere => compute_sphere_layout(nodes, &config.sphere),
        LayoutMode::Force => compute_force_layout(nodes, &links, config, rng),
        LayoutMode::Grouped => compute_grouped_layout(nodes, &links, config, rng),
    };

    Layout {
        mode,
        positions,
        links,
    }
}

/// Visual/collision radius derived from importance.
pub(super) fn node_radius(node: &ThoughtNode) -> f32 {
    node.clamped_importance() / 10.0 * 0.3 + 1.0
}

pub(super) fn particles_from_nodes(
    nodes: &[ThoughtNode],
    anchor: impl Fn(&ThoughtNode) -> Option<Vec3>,
) -> Vec<Particle> {
    nodes
        .iter()
        .map(|node| Particle::new(node.id.clone(), node_radius(node), anchor(node)))
        .collect()
}

pub(super) fn springs_from_links(links: &[LinkData], distance: f32, strength: f32) -> Vec<Spring> {
    links
        .iter()
        .map(|link| Spring {
            source: link.source.clone(),
            target: link.target.clone(),
            distance,
            strength,
        })
        .collect()
}

pub(super) fn extract_positions(particles: Vec<Particle>, scale: f32) -> BTreeMap<String, Vec3> {
    particles
        .into_iter()
        .map(|p| (p.id, p.position * scale))
        .collect()
}
