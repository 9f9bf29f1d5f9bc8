use super::*;

const TECH_ANCHOR: Vec3 = Vec3::new(15.0, 5.0, 0.0);
const PHILOSOPHY_ANCHOR: Vec3 = Vec3::new(-15.0, 5.0, 0.0);
const LIFE_ANCHOR: Vec3 = Vec3::new(0.0, -10.0, 10.0);
const ART_ANCHOR: Vec3 = Vec3::new(0.0, -10.0, -10.0);

/// The fixed point a category's particles are pulled toward in grouped mode.
pub fn category_anchor(category: Category) -> Vec3 {
    match category {
        Category::Tech => TECH_ANCHOR,
        Category::Philosophy => PHILOSOPHY_ANCHOR,
        Category::Life => LIFE_ANCHOR,
        Category::Art => ART_ANCHOR,
    }
}

/// Category-clustered layout: the same repulsion/collision setup as force
/// mode, but per-category anchors replace centering and the link springs are
/// long and weak so clustering dominates over connectivity.
pub(super) fn compute_grouped_layout<R: Rng + ?Sized>(
    nodes: &[ThoughtNode],
    links: &[LinkData],
    config: &LayoutConfig,
    rng: &mut R,
) -> BTreeMap<String, Vec3> {
    let particles = particles_from_nodes(nodes, |node| Some(category_anchor(node.category)));
    let springs = springs_from_links(
        links,
        config.grouped.link_distance,
        config.grouped.link_strength,
    );
    let forces = ForceSet {
        many_body_strength: config.force.repulsion,
        collision_scale: config.force.collision_scale,
        positioning: Positioning::Anchors {
            strength: config.grouped.anchor_strength,
        },
    };

    let settled = run_simulation(
        particles,
        &springs,
        &forces,
        &config.simulation,
        config.force.iterations,
        rng,
    );
    extract_positions(settled, config.force.output_scale)
}
