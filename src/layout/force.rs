use super::*;

/// Force-directed layout: repulsion spreads the cloud, strong short links
/// pull related nodes together, and the centroid stays pinned at the origin.
/// Link strengths are uniform here; only the topology matters.
pub(super) fn compute_force_layout<R: Rng + ?Sized>(
    nodes: &[ThoughtNode],
    links: &[LinkData],
    config: &LayoutConfig,
    rng: &mut R,
) -> BTreeMap<String, Vec3> {
    let particles = particles_from_nodes(nodes, |_| None);
    let springs = springs_from_links(
        links,
        config.force.link_distance,
        config.force.link_strength,
    );
    let forces = ForceSet {
        many_body_strength: config.force.repulsion,
        collision_scale: config.force.collision_scale,
        positioning: Positioning::Center(Vec3::ZERO),
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
