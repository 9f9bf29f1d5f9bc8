use super::*;

/// Chronological spiral: nodes wind outward in input order, with a gentle
/// vertical wave. Later nodes sit farther out; radius growth is unbounded.
pub(super) fn compute_spiral_layout(
    nodes: &[ThoughtNode],
    config: &SpiralConfig,
) -> BTreeMap<String, Vec3> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let i = i as f32;
            let angle = i * config.angle_step;
            let radius = config.base_radius + i * config.radius_step;
            let x = angle.cos() * radius;
            let z = angle.sin() * radius;
            let y = (i * config.vertical_wave).sin() * radius * config.vertical_scale;
            (node.id.clone(), Vec3::new(x, y, z))
        })
        .collect()
}
