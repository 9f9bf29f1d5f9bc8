use super::*;

/// Uniform-density distribution on a sphere via the golden-angle spiral.
/// Every position sits exactly on the configured radius.
pub(super) fn compute_sphere_layout(
    nodes: &[ThoughtNode],
    config: &SphereConfig,
) -> BTreeMap<String, Vec3> {
    let n = nodes.len();
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0f32.sqrt());
    let r = config.radius;

    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            // A single node would divide by zero; pin it to a fixed
            // reference point on the equator instead.
            let y_norm = if n <= 1 {
                0.0
            } else {
                1.0 - (2.0 * i as f32) / (n as f32 - 1.0)
            };
            let ring = (1.0 - y_norm * y_norm).max(0.0).sqrt();
            let theta = golden_angle * i as f32;
            let position = Vec3::new(theta.cos() * ring * r, y_norm * r, theta.sin() * ring * r);
            (node.id.clone(), position)
        })
        .collect()
}
