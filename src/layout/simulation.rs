use std::collections::HashMap;

use rand::Rng;

use super::types::Vec3;
use crate::config::SimulationConfig;

/// Transient per-node physics state, owned by the simulation for exactly one
/// run and discarded after position extraction.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: String,
    /// Collision radius before the force set's scale is applied.
    pub radius: f32,
    /// Fixed point this particle is pulled toward when the force set uses
    /// anchor positioning. `None` falls back to the origin.
    pub anchor: Option<Vec3>,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Particle {
    pub fn new(id: impl Into<String>, radius: f32, anchor: Option<Vec3>) -> Self {
        Self {
            id: id.into(),
            radius,
            anchor,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }
}

/// An attraction between two particles, addressed by id. Springs whose
/// endpoints are unknown are dropped when the simulation indexes them;
/// duplicates simply pull twice.
#[derive(Debug, Clone)]
pub struct Spring {
    pub source: String,
    pub target: String,
    /// Rest distance the spring relaxes toward.
    pub distance: f32,
    pub strength: f32,
}

/// How the system is kept from drifting: either the centroid is pinned to a
/// fixed point, or each particle is pulled toward its own anchor.
#[derive(Debug, Clone, Copy)]
pub enum Positioning {
    Center(Vec3),
    Anchors { strength: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct ForceSet {
    /// Many-body strength; negative values repel (d3 convention).
    pub many_body_strength: f32,
    /// Multiplier on combined radii when resolving overlaps.
    pub collision_scale: f32,
    pub positioning: Positioning,
}

/// Advance a particle system for a fixed number of discrete steps and return
/// the settled particles. This is a batch computation with no wall-clock
/// timing; each call scatters fresh initial positions from `rng` and
/// integrates fully before returning, so no partially-stepped state can ever
/// be observed.
pub fn run_simulation<R: Rng + ?Sized>(
    mut particles: Vec<Particle>,
    springs: &[Spring],
    forces: &ForceSet,
    params: &SimulationConfig,
    steps: usize,
    rng: &mut R,
) -> Vec<Particle> {
    if particles.is_empty() {
        return particles;
    }

    let indexed = index_springs(&particles, springs);
    scatter(&mut particles, params.initial_spread, rng);

    let mut alpha = 1.0f32;
    for _ in 0..steps {
        alpha += (0.0 - alpha) * params.alpha_decay;
        step(&mut particles, &indexed, forces, params, alpha);
    }
    particles
}

/// Resolve spring endpoints to particle indices, ignoring unknown ids.
fn index_springs(particles: &[Particle], springs: &[Spring]) -> Vec<(usize, usize, f32, f32)> {
    let by_id: HashMap<&str, usize> = particles
        .iter()
        .enumerate()
        .map(|(idx, p)| (p.id.as_str(), idx))
        .collect();

    springs
        .iter()
        .filter_map(|spring| {
            let source = *by_id.get(spring.source.as_str())?;
            let target = *by_id.get(spring.target.as_str())?;
            if source == target {
                return None;
            }
            Some((source, target, spring.distance, spring.strength))
        })
        .collect()
}

fn scatter<R: Rng + ?Sized>(particles: &mut [Particle], spread: f32, rng: &mut R) {
    if spread <= 0.0 {
        return;
    }
    for particle in particles.iter_mut() {
        particle.position = Vec3::new(
            rng.random_range(-spread..spread),
            rng.random_range(-spread..spread),
            rng.random_range(-spread..spread),
        );
        particle.velocity = Vec3::ZERO;
    }
}

fn step(
    particles: &mut [Particle],
    springs: &[(usize, usize, f32, f32)],
    forces: &ForceSet,
    params: &SimulationConfig,
    alpha: f32,
) {
    let n = particles.len();

    // Many-body repulsion between every pair.
    for i in 0..n {
        for j in (i + 1)..n {
            let delta = particles[i].position - particles[j].position;
            let dist_sq = delta.length_squared().max(1e-4);
            let magnitude = -forces.many_body_strength * alpha / dist_sq;
            let push = delta * (magnitude / dist_sq.sqrt());
            particles[i].velocity += push;
            particles[j].velocity -= push;
        }
    }

    // Spring attraction toward each link's rest distance.
    for &(source, target, distance, strength) in springs {
        let delta = (particles[target].position + particles[target].velocity)
            - (particles[source].position + particles[source].velocity);
        let len = delta.length().max(1e-6);
        let k = (len - distance) / len * alpha * strength;
        let shift = delta * (k * 0.5);
        particles[target].velocity -= shift;
        particles[source].velocity += shift;
    }

    // Anchor pull, per axis.
    if let Positioning::Anchors { strength } = forces.positioning {
        for particle in particles.iter_mut() {
            let target = particle.anchor.unwrap_or(Vec3::ZERO);
            particle.velocity += (target - particle.position) * (strength * alpha);
        }
    }

    // Damped integration.
    for particle in particles.iter_mut() {
        particle.velocity = particle.velocity * params.damping;
        particle.position += particle.velocity;
    }

    // Centering translates the whole system so the centroid sits on the
    // requested point; it does not scale with alpha.
    if let Positioning::Center(center) = forces.positioning {
        let mut centroid = Vec3::ZERO;
        for particle in particles.iter() {
            centroid += particle.position;
        }
        centroid = centroid * (1.0 / n as f32);
        let shift = centroid - center;
        for particle in particles.iter_mut() {
            particle.position -= shift;
        }
    }

    for _ in 0..params.collision_iterations {
        resolve_collisions(particles, forces.collision_scale);
    }
}

/// Push overlapping pairs apart positionally until each pair respects the
/// scaled sum of their radii.
fn resolve_collisions(particles: &mut [Particle], collision_scale: f32) {
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let min_sep = (particles[i].radius + particles[j].radius) * collision_scale;
            let mut delta = particles[i].position - particles[j].position;
            let mut dist = delta.length();
            if dist >= min_sep {
                continue;
            }
            if dist < 1e-6 {
                // Coincident particles get a fixed-axis nudge.
                delta = Vec3::new(min_sep, 0.0, 0.0);
                dist = min_sep;
            }
            let push = delta * ((min_sep - dist) / dist * 0.5);
            particles[i].position += push;
            particles[j].position -= push;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn forces_centered() -> ForceSet {
        ForceSet {
            many_body_strength: -15.0,
            collision_scale: 1.5,
            positioning: Positioning::Center(Vec3::ZERO),
        }
    }

    fn run(
        particles: Vec<Particle>,
        springs: &[Spring],
        forces: &ForceSet,
        seed: u64,
    ) -> Vec<Particle> {
        let params = SimulationConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        run_simulation(particles, springs, forces, &params, 200, &mut rng)
    }

    #[test]
    fn empty_system_is_a_no_op() {
        let settled = run(Vec::new(), &[], &forces_centered(), 0);
        assert!(settled.is_empty());
    }

    #[test]
    fn unknown_spring_endpoints_are_ignored() {
        let particles = vec![
            Particle::new("a", 1.0, None),
            Particle::new("b", 1.0, None),
        ];
        let springs = vec![
            Spring {
                source: "a".to_string(),
                target: "missing".to_string(),
                distance: 2.0,
                strength: 1.0,
            },
            Spring {
                source: "ghost".to_string(),
                target: "b".to_string(),
                distance: 2.0,
                strength: 1.0,
            },
        ];
        let settled = run(particles, &springs, &forces_centered(), 5);
        assert_eq!(settled.len(), 2);
        assert!(settled.iter().all(|p| p.position.is_finite()));
    }

    #[test]
    fn duplicate_springs_are_benign() {
        let particles = vec![
            Particle::new("a", 1.0, None),
            Particle::new("b", 1.0, None),
        ];
        let spring = Spring {
            source: "a".to_string(),
            target: "b".to_string(),
            distance: 2.0,
            strength: 0.5,
        };
        let springs = vec![spring.clone(), spring];
        let settled = run(particles, &springs, &forces_centered(), 5);
        assert!(settled.iter().all(|p| p.position.is_finite()));
    }

    #[test]
    fn collision_separation_holds_after_settling() {
        let particles: Vec<Particle> = (0..12)
            .map(|i| Particle::new(format!("p{i}"), 1.2, None))
            .collect();
        let forces = forces_centered();
        let settled = run(particles, &[], &forces, 11);
        for i in 0..settled.len() {
            for j in (i + 1)..settled.len() {
                let min_sep = (settled[i].radius + settled[j].radius) * forces.collision_scale;
                let dist = settled[i].position.distance(settled[j].position);
                assert!(
                    dist >= min_sep * 0.9,
                    "particles {i} and {j} too close: {dist} < {min_sep}"
                );
            }
        }
    }

    #[test]
    fn centering_pins_the_centroid() {
        let particles: Vec<Particle> = (0..8)
            .map(|i| Particle::new(format!("p{i}"), 1.0, None))
            .collect();
        let settled = run(particles, &[], &forces_centered(), 21);
        let mut centroid = Vec3::ZERO;
        for particle in &settled {
            centroid += particle.position;
        }
        centroid = centroid * (1.0 / settled.len() as f32);
        assert!(centroid.length() < 1.0, "centroid drifted: {centroid:?}");
    }

    #[test]
    fn anchors_pull_particles_toward_their_targets() {
        let near = Vec3::new(30.0, 0.0, 0.0);
        let far = Vec3::new(-30.0, 0.0, 0.0);
        let particles = vec![
            Particle::new("a", 1.0, Some(near)),
            Particle::new("b", 1.0, Some(far)),
        ];
        let forces = ForceSet {
            many_body_strength: -15.0,
            collision_scale: 1.5,
            positioning: Positioning::Anchors { strength: 0.5 },
        };
        let settled = run(particles, &[], &forces, 2);
        let a = &settled[0];
        let b = &settled[1];
        assert!(a.position.distance(near) < a.position.distance(far));
        assert!(b.position.distance(far) < b.position.distance(near));
    }

    #[test]
    fn same_seed_reproduces_positions() {
        let make = || {
            (0..6)
                .map(|i| Particle::new(format!("p{i}"), 1.0, None))
                .collect::<Vec<_>>()
        };
        let a = run(make(), &[], &forces_centered(), 77);
        let b = run(make(), &[], &forces_centered(), 77);
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.position, pb.position);
        }
    }
}
