use std::collections::BTreeMap;

use crate::layout::Vec3;

/// Per-frame smoothing between displayed positions and layout targets.
///
/// The layout engine publishes immutable target snapshots; this driver owns
/// the separate, mutable "current position" store the renderer reads. Every
/// frame it moves each position a fixed fraction of the remaining distance
/// toward its target, so a mode switch animates instead of snapping.
#[derive(Debug, Clone)]
pub struct PositionInterpolator {
    lerp_factor: f32,
    current: BTreeMap<String, Vec3>,
}

impl PositionInterpolator {
    pub fn new(lerp_factor: f32) -> Self {
        Self {
            // Outside [0, 1] the blend would diverge or overshoot.
            lerp_factor: lerp_factor.clamp(0.0, 1.0),
            current: BTreeMap::new(),
        }
    }

    /// Advance one frame toward `targets`.
    ///
    /// Ids no longer targeted (filtered out by the timeline) are dropped;
    /// ids seen for the first time start at their target so they never pass
    /// through an undefined position.
    pub fn advance(&mut self, targets: &BTreeMap<String, Vec3>) {
        self.current.retain(|id, _| targets.contains_key(id));
        for (id, &target) in targets {
            match self.current.get_mut(id) {
                Some(position) => *position = position.lerp(target, self.lerp_factor),
                None => {
                    self.current.insert(id.clone(), target);
                }
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Vec3> {
        self.current.get(id).copied()
    }

    pub fn positions(&self) -> &BTreeMap<String, Vec3> {
        &self.current
    }
}
