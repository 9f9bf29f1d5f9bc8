use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::LayoutConfig;
use crate::layout::{Layout, compute_layout_with_rng};
use crate::model::{LayoutMode, ThoughtNode};

/// Owns layout recomputation and snapshot publication.
///
/// Recomputation runs synchronously on every node-set or mode change and the
/// finished `Layout` is swapped in as one immutable `Arc`, so the frame loop
/// never observes a partial result. Requests are sequenced: if a caller runs
/// a computation off-thread and a newer request was issued meanwhile, the
/// stale publish is rejected. Last write wins by request order, not by
/// completion order.
#[derive(Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
    rng: StdRng,
    next_seq: u64,
    snapshot: Arc<Layout>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            next_seq: 0,
            snapshot: Arc::new(Layout::empty(LayoutMode::Spiral)),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Synchronously recompute and publish; the common single-threaded path.
    pub fn update(&mut self, nodes: &[ThoughtNode], mode: LayoutMode) -> Arc<Layout> {
        let seq = self.begin_request();
        let layout = compute_layout_with_rng(nodes, mode, &self.config, &mut self.rng);
        self.publish(seq, layout);
        self.snapshot()
    }

    /// Reserve a sequence number for a layout computation. A later call
    /// supersedes every earlier one that has not yet published.
    pub fn begin_request(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Publish the result of request `seq`. Returns false (and drops the
    /// layout) when a newer request has been issued since.
    pub fn publish(&mut self, seq: u64, layout: Layout) -> bool {
        if seq + 1 != self.next_seq {
            return false;
        }
        self.snapshot = Arc::new(layout);
        true
    }

    /// The currently published layout snapshot.
    pub fn snapshot(&self) -> Arc<Layout> {
        Arc::clone(&self.snapshot)
    }
}
