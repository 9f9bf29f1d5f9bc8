use once_cell::sync::Lazy;
use rand::Rng;

use crate::config::DatasetConfig;
use crate::model::{Category, ThoughtNode};

struct FragmentSet {
    category: Category,
    titles: &'static [&'static str],
    contents: &'static [&'static str],
}

static FRAGMENTS: Lazy<Vec<FragmentSet>> = Lazy::new(|| {
    vec![
        FragmentSet {
            category: Category::Tech,
            titles: &[
                "Neural Handshake",
                "Kernel Panic",
                "Legacy Code",
                "Entropy & Refactor",
                "Quantum Bit",
                "Daemon Process",
            ],
            contents: &[
                "Found a ghost in the shell script today, a loop computing digits of Pi for no one.",
                "Refactoring the auth module feels like archaeology. The old comments are hieroglyphs.",
                "Optimized the rendering pipeline. We paint light on a cave wall and call it reality.",
                "Deployed the new protocol. Data flows through the fiber like a slow constellation.",
            ],
        },
        FragmentSet {
            category: Category::Philosophy,
            titles: &[
                "Void Stares Back",
                "Ship of Theseus",
                "Digital Samsara",
                "Ontological Glitch",
                "Ethics of API",
            ],
            contents: &[
                "If I upload my mind to the cloud, do I keep my suffering, or is that a hardware limit?",
                "The map is not the territory, but in cyberspace the map is the territory.",
                "Time is a linked list with no previous pointer. We only traverse forward.",
                "Watched the chaos settle into a pattern today. The first simulation theory was a sutra.",
            ],
        },
        FragmentSet {
            category: Category::Art,
            titles: &[
                "Fractal Beauty",
                "Color Space",
                "Negative Space",
                "Voxel Sculpture",
                "Glitch Aesthetics",
            ],
            contents: &[
                "Studying the Mandelbrot set for UI inspiration. Infinite complexity from simple rules.",
                "Gold against the void. A lone lantern in a dark palace. Contrast is drama.",
                "A bug tore a beautiful artifact across the screen. I kept the screenshot, then fixed it.",
                "Perspective is a lie we agree upon. In here I move the vanishing point at will.",
            ],
        },
        FragmentSet {
            category: Category::Life,
            titles: &[
                "Midnight Tea",
                "Rain on Window",
                "Silence",
                "Urban Decay",
                "Human Connection",
            ],
            contents: &[
                "3 AM. The city below looks like a printed circuit board. The quiet is the loudest data point.",
                "Neon buzzing over ancient brick. We live in the ruins of tomorrow.",
                "Forgot to eat while coding again. The body is a peripheral that needs charging.",
                "The cat walked across the keyboard and added some entropy to the codebase.",
            ],
        },
    ]
});

/// Generate a mock timeline of thoughts, sorted chronologically. Fully
/// deterministic given the rng, so tests and the CLI can pin a seed.
pub fn generate_nodes<R: Rng + ?Sized>(config: &DatasetConfig, rng: &mut R) -> Vec<ThoughtNode> {
    let mut nodes: Vec<ThoughtNode> = (0..config.count)
        .map(|i| {
            let year = if config.max_year > config.min_year {
                rng.random_range(config.min_year..config.max_year)
            } else {
                config.min_year
            };
            let month = rng.random_range(1..=12u32);
            // Capped at 28 so every generated date is valid.
            let day = rng.random_range(1..=28u32);

            let fragments = &FRAGMENTS[rng.random_range(0..FRAGMENTS.len())];
            let title = fragments.titles[rng.random_range(0..fragments.titles.len())];
            let content = fragments.contents[rng.random_range(0..fragments.contents.len())];

            ThoughtNode {
                id: format!("node-{i}"),
                title: format!("{title} #{}", rng.random_range(0..100)),
                category: fragments.category,
                content: content.to_string(),
                date: format!("{year:04}-{month:02}-{day:02}"),
                importance: rng.random_range(config.importance_min..config.importance_max),
            }
        })
        .collect();

    // ISO dates sort lexicographically.
    nodes.sort_by(|a, b| a.date.cmp(&b.date));
    nodes
}

/// Timeline scrub: keep only thoughts that existed on or before `max_year`.
/// Nodes with unparsable dates stay visible rather than silently vanishing.
pub fn filter_by_year(nodes: &[ThoughtNode], max_year: i32) -> Vec<ThoughtNode> {
    nodes
        .iter()
        .filter(|node| node.year().is_none_or(|year| year <= max_year))
        .cloned()
        .collect()
}
