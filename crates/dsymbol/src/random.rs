//! Random D-symbols by random surgery on catalog symbols.
//!
//! Model
//! - Start from a base symbol (the catalog, or `cfg.bases`), then apply a
//!   random number of random steps: orientation cover, dual, truncation, the
//!   other group-preserving edits, and single symmetry-breaking steps. Steps
//!   that do not apply, or that push the size over `cfg.max_size`, are skipped.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `index` of a stream can be regenerated on its own.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::algorithms::{dualize, orientate};
use crate::edit::{break_symmetries, BreakCfg, Edit};
use crate::symbol::{catalog, DSymbol};

/// Distribution of the number of surgery steps.
#[derive(Clone, Copy, Debug)]
pub enum StepCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl StepCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            StepCount::Fixed(n) => n,
            StepCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RandomSymbolCfg {
    /// Start symbols; the catalog when empty.
    pub bases: Vec<DSymbol>,
    pub steps: StepCount,
    /// Largest accepted symbol size.
    pub max_size: usize,
}

impl Default for RandomSymbolCfg {
    fn default() -> Self {
        Self {
            bases: Vec::new(),
            steps: StepCount::Uniform { min: 0, max: 4 },
            max_size: 48,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Orientate,
    Dualize,
    Truncate,
    Contract,
    GlueEdge,
    GlueVertex,
    Break,
}

const STEPS: [Step; 7] = [
    Step::Orientate,
    Step::Dualize,
    Step::Truncate,
    Step::Contract,
    Step::GlueEdge,
    Step::GlueVertex,
    Step::Break,
];

fn apply_step<R: Rng>(ds: &DSymbol, step: Step, rng: &mut R) -> Option<DSymbol> {
    let edges = ds.orbit_count(0, 2);
    let vertices = ds.orbit_count(1, 2);
    if edges == 0 || vertices == 0 {
        return None;
    }
    let edge = rng.gen_range(1..=edges);
    let vertex = rng.gen_range(1..=vertices);
    match step {
        Step::Orientate => Some(orientate(ds)),
        Step::Dualize => Some(dualize(ds)),
        Step::Truncate => Edit::TruncateVertex(vertex).apply(ds),
        Step::Contract => Edit::ContractEdge(edge).apply(ds),
        Step::GlueEdge => Edit::GlueTilesAroundEdge(edge).apply(ds),
        Step::GlueVertex => Edit::GlueTilesAroundVertex(vertex).apply(ds),
        Step::Break => break_symmetries(ds, &BreakCfg::default()).pop(),
    }
}

/// Draw one symbol. `None` only when the chosen base already exceeds
/// `cfg.max_size`.
pub fn draw_symbol(cfg: &RandomSymbolCfg, tok: ReplayToken) -> Option<DSymbol> {
    let mut rng = tok.to_std_rng();
    let catalog_bases;
    let bases = if cfg.bases.is_empty() {
        catalog_bases = catalog::all();
        &catalog_bases
    } else {
        &cfg.bases
    };
    let mut ds = bases.choose(&mut rng)?.clone();
    if ds.size() > cfg.max_size {
        return None;
    }
    let steps = cfg.steps.sample(&mut rng);
    for _ in 0..steps {
        let step = STEPS[rng.gen_range(0..STEPS.len())];
        match apply_step(&ds, step, &mut rng) {
            Some(next) if next.size() <= cfg.max_size => ds = next,
            _ => tracing::trace!(?step, size = ds.size(), "random step skipped"),
        }
    }
    tracing::debug!(seed = tok.seed, index = tok.index, size = ds.size(), "drew symbol");
    Some(ds)
}

/// Draws `0..count` of the stream for `seed`.
pub fn draw_symbols(cfg: &RandomSymbolCfg, seed: u64, count: usize) -> Vec<DSymbol> {
    (0..count as u64)
        .filter_map(|index| draw_symbol(cfg, ReplayToken { seed, index }))
        .collect()
}
