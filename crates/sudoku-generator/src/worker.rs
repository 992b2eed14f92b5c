//! The worker-pool [`Factory`].
//!
//! Workers are independent `std::thread::spawn` tasks drawing attempt
//! indices from a shared counter and communicating results back over a
//! bounded `std::sync::mpsc::sync_channel`; the consumer's
//! [`GenerationStream`] iterator cancels outstanding work cooperatively when
//! dropped (a shared `AtomicBool` flag, checked both before starting a new
//! attempt and on every position-removal step within one, so in-flight
//! attempts terminate promptly rather than running to completion). Because
//! the channel is bounded, a worker can be blocked inside `send` when the
//! stream is dropped; `Drop` drains the channel before joining so that
//! send unblocks and the worker gets a chance to observe cancellation.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
        mpsc,
    },
    thread::{self, JoinHandle},
};

use rand::{SeedableRng, seq::SliceRandom};
use rand_pcg::Pcg64;
use sudoku_core::{Grid, Position};

use crate::{GeneratorError, PuzzleLayer, predicate};

/// The default number of solved grids precomputed into the factory's pool
/// when [`FactoryConfig::max_solutions`] is `None`.
const DEFAULT_POOL_SIZE: usize = 64;

/// Configuration recognized by the factory.
#[derive(Debug, Clone)]
pub struct FactoryConfig {
    /// Cap on the number of solved grids precomputed for the factory's
    /// pool; defaults to [`DEFAULT_POOL_SIZE`] when `None`.
    pub max_solutions: Option<usize>,
    /// `α` for the `NakedSingleTarget` predicate: the minimum fraction of
    /// cells that must be removed before it can match. Default `0.25`.
    pub naked_single_min_ratio: f64,
    /// Number of worker threads running attempts in parallel. Default:
    /// `std::thread::available_parallelism()`.
    pub worker_count: usize,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            max_solutions: None,
            naked_single_min_ratio: 0.25,
            worker_count: thread::available_parallelism().map_or(1, Into::into),
        }
    }
}

impl FactoryConfig {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.worker_count == 0 {
            return Err(GeneratorError::InvalidConfig {
                reason: "worker_count must be at least 1".to_owned(),
            });
        }
        if !(0.0..=1.0).contains(&self.naked_single_min_ratio) {
            return Err(GeneratorError::InvalidConfig {
                reason: format!(
                    "naked_single_min_ratio must be within [0.0, 1.0], got {}",
                    self.naked_single_min_ratio
                ),
            });
        }
        Ok(())
    }
}

/// Parallel puzzle factory: precomputes a pool of solved grids for a fixed
/// `side`, then produces puzzles matching a requested [`PuzzleLayer`] by
/// removing cells from random pool members across a worker-thread pool.
#[derive(Debug, Clone)]
pub struct Factory {
    pool: Arc<[Grid]>,
    config: FactoryConfig,
    master_seed: [u8; 32],
}

impl Factory {
    /// Builds a factory for boards of the given `side`, seeding its solved
    /// pool from a random master seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if `config.worker_count`
    /// is zero or `config.naked_single_min_ratio` is outside `[0.0, 1.0]`.
    /// Propagates [`GeneratorError::Grid`]/[`GeneratorError::Solver`] if the
    /// empty grid of the requested side cannot be built or solved.
    pub fn new(side: u8, config: FactoryConfig) -> Result<Self, GeneratorError> {
        Self::with_seed(side, config, rand::random())
    }

    /// Builds a factory exactly as [`Factory::new`] does, but from an
    /// explicit master seed: with a single worker, a fixed seed reproduces
    /// the same attempt sequence across runs.
    ///
    /// # Errors
    ///
    /// See [`Factory::new`].
    pub fn with_seed(
        side: u8,
        config: FactoryConfig,
        master_seed: [u8; 32],
    ) -> Result<Self, GeneratorError> {
        config.validate()?;
        let empty_rows = vec![vec![0u8; usize::from(side)]; usize::from(side)];
        let empty = Grid::from_rows(&empty_rows)?;
        let pool_size = config.max_solutions.unwrap_or(DEFAULT_POOL_SIZE).max(1);
        let pool: Vec<Grid> = sudoku_solver::solve(&empty, Some(pool_size))?.collect();
        if pool.is_empty() {
            return Err(GeneratorError::InvalidConfig {
                reason: format!("side {side} has no valid Sudoku completions"),
            });
        }
        Ok(Self {
            pool: Arc::from(pool),
            config,
            master_seed,
        })
    }

    /// The board side this factory generates puzzles for.
    #[must_use]
    pub fn side(&self) -> u8 {
        self.pool[0].side()
    }

    /// The number of solved grids in the factory's precomputed pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Produces up to `target_count * max_attempts` attempts across the
    /// configured worker pool, streaming results back in completion order.
    /// Each element is `Some(grid)` for an accepted attempt or `None` for an
    /// exhausted one; dropping the returned stream before it is drained
    /// cancels outstanding workers.
    #[must_use]
    pub fn generate(
        &self,
        layer: PuzzleLayer,
        target_count: usize,
        max_attempts: usize,
    ) -> GenerationStream {
        let total_attempts = target_count.saturating_mul(max_attempts);
        let worker_count = self.config.worker_count.max(1);
        let (tx, rx) = mpsc::sync_channel(worker_count);
        let cancel = Arc::new(AtomicBool::new(false));
        let next_attempt = Arc::new(AtomicUsize::new(0));
        let ratio = self.config.naked_single_min_ratio;

        let handles = (0..worker_count)
            .map(|worker_index| {
                let pool = Arc::clone(&self.pool);
                let tx = tx.clone();
                let cancel = Arc::clone(&cancel);
                let next_attempt = Arc::clone(&next_attempt);
                let seed = worker_seed(self.master_seed, worker_index);
                thread::spawn(move || {
                    let mut rng = Pcg64::from_seed(seed);
                    loop {
                        if cancel.load(Ordering::Relaxed) {
                            break;
                        }
                        let attempt_index = next_attempt.fetch_add(1, Ordering::Relaxed);
                        if attempt_index >= total_attempts {
                            break;
                        }
                        let result = run_attempt(&pool, layer, ratio, &mut rng, &cancel);
                        match &result {
                            Some(_) => log::trace!(
                                "factory worker {worker_index}: attempt {attempt_index} accepted for {layer}"
                            ),
                            None => log::debug!(
                                "factory worker {worker_index}: attempt {attempt_index} exhausted for {layer}"
                            ),
                        }
                        if tx.send(result).is_err() {
                            cancel.store(true, Ordering::Relaxed);
                            break;
                        }
                    }
                })
            })
            .collect();
        drop(tx);

        GenerationStream {
            receiver: rx,
            cancel,
            handles,
        }
    }
}

/// Derives a per-worker RNG seed from the factory's master seed and the
/// worker's index, so each worker owns an independent, reproducible RNG.
fn worker_seed(master: [u8; 32], worker_index: usize) -> [u8; 32] {
    let mut seed = master;
    for (byte, mix) in seed.iter_mut().zip((worker_index as u64).to_le_bytes()) {
        *byte ^= mix;
    }
    seed
}

/// One run of remove-and-test over a shuffled position sequence on a
/// random pool member. Returns the first working grid whose predicate
/// holds, or `None` if positions are exhausted or cancellation was
/// observed.
fn run_attempt(
    pool: &[Grid],
    layer: PuzzleLayer,
    ratio: f64,
    rng: &mut Pcg64,
    cancel: &AtomicBool,
) -> Option<Grid> {
    let solved = pool.choose(rng)?;
    let side = solved.side();
    let mut positions: Vec<Position> = Position::all(side).collect();
    positions.shuffle(rng);

    let mut working = solved.clone();
    let mut removed: u32 = 0;
    for pos in positions {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        working = working
            .with(pos.row(), pos.col(), 0)
            .expect("pos came from this grid's own position iteration");
        removed += 1;
        if predicate::holds(&working, layer, removed, ratio) {
            return Some(working);
        }
    }
    None
}

/// A lazy stream of generation attempts produced by [`Factory::generate`].
///
/// Each item is `Some(grid)` for an accepted attempt or `None` for an
/// exhausted one (exhaustion is informational, not an error). Dropping the
/// stream before it is drained sets the shared cancellation flag, drains
/// any results already queued so blocked workers can observe the flag and
/// exit, then joins the worker threads, discarding any in-flight,
/// partially computed attempt.
pub struct GenerationStream {
    receiver: mpsc::Receiver<Option<Grid>>,
    cancel: Arc<AtomicBool>,
    handles: Vec<JoinHandle<()>>,
}

impl Iterator for GenerationStream {
    type Item = Option<Grid>;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}

impl Drop for GenerationStream {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        // Workers may be blocked sending into a full channel; drain it so
        // they unblock, observe `cancel`, and exit before we join them.
        while self.receiver.recv().is_ok() {}
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::CandidateLayer;

    fn config(worker_count: usize) -> FactoryConfig {
        FactoryConfig {
            max_solutions: Some(8),
            naked_single_min_ratio: 0.25,
            worker_count,
        }
    }

    #[test]
    fn test_rejects_zero_worker_count() {
        let err = Factory::with_seed(4, config(0), [1u8; 32]).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_ratio_out_of_range() {
        let mut cfg = config(1);
        cfg.naked_single_min_ratio = 1.5;
        let err = Factory::with_seed(4, cfg, [1u8; 32]).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig { .. }));
    }

    #[test]
    fn test_pool_is_nonempty_and_all_solved() {
        let factory = Factory::with_seed(4, config(1), [1u8; 32]).unwrap();
        assert!(factory.pool_size() > 0);
        for grid in factory.pool.iter() {
            assert!(grid.is_full());
        }
    }

    #[test]
    fn test_naked_single_target_respects_predicate() {
        // Side 4 rather than 9 to keep the test fast; the predicate check
        // is side-independent.
        let factory = Factory::with_seed(4, config(1), [3u8; 32]).unwrap();
        let accepted: Vec<Grid> = factory
            .generate(PuzzleLayer::NakedSingle, 5, 200)
            .flatten()
            .collect();
        assert!(!accepted.is_empty(), "expected at least one accepted grid");
        for grid in &accepted {
            assert!(
                grid.all_candidates(CandidateLayer::Layer0HiddenSingle).is_empty(),
                "naked-single target must have no hidden singles"
            );
            assert!(!grid.all_candidates(CandidateLayer::Layer0NakedSingle).is_empty());
        }
    }

    #[test]
    fn test_hidden_single_target_excludes_naked_singles() {
        let factory = Factory::with_seed(4, config(2), [5u8; 32]).unwrap();
        let accepted: Vec<Grid> = factory
            .generate(PuzzleLayer::HiddenSingle, 3, 2000)
            .flatten()
            .collect();
        for grid in &accepted {
            assert!(grid.all_candidates(CandidateLayer::Layer0NakedSingle).is_empty());
            assert!(!grid.all_candidates(CandidateLayer::Layer0HiddenSingle).is_empty());
        }
    }

    #[test]
    fn test_consensus_target_excludes_naked_and_hidden_singles() {
        let factory = Factory::with_seed(4, config(2), [6u8; 32]).unwrap();
        let accepted: Vec<Grid> = factory
            .generate(PuzzleLayer::Consensus, 3, 4000)
            .flatten()
            .collect();
        for grid in &accepted {
            assert!(grid.all_candidates(CandidateLayer::Layer0NakedSingle).is_empty());
            assert!(grid.all_candidates(CandidateLayer::Layer0HiddenSingle).is_empty());
            assert!(!grid.all_candidates(CandidateLayer::Layer1Consensus).is_empty());
        }
    }

    #[test]
    fn test_generation_stream_can_be_cancelled_early() {
        let factory = Factory::with_seed(4, config(2), [4u8; 32]).unwrap();
        let mut stream = factory.generate(PuzzleLayer::NakedSingle, 1000, 1000);
        let _ = stream.next();
        drop(stream); // must not hang
    }

    #[test]
    fn test_single_worker_fixed_seed_is_reproducible() {
        let factory_a = Factory::with_seed(4, config(1), [9u8; 32]).unwrap();
        let factory_b = Factory::with_seed(4, config(1), [9u8; 32]).unwrap();
        let a: Vec<_> = factory_a.generate(PuzzleLayer::NakedSingle, 3, 50).collect();
        let b: Vec<_> = factory_b.generate(PuzzleLayer::NakedSingle, 3, 50).collect();
        assert_eq!(a, b);
    }
}
