//! Iterative deepening and fixed-depth drivers.
//!
//! The drivers are the only place a [`SearchCancelled`] is caught. A
//! cancelled iteration is dropped whole; the result of the last iteration
//! that ran to completion is kept.

use isolation_core::{GameState, SearchResult};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SearchCancelled;
use crate::search::Searcher;

/// Depth-limited search algorithm run by the drivers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    #[default]
    Minimax,
    #[serde(alias = "alpha_beta", alias = "alpha-beta")]
    AlphaBeta,
}

/// What a driver produced for one move selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeepeningOutcome {
    /// Result of the deepest completed iteration, or the sentinel
    pub result: SearchResult,
    /// Depth of that iteration (0 if none completed)
    pub completed_depth: u32,
    /// Nodes entered across all iterations, cancelled ones included
    pub nodes: u64,
    /// Whether the time guard stopped the search
    pub cancelled: bool,
}

/// `(-inf, None)`: returned when no iteration completed.
pub const SENTINEL: SearchResult = SearchResult::none(f64::NEG_INFINITY);

impl DeepeningOutcome {
    /// Outcome for a root without legal moves: the sentinel, nothing searched.
    pub const fn no_moves() -> Self {
        Self {
            result: SENTINEL,
            completed_depth: 0,
            nodes: 0,
            cancelled: false,
        }
    }
}

/// One root search at `depth` with the maximizing player to move.
pub fn search_root<S: GameState>(
    searcher: &mut Searcher<'_, S>,
    root: &S,
    depth: u32,
    method: SearchMethod,
) -> Result<SearchResult, SearchCancelled> {
    match method {
        SearchMethod::Minimax => searcher.minimax(root, depth, true),
        SearchMethod::AlphaBeta => {
            searcher.alphabeta(root, depth, f64::NEG_INFINITY, f64::INFINITY, true)
        }
    }
}

/// Searches at depth 1, 2, 3, ... until the time guard fires.
///
/// There is no depth cap: the loop only ends on cancellation.
pub fn iterative_deepening<S: GameState>(
    searcher: &mut Searcher<'_, S>,
    root: &S,
    method: SearchMethod,
) -> DeepeningOutcome {
    let mut best = SENTINEL;
    let mut completed_depth = 0;

    for depth in 1u32.. {
        match search_root(searcher, root, depth, method) {
            Ok(result) => {
                debug!(
                    "{:?} depth {} complete: score {} move {:?} ({} nodes)",
                    method,
                    depth,
                    result.score,
                    result.best_move,
                    searcher.nodes()
                );
                best = result;
                completed_depth = depth;
            }
            Err(cancelled) => {
                debug!("depth {} abandoned: {}", depth, cancelled);
                break;
            }
        }
    }

    DeepeningOutcome {
        result: best,
        completed_depth,
        nodes: searcher.nodes(),
        cancelled: true,
    }
}

/// Exactly one search at `depth`.
///
/// Returns the sentinel without searching when the root has no legal moves,
/// and also when the time guard fires before the search completes.
pub fn fixed_depth<S: GameState>(
    searcher: &mut Searcher<'_, S>,
    root: &S,
    depth: u32,
    method: SearchMethod,
) -> DeepeningOutcome {
    if root.legal_moves().is_empty() {
        debug!("no legal moves at the root, skipping search");
        return DeepeningOutcome::no_moves();
    }

    match search_root(searcher, root, depth, method) {
        Ok(result) => DeepeningOutcome {
            result,
            completed_depth: depth,
            nodes: searcher.nodes(),
            cancelled: false,
        },
        Err(cancelled) => {
            debug!("fixed-depth search at depth {} abandoned: {}", depth, cancelled);
            DeepeningOutcome {
                result: SENTINEL,
                completed_depth: 0,
                nodes: searcher.nodes(),
                cancelled: true,
            }
        }
    }
}

#[cfg(test)]
#[path = "deepening_tests.rs"]
mod deepening_tests;
