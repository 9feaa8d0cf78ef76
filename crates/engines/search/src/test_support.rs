//! Scripted game trees for exercising the search without a real board.

use std::cell::Cell;
use std::rc::Rc;

use isolation_core::{GameState, Player, Square, TimeLeft};

use crate::guard::TimeGuard;
use crate::search::Searcher;

/// Location every player reports in a scripted tree.
pub const HOME: Square = Square::new(9, 9);

/// Move that leads from a leaf back to itself.
pub const PASS: Square = Square::new(-1, -1);

pub enum Tree {
    /// Scored position that still has a move, so it is evaluated at depth 0
    Leaf(f64),
    /// Position whose player to move has no legal moves
    Stuck,
    Node(f64, Vec<(Square, Tree)>),
}

pub fn leaf(score: f64) -> Tree {
    Tree::Leaf(score)
}

pub fn stuck() -> Tree {
    Tree::Stuck
}

/// Inner node scoring 0 if evaluated.
pub fn node(children: Vec<(Square, Tree)>) -> Tree {
    Tree::Node(0.0, children)
}

pub fn mv(n: i8) -> Square {
    Square::new(0, n)
}

struct Flat {
    score: f64,
    children: Vec<(Square, usize)>,
}

/// A position in a scripted tree. The root player is `Player::One`.
#[derive(Clone)]
pub struct TreeState {
    nodes: Rc<Vec<Flat>>,
    at: usize,
    active: Player,
}

impl TreeState {
    pub fn new(tree: Tree) -> Self {
        fn flatten(tree: Tree, out: &mut Vec<Flat>) -> usize {
            let id = out.len();
            match tree {
                Tree::Leaf(score) => out.push(Flat {
                    score,
                    children: vec![(PASS, id)],
                }),
                Tree::Stuck => out.push(Flat {
                    score: 0.0,
                    children: Vec::new(),
                }),
                Tree::Node(score, children) => {
                    out.push(Flat {
                        score,
                        children: Vec::new(),
                    });
                    let ids: Vec<(Square, usize)> = children
                        .into_iter()
                        .map(|(m, child)| (m, flatten(child, out)))
                        .collect();
                    out[id].children = ids;
                }
            }
            id
        }

        let mut nodes = Vec::new();
        flatten(tree, &mut nodes);
        Self {
            nodes: Rc::new(nodes),
            at: 0,
            active: Player::One,
        }
    }

    pub fn score(&self) -> f64 {
        self.nodes[self.at].score
    }
}

impl GameState for TreeState {
    fn legal_moves(&self) -> Vec<Square> {
        self.nodes[self.at].children.iter().map(|&(m, _)| m).collect()
    }

    fn apply(&self, mv: Square) -> Self {
        let next = self.nodes[self.at]
            .children
            .iter()
            .find(|&&(m, _)| m == mv)
            .map(|&(_, id)| id)
            .expect("move not in scripted tree");
        Self {
            nodes: Rc::clone(&self.nodes),
            at: next,
            active: self.active.opponent(),
        }
    }

    fn active_player(&self) -> Player {
        self.active
    }

    fn player_location(&self, _player: Player) -> Option<Square> {
        Some(HOME)
    }
}

/// Evaluator reading the scripted score.
pub fn tree_score(state: &TreeState, _player: Player) -> f64 {
    state.score()
}

/// Searcher over a scripted tree for `Player::One`.
pub fn tree_searcher(clock: &dyn TimeLeft) -> Searcher<'_, TreeState> {
    Searcher::new(&tree_score, TimeGuard::new(clock, THRESHOLD_MS), Player::One)
}

/// Clock with plenty of time that counts how often it is read.
pub fn counting_clock(calls: &Cell<u64>) -> impl Fn() -> f64 + '_ {
    move || {
        calls.set(calls.get() + 1);
        1_000.0
    }
}

/// Clock that reports plenty of time for `budget` reads, then 0.
pub fn expiring_clock(calls: &Cell<u64>, budget: u64) -> impl Fn() -> f64 + '_ {
    move || {
        calls.set(calls.get() + 1);
        if calls.get() > budget { 0.0 } else { 1_000.0 }
    }
}

/// Threshold used with the fake clocks.
pub const THRESHOLD_MS: f64 = 10.0;
