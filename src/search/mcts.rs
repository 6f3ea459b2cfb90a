//! Monte-Carlo Tree Search with the UCT selection policy
//!
//! Each iteration runs the four phases in order and is never interrupted:
//! 1. **Selection**: walk down fully expanded nodes by UCT score
//! 2. **Expansion**: add one child drawn at random from the candidates
//! 3. **Simulation**: random playout from the new node to a result
//! 4. **Backpropagation**: credit the result along the path to the root
//!
//! The time budget is only checked between iterations.

use std::time::{Duration, Instant};

use rand::Rng;

use super::tree::{NodeId, SearchTree};
use crate::board::Stone;
use crate::rules::pick_random;
use crate::state::BoardState;

/// Default UCT exploration constant
pub const DEFAULT_EXPLORATION: f64 = 2.0;

/// Winner credited when a game runs out of candidate moves. Black moves
/// first, so the second player takes exhausted games.
pub const EXHAUSTED_BOARD_WINNER: Stone = Stone::White;

/// When to stop iterating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLimits {
    pub time_limit: Duration,
    /// Optional cap on iterations, whichever limit is hit first ends the search
    pub max_iterations: Option<u64>,
}

/// Totals reported after a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub iterations: u64,
    pub nodes: usize,
    pub elapsed: Duration,
}

/// One search over a tree rooted at the position to decide
pub struct Mcts {
    tree: SearchTree,
    exploration: f64,
    exhausted_winner: Stone,
    iterations: u64,
}

impl Mcts {
    pub fn new(root: BoardState, exploration: f64, exhausted_winner: Stone) -> Self {
        Self {
            tree: SearchTree::new(root),
            exploration,
            exhausted_winner,
            iterations: 0,
        }
    }

    #[inline]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Iterate until a limit is reached. At least one iteration always runs.
    pub fn search<R: Rng + ?Sized>(&mut self, limits: SearchLimits, rng: &mut R) -> SearchStats {
        let start = Instant::now();
        loop {
            self.iterate(rng);

            if limits.max_iterations.is_some_and(|max| self.iterations >= max) {
                break;
            }
            if start.elapsed() >= limits.time_limit {
                break;
            }
        }

        SearchStats {
            iterations: self.iterations,
            nodes: self.tree.len(),
            elapsed: start.elapsed(),
        }
    }

    /// Run one selection, simulation and backpropagation pass.
    ///
    /// Returns the node the simulation started from.
    pub fn iterate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> NodeId {
        let selected = self.select(rng);
        let winner = self.simulate(selected, rng);
        self.backpropagate(selected, winner);
        self.iterations += 1;

        if log::log_enabled!(log::Level::Trace) {
            let node = self.tree.get(selected);
            log::trace!(
                "iteration {}: depth {} move {:?} winner {}",
                self.iterations,
                self.tree.depth(selected),
                node.mv,
                winner
            );
        }

        selected
    }

    /// Tree policy: descend until a node can be expanded or is terminal.
    pub fn select<R: Rng + ?Sized>(&mut self, rng: &mut R) -> NodeId {
        let mut current = self.tree.root();
        loop {
            let node = self.tree.get_mut(current);
            if node.state.is_terminal() {
                return current;
            }

            // Materializing the candidates can end the game at this node
            let fully_expanded = node.is_fully_expanded();
            if node.state.is_terminal() {
                return current;
            }
            if !fully_expanded {
                return self.expand(current, rng);
            }

            match self.best_child(current) {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    /// Add one child reached by a random candidate move.
    ///
    /// Moves are drawn from all candidates, so the child may repeat a
    /// sibling's move. Returns `id` unchanged if it has no candidates.
    pub fn expand<R: Rng + ?Sized>(&mut self, id: NodeId, rng: &mut R) -> NodeId {
        let node = self.tree.get_mut(id);
        let Some(mv) = pick_random(node.candidates(), rng) else {
            return id;
        };

        let mut state = node.state.clone();
        state.play(mv);
        self.tree.add_child(id, state, mv)
    }

    /// Default policy: random playout from a copy of the node's position.
    pub fn simulate<R: Rng + ?Sized>(&self, id: NodeId, rng: &mut R) -> Stone {
        self.tree
            .get(id)
            .state
            .clone()
            .rollout(rng, self.exhausted_winner)
    }

    /// Credit `winner` on every node from `id` up to, not including, the root.
    ///
    /// A node gains 1 when its side to move is the winner and loses 1
    /// otherwise. The root only counts the visit.
    pub fn backpropagate(&mut self, id: NodeId, winner: Stone) {
        let mut current = id;
        while let Some(parent) = self.tree.get(current).parent {
            let node = self.tree.get_mut(current);
            node.visits += 1;
            node.value += if node.state.to_move() == winner { 1.0 } else { -1.0 };
            current = parent;
        }

        let root = self.tree.root();
        self.tree.get_mut(root).visits += 1;
    }

    /// UCT child selection.
    ///
    /// An unvisited child is returned immediately. Otherwise the child
    /// maximizing `mean + C * sqrt(ln(N) / n)` wins; ties keep the earlier child.
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.tree.get(id);
        let ln_parent = (node.visits as f64).ln();

        let mut best = None;
        let mut best_score = f64::NEG_INFINITY;
        for &child_id in &node.children {
            let child = self.tree.get(child_id);
            if child.visits == 0 {
                return Some(child_id);
            }

            let visits = child.visits as f64;
            let score = child.value / visits + self.exploration * (ln_parent / visits).sqrt();
            if score > best_score {
                best_score = score;
                best = Some(child_id);
            }
        }
        best
    }

    /// Final decision: the root child with the highest average reward.
    ///
    /// No exploration bonus; ties keep the earlier child.
    pub fn root_best_child(&self) -> Option<NodeId> {
        let root = self.tree.get(self.tree.root());

        let mut best = None;
        let mut best_value = f64::NEG_INFINITY;
        for &child_id in &root.children {
            let Some(mean) = self.tree.get(child_id).mean_value() else {
                continue;
            };
            if mean > best_value {
                best_value = mean;
                best = Some(child_id);
            }
        }
        best
    }
}
