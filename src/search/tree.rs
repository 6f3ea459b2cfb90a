//! Arena-backed search tree
//!
//! Nodes live in one `Vec` and refer to each other by `NodeId`. Parents own
//! their children through the id list; the parent id is a plain back link
//! used by backpropagation. Nodes are never removed; the whole tree is
//! dropped with the search.

use crate::board::Pos;
use crate::state::BoardState;

/// Handle of a node inside a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Search tree node: a position plus its simulation statistics
#[derive(Debug, Clone)]
pub struct Node {
    pub state: BoardState,
    /// Move that led here from the parent (`None` for the root)
    pub mv: Option<Pos>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Accumulated reward, +1/-1 per simulation
    pub value: f64,
    pub visits: u32,
    /// Candidate moves, materialized on first use
    candidates: Option<Vec<Pos>>,
}

impl Node {
    fn new(state: BoardState, mv: Option<Pos>, parent: Option<NodeId>) -> Self {
        Self {
            state,
            mv,
            parent,
            children: Vec::new(),
            value: 0.0,
            visits: 0,
            candidates: None,
        }
    }

    /// Candidate moves of this node's position, computed once.
    ///
    /// Computing them may turn the node terminal (no empty cell left in
    /// the candidate area).
    pub fn candidates(&mut self) -> &[Pos] {
        let state = &mut self.state;
        self.candidates.get_or_insert_with(|| state.candidate_moves())
    }

    /// Every candidate has been tried, judged by count alone.
    ///
    /// Expansion draws from all candidates, so two children may share a
    /// move; counting keeps that behavior instead of comparing move sets.
    pub fn is_fully_expanded(&mut self) -> bool {
        let expected = self.candidates().len();
        self.children.len() >= expected
    }

    /// Average reward, `None` before the first visit
    #[inline]
    pub fn mean_value(&self) -> Option<f64> {
        (self.visits > 0).then(|| self.value / self.visits as f64)
    }
}

/// Tree of positions rooted at the position being decided
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new(root: BoardState) -> Self {
        Self {
            nodes: vec![Node::new(root, None, None)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// All node ids in creation order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Append `state` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, state: BoardState, mv: Pos) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(state, Some(mv), Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Ids from `id` up to and including the root
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut cur = id;
        while let Some(parent) = self.nodes[cur.0].parent {
            path.push(parent);
            cur = parent;
        }
        path
    }

    /// Depth of `id` (the root is 0)
    pub fn depth(&self, id: NodeId) -> usize {
        self.path_to_root(id).len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Stone};

    fn child_state(parent: &BoardState, pos: Pos) -> BoardState {
        let mut state = parent.clone();
        state.play(pos);
        state
    }

    #[test]
    fn test_root_has_no_parent() {
        let tree = SearchTree::new(BoardState::new(Board::new(), Stone::Black));
        assert_eq!(tree.len(), 1);
        assert!(tree.get(tree.root()).parent.is_none());
        assert!(tree.get(tree.root()).mv.is_none());
    }

    #[test]
    fn test_add_child_links_both_ways() {
        let root_state = BoardState::new(Board::new(), Stone::Black);
        let mut tree = SearchTree::new(root_state.clone());
        let root = tree.root();

        let a = tree.add_child(root, child_state(&root_state, Pos::new(5, 5)), Pos::new(5, 5));
        let a_state = tree.get(a).state.clone();
        let b = tree.add_child(a, child_state(&a_state, Pos::new(4, 4)), Pos::new(4, 4));

        assert_eq!(tree.get(root).children, vec![a]);
        assert_eq!(tree.get(a).parent, Some(root));
        assert_eq!(tree.path_to_root(b), vec![b, a, root]);
        assert_eq!(tree.depth(b), 2);
        assert_eq!(tree.get(b).state.to_move(), Stone::Black);
    }

    #[test]
    fn test_fully_expanded_is_a_count() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        let root_state = BoardState::new(board, Stone::White);
        let mut tree = SearchTree::new(root_state.clone());
        let root = tree.root();
        assert_eq!(tree.get_mut(root).candidates().len(), 3);

        // The same move three times still fills the count
        for _ in 0..3 {
            assert!(!tree.get_mut(root).is_fully_expanded());
            tree.add_child(root, child_state(&root_state, Pos::new(1, 1)), Pos::new(1, 1));
        }
        assert!(tree.get_mut(root).is_fully_expanded());
    }

    #[test]
    fn test_mean_value() {
        let mut tree = SearchTree::new(BoardState::new(Board::new(), Stone::Black));
        let root = tree.root();
        assert_eq!(tree.get(root).mean_value(), None);
        let node = tree.get_mut(root);
        node.visits = 4;
        node.value = -2.0;
        assert_eq!(node.mean_value(), Some(-0.5));
    }
}
