//! Common test utilities for the advsearch test suite.
//!
//! Provides a synthetic game played over an explicit tree, so searches can
//! be run against hand-built positions and checked with an exhaustive
//! reference that never prunes.

use std::rc::Rc;

use advsearch::GameState;
use rand::{Rng, rngs::StdRng};

/// One node of an explicit game tree: an interior position with successor
/// subtrees, or a leaf with a fixed score for the maximizing side.
#[derive(Debug)]
pub enum Node {
    Leaf(f64),
    Branch(Vec<Rc<Node>>),
}

/// Build a leaf node.
pub fn leaf(value: f64) -> Rc<Node> {
    Rc::new(Node::Leaf(value))
}

/// Build an interior node from its successor subtrees.
pub fn branch(children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Branch(children))
}

/// The side to move in a [`TreeState`]; the game starts with [`Side::Max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    pub fn flip(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// A position in a tree game: the current node, whose turn it is, and how
/// many plies have been played. Moves are child indexes.
#[derive(Debug, Clone)]
pub struct TreeState {
    node: Rc<Node>,
    to_move: Side,
    depth: usize,
}

impl TreeState {
    /// Root a new game at `node` with the maximizing side to move.
    pub fn new(node: Rc<Node>) -> Self {
        TreeState {
            node,
            to_move: Side::Max,
            depth: 0,
        }
    }

    /// Plies played to reach this position.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The stored score when this position is a leaf.
    pub fn leaf_value(&self) -> Option<f64> {
        match *self.node {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }
}

impl GameState for TreeState {
    type Move = usize;
    type Player = Side;

    fn player_to_move(&self) -> Side {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        matches!(*self.node, Node::Leaf(_))
    }

    fn winner(&self) -> Option<Side> {
        // Tree games end in scores, not wins; the evaluator reads the leaf.
        None
    }

    fn legal_moves(&self) -> Vec<usize> {
        match &*self.node {
            Node::Leaf(_) => Vec::new(),
            Node::Branch(children) => (0..children.len()).collect(),
        }
    }

    fn apply_move(&self, mv: &usize) -> Self {
        match &*self.node {
            Node::Branch(children) => TreeState {
                node: Rc::clone(&children[*mv]),
                to_move: self.to_move.flip(),
                depth: self.depth + 1,
            },
            Node::Leaf(_) => panic!("applied move {mv} to a leaf"),
        }
    }
}

/// Evaluator for tree games: the leaf score as stored, negated for the
/// minimizing perspective. Interior positions cut off by a depth bound
/// score zero.
pub fn leaf_score(state: &TreeState, perspective: Side) -> f64 {
    let raw = state.leaf_value().unwrap_or(0.0);
    match perspective {
        Side::Max => raw,
        Side::Min => -raw,
    }
}

/// Generate a random finite tree. Interior nodes get 1 to `max_width`
/// children; a quarter of them bottom out early, the rest descend until
/// `depth` runs out. Leaf scores lie in [-10, 10).
pub fn random_tree(rng: &mut StdRng, depth: usize, max_width: usize) -> Rc<Node> {
    if depth == 0 || rng.random_range(0..4) == 0 {
        return leaf(f64::from(rng.random_range(-100..100)) / 10.0);
    }
    let width = rng.random_range(1..=max_width);
    let children = (0..width)
        .map(|_| random_tree(rng, depth - 1, max_width))
        .collect();
    branch(children)
}

/// Plain minimax over the whole tree with no pruning and no depth bound.
/// Scores are for the maximizing side, which moves at the root.
pub fn exhaustive_value(node: &Node, maximizing: bool) -> f64 {
    match node {
        Node::Leaf(value) => *value,
        Node::Branch(children) => {
            let scores = children
                .iter()
                .map(|child| exhaustive_value(child, !maximizing));
            if maximizing {
                scores.fold(f64::NEG_INFINITY, f64::max)
            } else {
                scores.fold(f64::INFINITY, f64::min)
            }
        }
    }
}
