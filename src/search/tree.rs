use bimap::BiMap;
use petgraph::Directed;
use petgraph::graph::{Graph, NodeIndex};

use crate::core::{Board, Direction};
use crate::search::models::{NodeId, SearchNode, StateId};

/// Arena of every node admitted during a search, plus the interned boards they point at.
///
/// Nodes only ever reference an earlier node as parent, so the arena is a tree in insertion order.
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    // map from board to state id
    states: BiMap<Board, StateId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub node: NodeId,
    pub state: StateId,
    pub g: u32,
    pub f: u32,
}

impl SearchTree {
    pub fn new() -> Self {
        SearchTree {
            nodes: Vec::new(),
            states: BiMap::new(),
        }
    }

    pub fn upsert_state(&mut self, board: Board) -> StateId {
        if let Some(&id) = self.states.get_by_left(&board) {
            id
        } else {
            let id = StateId(self.states.len());
            self.states.insert(board, id);
            id
        }
    }

    pub fn state_id(&self, board: &Board) -> Option<StateId> {
        self.states.get_by_left(board).copied()
    }

    pub fn board(&self, id: StateId) -> Option<&Board> {
        self.states.get_by_right(&id)
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(node.parent.is_none_or(|p| p.0 < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Directions taken from the root down to `id`
    pub fn path_to(&self, id: NodeId) -> Vec<Direction> {
        let mut path = Vec::new();
        let mut current = self.node(id);
        while let Some(node) = current {
            let Some(direction) = node.direction else {
                break;
            };
            path.push(direction);
            current = node.parent.and_then(|parent| self.node(parent));
        }
        path.reverse();
        path
    }

    pub fn to_petgraph(&self) -> Graph<TreeNode, Direction, Directed> {
        let mut graph = Graph::with_capacity(self.nodes.len(), self.nodes.len().saturating_sub(1));

        // NodeIndex values line up with NodeId because nodes are added in arena order
        for (id, node) in self.iter() {
            graph.add_node(TreeNode {
                node: id,
                state: node.state,
                g: node.g,
                f: node.f,
            });
        }
        for (id, node) in self.iter() {
            if let (Some(parent), Some(direction)) = (node.parent, node.direction) {
                graph.add_edge(NodeIndex::new(parent.0), NodeIndex::new(id.0), direction);
            }
        }
        graph
    }
}

impl Default for SearchTree {
    fn default() -> Self {
        Self::new()
    }
}
