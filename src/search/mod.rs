mod frontier;
mod json_export;
mod models;
mod report;
mod solve;
mod tree;

pub use json_export::get_json_data;
pub use models::{NodeId, SearchNode, SearchOutcome, SearchStats, Solution, StateId, Termination};
pub use report::SolveReport;
pub use solve::solve;
pub use tree::{SearchTree, TreeNode};
