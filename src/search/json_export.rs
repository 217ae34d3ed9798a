use serde::{Deserialize, Serialize};

use crate::search::tree::SearchTree;

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    nodes: Vec<JsonNode>,
    links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonNode {
    id: usize,
    state: usize,
    g: u32,
    f: Option<u32>,
    on_targets: usize,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEdge {
    source: usize,
    target: usize,
    direction: char,
}

/// `{nodes, links}` document of the explored tree, the format force-directed graph viewers read
pub fn get_json_data(tree: &SearchTree) -> Result<String, serde_json::Error> {
    let nodes: Vec<JsonNode> = tree
        .iter()
        .map(|(id, node)| JsonNode {
            id: id.0,
            state: node.state.0,
            g: node.g,
            f: (node.f != u32::MAX).then_some(node.f),
            on_targets: tree
                .board(node.state)
                .map(|board| board.boxes_on_targets())
                .unwrap_or(0),
        })
        .collect();

    let links: Vec<JsonEdge> = tree
        .iter()
        .filter_map(|(id, node)| {
            Some(JsonEdge {
                source: node.parent?.0,
                target: id.0,
                direction: node.direction?.to_char(),
            })
        })
        .collect();

    serde_json::to_string_pretty(&JsonData { nodes, links })
}
