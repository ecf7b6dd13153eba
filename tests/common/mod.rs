#![allow(dead_code)]

use genstack::client::BackendClient;
use genstack::config::ClientConfig;
use genstack::graph::{Edge, Graph};
use genstack::node::{LlmData, Node, NodeData, OutputData, UserQueryData};
use genstack::types::Position;

/// A client pointed at the given mock server base URL.
pub fn client_for(base_url: &str) -> BackendClient {
    BackendClient::new(
        ClientConfig::with_base_url(base_url).expect("mock server base url is valid"),
    )
}

/// A client pointed at a port nothing listens on, for transport-failure paths.
pub fn unreachable_client() -> BackendClient {
    client_for("http://127.0.0.1:9")
}

pub fn user_query_node(id: &str) -> Node {
    Node::new(
        id,
        NodeData::UserQuery(UserQueryData::with_label("User Query")),
        Position::new(0.0, 80.0),
    )
}

pub fn llm_node(id: &str) -> Node {
    Node::new(
        id,
        NodeData::Llm(LlmData::with_label("LLM Engine")),
        Position::new(300.0, 80.0),
    )
}

pub fn output_node(id: &str) -> Node {
    Node::new(
        id,
        NodeData::Output(OutputData::with_label("Output")),
        Position::new(600.0, 80.0),
    )
}

/// A linear user-query -> llm -> output workflow.
pub fn linear_graph() -> Graph {
    Graph {
        nodes: vec![
            user_query_node("dndnode_0"),
            llm_node("dndnode_1"),
            output_node("dndnode_2"),
        ],
        edges: vec![
            Edge::between("dndnode_0", "dndnode_1"),
            Edge::between("dndnode_1", "dndnode_2"),
        ],
    }
}
