mod common;

use common::*;
use genstack::graph::{Edge, Graph};
use genstack::node::{KnowledgeBaseData, LlmData, Node, NodeData};
use genstack::stack::Stack;
use genstack::types::Position;
use serde_json::json;

#[test]
fn minimal_definition_wire_shape() {
    let value = serde_json::to_value(Stack::minimal_definition()).unwrap();
    assert_eq!(
        value,
        json!({
            "nodes": [{
                "id": "node-llm-1",
                "type": "llm",
                "position": { "x": 0.0, "y": 0.0 },
                "data": {
                    "label": "LLM Engine",
                    "llm_provider": "mistral",
                    "model": "mistral-small",
                    "temperature": 0.7,
                    "use_knowledge_base": false,
                    "use_search": false
                }
            }],
            "edges": []
        })
    );
}

#[test]
fn edge_wire_shape_uses_camel_case_handles() {
    let edge = Edge::with_handles("a", "b", Some("out".into()), None);
    let value = serde_json::to_value(&edge).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "reactflow__edge-aout-b",
            "source": "a",
            "target": "b",
            "sourceHandle": "out",
            "animated": false
        })
    );
}

#[test]
fn graph_round_trips_through_json() {
    let mut graph = linear_graph();
    graph.nodes.push(Node::new(
        "dndnode_3",
        NodeData::KnowledgeBase(
            KnowledgeBaseData::with_label("Knowledge Base")
                .with_file("report.pdf")
                .with_api_key("sk-opaque"),
        ),
        Position::new(150.0, 200.0),
    ));
    graph.edges.push(Edge::with_handles(
        "dndnode_3",
        "dndnode_1",
        Some("context".into()),
        Some("in".into()),
    ));

    let json = serde_json::to_string(&graph).unwrap();
    let back: Graph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, graph);
}

#[test]
fn foreign_wire_graph_deserializes() {
    // As produced by the editor frontend, including sparse data bags.
    let value = json!({
        "nodes": [
            {
                "id": "dndnode_0",
                "type": "userQuery",
                "position": { "x": 12.5, "y": 40.0 },
                "data": { "label": "User Query" }
            },
            {
                "id": "node-llm-1",
                "type": "llm",
                "position": { "x": 0.0, "y": 0.0 },
                "data": {
                    "label": "LLM Engine",
                    "llm_provider": "gemini",
                    "use_knowledge_base": true,
                    "use_search": false
                }
            }
        ],
        "edges": [
            { "id": "reactflow__edge-dndnode_0-node-llm-1",
              "source": "dndnode_0",
              "target": "node-llm-1" }
        ]
    });

    let graph: Graph = serde_json::from_value(value).unwrap();
    assert_eq!(graph.nodes.len(), 2);
    assert!(graph.validate().is_ok());
    match &graph.nodes[1].data {
        NodeData::Llm(data) => {
            assert!(data.use_knowledge_base);
            // Sparse bag: model falls back to the serde default, which is the
            // mistral default rather than gemini's. Provider resets are an
            // editing-surface concern, not a decoding one.
            assert_eq!(data.model, "mistral-small");
            assert_eq!(data.temperature, LlmData::DEFAULT_TEMPERATURE);
        }
        other => panic!("expected llm data, got {other:?}"),
    }
}

#[test]
fn stack_without_definition_initializes_empty() {
    let stack = Stack::new(
        genstack::stack::Persistence::Persisted(7),
        "Chat With PDF",
        "",
        None,
    );
    let graph = stack.definition_or_default();
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}
