//! 预置应用场景
//!
//! 六个小图，各自对应一个实际问题和推荐的算法

use crate::core::graph::{Edge, Graph, Node};
use crate::services::algorithm::AlgorithmKind;

/// 预置场景
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub algorithm: AlgorithmKind,
    pub start_node: Option<&'static str>,
    pub graph: Graph,
}

type NodeSpec = (&'static str, f64, f64);
type EdgeSpec = (usize, usize, f64);

fn build(nodes: &[NodeSpec], edges: &[EdgeSpec], directed: bool) -> Graph {
    let nodes = nodes
        .iter()
        .enumerate()
        .map(|(i, &(label, x, y))| Node::new(format!("node-{}", i + 1), x, y).with_label(label))
        .collect();
    let edges = edges
        .iter()
        .enumerate()
        .map(|(i, &(source, target, weight))| {
            let id = format!("edge-{}", i + 1);
            let (source, target) = (format!("node-{}", source), format!("node-{}", target));
            if directed {
                Edge::directed(id, source, target, weight)
            } else {
                Edge::undirected(id, source, target, weight)
            }
        })
        .collect();
    Graph::new(nodes, edges)
}

fn gps_navigation() -> Preset {
    Preset {
        name: "gps-navigation",
        description: "GPS: Find the shortest route from City Hall to the Museum.",
        algorithm: AlgorithmKind::Dijkstra,
        start_node: Some("node-1"),
        graph: build(
            &[
                ("City Hall", 100.0, 200.0),
                ("Market", 250.0, 100.0),
                ("Park", 280.0, 300.0),
                ("Library", 450.0, 150.0),
                ("Museum", 480.0, 350.0),
            ],
            &[(1, 2, 5.0), (1, 3, 3.0), (2, 4, 2.0), (3, 2, 1.0), (3, 5, 7.0), (4, 5, 4.0)],
            false,
        ),
    }
}

fn network_routing() -> Preset {
    Preset {
        name: "network-routing-ospf",
        description: "Network: Find the fastest data path from Router A to Router F.",
        algorithm: AlgorithmKind::Dijkstra,
        start_node: Some("node-1"),
        graph: build(
            &[
                ("Router A", 50.0, 150.0),
                ("Router B", 200.0, 50.0),
                ("Router C", 220.0, 250.0),
                ("Router D", 350.0, 100.0),
                ("Router E", 380.0, 300.0),
                ("Router F", 500.0, 180.0),
            ],
            &[
                (1, 2, 10.0),
                (1, 3, 15.0),
                (2, 4, 12.0),
                (3, 5, 10.0),
                (4, 3, 2.0),
                (4, 6, 1.0),
                (5, 6, 5.0),
            ],
            true,
        ),
    }
}

fn power_cable() -> Preset {
    Preset {
        name: "network-design-power-cable",
        description: "Power Grid: Connect all substations with minimum cable length.",
        algorithm: AlgorithmKind::Prim,
        start_node: None,
        graph: build(
            &[
                ("Sub 1", 100.0, 100.0),
                ("Sub 2", 300.0, 150.0),
                ("Sub 3", 150.0, 300.0),
                ("Sub 4", 400.0, 250.0),
                ("Sub 5", 250.0, 400.0),
            ],
            &[
                (1, 2, 5.0),
                (1, 3, 3.0),
                (2, 3, 4.0),
                (2, 4, 6.0),
                (3, 4, 7.0),
                (3, 5, 5.0),
                (4, 5, 2.0),
            ],
            false,
        ),
    }
}

fn clustering() -> Preset {
    Preset {
        name: "clustering-conceptual",
        description: "Clustering: Identify data groups using MST (remove longest edges).",
        algorithm: AlgorithmKind::Prim,
        start_node: None,
        graph: build(
            &[
                ("P1", 50.0, 50.0),
                ("P2", 70.0, 80.0),
                ("P3", 100.0, 60.0),
                ("P4", 200.0, 200.0),
                ("P5", 230.0, 220.0),
                ("P6", 210.0, 180.0),
                ("P7", 350.0, 350.0),
                ("P8", 380.0, 320.0),
            ],
            &[
                (1, 2, 3.0),
                (2, 3, 2.0),
                (4, 5, 3.0),
                (5, 6, 2.0),
                (7, 8, 4.0),
                (3, 6, 15.0),
                (6, 7, 18.0),
            ],
            false,
        ),
    }
}

fn circuit_board() -> Preset {
    Preset {
        name: "circuit-board-design",
        description: "Circuit Board: Connect components with minimum wire.",
        algorithm: AlgorithmKind::Kruskal,
        start_node: None,
        graph: build(
            &[
                ("CPU", 150.0, 150.0),
                ("RAM", 300.0, 100.0),
                ("GPU", 180.0, 300.0),
                ("SSD", 350.0, 250.0),
            ],
            &[
                (1, 2, 10.0),
                (1, 3, 12.0),
                (1, 4, 15.0),
                (2, 3, 8.0),
                (2, 4, 5.0),
                (3, 4, 9.0),
            ],
            false,
        ),
    }
}

fn islands() -> Preset {
    Preset {
        name: "connecting-islands-bridges",
        description: "Islands: Connect all islands with minimum bridge cost.",
        algorithm: AlgorithmKind::Kruskal,
        start_node: None,
        graph: build(
            &[
                ("Isla A", 100.0, 100.0),
                ("Isla B", 300.0, 80.0),
                ("Isla C", 150.0, 250.0),
                ("Isla D", 400.0, 300.0),
                ("Isla E", 250.0, 400.0),
            ],
            &[
                (1, 2, 20.0),
                (1, 3, 10.0),
                (2, 3, 15.0),
                (2, 4, 30.0),
                (3, 4, 25.0),
                (3, 5, 5.0),
                (4, 5, 18.0),
            ],
            false,
        ),
    }
}

/// 所有预置场景，顺序固定
pub fn all() -> Vec<Preset> {
    vec![
        gps_navigation(),
        network_routing(),
        power_cable(),
        clustering(),
        circuit_board(),
        islands(),
    ]
}

/// 按名称查找场景
pub fn find(name: &str) -> Option<Preset> {
    all().into_iter().find(|preset| preset.name == name)
}
