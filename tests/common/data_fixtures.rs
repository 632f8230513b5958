//! 测试数据夹具
//!
//! 提供常用的测试图

use graphtrace::{Edge, Graph, Node};

fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| Node::new(*id, 50.0 * i as f64, 0.0))
        .collect()
}

/// A-B:1, B-C:2, A-C:4, C-D:1，无向
pub fn shortest_path_graph() -> Graph {
    Graph::new(
        nodes(&["A", "B", "C", "D"]),
        vec![
            Edge::undirected("AB", "A", "B", 1.0),
            Edge::undirected("BC", "B", "C", 2.0),
            Edge::undirected("AC", "A", "C", 4.0),
            Edge::undirected("CD", "C", "D", 1.0),
        ],
    )
}

/// P-Q:1, Q-R:2, R-S:3, P-S:10, P-R:8
pub fn spanning_tree_graph() -> Graph {
    Graph::new(
        nodes(&["P", "Q", "R", "S"]),
        vec![
            Edge::undirected("PQ", "P", "Q", 1.0),
            Edge::undirected("QR", "Q", "R", 2.0),
            Edge::undirected("RS", "R", "S", 3.0),
            Edge::undirected("PS", "P", "S", 10.0),
            Edge::undirected("PR", "P", "R", 8.0),
        ],
    )
}

/// A->B:-5, B->A:-5
pub fn negative_cycle_graph() -> Graph {
    Graph::new(
        nodes(&["A", "B"]),
        vec![
            Edge::directed("AB", "A", "B", -5.0),
            Edge::directed("BA", "B", "A", -5.0),
        ],
    )
}

/// 三个连通分量：{A, B, C}、{D, E}、{F}
pub fn disconnected_graph() -> Graph {
    Graph::new(
        nodes(&["A", "B", "C", "D", "E", "F"]),
        vec![
            Edge::undirected("AB", "A", "B", 2.0),
            Edge::undirected("BC", "B", "C", 1.0),
            Edge::undirected("AC", "A", "C", 5.0),
            Edge::undirected("DE", "D", "E", 4.0),
        ],
    )
}

/// 单向链 A->B->C，C 无法回到 A
pub fn directed_chain() -> Graph {
    Graph::new(
        nodes(&["A", "B", "C"]),
        vec![
            Edge::directed("AB", "A", "B", 1.0),
            Edge::directed("BC", "B", "C", 1.0),
        ],
    )
}
