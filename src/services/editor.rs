//! 图编辑
//!
//! 交互式编辑图时使用的显式计数器：新节点为 `node-N`，新边为 `edge-N`，
//! 编号只增不减，删除节点后不会复用。

use crate::core::error::EditError;
use crate::core::graph::{Edge, Graph, Node};

const NODE_PREFIX: &str = "node-";
const EDGE_PREFIX: &str = "edge-";

/// 带编号计数器的图编辑器
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEditor {
    graph: Graph,
    next_node_id: u64,
    next_edge_id: u64,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphEditor {
    pub fn new() -> Self {
        Self {
            graph: Graph::default(),
            next_node_id: 1,
            next_edge_id: 1,
        }
    }

    /// 接管已有的图，计数器从最大的数字后缀之后继续
    pub fn from_graph(graph: Graph) -> Self {
        let next_node_id = next_counter(graph.nodes.iter().map(|n| n.id.as_str()), NODE_PREFIX);
        let next_edge_id = next_counter(graph.edges.iter().map(|e| e.id.as_str()), EDGE_PREFIX);
        Self {
            graph,
            next_node_id,
            next_edge_id,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn next_node_id(&self) -> u64 {
        self.next_node_id
    }

    pub fn next_edge_id(&self) -> u64 {
        self.next_edge_id
    }

    /// 在 (x, y) 处添加节点，返回新节点ID
    pub fn add_node(&mut self, x: f64, y: f64) -> String {
        let number = self.next_node_id;
        self.next_node_id += 1;
        let id = format!("{}{}", NODE_PREFIX, number);
        self.graph
            .nodes
            .push(Node::new(id.clone(), x, y).with_label(format!("N{}", number)));
        id
    }

    /// 添加边，返回新边ID
    ///
    /// 同方向的边已存在，或反方向已有无向边时视为重叠
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: f64,
        directed: bool,
    ) -> Result<String, EditError> {
        for endpoint in [source, target] {
            if !self.graph.contains_node(endpoint) {
                return Err(EditError::NodeNotFound(endpoint.to_string()));
            }
        }
        if !weight.is_finite() {
            return Err(EditError::InvalidWeight(weight));
        }

        let overlaps = self.graph.edges.iter().any(|edge| {
            (edge.source == source && edge.target == target)
                || (edge.source == target && edge.target == source && !edge.is_directed)
        });
        if overlaps {
            return Err(EditError::EdgeExists {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        let id = format!("{}{}", EDGE_PREFIX, self.next_edge_id);
        self.next_edge_id += 1;
        let edge = if directed {
            Edge::directed(id.clone(), source, target, weight)
        } else {
            Edge::undirected(id.clone(), source, target, weight)
        };
        self.graph.edges.push(edge);
        Ok(id)
    }

    /// 删除节点及其所有关联边
    pub fn delete_node(&mut self, node_id: &str) -> Result<(), EditError> {
        let before = self.graph.nodes.len();
        self.graph.nodes.retain(|node| node.id != node_id);
        if self.graph.nodes.len() == before {
            return Err(EditError::NodeNotFound(node_id.to_string()));
        }

        let edges_before = self.graph.edges.len();
        self.graph
            .edges
            .retain(|edge| edge.source != node_id && edge.target != node_id);
        log::debug!(
            "删除节点 {} 及 {} 条关联边",
            node_id,
            edges_before - self.graph.edges.len()
        );
        Ok(())
    }

    /// 切换算法时统一所有边的方向
    pub fn set_all_directed(&mut self, directed: bool) {
        for edge in &mut self.graph.edges {
            edge.is_directed = directed;
        }
    }
}

fn next_counter<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .filter_map(|number| number.checked_add(1))
        .max()
        .unwrap_or(1)
}
