//! 图数据模型
//!
//! 节点、边和图本身。`x`/`y`/`label`/`display_color` 只用于展示，
//! 算法只关心 `id`、端点、权重和方向。

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::core::error::GraphError;

/// 图中的节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_color: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            label: None,
            display_color: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// 节点的默认显示名：有标签用标签，否则用ID
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// 图中的边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(default)]
    pub is_directed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_color: Option<String>,
}

impl Edge {
    /// 创建无向边
    pub fn undirected(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            weight,
            is_directed: false,
            display_color: None,
        }
    }

    /// 创建有向边（只能从 source 走到 target）
    pub fn directed(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            is_directed: true,
            ..Self::undirected(id, source, target, weight)
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// 图：有序的节点和边序列
///
/// 顺序本身没有语义，但决定了轨迹中的确定性平局处理
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// 校验图的不变量
    ///
    /// 依次检查：节点ID唯一、边ID唯一、端点存在、权重有限
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut node_ids = HashSet::new();
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        let mut edge_ids = HashSet::new();
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(GraphError::DuplicateEdge(edge.id.clone()));
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(GraphError::DanglingEndpoint {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
            if !edge.weight.is_finite() {
                return Err(GraphError::NonFiniteWeight {
                    edge: edge.id.clone(),
                    weight: edge.weight,
                });
            }
        }

        Ok(())
    }

    /// 从JSON文本解析图
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 按位置索引的边端点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedEdge {
    pub edge: usize,
    pub source: usize,
    pub target: usize,
}

/// 节点ID到位置的映射，所有引擎都按位置工作
///
/// 端点缺失的边被跳过并记录警告，引擎不会因此 panic
#[derive(Debug, Clone)]
pub struct GraphIndex {
    positions: HashMap<String, usize>,
    edges: Vec<IndexedEdge>,
}

impl GraphIndex {
    pub fn new(graph: &Graph) -> Self {
        let mut positions = HashMap::with_capacity(graph.nodes.len());
        for (index, node) in graph.nodes.iter().enumerate() {
            positions.entry(node.id.clone()).or_insert(index);
        }

        let mut edges = Vec::with_capacity(graph.edges.len());
        for (index, edge) in graph.edges.iter().enumerate() {
            match (positions.get(&edge.source), positions.get(&edge.target)) {
                (Some(&source), Some(&target)) => edges.push(IndexedEdge {
                    edge: index,
                    source,
                    target,
                }),
                _ => log::warn!(
                    "跳过端点不存在的边 {} ({} -> {})",
                    edge.id,
                    edge.source,
                    edge.target
                ),
            }
        }

        Self { positions, edges }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// 端点均存在的边，保持原始顺序
    pub fn edges(&self) -> &[IndexedEdge] {
        &self.edges
    }

    /// 每个节点可以沿其出发的 (边位置, 邻居位置) 列表，按边的原始顺序
    pub fn outgoing(&self, graph: &Graph) -> Vec<Vec<(usize, usize)>> {
        let mut adjacency = vec![Vec::new(); graph.nodes.len()];
        for indexed in &self.edges {
            adjacency[indexed.source].push((indexed.edge, indexed.target));
            if !graph.edges[indexed.edge].is_directed && indexed.source != indexed.target {
                adjacency[indexed.target].push((indexed.edge, indexed.source));
            }
        }
        adjacency
    }
}
