//! 算法选择与分发
//!
//! 调用方持有一张图和一个算法选择，通过 `run` 调用唯一对应的引擎

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::TraceError;
use crate::core::graph::Graph;
use crate::core::palette::Palette;
use crate::core::step::Trace;

use super::{Dijkstra, FloydWarshall, Kruskal, Prim};

/// 可视化的算法种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    Dijkstra,
    FloydWarshall,
    Kruskal,
    Prim,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::Dijkstra,
        AlgorithmKind::FloydWarshall,
        AlgorithmKind::Kruskal,
        AlgorithmKind::Prim,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::FloydWarshall => "floyd-warshall",
            AlgorithmKind::Kruskal => "kruskal",
            AlgorithmKind::Prim => "prim",
        }
    }

    /// 是否需要起点
    pub fn requires_start_node(&self) -> bool {
        matches!(self, AlgorithmKind::Dijkstra)
    }

    /// 前端约定：只有单源最短路径按有向图编辑
    pub fn uses_directed_edges(&self) -> bool {
        matches!(self, AlgorithmKind::Dijkstra)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TraceError::InvalidArgument(format!("未知的算法: {}", s)))
    }
}

/// 运行指定算法，返回完整轨迹
///
/// Dijkstra 没有起点时与起点不存在的处理相同
pub fn run(graph: &Graph, kind: AlgorithmKind, start: Option<&str>, palette: &Palette) -> Trace {
    log::debug!(
        "运行 {}：{} 个节点，{} 条边",
        kind,
        graph.nodes.len(),
        graph.edges.len()
    );
    match kind {
        AlgorithmKind::Dijkstra => Dijkstra::run(graph, start.unwrap_or_default(), palette).trace,
        AlgorithmKind::FloydWarshall => FloydWarshall::run(graph, palette).trace,
        AlgorithmKind::Kruskal => Kruskal::run(graph, palette).trace,
        AlgorithmKind::Prim => Prim::run(graph, palette).trace,
    }
}
