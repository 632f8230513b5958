//! 环检测算法模块
//!
//! 无向意义下的环检测，基于并查集：一条边的两个端点已连通即成环

use std::collections::HashSet;

use crate::core::graph::{Graph, GraphIndex};

use super::union_find::UnionFind;

/// 环检测算法结构体
pub struct CycleDetection;

impl CycleDetection {
    /// 整张图（忽略方向）是否包含环，自环和平行边都算
    pub fn has_cycle_undirected(graph: &Graph) -> bool {
        let index = GraphIndex::new(graph);
        let mut sets = UnionFind::new(graph.nodes.len());
        index
            .edges()
            .iter()
            .any(|indexed| !sets.union(indexed.source, indexed.target))
    }

    /// 给定的边子集是否包含环
    ///
    /// 未知的边ID被忽略
    pub fn edges_form_cycle(graph: &Graph, edge_ids: &[String]) -> bool {
        let wanted: HashSet<&str> = edge_ids.iter().map(String::as_str).collect();
        let index = GraphIndex::new(graph);
        let mut sets = UnionFind::new(graph.nodes.len());
        index
            .edges()
            .iter()
            .filter(|indexed| wanted.contains(graph.edges[indexed.edge].id.as_str()))
            .any(|indexed| !sets.union(indexed.source, indexed.target))
    }
}
