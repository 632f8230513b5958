//! Kruskal算法模块
//!
//! 按权重排序所有边，借助并查集判断是否成环。连通性一律按无向处理，
//! 图不连通时结果自然是生成森林。

use crate::core::graph::{Graph, GraphIndex};
use crate::core::palette::Palette;
use crate::core::step::Trace;

use super::mst::{self, MstRun};
use super::union_find::UnionFind;

const NAME: &str = "Kruskal";

/// Kruskal算法结构体
pub struct Kruskal;

impl Kruskal {
    /// 以默认配色生成轨迹
    pub fn trace(graph: &Graph) -> Trace {
        Self::run(graph, &Palette::default()).trace
    }

    /// 构造最小生成树（森林）并记录每一步
    pub fn run(graph: &Graph, palette: &Palette) -> MstRun {
        let n = graph.nodes.len();
        if n == 0 {
            return mst::empty_graph_run(NAME);
        }

        let index = GraphIndex::new(graph);
        let mut trace = Trace::new();
        trace.message(
            "Starting Kruskal's Algorithm",
            "Kruskal's algorithm initialized to find Minimum Spanning Tree.",
        );

        // 稳定排序，权重相同保持原始顺序
        let mut sorted = index.edges().to_vec();
        sorted.sort_by(|a, b| graph.edges[a.edge].weight.total_cmp(&graph.edges[b.edge].weight));

        let order: Vec<String> = sorted
            .iter()
            .map(|indexed| {
                let edge = &graph.edges[indexed.edge];
                format!("{}-{} ({})", edge.source, edge.target, edge.weight)
            })
            .collect();
        trace.message(
            "Edges sorted by weight.",
            format!(
                "All graph edges have been sorted by their weights: {}.",
                if order.is_empty() { "no edges".to_string() } else { order.join(", ") }
            ),
        );

        let mut sets = UnionFind::new(n);
        let mut accepted = Vec::new();

        for indexed in &sorted {
            if accepted.len() + 1 == n {
                trace.message(
                    "Spanning tree complete; remaining edges are not needed.",
                    format!(
                        "{} edges accepted for {} nodes, so the tree spans the whole graph.",
                        accepted.len(), n
                    ),
                );
                break;
            }

            let edge = &graph.edges[indexed.edge];
            trace.highlight_edge(
                &edge.id,
                &palette.considering,
                format!(
                    "Edge {}-{} (weight {}) is being considered.",
                    edge.source, edge.target, edge.weight
                ),
            );

            if sets.union(indexed.source, indexed.target) {
                accepted.push(indexed.edge);
                trace.highlight_edge(
                    &edge.id,
                    &palette.accepted,
                    format!(
                        "Edge {}-{} (weight {}) connects two different components and is added to the tree.",
                        edge.source, edge.target, edge.weight
                    ),
                );
                trace.highlight_node(
                    &edge.source,
                    &palette.accepted,
                    format!("Node {} is connected by edge {}.", edge.source, edge.id),
                );
                trace.highlight_node(
                    &edge.target,
                    &palette.accepted,
                    format!("Node {} is connected by edge {}.", edge.target, edge.id),
                );
            } else {
                trace.highlight_edge(
                    &edge.id,
                    &palette.rejected,
                    format!(
                        "Edge {}-{} (weight {}) is rejected because {} and {} are already connected; it would form a cycle.",
                        edge.source, edge.target, edge.weight, edge.source, edge.target
                    ),
                );
            }
        }

        let tree_count = sets.set_count();
        log::debug!(
            "Kruskal: {} 个节点，接受 {} 条边，{} 棵树",
            n,
            accepted.len(),
            tree_count
        );

        let forest = mst::finish(graph, NAME, &accepted, tree_count, palette, &mut trace);
        MstRun {
            trace,
            forest: Some(forest),
        }
    }
}
