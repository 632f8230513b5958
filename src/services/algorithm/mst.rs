//! 最小生成树公共部分
//!
//! Kruskal 和 Prim 两个引擎共用的结果类型与收尾着色

use crate::core::graph::Graph;
use crate::core::palette::Palette;
use crate::core::step::Trace;

/// 最小生成森林（连通图时为一棵树）
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest {
    /// 被接受的边ID，按接受顺序
    pub edges: Vec<String>,
    pub total_weight: f64,
    /// 森林中树的数量，等于连通分量数
    pub tree_count: usize,
}

impl SpanningForest {
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count == 1
    }
}

/// 一次运行的结果
#[derive(Debug, Clone)]
pub struct MstRun {
    pub trace: Trace,
    /// 空图时为 `None`
    pub forest: Option<SpanningForest>,
}

pub(crate) fn empty_graph_run(algorithm: &str) -> MstRun {
    MstRun {
        trace: Trace::single_message(
            "Graph is empty.",
            format!("Error: Graph is empty for {} algorithm.", algorithm),
        ),
        forest: None,
    }
}

/// 完成消息与最终着色
///
/// 所有节点（包括孤立节点）都属于森林，被接受的边用最终颜色，其余边恢复中性色
pub(crate) fn finish(
    graph: &Graph,
    algorithm: &str,
    accepted: &[usize],
    tree_count: usize,
    palette: &Palette,
    trace: &mut Trace,
) -> SpanningForest {
    // 空求和从 -0.0 开始，这里显式从 0 累加
    let total_weight = accepted
        .iter()
        .fold(0.0, |total, &e| total + graph.edges[e].weight);

    if tree_count == 1 {
        trace.message(
            format!(
                "{} Algorithm complete. Minimum spanning tree found with total weight {}.",
                algorithm, total_weight
            ),
            format!(
                "{}'s algorithm finished. The graph is connected; the minimum spanning tree uses {} edges with total weight {}.",
                algorithm,
                accepted.len(),
                total_weight
            ),
        );
    } else {
        trace.message(
            format!(
                "{} Algorithm complete. The graph is disconnected: minimum spanning forest of {} trees with total weight {}.",
                algorithm, tree_count, total_weight
            ),
            format!(
                "{}'s algorithm finished. The graph has {} connected components, so the result is a spanning forest of {} edges with total weight {}.",
                algorithm,
                tree_count,
                accepted.len(),
                total_weight
            ),
        );
    }

    let mut in_forest = vec![false; graph.edges.len()];
    for &e in accepted {
        in_forest[e] = true;
    }

    for node in &graph.nodes {
        trace.highlight_node(
            &node.id,
            &palette.final_tree,
            format!("Node {} is part of the minimum spanning forest.", node.id),
        );
    }
    for (e, edge) in graph.edges.iter().enumerate() {
        if in_forest[e] {
            trace.highlight_edge(
                &edge.id,
                &palette.final_tree,
                format!(
                    "Edge {}-{} (weight {}) is in the minimum spanning tree.",
                    edge.source, edge.target, edge.weight
                ),
            );
        } else {
            trace.highlight_edge(
                &edge.id,
                &palette.neutral,
                format!(
                    "Edge {}-{} (weight {}) is not used by the minimum spanning tree.",
                    edge.source, edge.target, edge.weight
                ),
            );
        }
    }

    SpanningForest {
        edges: accepted.iter().map(|&e| graph.edges[e].id.clone()).collect(),
        total_weight,
        tree_count,
    }
}
