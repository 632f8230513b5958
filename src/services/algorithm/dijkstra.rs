//! Dijkstra算法模块
//!
//! 单源最短路径的轨迹引擎。标号设定法：每轮取出距离最小的未访问节点，
//! 松弛从它出发可走的边，最后沿前驱链标出最短路径树。
//!
//! 负权边不会被拒绝，但结果只是尽力而为，这里不做负权环检测。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::graph::{Graph, GraphIndex};
use crate::core::palette::Palette;
use crate::core::step::{format_distance, Trace, INFINITY_SYMBOL};

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
///
/// 距离相同时按节点在图中的顺序出队
#[derive(Debug, Clone, Copy)]
struct NodeDistance {
    node: usize,
    distance: f64,
}

impl PartialEq for NodeDistance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeDistance {}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 最短路径树
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    pub start: String,
    /// 节点ID，与图中节点顺序一致
    pub node_ids: Vec<String>,
    /// 最终距离，不可达为 `None`
    pub distances: Vec<Option<f64>>,
    /// 前驱节点位置
    pub predecessors: Vec<Option<usize>>,
    /// 树边ID，按节点顺序
    pub tree_edges: Vec<String>,
}

impl ShortestPathTree {
    fn position(&self, node_id: &str) -> Option<usize> {
        self.node_ids.iter().position(|id| id == node_id)
    }

    /// 到指定节点的最短距离
    pub fn distance_to(&self, node_id: &str) -> Option<f64> {
        self.position(node_id).and_then(|index| self.distances[index])
    }

    /// 重建从起点到目标节点的路径
    pub fn path_to(&self, node_id: &str) -> Option<Vec<String>> {
        let target = self.position(node_id)?;
        self.distances[target]?;
        walk_predecessors(&self.predecessors, target)
            .map(|path| path.into_iter().map(|index| self.node_ids[index].clone()).collect())
    }
}

/// 一次运行的结果：轨迹加上结构化结果
#[derive(Debug, Clone)]
pub struct ShortestPathRun {
    pub trace: Trace,
    /// 起点不存在时为 `None`
    pub tree: Option<ShortestPathTree>,
}

impl Dijkstra {
    /// 以默认配色生成轨迹
    pub fn trace(graph: &Graph, start_node_id: &str) -> Trace {
        Self::run(graph, start_node_id, &Palette::default()).trace
    }

    /// 计算从起点出发的最短路径，并记录每一步
    pub fn run(graph: &Graph, start_node_id: &str, palette: &Palette) -> ShortestPathRun {
        let index = GraphIndex::new(graph);
        let Some(start) = index.position(start_node_id) else {
            log::debug!("Dijkstra: 起点 {} 不存在", start_node_id);
            return ShortestPathRun {
                trace: Trace::single_message(
                    "Start node not found.",
                    "Error: Start node not found for Dijkstra's algorithm.",
                ),
                tree: None,
            };
        };

        let nodes = &graph.nodes;
        let edges = &graph.edges;
        let n = nodes.len();
        let outgoing = index.outgoing(graph);
        let mut trace = Trace::new();

        trace.message(
            format!("Starting Dijkstra's Algorithm from node {}", start_node_id),
            format!("Dijkstra's algorithm initialized starting from node {}.", start_node_id),
        );

        let mut distances: Vec<Option<f64>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut predecessor_edges: Vec<Option<usize>> = vec![None; n];

        for node in nodes {
            trace.highlight_node(
                &node.id,
                &palette.initial,
                format!("Node {} initialized with infinite distance.", node.id),
            );
            trace.set_node_label(&node.id, INFINITY_SYMBOL);
        }

        distances[start] = Some(0.0);
        trace.set_node_label(start_node_id, "0");
        trace.highlight_node(
            start_node_id,
            &palette.updated,
            format!("Node {} (start node) distance set to 0.", start_node_id),
        );

        let mut to_visit = BinaryHeap::new();
        to_visit.push(NodeDistance {
            node: start,
            distance: 0.0,
        });

        while let Some(NodeDistance { node: u, distance }) = to_visit.pop() {
            if visited[u] || distances[u] != Some(distance) {
                continue;
            }
            visited[u] = true;

            let u_id = &nodes[u].id;
            trace.highlight_node(
                u_id,
                &palette.active,
                format!(
                    "Node {} is currently being processed. Its shortest distance {} is now final.",
                    u_id, distance
                ),
            );

            for &(edge_index, v) in &outgoing[u] {
                if visited[v] {
                    continue;
                }
                let edge = &edges[edge_index];
                let v_id = &nodes[v].id;
                let candidate = distance + edge.weight;
                let current = distances[v];

                trace.highlight_edge(
                    &edge.id,
                    &palette.considering,
                    format!(
                        "Edge {}-{} considered for relaxation: {} + {} = {} versus current distance {} of node {}.",
                        edge.source,
                        edge.target,
                        distance,
                        edge.weight,
                        candidate,
                        format_distance(current),
                        v_id
                    ),
                );

                if current.map_or(true, |d| candidate < d) {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    predecessor_edges[v] = Some(edge_index);
                    to_visit.push(NodeDistance {
                        node: v,
                        distance: candidate,
                    });

                    trace.set_node_label(v_id, format_distance(Some(candidate)));
                    trace.highlight_node(
                        v_id,
                        &palette.updated,
                        format!("Distance to {} updated to {} via {}.", v_id, candidate, u_id),
                    );
                }
            }
        }

        let reachable = distances.iter().filter(|d| d.is_some()).count();
        trace.message(
            "Dijkstra's Algorithm complete. Final distances shown.",
            format!(
                "Dijkstra's algorithm finished. {} of {} nodes are reachable from {}; the shortest path tree is highlighted.",
                reachable, n, start_node_id
            ),
        );

        // 沿前驱链回溯，标记最短路径树上的边
        let mut in_tree = vec![false; edges.len()];
        for (v, node) in nodes.iter().enumerate() {
            let Some(final_distance) = distances[v] else {
                trace.highlight_node(
                    &node.id,
                    &palette.muted,
                    format!("Node {} is not reachable from the start node.", node.id),
                );
                continue;
            };

            let path = walk_predecessors(&predecessors, v).unwrap_or_default();
            for pair in path.windows(2) {
                if let Some(edge_index) = predecessor_edges[pair[1]] {
                    in_tree[edge_index] = true;
                }
            }

            if v == start {
                trace.highlight_node(
                    &node.id,
                    &palette.path,
                    format!("Start node {} remains highlighted. Final distance: 0.", node.id),
                );
            } else {
                let route: Vec<&str> = path.iter().map(|&i| nodes[i].id.as_str()).collect();
                trace.highlight_node(
                    &node.id,
                    &palette.path,
                    format!(
                        "Node {} is reachable. Final distance: {}. Shortest path: {}.",
                        node.id,
                        final_distance,
                        route.join(" -> ")
                    ),
                );
            }
        }

        for (edge_index, edge) in edges.iter().enumerate() {
            if in_tree[edge_index] {
                trace.highlight_edge(
                    &edge.id,
                    &palette.path,
                    format!(
                        "Edge {}-{} is part of the shortest path tree.",
                        edge.source, edge.target
                    ),
                );
            } else {
                trace.highlight_edge(
                    &edge.id,
                    &palette.neutral,
                    format!(
                        "Edge {}-{} is not part of the shortest path tree.",
                        edge.source, edge.target
                    ),
                );
            }
        }

        log::debug!(
            "Dijkstra: 起点 {}，可达 {}/{} 个节点，轨迹 {} 步",
            start_node_id,
            reachable,
            n,
            trace.len()
        );

        let tree_edges = (0..n)
            .filter_map(|v| predecessor_edges[v])
            .map(|edge_index| edges[edge_index].id.clone())
            .collect();

        ShortestPathRun {
            trace,
            tree: Some(ShortestPathTree {
                start: start_node_id.to_string(),
                node_ids: nodes.iter().map(|node| node.id.clone()).collect(),
                distances,
                predecessors,
                tree_edges,
            }),
        }
    }
}

/// 从目标沿前驱回溯到根，返回正序路径
///
/// 前驱链出现环时返回 `None`
fn walk_predecessors(predecessors: &[Option<usize>], target: usize) -> Option<Vec<usize>> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(previous) = predecessors[current] {
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    Some(path)
}
