//! Prim算法模块
//!
//! 从第一个节点开始扩展前沿：每次取候选池中权重最小的边（同权按入池顺序），
//! 两端都已在树中的过期候选直接丢弃。候选池耗尽但仍有未覆盖的节点时，
//! 从第一个未覆盖节点重新开始，因此结果总是完整的生成森林。

use crate::core::graph::{Graph, GraphIndex, IndexedEdge};
use crate::core::palette::Palette;
use crate::core::step::Trace;

use super::mst::{self, MstRun};

const NAME: &str = "Prim";

/// Prim算法结构体
pub struct Prim;

/// 候选边池，保持入池顺序，每条边最多入池一次
struct CandidatePool {
    entries: Vec<IndexedEdge>,
    pooled: Vec<bool>,
}

impl CandidatePool {
    fn new(edge_count: usize) -> Self {
        Self {
            entries: Vec::new(),
            pooled: vec![false; edge_count],
        }
    }

    /// 入池，已入过池的边返回 `false`
    fn insert(&mut self, candidate: IndexedEdge) -> bool {
        if self.pooled[candidate.edge] {
            return false;
        }
        self.pooled[candidate.edge] = true;
        self.entries.push(candidate);
        true
    }

    /// 取出权重最小的候选，同权取最早入池的
    fn pop_min(&mut self, graph: &Graph) -> Option<IndexedEdge> {
        let mut best: Option<usize> = None;
        for (slot, candidate) in self.entries.iter().enumerate() {
            let better = match best {
                None => true,
                Some(current) => {
                    let weight = graph.edges[candidate.edge].weight;
                    weight < graph.edges[self.entries[current].edge].weight
                }
            };
            if better {
                best = Some(slot);
            }
        }
        best.map(|slot| self.entries.remove(slot))
    }
}

impl Prim {
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
        // 连通性按无向处理：每条边在两个端点都可见
        let mut incident: Vec<Vec<IndexedEdge>> = vec![Vec::new(); n];
        for indexed in index.edges() {
            if indexed.source == indexed.target {
                continue;
            }
            incident[indexed.source].push(*indexed);
            incident[indexed.target].push(*indexed);
        }

        let mut trace = Trace::new();
        trace.message(
            "Starting Prim's Algorithm",
            "Prim's algorithm initialized to find Minimum Spanning Tree.",
        );

        let mut in_tree = vec![false; n];
        let mut pool = CandidatePool::new(graph.edges.len());
        let mut accepted = Vec::new();
        let mut tree_count = 0usize;

        while let Some(root) = in_tree.iter().position(|&covered| !covered) {
            tree_count += 1;
            let root_id = &graph.nodes[root].id;
            if tree_count == 1 {
                trace.highlight_node(
                    root_id,
                    &palette.active,
                    format!("Node {} selected as starting point.", root_id),
                );
            } else {
                trace.message(
                    format!(
                        "No edges lead out of the current tree. Starting a new tree from node {}.",
                        root_id
                    ),
                    format!(
                        "The frontier is exhausted but node {} is not covered yet, so the graph is disconnected; tree {} of the forest starts there.",
                        root_id, tree_count
                    ),
                );
                trace.highlight_node(
                    root_id,
                    &palette.active,
                    format!("Node {} selected as starting point of a new tree.", root_id),
                );
            }

            in_tree[root] = true;
            Self::extend_frontier(graph, root, &incident, &in_tree, &mut pool, palette, &mut trace);

            while let Some(candidate) = pool.pop_min(graph) {
                let edge = &graph.edges[candidate.edge];
                trace.highlight_edge(
                    &edge.id,
                    &palette.considering,
                    format!(
                        "Edge {}-{} (weight {}) is the cheapest edge leaving the tree.",
                        edge.source, edge.target, edge.weight
                    ),
                );

                // 两端都在树中说明候选已过期
                let joined = match (in_tree[candidate.source], in_tree[candidate.target]) {
                    (true, false) => candidate.target,
                    (false, true) => candidate.source,
                    _ => {
                        trace.highlight_edge(
                            &edge.id,
                            &palette.rejected,
                            format!(
                                "Edge {}-{} is discarded: both endpoints are already in the tree.",
                                edge.source, edge.target
                            ),
                        );
                        continue;
                    }
                };

                in_tree[joined] = true;
                accepted.push(candidate.edge);
                let joined_id = &graph.nodes[joined].id;
                trace.highlight_edge(
                    &edge.id,
                    &palette.accepted,
                    format!(
                        "Edge {}-{} (weight {}) is added to the tree.",
                        edge.source, edge.target, edge.weight
                    ),
                );
                trace.highlight_node(
                    joined_id,
                    &palette.accepted,
                    format!("Node {} joins the tree via edge {}.", joined_id, edge.id),
                );

                Self::extend_frontier(
                    graph, joined, &incident, &in_tree, &mut pool, palette, &mut trace,
                );
            }
        }

        log::debug!(
            "Prim: {} 个节点，接受 {} 条边，{} 棵树",
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

    /// 把新加入节点的、另一端不在树中的边放入候选池
    fn extend_frontier(
        graph: &Graph,
        node: usize,
        incident: &[Vec<IndexedEdge>],
        in_tree: &[bool],
        pool: &mut CandidatePool,
        palette: &Palette,
        trace: &mut Trace,
    ) {
        for candidate in &incident[node] {
            let other = if candidate.source == node {
                candidate.target
            } else {
                candidate.source
            };
            if in_tree[other] || !pool.insert(*candidate) {
                continue;
            }
            let edge = &graph.edges[candidate.edge];
            trace.highlight_edge(
                &edge.id,
                &palette.candidate,
                format!(
                    "Edge {}-{} (weight {}) becomes a candidate.",
                    edge.source, edge.target, edge.weight
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::{Edge, Node};
    use crate::core::step::Step;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|id| Node::new(*id, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_minimum_spanning_tree() {
        let graph = Graph::new(
            nodes(&["P", "Q", "R", "S"]),
            vec![
                Edge::undirected("PQ", "P", "Q", 1.0),
                Edge::undirected("QR", "Q", "R", 2.0),
                Edge::undirected("RS", "R", "S", 3.0),
                Edge::undirected("PS", "P", "S", 10.0),
                Edge::undirected("PR", "P", "R", 8.0),
            ],
        );
        let forest = Prim::run(&graph, &Palette::default())
            .forest
            .expect("非空图应有结果");
        assert_eq!(forest.edges, vec!["PQ", "QR", "RS"]);
        assert_eq!(forest.total_weight, 6.0);
        assert!(forest.is_spanning_tree());
    }

    #[test]
    fn test_stale_candidate_discarded() {
        // 三角形：AB、AC 入池后，接受 AB 再接受 BC，AC 过期
        let graph = Graph::new(
            nodes(&["A", "B", "C"]),
            vec![
                Edge::undirected("AB", "A", "B", 1.0),
                Edge::undirected("AC", "A", "C", 5.0),
                Edge::undirected("BC", "B", "C", 2.0),
            ],
        );
        let run = Prim::run(&graph, &Palette::default());
        let forest = run.forest.expect("非空图应有结果");
        assert_eq!(forest.edges, vec!["AB", "BC"]);
        assert!(run.trace.iter().any(|step| matches!(
            step,
            Step::HighlightEdge { edge_id, color, .. }
                if edge_id == "AC" && *color == Palette::default().rejected
        )));
    }

    #[test]
    fn test_restarts_on_each_component() {
        let graph = Graph::new(
            nodes(&["A", "B", "C", "D", "E"]),
            vec![
                Edge::undirected("AB", "A", "B", 1.0),
                Edge::undirected("CD", "C", "D", 2.0),
            ],
        );
        let run = Prim::run(&graph, &Palette::default());
        let forest = run.forest.expect("非空图应有结果");
        assert_eq!(forest.tree_count, 3);
        assert_eq!(forest.edges, vec!["AB", "CD"]);
        assert_eq!(
            run.trace
                .messages()
                .filter(|text| text.starts_with("No edges lead out"))
                .count(),
            2
        );
    }

    #[test]
    fn test_directed_edges_treated_as_undirected() {
        let graph = Graph::new(
            nodes(&["A", "B"]),
            vec![Edge::directed("BA", "B", "A", 3.0)],
        );
        let forest = Prim::run(&graph, &Palette::default())
            .forest
            .expect("非空图应有结果");
        assert_eq!(forest.edges, vec!["BA"]);
        assert!(forest.is_spanning_tree());
    }

    #[test]
    fn test_ties_broken_by_insertion_order() {
        let graph = Graph::new(
            nodes(&["A", "B", "C"]),
            vec![
                Edge::undirected("AC", "A", "C", 1.0),
                Edge::undirected("AB", "A", "B", 1.0),
            ],
        );
        let forest = Prim::run(&graph, &Palette::default())
            .forest
            .expect("非空图应有结果");
        assert_eq!(forest.edges, vec!["AC", "AB"]);
    }

    #[test]
    fn test_empty_graph() {
        let trace = Prim::trace(&Graph::default());
        assert_eq!(trace.len(), 1);
    }
}
