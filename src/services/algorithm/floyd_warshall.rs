//! Floyd-Warshall算法模块
//!
//! 全源最短路径的轨迹引擎，适用于教学规模的小图，时间复杂度O(V^3)。
//! 完成后扫描对角线，报告负权环涉及的节点。

use crate::core::graph::{Graph, GraphIndex};
use crate::core::palette::Palette;
use crate::core::step::{MatrixCell, Trace};

/// Floyd-Warshall算法结构体
pub struct FloydWarshall;

/// Floyd-Warshall算法结果
#[derive(Debug, Clone, PartialEq)]
pub struct FloydWarshallResult {
    /// 图中所有节点ID
    pub node_ids: Vec<String>,
    /// 行列标签（节点显示名）
    pub labels: Vec<String>,
    /// 距离矩阵，按节点顺序索引
    pub matrix: Vec<Vec<MatrixCell>>,
    /// 对角线为负的节点，即位于负权环上的节点
    pub negative_cycle_nodes: Vec<String>,
}

impl FloydWarshallResult {
    fn position(&self, node_id: &str) -> Option<usize> {
        self.node_ids.iter().position(|id| id == node_id)
    }

    /// 获取从u到v的最短距离，不可达为 `None`
    pub fn distance(&self, u: &str, v: &str) -> Option<f64> {
        let i = self.position(u)?;
        let j = self.position(v)?;
        self.matrix[i][j].value()
    }

    /// 指定节点所在的矩阵行
    pub fn row(&self, node_id: &str) -> Option<&[MatrixCell]> {
        self.position(node_id).map(|i| self.matrix[i].as_slice())
    }

    pub fn has_negative_cycle(&self) -> bool {
        !self.negative_cycle_nodes.is_empty()
    }
}

/// 一次运行的结果
#[derive(Debug, Clone)]
pub struct AllPairsRun {
    pub trace: Trace,
    /// 空图时为 `None`
    pub result: Option<FloydWarshallResult>,
}

impl FloydWarshall {
    /// 以默认配色生成轨迹
    pub fn trace(graph: &Graph) -> Trace {
        Self::run(graph, &Palette::default()).trace
    }

    /// 执行Floyd-Warshall算法并记录每一步
    pub fn run(graph: &Graph, palette: &Palette) -> AllPairsRun {
        let n = graph.nodes.len();
        if n == 0 {
            return AllPairsRun {
                trace: Trace::single_message(
                    "Graph is empty.",
                    "Error: Graph is empty for Floyd-Warshall algorithm.",
                ),
                result: None,
            };
        }

        let index = GraphIndex::new(graph);
        let node_ids: Vec<&str> = graph.nodes.iter().map(|node| node.id.as_str()).collect();
        let labels: Vec<String> = graph
            .nodes
            .iter()
            .map(|node| node.display_name().to_string())
            .collect();
        let mut trace = Trace::new();

        trace.message(
            "Starting Floyd-Warshall Algorithm",
            "Floyd-Warshall algorithm initialized to find all-pairs shortest paths.",
        );

        // 初始化距离矩阵：对角线为0，平行边取最小权重
        let mut dist = vec![vec![MatrixCell::Infinite; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = MatrixCell::Finite(0.0);
        }
        for indexed in index.edges() {
            let weight = MatrixCell::Finite(graph.edges[indexed.edge].weight);
            let (u, v) = (indexed.source, indexed.target);
            if weight < dist[u][v] {
                dist[u][v] = weight;
            }
            if !graph.edges[indexed.edge].is_directed && weight < dist[v][u] {
                dist[v][u] = weight;
            }
        }

        trace.update_matrix(
            &dist,
            &labels,
            "Distance matrix initialized with direct edge weights and 0s on the diagonal.",
        );
        trace.message(
            "Initialized distance matrix from graph edges.",
            "Every cell holds the weight of the direct edge between the pair, or ∞ when there is none.",
        );

        for k in 0..n {
            trace.message(
                format!("Using node {} as intermediate vertex.", labels[k]),
                format!(
                    "Round {} of {}: checking every pair for a shorter path through {}.",
                    k + 1, n, labels[k]
                ),
            );
            trace.highlight_node(
                node_ids[k],
                &palette.active,
                format!("Considering paths via intermediate node {}.", labels[k]),
            );

            let mut improved = 0usize;
            for i in 0..n {
                if !dist[i][k].is_finite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = dist[i][k] + dist[k][j];
                    if through_k < dist[i][j] {
                        dist[i][j] = through_k;
                        improved += 1;

                        trace.message(
                            format!(
                                "Path {}->{}->{} is shorter. dist[{}][{}] = {}",
                                labels[i], labels[k], labels[j], labels[i], labels[j], through_k
                            ),
                            format!(
                                "Path from {} to {} through {} is shorter. New distance: {}.",
                                labels[i], labels[j], labels[k], through_k
                            ),
                        );
                        trace.highlight_node(
                            node_ids[i],
                            &palette.updated,
                            format!(
                                "{} is the source of the improved path to {}.",
                                labels[i], labels[j]
                            ),
                        );
                        trace.highlight_node(
                            node_ids[j],
                            &palette.updated,
                            format!(
                                "{} is the destination of the improved path from {}.",
                                labels[j], labels[i]
                            ),
                        );
                    }
                }
            }

            if improved > 0 {
                trace.update_matrix(
                    &dist,
                    &labels,
                    format!(
                        "Distance matrix updated after considering paths through {} ({} cells improved).",
                        labels[k], improved
                    ),
                );
            } else {
                trace.message(
                    format!("No shorter paths found through {}.", labels[k]),
                    format!("Routing through {} did not improve any distance.", labels[k]),
                );
            }
            trace.reset_colors();
        }

        // 检查对角线是否有负值
        let mut negative_cycle_nodes = Vec::new();
        for i in 0..n {
            if dist[i][i] < MatrixCell::Finite(0.0) {
                trace.message(
                    format!("Negative weight cycle detected involving node {}.", labels[i]),
                    format!(
                        "Algorithm detected a negative weight cycle: the distance from {} back to itself is {}.",
                        labels[i], dist[i][i]
                    ),
                );
                trace.highlight_node(
                    node_ids[i],
                    &palette.error,
                    format!("Node {} lies on a negative weight cycle.", labels[i]),
                );
                negative_cycle_nodes.push(node_ids[i].to_string());
            }
        }

        trace.message(
            "Floyd-Warshall Algorithm complete. Final distance matrix shown.",
            if negative_cycle_nodes.is_empty() {
                "Floyd-Warshall algorithm finished. Final matrix of shortest paths is displayed.".to_string()
            } else {
                format!(
                    "Floyd-Warshall algorithm finished, but {} node(s) lie on negative cycles, so some distances are not meaningful.",
                    negative_cycle_nodes.len()
                )
            },
        );

        log::debug!(
            "Floyd-Warshall: {} 个节点，负权环节点 {}，轨迹 {} 步",
            n,
            negative_cycle_nodes.len(),
            trace.len()
        );

        AllPairsRun {
            trace,
            result: Some(FloydWarshallResult {
                node_ids: node_ids.iter().map(|id| id.to_string()).collect(),
                labels,
                matrix: dist,
                negative_cycle_nodes,
            }),
        }
    }
}
