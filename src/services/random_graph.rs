//! 随机连通图生成
//!
//! 先用一个环（两个节点时为单条边）保证连通，再以固定概率补充额外的边。
//! 任意一对节点之间最多一条边，权重为 `[min_weight, max_weight]` 内的整数。

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::error::{TraceError, TraceResult};
use crate::core::graph::{Edge, Graph, Node};

/// 随机图参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGraphOptions {
    pub node_count: usize,
    pub min_weight: i64,
    pub max_weight: i64,
    /// 每对节点额外连边的概率
    pub extra_edge_probability: f64,
    pub width: f64,
    pub height: f64,
    /// 节点与画布边缘的最小距离
    pub padding: f64,
    pub directed: bool,
}

impl Default for RandomGraphOptions {
    fn default() -> Self {
        Self {
            node_count: 6,
            min_weight: 1,
            max_weight: 20,
            extra_edge_probability: 0.15,
            width: 760.0,
            height: 560.0,
            padding: 40.0,
            directed: false,
        }
    }
}

impl RandomGraphOptions {
    pub fn new(node_count: usize, min_weight: i64, max_weight: i64) -> Self {
        Self {
            node_count,
            min_weight,
            max_weight,
            ..Self::default()
        }
    }

    fn validate(&self) -> TraceResult<()> {
        if self.min_weight > self.max_weight {
            return Err(TraceError::InvalidArgument(format!(
                "最小权重 {} 大于最大权重 {}",
                self.min_weight, self.max_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.extra_edge_probability) {
            return Err(TraceError::InvalidArgument(format!(
                "额外连边概率必须在 [0, 1] 内: {}",
                self.extra_edge_probability
            )));
        }
        if self.width < 2.0 * self.padding || self.height < 2.0 * self.padding {
            return Err(TraceError::InvalidArgument(format!(
                "画布 {}x{} 容纳不下边距 {}",
                self.width, self.height, self.padding
            )));
        }
        Ok(())
    }
}

/// 生成随机连通图
pub fn generate<R: Rng>(options: &RandomGraphOptions, rng: &mut R) -> TraceResult<Graph> {
    options.validate()?;
    let n = options.node_count;

    let nodes: Vec<Node> = (1..=n)
        .map(|number| {
            let x = options.padding + rng.gen::<f64>() * (options.width - 2.0 * options.padding);
            let y = options.padding + rng.gen::<f64>() * (options.height - 2.0 * options.padding);
            Node::new(format!("node-{}", number), x, y).with_label(format!("N{}", number))
        })
        .collect();

    let mut builder = EdgeBuilder::new(options);
    if n > 1 {
        for i in 0..n {
            builder.connect(&nodes, i, (i + 1) % n, rng);
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen::<f64>() < options.extra_edge_probability {
                builder.connect(&nodes, i, j, rng);
            }
        }
    }

    let edges = builder.edges;
    log::debug!("生成随机图：{} 个节点，{} 条边", nodes.len(), edges.len());
    Ok(Graph::new(nodes, edges))
}

/// 生成说明，与图一起展示给用户
pub fn summary(graph: &Graph) -> String {
    format!(
        "Generated random graph with {} nodes. All nodes are connected.",
        graph.nodes.len()
    )
}

struct EdgeBuilder<'a> {
    options: &'a RandomGraphOptions,
    pairs: HashSet<(usize, usize)>,
    edges: Vec<Edge>,
}

impl<'a> EdgeBuilder<'a> {
    fn new(options: &'a RandomGraphOptions) -> Self {
        Self {
            options,
            pairs: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// 无序节点对上已有边时跳过
    fn connect<R: Rng>(&mut self, nodes: &[Node], a: usize, b: usize, rng: &mut R) {
        if a == b || !self.pairs.insert((a.min(b), a.max(b))) {
            return;
        }
        let weight = rng.gen_range(self.options.min_weight..=self.options.max_weight) as f64;
        let id = format!("edge-{}", self.edges.len() + 1);
        let (source, target) = (&nodes[a].id, &nodes[b].id);
        self.edges.push(if self.options.directed {
            Edge::directed(id, source.as_str(), target.as_str(), weight)
        } else {
            Edge::undirected(id, source.as_str(), target.as_str(), weight)
        });
    }
}
