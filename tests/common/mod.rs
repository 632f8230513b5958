//! 集成测试共享工具模块
//!
//! 提供测试图夹具和轨迹断言，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use rand::rngs::StdRng;
use rand::SeedableRng;

use graphtrace::services::random_graph::{self, RandomGraphOptions};
use graphtrace::Graph;

/// 一组确定性的随机连通图，用于性质测试
pub fn random_graphs(count: u64, node_count: usize, directed: bool) -> Vec<Graph> {
    (0..count)
        .map(|seed| {
            let options = RandomGraphOptions {
                directed,
                extra_edge_probability: 0.3,
                ..RandomGraphOptions::new(node_count, 1, 15)
            };
            random_graph::generate(&options, &mut StdRng::seed_from_u64(seed))
                .expect("随机图生成失败")
        })
        .collect()
}

/// 随机图去掉部分边后通常不再连通
pub fn random_forests(count: u64, node_count: usize) -> Vec<Graph> {
    random_graphs(count, node_count, false)
        .into_iter()
        .map(|mut graph| {
            let mut position = 0;
            graph.edges.retain(|_| {
                position += 1;
                position % 3 != 0
            });
            graph
        })
        .collect()
}
