//! 轨迹确定性集成测试
//!
//! 测试范围:
//! - 四种算法在随机图上重复运行得到完全相同的轨迹
//! - 重复运行的轨迹JSON逐字节一致
//! - 等价的图副本得到相同轨迹

mod common;

use graphtrace::{run, AlgorithmKind, Graph, Palette};

fn sample_graphs() -> Vec<Graph> {
    common::random_graphs(8, 8, false)
        .into_iter()
        .chain(common::random_graphs(8, 8, true))
        .chain(common::random_forests(8, 8))
        .collect()
}

#[test]
fn test_every_algorithm_is_deterministic() {
    let palette = Palette::default();
    for (index, graph) in sample_graphs().iter().enumerate() {
        let start = graph.nodes.first().map(|node| node.id.as_str());
        for kind in AlgorithmKind::ALL {
            let first = run(graph, kind, start, &palette);
            let second = run(graph, kind, start, &palette);
            assert!(!first.is_empty(), "{} 在第 {} 个图上没有步骤", kind, index);
            assert_eq!(first, second, "{} 在第 {} 个图上轨迹不一致", kind, index);
        }
    }
}

#[test]
fn test_trace_json_is_stable() {
    let palette = Palette::default();
    for graph in sample_graphs() {
        let start = graph.nodes.first().map(|node| node.id.as_str());
        for kind in AlgorithmKind::ALL {
            let first = run(&graph, kind, start, &palette).to_json().expect("序列化失败");
            let second = run(&graph, kind, start, &palette).to_json().expect("序列化失败");
            assert_eq!(first, second, "{} 的轨迹JSON不一致", kind);
        }
    }
}

#[test]
fn test_graph_copy_gives_same_trace() {
    let palette = Palette::default();
    for graph in common::random_graphs(4, 10, false) {
        let json = graph.to_json().expect("序列化失败");
        let copy = Graph::from_json(&json).expect("反序列化失败");
        for kind in AlgorithmKind::ALL {
            assert_eq!(
                run(&graph, kind, Some("node-1"), &palette),
                run(&copy, kind, Some("node-1"), &palette),
                "{} 在图副本上轨迹不一致",
                kind
            );
        }
    }
}
