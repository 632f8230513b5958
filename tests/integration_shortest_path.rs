//! 单源最短路径集成测试
//!
//! 测试范围:
//! - 最终距离与最短路径树
//! - 标签单调不增
//! - 起点缺失、空图
//! - 有向边与不可达节点

mod common;

use common::assertions::{assert_references_exist, assert_single_message};
use common::data_fixtures;

use graphtrace::services::{Dijkstra, FloydWarshall};
use graphtrace::{compute_shortest_paths, Palette, Step, INFINITY_SYMBOL};

#[test]
fn test_final_distances_and_tree() {
    let graph = data_fixtures::shortest_path_graph();
    let run = Dijkstra::run(&graph, "A", &Palette::default());
    let tree = run.tree.expect("起点存在");

    let distances: Vec<_> = ["A", "B", "C", "D"]
        .iter()
        .map(|id| tree.distance_to(id))
        .collect();
    assert_eq!(distances, vec![Some(0.0), Some(1.0), Some(3.0), Some(4.0)]);
    assert_eq!(tree.tree_edges, vec!["AB", "BC", "CD"]);
    assert_eq!(
        tree.path_to("D"),
        Some(vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()])
    );
    assert_references_exist(&graph, &run.trace);
}

#[test]
fn test_final_coloring() {
    let graph = data_fixtures::shortest_path_graph();
    let palette = Palette::default();
    let trace = compute_shortest_paths(&graph, "A");

    let final_edge_color = |edge: &str| {
        trace
            .iter()
            .rev()
            .find_map(|step| match step {
                Step::HighlightEdge { edge_id, color, .. } if edge_id == edge => {
                    Some(color.clone())
                }
                _ => None,
            })
            .expect("每条边都应被着色")
    };
    assert_eq!(final_edge_color("AB"), palette.path);
    assert_eq!(final_edge_color("AC"), palette.neutral);
}

#[test]
fn test_labels_monotone_non_increasing() {
    for graph in common::random_graphs(10, 9, false) {
        let start = graph.nodes[0].id.clone();
        let trace = compute_shortest_paths(&graph, &start);

        for node in &graph.nodes {
            let labels: Vec<&str> = trace.labels_for(&node.id).collect();
            assert_eq!(labels.first(), Some(&INFINITY_SYMBOL));
            let values: Vec<f64> = labels
                .iter()
                .skip(1)
                .map(|label| label.parse::<f64>().expect("标签应为数字"))
                .collect();
            assert!(
                values.windows(2).all(|pair| pair[1] <= pair[0]),
                "节点 {} 的标签不是单调不增: {:?}",
                node.id,
                labels
            );
        }
    }
}

#[test]
fn test_agrees_with_all_pairs() {
    for directed in [false, true] {
        for graph in common::random_graphs(6, 7, directed) {
            let all_pairs = FloydWarshall::run(&graph, &Palette::default())
                .result
                .expect("非空图");
            for source in &graph.nodes {
                let tree = Dijkstra::run(&graph, &source.id, &Palette::default())
                    .tree
                    .expect("起点存在");
                for target in &graph.nodes {
                    assert_eq!(
                        tree.distance_to(&target.id),
                        all_pairs.distance(&source.id, &target.id),
                        "{} -> {} 的距离不一致",
                        source.id,
                        target.id
                    );
                }
            }
        }
    }
}

#[test]
fn test_missing_start_node() {
    let graph = data_fixtures::shortest_path_graph();
    assert_single_message(&compute_shortest_paths(&graph, "Z"), "Start node not found.");
}

#[test]
fn test_empty_graph() {
    let trace = compute_shortest_paths(&graphtrace::Graph::default(), "A");
    assert_single_message(&trace, "Start node not found.");
}

#[test]
fn test_directed_edges_limit_reachability() {
    let graph = data_fixtures::directed_chain();
    let tree = Dijkstra::run(&graph, "B", &Palette::default())
        .tree
        .expect("起点存在");
    assert_eq!(tree.distance_to("C"), Some(1.0));
    assert_eq!(tree.distance_to("A"), None);
    assert_eq!(tree.path_to("A"), None);
}

#[test]
fn test_trace_is_deterministic() {
    let graph = data_fixtures::disconnected_graph();
    assert_eq!(
        compute_shortest_paths(&graph, "A"),
        compute_shortest_paths(&graph, "A")
    );
}
