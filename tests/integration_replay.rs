//! 轨迹回放集成测试
//!
//! 测试范围:
//! - 回放幂等与确定性
//! - 引擎轨迹回放后的最终展示状态
//! - 轨迹JSON往返后回放结果不变

mod common;

use common::data_fixtures;

use graphtrace::services::{presets, replay, GraphEditor, Replayer};
use graphtrace::{run, AlgorithmKind, Palette, Trace};

#[test]
fn test_replay_is_idempotent() {
    let graph = data_fixtures::shortest_path_graph();
    for kind in AlgorithmKind::ALL {
        let trace = run(&graph, kind, Some("A"), &Palette::default());

        let mut replayer = Replayer::new(&graph);
        replayer.apply_all(&trace);
        let first = replayer.clone();

        replayer.reset();
        replayer.apply_all(&trace);
        assert_eq!(replayer, first, "{} 的回放结果不一致", kind);
        assert_eq!(replayer.applied(), trace.len());
    }
}

#[test]
fn test_dijkstra_final_labels() {
    let graph = data_fixtures::shortest_path_graph();
    let trace = run(&graph, AlgorithmKind::Dijkstra, Some("A"), &Palette::default());
    let state = replay(&graph, &trace);

    let labels: Vec<_> = ["A", "B", "C", "D"]
        .iter()
        .map(|id| state.node_label(id))
        .collect();
    assert_eq!(labels, vec![Some("0"), Some("1"), Some("3"), Some("4")]);
    assert_eq!(
        state.messages().next(),
        Some("Dijkstra's Algorithm complete. Final distances shown.")
    );
    assert!(state.current_description().is_some());
}

#[test]
fn test_all_pairs_final_matrix() {
    let graph = data_fixtures::spanning_tree_graph();
    let trace = run(&graph, AlgorithmKind::FloydWarshall, None, &Palette::default());
    let state = replay(&graph, &trace);

    assert_eq!(state.matrix(), trace.last_matrix());
    assert_eq!(
        state.matrix_labels().map(|labels| labels.to_vec()),
        Some(vec!["P".to_string(), "Q".to_string(), "R".to_string(), "S".to_string()])
    );
}

#[test]
fn test_mst_final_colors() {
    let preset = presets::find("circuit-board-design").expect("场景应存在");
    let palette = Palette::default();
    let trace = run(&preset.graph, preset.algorithm, None, &palette);
    let state = replay(&preset.graph, &trace);

    // RAM-SSD, RAM-GPU, CPU-RAM
    for edge in ["edge-5", "edge-4", "edge-1"] {
        assert_eq!(state.edge_color(edge), Some(palette.final_tree.as_str()));
    }
    for edge in ["edge-2", "edge-3", "edge-6"] {
        assert_eq!(state.edge_color(edge), Some(palette.neutral.as_str()));
    }
}

#[test]
fn test_json_round_trip_replays_identically() {
    let graph = data_fixtures::disconnected_graph();
    let trace = run(&graph, AlgorithmKind::Prim, None, &Palette::default());
    let json = trace.to_json().expect("序列化失败");
    let parsed = Trace::from_json(&json).expect("反序列化失败");
    assert_eq!(replay(&graph, &parsed), replay(&graph, &trace));
}

#[test]
fn test_edited_graph_runs_end_to_end() {
    let mut editor = GraphEditor::new();
    let a = editor.add_node(100.0, 100.0);
    let b = editor.add_node(200.0, 100.0);
    let c = editor.add_node(150.0, 200.0);
    editor.add_edge(&a, &b, 4.0, false).expect("添加边失败");
    editor.add_edge(&b, &c, 1.0, false).expect("添加边失败");
    editor.add_edge(&a, &c, 2.0, false).expect("添加边失败");
    editor.set_all_directed(AlgorithmKind::Dijkstra.uses_directed_edges());

    let graph = editor.into_graph();
    assert!(graph.validate().is_ok());
    let state = replay(
        &graph,
        &run(&graph, AlgorithmKind::Dijkstra, Some(a.as_str()), &Palette::default()),
    );
    assert_eq!(state.node_label(&b), Some("4"));
    assert_eq!(state.node_label(&c), Some("2"));
}
