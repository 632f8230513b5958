//! 自定义断言辅助模块
//!
//! 提供针对轨迹的常用断言函数

use graphtrace::{Graph, Step, Trace};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言轨迹只有一条消息
pub fn assert_single_message(trace: &Trace, expected: &str) {
    assert_eq!(trace.len(), 1, "轨迹应只有一个步骤, 实际是 {:?}", trace);
    match &trace.steps()[0] {
        Step::Message { text, .. } => assert_eq!(text, expected),
        other => panic!("期望 Message, 实际是 {:?}", other),
    }
}

/// 断言轨迹引用的节点和边都存在于图中
pub fn assert_references_exist(graph: &Graph, trace: &Trace) {
    for step in trace {
        match step {
            Step::HighlightNode { node_id, .. } | Step::SetNodeLabel { node_id, .. } => {
                assert!(graph.contains_node(node_id), "未知节点 {}", node_id)
            }
            Step::HighlightEdge { edge_id, .. } => {
                assert!(graph.edge(edge_id).is_some(), "未知边 {}", edge_id)
            }
            _ => {}
        }
    }
}

/// 断言接受的边集合不成环
pub fn assert_acyclic(graph: &Graph, edges: &[String]) {
    assert!(
        !graphtrace::services::CycleDetection::edges_form_cycle(graph, edges),
        "边集合 {:?} 包含环",
        edges
    );
}

/// 两个浮点数近似相等
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "期望 {}, 实际 {}",
        expected,
        actual
    );
}
