//! 轨迹回放
//!
//! 把 `Step` 逐个应用到图的展示副本上，得到渲染端看到的中间与最终状态。
//! 回放是纯函数式的：同一初始状态回放同一轨迹，结果总是相同。
//! 节奏控制（每步间隔、暂停）属于调用方。

use std::collections::VecDeque;

use crate::config::Config;
use crate::core::graph::Graph;
use crate::core::step::{MatrixCell, Step, Trace};

/// 默认保留的消息条数
pub const DEFAULT_MAX_MESSAGES: usize = 100;

/// 回放器：持有图的展示副本
#[derive(Debug, Clone, PartialEq)]
pub struct Replayer {
    initial: Graph,
    display: Graph,
    messages: VecDeque<String>,
    max_messages: usize,
    current_description: Option<String>,
    matrix: Option<(Vec<Vec<MatrixCell>>, Vec<String>)>,
    applied: usize,
}

impl Replayer {
    pub fn new(graph: &Graph) -> Self {
        Self::with_max_messages(graph, DEFAULT_MAX_MESSAGES)
    }

    /// 消息上限取自配置
    pub fn from_config(graph: &Graph, config: &Config) -> Self {
        Self::with_max_messages(graph, config.max_messages)
    }

    pub fn with_max_messages(graph: &Graph, max_messages: usize) -> Self {
        Self {
            initial: graph.clone(),
            display: graph.clone(),
            messages: VecDeque::new(),
            max_messages,
            current_description: None,
            matrix: None,
            applied: 0,
        }
    }

    /// 应用单个步骤，引用不存在的节点或边时忽略
    pub fn apply(&mut self, step: &Step) {
        if let Some(description) = step.ai_description() {
            self.current_description = Some(description.to_string());
        }

        match step {
            Step::Message { text, .. } => {
                self.messages.push_front(text.clone());
                self.messages.truncate(self.max_messages);
            }
            Step::HighlightNode { node_id, color, .. } => {
                if let Some(node) = self.display.nodes.iter_mut().find(|n| &n.id == node_id) {
                    node.display_color = Some(color.clone());
                }
            }
            Step::HighlightEdge { edge_id, color, .. } => {
                if let Some(edge) = self.display.edges.iter_mut().find(|e| &e.id == edge_id) {
                    edge.display_color = Some(color.clone());
                }
            }
            Step::SetNodeLabel { node_id, label } => {
                if let Some(node) = self.display.nodes.iter_mut().find(|n| &n.id == node_id) {
                    node.label = Some(label.clone());
                }
            }
            Step::ResetColors => {
                self.display.nodes.iter_mut().for_each(|n| n.display_color = None);
                self.display.edges.iter_mut().for_each(|e| e.display_color = None);
            }
            Step::ClearLabels => {
                for (node, original) in self.display.nodes.iter_mut().zip(&self.initial.nodes) {
                    node.label = Some(original.display_name().to_string());
                }
            }
            Step::UpdateMatrix { matrix, labels, .. } => {
                self.matrix = Some((matrix.clone(), labels.clone()));
            }
        }

        self.applied += 1;
    }

    pub fn apply_all<'a>(&mut self, steps: impl IntoIterator<Item = &'a Step>) {
        for step in steps {
            self.apply(step);
        }
    }

    /// 恢复初始展示状态
    pub fn reset(&mut self) {
        self.display = self.initial.clone();
        self.messages.clear();
        self.current_description = None;
        self.matrix = None;
        self.applied = 0;
    }

    pub fn graph(&self) -> &Graph {
        &self.display
    }

    /// 消息日志，最新的在前
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn current_description(&self) -> Option<&str> {
        self.current_description.as_deref()
    }

    pub fn matrix(&self) -> Option<&[Vec<MatrixCell>]> {
        self.matrix.as_ref().map(|(matrix, _)| matrix.as_slice())
    }

    pub fn matrix_labels(&self) -> Option<&[String]> {
        self.matrix.as_ref().map(|(_, labels)| labels.as_slice())
    }

    /// 已应用的步骤数
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn node_label(&self, node_id: &str) -> Option<&str> {
        self.display.node(node_id).and_then(|node| node.label.as_deref())
    }

    pub fn node_color(&self, node_id: &str) -> Option<&str> {
        self.display.node(node_id).and_then(|node| node.display_color.as_deref())
    }

    pub fn edge_color(&self, edge_id: &str) -> Option<&str> {
        self.display.edge(edge_id).and_then(|edge| edge.display_color.as_deref())
    }
}

/// 从初始状态回放整条轨迹
pub fn replay(graph: &Graph, trace: &Trace) -> Replayer {
    let mut replayer = Replayer::new(graph);
    replayer.apply_all(trace);
    replayer
}
