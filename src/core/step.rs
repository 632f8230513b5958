//! 轨迹事件模型
//!
//! `Step` 是引擎输出的离散可视化事件，`Trace` 是一次引擎调用的完整事件序列。
//! 序列化格式与前端约定一致：内部 `type` 标签，字段使用 camelCase。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// 无穷距离在标签和矩阵中的显示形式
pub const INFINITY_SYMBOL: &str = "∞";

/// 单个可视化事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Step {
    /// 面向用户的叙述
    Message {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ai_description: Option<String>,
    },
    HighlightNode {
        node_id: String,
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ai_description: Option<String>,
    },
    HighlightEdge {
        edge_id: String,
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ai_description: Option<String>,
    },
    SetNodeLabel {
        node_id: String,
        label: String,
    },
    /// 清除所有节点和边的高亮
    ResetColors,
    /// 恢复所有节点的默认标签
    ClearLabels,
    /// 全源最短路径的距离矩阵快照
    UpdateMatrix {
        matrix: Vec<Vec<MatrixCell>>,
        labels: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ai_description: Option<String>,
    },
}

impl Step {
    /// 事件附带的状态描述（供解释功能使用）
    pub fn ai_description(&self) -> Option<&str> {
        match self {
            Step::Message { ai_description, .. }
            | Step::HighlightNode { ai_description, .. }
            | Step::HighlightEdge { ai_description, .. }
            | Step::UpdateMatrix { ai_description, .. } => ai_description.as_deref(),
            Step::SetNodeLabel { .. } | Step::ResetColors | Step::ClearLabels => None,
        }
    }

    pub fn is_message(&self) -> bool {
        matches!(self, Step::Message { .. })
    }
}

/// 距离矩阵单元格：有限值或无穷
///
/// 变体顺序决定了派生的比较语义：任何有限值都小于 `Infinite`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub enum MatrixCell {
    Finite(f64),
    Infinite,
}

impl MatrixCell {
    pub fn is_finite(&self) -> bool {
        matches!(self, MatrixCell::Finite(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            MatrixCell::Finite(value) => Some(*value),
            MatrixCell::Infinite => None,
        }
    }
}

impl Add for MatrixCell {
    type Output = MatrixCell;

    fn add(self, rhs: MatrixCell) -> MatrixCell {
        match (self, rhs) {
            (MatrixCell::Finite(a), MatrixCell::Finite(b)) => MatrixCell::Finite(a + b),
            _ => MatrixCell::Infinite,
        }
    }
}

impl fmt::Display for MatrixCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixCell::Finite(value) => write!(f, "{}", value),
            MatrixCell::Infinite => f.write_str(INFINITY_SYMBOL),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Number(f64),
    Text(String),
}

impl TryFrom<RawCell> for MatrixCell {
    type Error = String;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        match raw {
            RawCell::Number(value) => Ok(MatrixCell::Finite(value)),
            RawCell::Text(text) if text == INFINITY_SYMBOL => Ok(MatrixCell::Infinite),
            RawCell::Text(text) => Err(format!("无效的矩阵单元格: {}", text)),
        }
    }
}

impl From<MatrixCell> for RawCell {
    fn from(cell: MatrixCell) -> Self {
        match cell {
            MatrixCell::Finite(value) => RawCell::Number(value),
            MatrixCell::Infinite => RawCell::Text(INFINITY_SYMBOL.to_string()),
        }
    }
}

/// 一次引擎调用产生的有序事件序列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只包含一条消息的轨迹，用于起点缺失、空图等情况
    pub fn single_message(text: impl Into<String>, ai_description: impl Into<String>) -> Self {
        let mut trace = Self::new();
        trace.message(text, ai_description);
        trace
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn message(&mut self, text: impl Into<String>, ai_description: impl Into<String>) {
        self.push(Step::Message {
            text: text.into(),
            ai_description: Some(ai_description.into()),
        });
    }

    pub fn highlight_node(
        &mut self,
        node_id: &str,
        color: &str,
        ai_description: impl Into<String>,
    ) {
        self.push(Step::HighlightNode {
            node_id: node_id.to_string(),
            color: color.to_string(),
            ai_description: Some(ai_description.into()),
        });
    }

    pub fn highlight_edge(
        &mut self,
        edge_id: &str,
        color: &str,
        ai_description: impl Into<String>,
    ) {
        self.push(Step::HighlightEdge {
            edge_id: edge_id.to_string(),
            color: color.to_string(),
            ai_description: Some(ai_description.into()),
        });
    }

    pub fn set_node_label(&mut self, node_id: &str, label: impl Into<String>) {
        self.push(Step::SetNodeLabel {
            node_id: node_id.to_string(),
            label: label.into(),
        });
    }

    pub fn reset_colors(&mut self) {
        self.push(Step::ResetColors);
    }

    pub fn clear_labels(&mut self) {
        self.push(Step::ClearLabels);
    }

    pub fn update_matrix(
        &mut self,
        matrix: &[Vec<MatrixCell>],
        labels: &[String],
        ai_description: impl Into<String>,
    ) {
        self.push(Step::UpdateMatrix {
            matrix: matrix.to_vec(),
            labels: labels.to_vec(),
            ai_description: Some(ai_description.into()),
        });
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// 所有消息文本，按出现顺序
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::Message { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// 指定节点收到的所有标签，按出现顺序
    pub fn labels_for<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.steps.iter().filter_map(move |step| match step {
            Step::SetNodeLabel { node_id: id, label } if id == node_id => Some(label.as_str()),
            _ => None,
        })
    }

    /// 最后一次矩阵快照
    pub fn last_matrix(&self) -> Option<&[Vec<MatrixCell>]> {
        self.steps.iter().rev().find_map(|step| match step {
            Step::UpdateMatrix { matrix, .. } => Some(matrix.as_slice()),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// 距离的标签形式：有限值按最短十进制形式，无穷用 ∞
pub fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(value) => value.to_string(),
        None => INFINITY_SYMBOL.to_string(),
    }
}
