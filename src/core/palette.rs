//! 轨迹配色
//!
//! 引擎只输出颜色字符串，由渲染端解释。默认值是前端主题变量。

use serde::{Deserialize, Serialize};

/// 每种高亮角色对应的颜色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// 初始化时的节点颜色
    pub initial: String,
    /// 正在处理的节点 / 当前中间节点 / 生成树的起点
    pub active: String,
    /// 正在考察的边
    pub considering: String,
    /// 距离刚被更新的节点
    pub updated: String,
    /// 最短路径树上的节点和边
    pub path: String,
    /// 不可达节点
    pub muted: String,
    /// 不在结果中的边
    pub neutral: String,
    /// 进入候选池的边
    pub candidate: String,
    /// 被接受进生成树的边和节点
    pub accepted: String,
    /// 因成环被拒绝的边
    pub rejected: String,
    /// 最终生成树 / 森林
    pub final_tree: String,
    /// 负权环
    pub error: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            initial: "hsl(var(--secondary))".to_string(),
            active: "hsl(var(--accent))".to_string(),
            considering: "hsl(var(--secondary))".to_string(),
            updated: "hsl(var(--primary))".to_string(),
            path: "hsl(var(--accent))".to_string(),
            muted: "hsl(var(--muted))".to_string(),
            neutral: "hsl(var(--border))".to_string(),
            candidate: "hsl(var(--chart-4))".to_string(),
            accepted: "hsl(var(--primary))".to_string(),
            rejected: "hsl(var(--destructive) / 0.4)".to_string(),
            final_tree: "hsl(var(--accent))".to_string(),
            error: "hsl(var(--destructive))".to_string(),
        }
    }
}
