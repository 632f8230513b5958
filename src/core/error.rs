//! 统一错误处理 for GraphTrace
//!
//! 算法引擎本身从不返回错误：起点缺失、空图、负权环等情况都以 `Message`
//! 步骤写入轨迹。这里的错误类型只服务于引擎之外的可失败操作：
//!
//! - 图校验（`GraphError`）
//! - 图编辑（`EditError`）
//! - 配置加载（`ConfigError`）
//!
//! `TraceResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

/// 统一的错误类型
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("图错误: {0}")]
    Graph(#[from] GraphError),

    #[error("编辑错误: {0}")]
    Edit(#[from] EditError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("参数错误: {0}")]
    InvalidArgument(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 统一的结果类型
pub type TraceResult<T> = Result<T, TraceError>;

/// 图校验错误
///
/// 由 `Graph::validate` 返回，只报告遇到的第一个问题
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("节点ID重复: {0}")]
    DuplicateNode(String),

    #[error("边ID重复: {0}")]
    DuplicateEdge(String),

    #[error("边 {edge} 引用了不存在的节点 {node}")]
    DanglingEndpoint { edge: String, node: String },

    #[error("边 {edge} 的权重不是有限值: {weight}")]
    NonFiniteWeight { edge: String, weight: f64 },
}

/// 图编辑错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("节点未找到: {0}")]
    NodeNotFound(String),

    #[error("边已存在或与现有边重叠: {from} -> {to}")]
    EdgeExists { from: String, to: String },

    #[error("边的权重不是有限值: {0}")]
    InvalidWeight(f64),
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取配置文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("解析配置失败: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("序列化配置失败: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_converts_into_trace_error() {
        let err: TraceError = GraphError::DuplicateNode("A".to_string()).into();
        assert!(matches!(err, TraceError::Graph(_)));
        assert_eq!(err.to_string(), "图错误: 节点ID重复: A");
    }

    #[test]
    fn test_dangling_endpoint_message() {
        let err = GraphError::DanglingEndpoint {
            edge: "e1".to_string(),
            node: "Z".to_string(),
        };
        assert_eq!(err.to_string(), "边 e1 引用了不存在的节点 Z");
    }

    #[test]
    fn test_edit_error_converts_into_trace_error() {
        let err: TraceError = EditError::NodeNotFound("node-9".to_string()).into();
        assert!(err.to_string().contains("node-9"));
    }
}
