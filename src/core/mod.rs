pub mod error;
pub mod graph;
pub mod palette;
pub mod step;

// 错误和结果类型
pub use error::{ConfigError, EditError, GraphError, TraceError, TraceResult};

// 图数据模型
pub use graph::{Edge, Graph, GraphIndex, IndexedEdge, Node};

// 轨迹
pub use palette::Palette;
pub use step::{format_distance, MatrixCell, Step, Trace, INFINITY_SYMBOL};
