//! 服务层模块
//!
//! 算法引擎，以及围绕轨迹的回放、编辑、随机图和预置场景

pub mod algorithm;
pub mod editor;
pub mod presets;
pub mod random_graph;
pub mod replay;

// 重新导出常用服务
pub use algorithm::*;
pub use editor::GraphEditor;
pub use presets::Preset;
pub use random_graph::RandomGraphOptions;
pub use replay::{replay, Replayer};
