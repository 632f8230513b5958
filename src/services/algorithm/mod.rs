//! 算法模块
//!
//! 四个轨迹引擎（Dijkstra、Floyd-Warshall、Kruskal、Prim）以及它们依赖的图算法

pub mod connected_components;
pub mod cycle_detection;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod mst;
pub mod prim;
pub mod runner;
pub mod union_find;

// 重新导出常用算法结构体
pub use connected_components::ConnectedComponents;
pub use cycle_detection::CycleDetection;
pub use dijkstra::{Dijkstra, ShortestPathRun, ShortestPathTree};
pub use floyd_warshall::{AllPairsRun, FloydWarshall, FloydWarshallResult};
pub use kruskal::Kruskal;
pub use mst::{MstRun, SpanningForest};
pub use prim::Prim;
pub use runner::{run, AlgorithmKind};
pub use union_find::UnionFind;
