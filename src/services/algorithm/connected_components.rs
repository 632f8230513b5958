//! 连通分量算法模块
//!
//! 把所有边视为无向边，用并查集划分节点

use crate::core::graph::{Graph, GraphIndex};

use super::union_find::UnionFind;

/// 连通分量算法结构体
pub struct ConnectedComponents;

impl ConnectedComponents {
    fn union_all(graph: &Graph) -> UnionFind {
        let index = GraphIndex::new(graph);
        let mut sets = UnionFind::new(graph.nodes.len());
        for indexed in index.edges() {
            sets.union(indexed.source, indexed.target);
        }
        sets
    }

    /// 查找所有连通分量，分量按首个节点的顺序排列，分量内按节点顺序
    pub fn find(graph: &Graph) -> Vec<Vec<String>> {
        let mut sets = Self::union_all(graph);
        let mut component_of_root: Vec<Option<usize>> = vec![None; graph.nodes.len()];
        let mut components: Vec<Vec<String>> = Vec::new();

        for (position, node) in graph.nodes.iter().enumerate() {
            let root = sets.find(position);
            let slot = *component_of_root[root].get_or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(node.id.clone());
        }

        components
    }

    /// 计算连通分量的数量
    pub fn count(graph: &Graph) -> usize {
        Self::union_all(graph).set_count()
    }

    /// 检查两个节点是否在同一个连通分量中
    pub fn in_same_component(graph: &Graph, node1: &str, node2: &str) -> bool {
        let index = GraphIndex::new(graph);
        match (index.position(node1), index.position(node2)) {
            (Some(a), Some(b)) => Self::union_all(graph).connected(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::{Edge, Node};

    fn create_test_graph() -> Graph {
        Graph::new(
            ["1", "2", "3", "4", "5"]
                .iter()
                .map(|id| Node::new(*id, 0.0, 0.0))
                .collect(),
            vec![
                Edge::undirected("a", "1", "2", 1.0),
                Edge::directed("b", "4", "3", 1.0),
            ],
        )
    }

    #[test]
    fn test_find_connected_components() {
        let components = ConnectedComponents::find(&create_test_graph());
        assert_eq!(
            components,
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
                vec!["5".to_string()],
            ]
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(ConnectedComponents::count(&create_test_graph()), 3);
    }

    #[test]
    fn test_in_same_component() {
        let graph = create_test_graph();
        assert!(ConnectedComponents::in_same_component(&graph, "3", "4"));
        assert!(!ConnectedComponents::in_same_component(&graph, "1", "3"));
        assert!(!ConnectedComponents::in_same_component(&graph, "1", "missing"));
    }

    #[test]
    fn test_empty_graph() {
        assert!(ConnectedComponents::find(&Graph::default()).is_empty());
        assert_eq!(ConnectedComponents::count(&Graph::default()), 0);
    }
}
