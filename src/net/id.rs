//! 标识符类型
//!
//! 节点与链路在 `Network` arena 中的下标。节点从不删除，因此 `NodeId`
//! 在整个仿真期间稳定；链路删除后其 `LinkId` 不会被复用。

/// 节点标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// 链路标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(pub usize);
