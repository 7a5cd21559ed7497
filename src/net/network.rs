//! 网络拓扑管理
//!
//! `Network` 集中持有全部节点与链路（arena），节点通过 `LinkId`
//! 引用其关联链路，避免两端节点之间的循环所有权。

use std::collections::HashMap;

use super::id::{LinkId, NodeId};
use super::link::Link;
use super::node::Node;
use super::routing::RouteEntry;
use crate::error::{Error, Result};
use tracing::{debug, info};

/// 网络拓扑
///
/// 不变量：每条存活链路的两个端点都在节点集合中；每个节点的邻接集合
/// 恰好包含以它为端点的存活链路。
#[derive(Debug, Default, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    /// 已删除的链路留下 None，保证 LinkId 不被复用
    links: Vec<Option<Link>>,
    by_name: HashMap<String, NodeId>,
}

impl Network {
    /// 添加节点；名字必须非空、不含空白且不重复
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(Error::malformed(None, format!("invalid node name `{name}`")));
        }
        if self.by_name.contains_key(&name) {
            return Err(Error::malformed(None, format!("duplicate node `{name}`")));
        }
        let id = NodeId(self.nodes.len());
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node::new(id, name));
        Ok(id)
    }

    /// 按名字连接两个节点（创建无向链路）
    pub fn add_link(&mut self, a: &str, b: &str, weight: i64) -> Result<LinkId> {
        let ia = self
            .node_id(a)
            .ok_or_else(|| Error::malformed(None, format!("undefined node `{a}`")))?;
        let ib = self
            .node_id(b)
            .ok_or_else(|| Error::malformed(None, format!("undefined node `{b}`")))?;
        self.connect(ia, ib, weight)
    }

    /// 连接两个节点（创建无向链路）
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: i64) -> Result<LinkId> {
        if a.0 >= self.nodes.len() || b.0 >= self.nodes.len() {
            return Err(Error::malformed(None, "link endpoint out of range"));
        }
        if a == b {
            return Err(Error::malformed(
                None,
                format!("self-loop on `{}`", self.nodes[a.0].name()),
            ));
        }
        if self.link_between(a, b).is_some() {
            return Err(Error::malformed(
                None,
                format!(
                    "duplicate link `{}`-`{}`",
                    self.nodes[a.0].name(),
                    self.nodes[b.0].name()
                ),
            ));
        }

        let id = LinkId(self.links.len());
        self.links.push(Some(Link::new(a, b, weight)));
        self.nodes[a.0].links.insert(id);
        self.nodes[b.0].links.insert(id);
        debug!(link = id.0, a = a.0, b = b.0, weight, "链路已创建");
        Ok(id)
    }

    /// 每个节点的路由表重置为只含自身条目 (0, -, -)
    #[tracing::instrument(skip(self), fields(nodes = self.nodes.len()))]
    pub fn initialise(&mut self) {
        for node in &mut self.nodes {
            node.table.clear();
            node.table.insert(node.id(), RouteEntry::SELF);
        }
        info!("路由表已初始化");
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> &str {
        self.nodes[id.0].name()
    }

    /// 存活链路；已删除的返回 None
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn link_mut(&mut self, id: LinkId) -> Option<&mut Link> {
        self.links.get_mut(id.0).and_then(Option::as_mut)
    }

    /// 所有存活链路
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|l| (LinkId(i), l)))
    }

    pub fn link_count(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    /// 查找端点集合恰为 {a, b} 的链路
    pub fn link_between(&self, a: NodeId, b: NodeId) -> Option<LinkId> {
        self.nodes
            .get(a.0)?
            .links
            .iter()
            .copied()
            .find(|&id| self.link(id).is_some_and(|l| l.joins(a, b)))
    }

    /// 从 arena 中移除链路，并从两端的邻接集合中摘除
    pub(crate) fn remove_link(&mut self, id: LinkId) -> Option<Link> {
        let link = self.links.get_mut(id.0)?.take()?;
        self.nodes[link.a.0].links.remove(&id);
        self.nodes[link.b.0].links.remove(&id);
        Some(link)
    }

    /// 节点 `id` 的邻居及对应链路代价，按 LinkId 顺序
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, i64)> + '_ {
        self.nodes[id.0].links.iter().filter_map(move |&lid| {
            let link = self.link(lid)?;
            Some((link.other_end(id)?, link.weight))
        })
    }
}
