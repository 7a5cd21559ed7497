//! 网络拓扑模块
//!
//! 此模块包含拓扑模型（节点、链路、路由表）以及运行期的链路变更与路径追踪。

// 子模块声明
mod id;
mod link;
mod mutate;
mod network;
mod node;
mod routing;
mod trace;

// 重新导出公共接口
pub use id::{LinkId, NodeId};
pub use link::Link;
pub use mutate::parse_cost;
pub use network::Network;
pub use node::Node;
pub use routing::{RouteEntry, RoutingTable};
