//! 拓扑输入
//!
//! 文本/JSON 拓扑描述的解析，以及测试与演示用的预置拓扑。

pub mod presets;
mod spec;

pub use spec::{LinkSpec, TopologySpec, load, parse_json, parse_text};
