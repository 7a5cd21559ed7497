//! 操作员命令
//!
//! 两轮之间可发出的命令，一行一个：
//! - 空行：推进一轮
//! - `c A B cost`：修改链路代价
//! - `d A B`：删除链路
//! - `v A B`：查看 A 到 B 的转发路径
//! - `q`：退出

use std::str::FromStr;

use crate::error::Error;
use crate::net::parse_cost;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Advance,
    ChangeCost { a: String, b: String, cost: i64 },
    DeleteLink { a: String, b: String },
    ViewRoute { from: String, to: String },
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Ok(Command::Advance);
        };
        let invalid = || Error::InvalidCommand(line.trim().to_string());

        match (head.to_ascii_lowercase().as_str(), args) {
            ("c", [a, b, cost]) => Ok(Command::ChangeCost {
                a: a.to_string(),
                b: b.to_string(),
                cost: parse_cost(cost)?,
            }),
            ("d", [a, b]) => Ok(Command::DeleteLink {
                a: a.to_string(),
                b: b.to_string(),
            }),
            ("v", [from, to]) => Ok(Command::ViewRoute {
                from: from.to_string(),
                to: to.to_string(),
            }),
            ("q", []) => Ok(Command::Quit),
            _ => Err(invalid()),
        }
    }
}
