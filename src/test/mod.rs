mod command;
mod simulator;
mod viz_events;

use crate::net::Network;
use crate::topo::parse_text;

/// A - B - C，两条链路代价都为 1
pub(crate) fn abc() -> Network {
    net_from("A B C\nA B 1\nB C 1\n")
}

pub(crate) fn net_from(raw: &str) -> Network {
    parse_text(raw)
        .expect("parse topology")
        .build()
        .expect("build topology")
}

/// Floyd-Warshall 全源最短路，用作收敛结果的参照
pub(crate) fn all_pairs_shortest(net: &Network) -> Vec<Vec<Option<i64>>> {
    let n = net.node_count();
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for (_, l) in net.links() {
        for (x, y) in [(l.a, l.b), (l.b, l.a)] {
            let cur = dist[x.0][y.0];
            if cur.is_none_or(|c| l.weight < c) {
                dist[x.0][y.0] = Some(l.weight);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|c| ik + kj < c) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}
