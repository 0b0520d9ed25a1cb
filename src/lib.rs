//! wbs2dot: turn hierarchically coded work-breakdown CSV files into Graphviz
//! DOT diagrams.
//!
//! The pipeline is three pure stages: [`domain::reader`] parses CSV text into
//! [`domain::Record`]s, [`domain::TreeBuilder`] assembles and validates the
//! [`domain::WbsTree`], and [`dot::DotEmitter`] serializes it as DOT text.
//! Each invocation builds its own tree and shares nothing, so the pipeline can
//! be called repeatedly and from multiple threads.

pub mod cli;
pub mod domain;
pub mod dot;
pub mod exitcode;
pub mod util;

pub use domain::{parse_records, read_records, Record, TreeBuilder, WbsError, WbsResult, WbsTree};
pub use dot::{DotEmitter, RankDir};

/// One-call pipeline: CSV text in, DOT document out.
pub fn generate_dot(input: &str, strict: bool, rankdir: RankDir) -> WbsResult<String> {
    let records = parse_records(input)?;
    let tree = TreeBuilder::new(strict).build(records)?;
    Ok(DotEmitter::new(rankdir).emit(&tree))
}
