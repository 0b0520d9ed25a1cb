//! Domain layer: the pure CSV -> tree -> DOT pipeline core.
//!
//! Stateless given its input; the only I/O is reading the source file in
//! [`reader::read_records`].

pub mod builder;
pub mod code;
pub mod entities;
pub mod error;
pub mod reader;
pub mod tree;

pub use builder::TreeBuilder;
pub use entities::Record;
pub use error::{WbsError, WbsResult};
pub use reader::{parse_records, read_records};
pub use tree::{WbsNode, WbsTree};
