//! Menu module - Hierarchical selectable menu

mod state;
mod tree;

pub use state::{GroupState, MenuRow, MenuState, RowKind};
pub use tree::{last_segment, MenuNode, MenuTree, RawMenuNode};
