//! Asset trees: node variants, the arena forest, and the backend wire shape.

pub mod forest;
pub mod node;
pub mod remote;

pub use forest::Forest;
pub use node::{DirectoryNode, FileNode, ModelNode};
pub use remote::RemoteNode;
