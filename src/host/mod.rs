//! Reference terminal host.
//!
//! A flat tree of rectangular views that implement [`Element`](crate::traits::Element),
//! so descriptions can be attached and triggered end to end in a terminal.

mod tree;
mod view;

pub use tree::ViewTree;
pub use view::View;
