//! Core types shared by the reconstruction stages.

pub mod node;
pub mod clique;
pub mod direction;

pub use node::NodeId;
pub use clique::{Clique, CliqueLabel, LabelStyle};
pub use direction::Direction;
