//! Mind-map Core Types and Definitions
//!
//! This crate provides the node model for mind-map diagrams. It includes:
//!
//! - **Colors**: RGB(A) colors with CSS color parsing ([`color::Color`])
//! - **Geometry**: Integer canvas geometry ([`geometry`] module)
//! - **Nodes**: A single diagram node and its child links ([`node::Node`])
//! - **Arena**: Storage that node handles point into ([`arena::NodeArena`])

pub mod arena;
pub mod color;
pub mod geometry;
pub mod node;
