//! OsiView - Interactive OSI / TCP-IP Layer Model Explorer
//! Side-by-side comparison of the two network stacks with an animated
//! packet-traversal simulator

pub mod geometry;
pub mod i18n;
pub mod model;
pub mod protocol;
pub mod sim;
pub mod timeline;

pub use i18n::{tr, Lang};
pub use model::{layers, Layer, ModelKind};
pub use sim::{Scenario, SimSession};
pub use timeline::RunState;
