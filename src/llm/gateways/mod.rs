pub mod luminous;

pub use luminous::{LuminousConfig, LuminousGateway};
