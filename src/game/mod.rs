// Demo layer: scene content and frame lifecycle

pub mod demo;
pub mod scene;

pub use demo::Demo;
