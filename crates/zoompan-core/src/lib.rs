pub mod color;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod linked;
pub mod range;
pub mod transform;
