pub mod config;
pub mod history;
pub mod input;
pub mod rig;
pub mod surface;
