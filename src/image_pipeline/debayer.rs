//! Debayering module for turning scaled Bayer grids into preview images

mod demosaicer;
pub mod cpu_debayer;
pub mod types;

pub use cpu_debayer::CpuDebayer;
pub use demosaicer::Demosaicer;
pub use types::{BayerOrder, PreviewColor, PreviewImage};
