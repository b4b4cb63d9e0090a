//! taskdef library - expose modules for testing
//!
//! The binary is a thin host around `taskdef-manifest`: it looks up a bundled
//! task definition, builds its manifest and writes it out in the requested
//! format.

pub mod commands;
pub mod common;
pub mod errors;
pub mod samples;
pub mod writer;

pub use common::GlobalOpts;
pub use taskdef_config as config_manager;
pub use taskdef_logger as logger;
