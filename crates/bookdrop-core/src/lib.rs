pub mod config;
pub mod logging;

pub mod local_copy;
pub mod path_synth;
pub mod reference;
