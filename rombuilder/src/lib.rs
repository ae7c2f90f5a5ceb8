pub mod builder;
pub mod summary;

pub use builder::{build, fill_handlers, fill_stubs, fill_vectors};
pub use summary::{Probe, ProbeKind, Summary};

/// Where the image lands, relative to the working directory.
pub const OUTPUT_FILE: &str = "e07-11.bin";
