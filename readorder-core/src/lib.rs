pub mod analysis;
pub mod assemble;
pub mod consts;
pub mod error;
pub mod layout;
pub mod provider;

// Re-export commonly used types
pub use assemble::{
    assembler::{Assembler, AssemblerConfig},
    cluster::AnchorPolicy,
};
pub use layout::element::Fragment;
pub use provider::Provider;
