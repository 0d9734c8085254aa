//! Resolution metadata for image references in help documentation.
//!
//! Two independent value components: [`ImageLocation`] records how a single
//! image reference found in a help document was resolved (local, runtime,
//! unresolved runtime, or remote), and [`Principal`] is a named identity
//! tagged with a [`PrincipalKind`]. Neither performs any I/O — resolution
//! and authentication happen in external collaborators, which construct
//! these types with their results.

pub mod error;
pub mod location;
pub mod principal;

pub use error::Error;
pub use location::{ImageLocation, Resolution};
pub use principal::{Principal, PrincipalKind};
