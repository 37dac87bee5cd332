pub mod error;
pub mod feature_flags;
pub mod models;

// HashProof domain modules
pub mod complaint;
pub mod court;

pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use complaint::*;
pub use court::*;
