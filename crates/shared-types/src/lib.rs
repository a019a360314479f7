pub mod error;
pub mod feature_flags;

// Court application domain
pub mod court_application;
pub mod proceedings;

pub use error::*;
pub use feature_flags::*;

pub use court_application::*;
pub use proceedings::*;
