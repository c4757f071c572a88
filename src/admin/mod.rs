pub mod endpoints;
pub mod manager;
pub use endpoints::*;
