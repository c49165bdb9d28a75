pub mod invoice;
pub mod request;

pub use invoice::*;
pub use request::*;
