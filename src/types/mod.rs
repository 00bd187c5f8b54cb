pub mod id;
pub mod value;

pub use id::{NodeId, SchemeId};
pub use value::{Cost, Value};
