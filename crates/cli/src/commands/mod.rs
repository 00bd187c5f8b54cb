pub mod inspect;
pub mod schemes;
pub mod solve;
