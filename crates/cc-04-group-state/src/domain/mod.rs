pub mod errors;
pub mod memo;
pub mod search;
pub mod selectors;
pub mod sets;
pub mod store;

pub use errors::*;
pub use memo::*;
pub use search::*;
pub use selectors::*;
pub use sets::*;
pub use store::*;
