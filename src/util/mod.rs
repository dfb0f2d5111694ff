mod id;
pub mod logging;
mod pause;

pub use id::{random_suffix, unique_id};
pub use pause::pause;
