mod compare;
mod cost;
mod model;

pub mod report;

pub use compare::*;
pub use cost::*;
pub use model::*;
