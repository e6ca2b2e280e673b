pub mod aggregator;
pub mod catalog;
pub mod comparison;
pub mod entities;
pub mod ports;
pub mod recommendations;
pub mod services;
pub mod summary;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
