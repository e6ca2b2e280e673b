pub mod catalog;
pub mod entities;

pub use catalog::EducationCatalog;
pub use entities::EducationEntry;
