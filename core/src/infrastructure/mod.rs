pub mod literature;
pub mod llm;
pub mod safety_db;
