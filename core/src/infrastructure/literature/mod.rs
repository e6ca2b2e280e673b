pub mod pubmed_client;

pub use pubmed_client::PubMedLiteratureClient;
