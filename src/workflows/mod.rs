pub mod ingest;

pub use self::ingest::ingest;
