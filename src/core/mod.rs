pub mod ingest;
pub mod landing;
