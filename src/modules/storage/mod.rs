//! Storage module for report file management
//!
//! Provides the MinIO/S3-compatible storage client used for uploaded
//! medical report files.

mod minio_client;

pub use minio_client::MinIOClient;
