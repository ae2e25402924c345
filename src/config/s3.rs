//! Object-storage configuration.

use serde::Deserialize;

/// S3 bucket settings for storing profile images.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct S3Config {
    #[serde(rename = "S3Region", default)]
    pub region: String,
    /// Bucket host, e.g. `https://s3.ap-south-1.amazonaws.com`.
    #[serde(rename = "S3BucketHost", default)]
    pub bucket_host: String,
    #[serde(rename = "S3BucketName", default)]
    pub bucket_name: String,
    #[serde(rename = "S3BucketKeyID", default)]
    pub key_id: String,
    #[serde(rename = "S3BucketKey", default)]
    pub key: String,
}
