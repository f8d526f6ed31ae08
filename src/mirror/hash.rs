use md5::{Digest, Md5};

/// Uniquifying suffix for a project path, seeded with the current time.
/// Not a content hash: the same name hashed at a different millisecond differs.
pub struct PathHash {
    value: String,
}

impl PathHash {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn create(name: &str, timestamp_millis: i64) -> Self {
        let mut hasher = Md5::new();
        hasher.update(name.as_bytes());
        hasher.update(timestamp_millis.to_string().as_bytes());
        let hash = hasher.finalize();

        PathHash {
            value: hex::encode(hash),
        }
    }
}
