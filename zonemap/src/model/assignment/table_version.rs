use std::hash::{DefaultHasher, Hash, Hasher};

/// content fingerprint of the durable table, used to detect a write that
/// happened between our read and our rename.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableVersion(u64);

impl TableVersion {
    pub fn of(contents: &[u8]) -> TableVersion {
        let mut hasher = DefaultHasher::new();
        contents.hash(&mut hasher);
        TableVersion(hasher.finish())
    }
}
