use serde::{Deserialize, Serialize};

/// Lifecycle data every stored record carries.
///
/// Soft-delete state stays in storage and never crosses the wire: a deleted
/// record is simply absent from every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Версия для optimistic locking
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Обновить timestamp и увеличить версию
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_bumps_version_and_keeps_created_at() {
        let mut meta = EntityMetadata::new();
        let created = meta.created_at;
        meta.touch();
        assert_eq!(meta.version, 1);
        assert_eq!(meta.created_at, created);
        assert!(meta.updated_at >= created);
    }
}
