use serde::Serialize;
use std::collections::BTreeMap;

/// Everything known about one mounted device or pseudo-device.
///
/// Every field starts out absent and is filled in by whichever source owns it:
/// df owns the size/usage columns, the mount table owns `mount`, `fs_type`
/// and `mount_options`, and lsblk/blkid own `uuid`, `label` and `fs_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilesystemRecord {
    // Kilobyte counts stay exactly as df printed them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_size:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_used:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_available:  Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_used:  Option<String>,   // "56%"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label:         Option<String>,
}

impl FilesystemRecord {
    /// df reports kilobytes; parse on demand for display only.
    pub fn size_kb(&self) -> Option<u64> {
        self.kb_size.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn used_kb(&self) -> Option<u64> {
        self.kb_used.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn available_kb(&self) -> Option<u64> {
        self.kb_available.as_deref().and_then(|s| s.parse().ok())
    }
}

/// The record set for one collection run, keyed by the device token exactly
/// as df or mount printed it ("/dev/md0", "tmpfs", "proc", ...).
///
/// Keys are only ever added. Collectors go through [`FilesystemSet::entry`],
/// which creates a record on first sight and hands back the existing one
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilesystemSet {
    records: BTreeMap<String, FilesystemRecord>,
}

impl FilesystemSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&mut self, device: &str) -> &mut FilesystemRecord {
        self.records.entry(device.to_string()).or_default()
    }

    #[cfg(test)]
    pub fn get(&self, device: &str) -> Option<&FilesystemRecord> {
        self.records.get(device)
    }

    #[cfg(test)]
    pub fn contains(&self, device: &str) -> bool {
        self.records.contains_key(device)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilesystemRecord)> {
        self.records.iter()
    }
}
