use crate::constants::LOG_RING_CAPACITY;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Shared in-memory logger that can be cloned across the application
///
/// The terminal owns stdout while the UI is running, so transient messages
/// land here (newest first on read) and optionally in the file log configured
/// by the host application.
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: impl Into<String>) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted = format!("[{}] {}", timestamp, message.into());

        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == LOG_RING_CAPACITY {
                entries.pop_front();
            }
            entries.push_back(formatted);
        }
    }

    /// Get all entries, newest first
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            entries.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<String> {
        self.entries.lock().ok().and_then(|e| e.back().cloned())
    }

    /// Clear all entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
