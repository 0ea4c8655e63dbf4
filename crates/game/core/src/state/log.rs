use std::collections::VecDeque;

use crate::config::GameConfig;

/// Bounded history of narration lines, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    lines: VecDeque<String>,
    /// Lines ever pushed, including those since evicted.
    recorded: u64,
}

impl MessageLog {
    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == GameConfig::MESSAGE_LOG_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
        self.recorded += 1;
    }

    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    /// Lines pushed after the log had recorded `mark` lines, oldest first.
    /// Lines already evicted are skipped.
    pub fn since(&self, mark: u64) -> impl Iterator<Item = &str> {
        let fresh = self.recorded.saturating_sub(mark);
        let fresh = usize::try_from(fresh).map_or(self.lines.len(), |n| n.min(self.lines.len()));
        self.lines
            .iter()
            .skip(self.lines.len() - fresh)
            .map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
