//! Inline, dismissible error notices shown next to the control that failed.

/// Auto-dismiss delay in seconds.
pub const AUTO_DISMISS_SECS: u64 = 4;

/// Which control a notice is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeTarget {
    Search,
    Show(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub target: NoticeTarget,
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    next_id: u64,
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, target: NoticeTarget, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            message: message.into(),
            target,
        });
        self.next_id
    }

    /// Returns `false` when the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear_target(&mut self, target: NoticeTarget) {
        self.items.retain(|n| n.target != target);
    }

    pub fn for_target(&self, target: NoticeTarget) -> impl Iterator<Item = &Notice> {
        self.items.iter().filter(move |n| n.target == target)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
