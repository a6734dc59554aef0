// Offset/limit window stepping over a result set
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
    pub total_known: Option<usize>,
}

impl PageWindow {
    pub fn with_total(self, total_known: Option<usize>) -> Self {
        Self {
            total_known,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDirection {
    Next,
    Previous,
}

/// Bounded next/previous transitions. `cap` is the upper bound applied
/// whether or not the total size of the result set is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationController {
    limit: usize,
    cap: usize,
}

impl PaginationController {
    /// `limit` must be positive; a zero limit is bumped to 1 so offsets stay multiples of it.
    pub fn new(limit: usize, cap: usize) -> Self {
        Self {
            limit: limit.max(1),
            cap,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    #[cfg(test)]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    pub fn initial(&self) -> PageWindow {
        PageWindow {
            offset: 0,
            limit: self.limit,
            total_known: None,
        }
    }

    pub fn can_advance(&self, current: &PageWindow) -> bool {
        let end = current.offset + current.limit;
        let bound = match current.total_known {
            Some(total) => total.min(self.cap),
            None => self.cap,
        };
        end < bound
    }

    pub fn can_retreat(&self, current: &PageWindow) -> bool {
        current.offset > 0
    }

    pub fn next(&self, current: &PageWindow) -> PageWindow {
        if !self.can_advance(current) {
            return *current;
        }
        PageWindow {
            offset: current.offset + current.limit,
            ..*current
        }
    }

    pub fn previous(&self, current: &PageWindow) -> PageWindow {
        PageWindow {
            offset: current.offset.saturating_sub(current.limit),
            ..*current
        }
    }

    pub fn step(&self, current: &PageWindow, direction: PageDirection) -> PageWindow {
        match direction {
            PageDirection::Next => self.next(current),
            PageDirection::Previous => self.previous(current),
        }
    }
}
