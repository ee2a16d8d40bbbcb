use super::due::DueStatus;
use super::item::TodoItem;
use std::cmp::Reverse;

/// Display class of an item, in display order
///
/// Every item maps to exactly one bucket. Items due in a week, a month or
/// later get no class of their own and fall into `Prioritized` or `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortBucket {
    Overdue,
    DueToday,
    DueInADay,
    Prioritized,
    Open,
    Completed,
}

impl SortBucket {
    pub fn of(item: &TodoItem) -> SortBucket {
        if item.completed {
            return SortBucket::Completed;
        }
        match item.due_status() {
            DueStatus::Overdue => SortBucket::Overdue,
            DueStatus::DueToday => SortBucket::DueToday,
            DueStatus::DueInADay => SortBucket::DueInADay,
            _ if item.priority.is_some() => SortBucket::Prioritized,
            _ => SortBucket::Open,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Order items for display
///
/// Items are grouped by [`SortBucket`] and the groups concatenated in bucket
/// order. Within a group input order is kept, except that prioritized items
/// are ordered by priority ascending and completed items by completion date
/// descending (undated ones last). Both sorts are stable.
///
/// # Arguments
/// * `items` - Parsed items, usually a whole batch
///
/// # Returns
/// The same items, reordered
pub fn sort(items: Vec<TodoItem>) -> Vec<TodoItem> {
    let total = items.len();
    let mut buckets: [Vec<TodoItem>; 6] = Default::default();
    for item in items {
        buckets[SortBucket::of(&item).index()].push(item);
    }

    buckets[SortBucket::Prioritized.index()].sort_by_key(|item| item.priority);
    buckets[SortBucket::Completed.index()].sort_by_key(|item| Reverse(item.completion_date));

    let mut result = Vec::with_capacity(total);
    for bucket in buckets {
        result.extend(bucket);
    }
    result
}
