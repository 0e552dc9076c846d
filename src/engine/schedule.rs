use chrono::{DateTime, NaiveTime, Utc};

use crate::model::{WorkItem, WorkItemStatus};

/// Number of entries the dashboard shows under "Recent work items".
pub const RECENT_LIMIT: usize = 5;

/// True when the work item's end date has passed and it is not done.
///
/// `end_date` counts as the start of that day, UTC.
pub fn is_overdue(item: &WorkItem, now: DateTime<Utc>) -> bool {
    let end = item.end_date.and_time(NaiveTime::MIN).and_utc();
    end < now && item.status != WorkItemStatus::Done
}

/// The `limit` most recently started work items, newest first.
///
/// Items sharing a start date keep their input order.
pub fn recent_work_items(items: &[WorkItem], limit: usize) -> Vec<&WorkItem> {
    let mut sorted: Vec<&WorkItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted.truncate(limit);
    sorted
}
