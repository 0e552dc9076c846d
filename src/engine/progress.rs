use crate::model::WorkItem;

/// `(done, total)` checklist entries of a work item.
pub fn checklist_counts(item: &WorkItem) -> (usize, usize) {
    let done = item.checklist.iter().filter(|c| c.is_done()).count();
    (done, item.checklist.len())
}

/// Completion percentage of a work item's checklist, 0..=100.
///
/// Rounds half up. An empty checklist is 0%.
pub fn progress(item: &WorkItem) -> u8 {
    let (done, total) = checklist_counts(item);
    percent(done, total)
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // round(100 * done / total) == floor((200 * done + total) / (2 * total))
    let pct = (200 * done + total) / (2 * total);
    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChecklistItem, ChecklistStatus, WorkItemType};
    use chrono::NaiveDate;

    fn item_with(statuses: &[ChecklistStatus]) -> WorkItem {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut item = WorkItem::new("TRV", "PRJ", WorkItemType::Other, "w", day, day);
        item.checklist = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| ChecklistItem::new(format!("C{i}"), "step", i as i32).with_status(*s))
            .collect();
        item
    }

    #[test]
    fn empty_checklist_is_zero() {
        assert_eq!(progress(&item_with(&[])), 0);
        assert_eq!(checklist_counts(&item_with(&[])), (0, 0));
    }

    #[test]
    fn all_done_is_hundred() {
        use ChecklistStatus::Done;
        assert_eq!(progress(&item_with(&[Done, Done, Done])), 100);
    }

    #[test]
    fn one_of_three_is_thirty_three() {
        use ChecklistStatus::*;
        let item = item_with(&[Done, InProgress, NotStarted]);
        assert_eq!(progress(&item), 33);
        assert_eq!(checklist_counts(&item), (1, 3));
    }

    #[test]
    fn two_of_three_rounds_up() {
        use ChecklistStatus::*;
        assert_eq!(progress(&item_with(&[Done, Done, Blocked])), 67);
    }

    #[test]
    fn exact_half_rounds_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 200), 1);
        assert_eq!(percent(1, 201), 0);
    }
}
