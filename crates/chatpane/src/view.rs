use std::fmt::Display;

use chatpane_persist::Thread;
use chrono::{DateTime, Local, TimeZone};

/// One row of the thread sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: String,
    pub title: String,
    /// Short month/day of the last update, e.g. `Oct 19`
    pub updated_label: String,
    pub active: bool,
}

impl SidebarEntry {
    pub fn for_thread(thread: &Thread, active: bool) -> Self {
        Self {
            id: thread.id.clone(),
            title: thread.title.clone(),
            updated_label: format_date(&thread.updated_at.with_timezone(&Local)),
            active,
        }
    }
}

pub fn format_date<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 9, 12, 0, 0).unwrap();
        assert_eq!(format_date(&ts), "Oct 9");
    }

    #[test]
    fn test_entry_copies_thread_fields() {
        let thread = Thread::seeded("hello");
        let entry = SidebarEntry::for_thread(&thread, true);

        assert_eq!(entry.id, thread.id);
        assert_eq!(entry.title, thread.title);
        assert!(entry.active);
        assert!(!entry.updated_label.is_empty());
    }
}
