//! Aggregate counts and date-bucketed histograms for the dashboard.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::user::User;

/// Scalar dashboard counts derived from one full-collection fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl UserStats {
    #[must_use]
    pub fn from_users(users: &[User]) -> Self {
        let total = users.len();
        let active = users.iter().filter(|u| u.is_active()).count();
        Self {
            total,
            active,
            inactive: total - active,
        }
    }
}

/// One calendar-day histogram bucket. `NaiveDate` displays as `YYYY-MM-DD`,
/// which is the label format the charts use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBucket {
    pub date: NaiveDate,
    pub count: usize,
}

/// Buckets by the display timezone's calendar day.
fn day_of(ts: &DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

fn to_buckets(map: BTreeMap<NaiveDate, usize>) -> Vec<DateBucket> {
    map.into_iter()
        .map(|(date, count)| DateBucket { date, count })
        .collect()
}

/// Counts every session start, grouped by calendar day and sorted by date.
/// Users without sessions contribute nothing here but still count toward
/// the scalar totals.
#[must_use]
pub fn session_histogram(users: &[User]) -> Vec<DateBucket> {
    let mut map = BTreeMap::new();
    for user in users {
        for session in &user.sessions {
            *map.entry(day_of(&session.start_time)).or_insert(0) += 1;
        }
    }
    to_buckets(map)
}

/// Counts account creations by calendar day. Records without a creation
/// timestamp are left out of the histogram but not out of the totals.
#[must_use]
pub fn signup_histogram(users: &[User]) -> Vec<DateBucket> {
    let mut map = BTreeMap::new();
    for user in users {
        if let Some(created_at) = &user.created_at {
            *map.entry(day_of(created_at)).or_insert(0) += 1;
        }
    }
    to_buckets(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Session;
    use chrono::TimeZone;

    // Midday timestamps keep the local calendar day stable across the
    // timezones CI machines run in.
    fn midday(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn user(id: &str, session_days: &[u32], created_day: Option<u32>) -> User {
        User {
            id: id.into(),
            first_name: "T".into(),
            last_name: "User".into(),
            email: format!("{id}@example.com"),
            password: None,
            sessions: session_days
                .iter()
                .map(|day| Session {
                    start_time: midday(*day),
                })
                .collect(),
            devices: vec![],
            created_at: created_day.map(midday),
        }
    }

    #[test]
    fn test_scalar_counts() {
        let users = vec![
            user("u1", &[1], Some(1)),
            user("u2", &[], Some(2)),
            user("u3", &[2, 3], None),
        ];
        let stats = UserStats::from_users(&users);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
    }

    #[test]
    fn test_session_histogram_counts_every_session() {
        let users = vec![user("u1", &[1, 1, 2], None), user("u2", &[2], None)];
        let buckets = session_histogram(&users);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].count, 2);
        assert!(buckets[0].date < buckets[1].date);
    }

    #[test]
    fn test_sessionless_user_is_excluded_from_histogram_but_counted() {
        let users = vec![user("u1", &[], Some(1))];
        assert!(session_histogram(&users).is_empty());
        assert_eq!(UserStats::from_users(&users).total, 1);
    }

    #[test]
    fn test_signup_histogram_skips_missing_created_at() {
        let users = vec![
            user("u1", &[], Some(5)),
            user("u2", &[], Some(5)),
            user("u3", &[], None),
        ];
        let buckets = signup_histogram(&users);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 2);
    }

    #[test]
    fn test_bucket_label_format() {
        let users = vec![user("u1", &[9], None)];
        let buckets = session_histogram(&users);
        assert_eq!(buckets[0].date.to_string(), "2024-03-09");
    }
}
