use sqlx::PgPool;

use crate::dto::screening::{PublicScreeningEntry, ScheduleDay};
use crate::error::Result;
use crate::repository::screening::ScreeningRepository;

/// Group published screenings into per-day blocks, ordered by
/// (date, time) ascending.
pub fn group_by_date(mut entries: Vec<PublicScreeningEntry>) -> Vec<ScheduleDay> {
    entries.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));

    let mut days: Vec<ScheduleDay> = Vec::new();
    for entry in entries {
        match days.last_mut() {
            Some(day) if day.date == entry.date => day.screenings.push(entry),
            _ => days.push(ScheduleDay {
                date: entry.date,
                screenings: vec![entry],
            }),
        }
    }

    days
}

/// The public schedule: published screenings with their documentary,
/// director and producer, grouped by festival day.
pub async fn public_schedule(pool: &PgPool) -> Result<Vec<ScheduleDay>> {
    let repo = ScreeningRepository::new(pool);
    let entries = repo.list_published().await?;

    Ok(group_by_date(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::screening::{PersonNameInfo, PublicDocumentaryInfo};
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn entry(date: (i32, u32, u32), time: (u32, u32), room: &str) -> PublicScreeningEntry {
        PublicScreeningEntry {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            room: room.into(),
            documentary: PublicDocumentaryInfo {
                id: Uuid::new_v4(),
                code: "DOC-1".into(),
                title: "Salt Roads".into(),
                subject: "Saharan trade routes".into(),
                director: PersonNameInfo {
                    first_name: "Leila".into(),
                    last_name: "Ben Salem".into(),
                },
                producer: PersonNameInfo {
                    first_name: "Karim".into(),
                    last_name: "Haddad".into(),
                },
            },
        }
    }

    #[test]
    fn groups_screenings_by_day_in_chronological_order() {
        let days = group_by_date(vec![
            entry((2026, 9, 13), (18, 0), "Salle 2"),
            entry((2026, 9, 12), (21, 0), "Salle 1"),
            entry((2026, 9, 12), (18, 30), "Salle 1"),
        ]);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 9, 12).unwrap());
        assert_eq!(days[0].screenings.len(), 2);
        assert_eq!(
            days[0].screenings[0].time,
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert_eq!(days[1].screenings.len(), 1);
    }

    #[test]
    fn empty_schedule_has_no_days() {
        assert!(group_by_date(vec![]).is_empty());
    }
}
