#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::super::types::*;
    use crate::shared::{DomainError, UserId};

    #[test]
    fn test_activity_record_rejects_empty_user_id() {
        let result = ActivityRecord::new(UserId::from_string(""), Utc::now());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_activity_record_day_truncates_to_utc_date() {
        let late_evening = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap();
        let record = ActivityRecord::new(UserId::from_string("u1"), late_evening)
            .expect("create record");

        assert_eq!(record.day(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_activity_record_day_same_for_morning_and_evening() {
        let morning = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();

        let a = ActivityRecord::new(UserId::from_string("u1"), morning).unwrap();
        let b = ActivityRecord::new(UserId::from_string("u1"), evening).unwrap();

        assert_eq!(a.day(), b.day());
    }

    #[test]
    fn test_daily_count_rejects_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert!(matches!(
            DailyCount::new(date, 0),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_daily_count_accessors() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let count = DailyCount::new(date, 3).expect("create daily count");

        assert_eq!(count.date(), date);
        assert_eq!(count.count(), 3);
    }

    #[test]
    fn test_activity_source_all_covers_four_logs() {
        let names: Vec<&str> = ActivitySource::ALL.iter().map(|s| s.as_str()).collect();

        assert_eq!(names, vec!["execution", "snippet", "comment", "star"]);
    }
}
