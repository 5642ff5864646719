//! 时间工具函数
//!
//! 日期/时段解析统一在 API handler 层完成，
//! 存储层只接收已验证的字符串和 `i64` Unix millis。

use chrono::{NaiveDate, NaiveTime, Utc};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析时段字符串 (HH:MM)
pub fn parse_slot_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

/// 今天的日期 (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 验证日期不在过去（预订必须是今天或之后）
pub fn validate_not_past(date: NaiveDate) -> AppResult<()> {
    let today = today();
    if date < today {
        return Err(AppError::validation(format!(
            "Date {} is in the past (today is {})",
            date, today
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2099-01-10").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2099, 1, 10).unwrap());
        assert!(parse_date("10/01/2099").is_err());
        assert!(parse_date("2099-13-01").is_err());
    }

    #[test]
    fn parse_slot_time_accepts_hh_mm() {
        let time = parse_slot_time("19:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
        assert!(parse_slot_time("7pm").is_err());
        assert!(parse_slot_time("25:00").is_err());
    }

    #[test]
    fn today_passes_not_past_check() {
        assert!(validate_not_past(today()).is_ok());
        assert!(validate_not_past(today() + Duration::days(1)).is_ok());
        assert!(validate_not_past(today() - Duration::days(1)).is_err());
    }
}
