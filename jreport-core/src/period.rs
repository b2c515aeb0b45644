//! # Report Period
//!
//! The calendar month a run reports on, derived from the run date.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::consts::DATE_FORMAT;

/// The run date and the bounds of its calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
  pub run_date: NaiveDate,
  pub month_start: NaiveDate,
  pub month_end: NaiveDate,
}

impl ReportPeriod {
  /// Period for the month containing `run_date`.
  pub fn from_date(run_date: NaiveDate) -> Self {
    let month_start = run_date.with_day(1).unwrap_or(run_date);
    let month_end = month_start
      .checked_add_months(Months::new(1))
      .and_then(|next| next.pred_opt())
      .unwrap_or(NaiveDate::MAX);

    Self {
      run_date,
      month_start,
      month_end,
    }
  }

  /// Period for today's date in local time.
  pub fn current() -> Self {
    Self::from_date(Local::now().date_naive())
  }

  /// Full English month name of the run date, e.g. "March"
  pub fn month_name(&self) -> String {
    self.run_date.format("%B").to_string()
  }

  /// Four-digit year of the run date
  pub fn year(&self) -> String {
    self.run_date.format("%Y").to_string()
  }

  pub fn run_date_str(&self) -> String {
    self.run_date.format(DATE_FORMAT).to_string()
  }

  pub fn month_start_str(&self) -> String {
    self.month_start.format(DATE_FORMAT).to_string()
  }

  pub fn month_end_str(&self) -> String {
    self.month_end.format(DATE_FORMAT).to_string()
  }

  /// `<team>_Report_<yyyy-MM-dd>.xlsx`
  pub fn report_file_name(&self, team_name: &str) -> String {
    format!("{team_name}_Report_{}.xlsx", self.run_date_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
  }

  #[test]
  fn test_month_bounds() {
    let period = ReportPeriod::from_date(date(2024, 3, 15));
    assert_eq!(period.month_start, date(2024, 3, 1));
    assert_eq!(period.month_end, date(2024, 3, 31));
  }

  #[test]
  fn test_leap_february() {
    let period = ReportPeriod::from_date(date(2024, 2, 29));
    assert_eq!(period.month_start, date(2024, 2, 1));
    assert_eq!(period.month_end, date(2024, 2, 29));

    let period = ReportPeriod::from_date(date(2023, 2, 10));
    assert_eq!(period.month_end, date(2023, 2, 28));
  }

  #[test]
  fn test_december_rolls_into_next_year() {
    let period = ReportPeriod::from_date(date(2025, 12, 31));
    assert_eq!(period.month_start, date(2025, 12, 1));
    assert_eq!(period.month_end, date(2025, 12, 31));
  }

  #[test]
  fn test_formatted_values() {
    let period = ReportPeriod::from_date(date(2024, 3, 5));
    assert_eq!(period.month_name(), "March");
    assert_eq!(period.year(), "2024");
    assert_eq!(period.run_date_str(), "2024-03-05");
    assert_eq!(period.month_start_str(), "2024-03-01");
    assert_eq!(period.month_end_str(), "2024-03-31");
  }

  #[test]
  fn test_report_file_name() {
    let period = ReportPeriod::from_date(date(2024, 3, 5));
    assert_eq!(period.report_file_name("Platform"), "Platform_Report_2024-03-05.xlsx");
  }
}
