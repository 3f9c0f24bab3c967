//! Calendar holidays that unlock themed events.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::{EventError, EventResult};

/// A holiday spanning an inclusive month/day window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialDate {
    /// Display name.
    pub name: String,
    /// Tag events use to target this date.
    pub patrol_tag: String,
    start: (u32, u32),
    end: (u32, u32),
}

impl SpecialDate {
    /// A holiday from `start` to `end`, both `(month, day)` and inclusive.
    /// A window whose end comes before its start wraps over the new year.
    pub fn new(
        name: impl Into<String>,
        patrol_tag: impl Into<String>,
        start: (u32, u32),
        end: (u32, u32),
    ) -> EventResult<Self> {
        let name = name.into();
        for (month, day) in [start, end] {
            // 2000 is a leap year, so Feb 29 is accepted.
            if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
                return Err(EventError::InvalidDate { name, month, day });
            }
        }
        Ok(Self {
            name,
            patrol_tag: patrol_tag.into(),
            start,
            end,
        })
    }

    /// Returns true if `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let today = (date.month(), date.day());
        if self.start <= self.end {
            (self.start..=self.end).contains(&today)
        } else {
            today >= self.start || today <= self.end
        }
    }
}

/// Answers which holiday, if any, is active.
pub trait SpecialDates {
    /// The holiday active right now.
    fn current_special_date(&self) -> Option<&SpecialDate>;

    /// Returns true if any of `tags` targets a known holiday.
    fn contains_special_date_tag(&self, tags: &[String]) -> bool;
}

/// A fixed list of holidays, checked against today or a pinned date.
#[derive(Debug, Clone)]
pub struct SpecialDateCalendar {
    dates: Vec<SpecialDate>,
    pinned: Option<NaiveDate>,
}

impl Default for SpecialDateCalendar {
    fn default() -> Self {
        let dates = vec![
            SpecialDate {
                name: "New Year".to_string(),
                patrol_tag: "new_years".to_string(),
                start: (1, 1),
                end: (1, 1),
            },
            SpecialDate {
                name: "April Fools".to_string(),
                patrol_tag: "april_fools".to_string(),
                start: (4, 1),
                end: (4, 1),
            },
            SpecialDate {
                name: "Halloween".to_string(),
                patrol_tag: "halloween".to_string(),
                start: (10, 31),
                end: (10, 31),
            },
        ];
        Self { dates, pinned: None }
    }
}

impl SpecialDateCalendar {
    /// A calendar with no holidays.
    pub fn empty() -> Self {
        Self {
            dates: Vec::new(),
            pinned: None,
        }
    }

    /// Add a holiday.
    pub fn with_date(mut self, date: SpecialDate) -> Self {
        self.dates.push(date);
        self
    }

    /// Evaluate against `date` instead of today.
    pub fn pinned_to(mut self, date: NaiveDate) -> Self {
        self.pinned = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.pinned.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl SpecialDates for SpecialDateCalendar {
    fn current_special_date(&self) -> Option<&SpecialDate> {
        let today = self.today();
        self.dates.iter().find(|d| d.contains(today))
    }

    fn contains_special_date_tag(&self, tags: &[String]) -> bool {
        tags.iter()
            .any(|tag| self.dates.iter().any(|d| &d.patrol_tag == tag))
    }
}
