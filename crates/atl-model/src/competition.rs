//! Competitions, their results and status counts.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lenient::lenient_string;

/// A competition (event) row held by the record API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(rename = "EventID", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "EventName", default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Start date, `YYYY-MM-DD`.
    #[serde(rename = "Date", default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(rename = "EndDate", default, deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(rename = "Location", default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(rename = "Details", default, deserialize_with = "lenient_string")]
    pub details: String,
    #[serde(rename = "Status", default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(rename = "Result", default, deserialize_with = "lenient_string")]
    pub result: String,
    /// Free text such as `1st` or `Finalist`.
    #[serde(rename = "Position", default, deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(rename = "Participants", default, deserialize_with = "lenient_string")]
    pub participants: String,
    #[serde(rename = "Notes", default, deserialize_with = "lenient_string")]
    pub notes: String,
}

impl Competition {
    /// The stored status; a blank status reads as upcoming.
    pub fn status(&self) -> Option<CompetitionStatus> {
        if self.status.trim().is_empty() {
            return Some(CompetitionStatus::Upcoming);
        }
        self.status.parse().ok()
    }

    /// Status text for display, `Upcoming` when blank.
    pub fn status_label(&self) -> &str {
        if self.status.trim().is_empty() {
            CompetitionStatus::Upcoming.label()
        } else {
            &self.status
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }

    /// Marked upcoming, or dated after `today` and neither completed nor cancelled.
    ///
    /// A blank status alone does not count; the date has to be in the future.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        let status = self.status.trim().to_lowercase();
        if status == "upcoming" {
            return true;
        }
        let closed = status == "completed" || status == "cancelled";
        !closed && self.start_date().is_some_and(|date| date > today)
    }

    /// Placed first, second or third.
    pub fn is_podium(&self) -> bool {
        let position = self.position.to_lowercase();
        ["1st", "2nd", "3rd", "first", "second", "third"]
            .iter()
            .any(|place| position.contains(place))
    }

    pub fn to_draft(&self) -> CompetitionDraft {
        CompetitionDraft {
            name: self.name.clone(),
            date: self.date.clone(),
            end_date: self.end_date.clone(),
            location: self.location.clone(),
            details: self.details.clone(),
            status: self.status.clone(),
            result: self.result.clone(),
            position: self.position.clone(),
            participants: self.participants.clone(),
            notes: self.notes.clone(),
        }
    }

    /// The outcome fields, prefilled for `updateCompetitionResult`.
    pub fn to_result(&self) -> CompetitionResult {
        CompetitionResult {
            status: self.status_label().to_string(),
            position: self.position.clone(),
            result: self.result.clone(),
            notes: self.notes.clone(),
        }
    }
}

fn parse_day(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let day = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Lifecycle of a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompetitionStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl CompetitionStatus {
    pub const ALL: [CompetitionStatus; 4] = [
        Self::Upcoming,
        Self::Ongoing,
        Self::Completed,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a competition status is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown competition status '{0}' (expected upcoming, ongoing, completed or cancelled)")]
pub struct ParseStatusError(pub String);

impl FromStr for CompetitionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Fields sent with `addCompetition` and `updateCompetition`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionDraft {
    #[serde(rename = "EventName")]
    pub name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "EndDate")]
    pub end_date: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Details")]
    pub details: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Participants")]
    pub participants: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

/// Fields sent with `updateCompetitionResult`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionResult {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

/// Status counts across a competition list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompetitionSummary {
    pub upcoming: usize,
    pub ongoing: usize,
    pub completed: usize,
    /// Podium finishes.
    pub wins: usize,
}

impl CompetitionSummary {
    pub fn from_competitions<'a>(
        competitions: impl IntoIterator<Item = &'a Competition>,
        today: NaiveDate,
    ) -> Self {
        let mut summary = Self::default();
        for competition in competitions {
            let status = competition.status.trim().to_lowercase();
            if competition.is_upcoming(today) {
                summary.upcoming += 1;
            }
            match status.as_str() {
                "ongoing" => summary.ongoing += 1,
                "completed" => summary.completed += 1,
                _ => {}
            }
            if competition.is_podium() {
                summary.wins += 1;
            }
        }
        summary
    }
}
