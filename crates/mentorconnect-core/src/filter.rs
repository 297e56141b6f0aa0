//! Exact-match filter criteria and the recency windows.
//!
//! Every criterion is independently optional; an unset or empty field places
//! no constraint on that dimension. Activity windows are cumulative lookbacks:
//! anything active "today" is also active "this week" and "this month".

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

// ─── Activity windows ────────────────────────────────────────────────────────

/// How recently an entity must have been active.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityWindow {
  Today,
  ThisWeek,
  ThisMonth,
  #[default]
  All,
}

impl ActivityWindow {
  /// The lookback length, or `None` for [`ActivityWindow::All`].
  pub fn lookback(self) -> Option<TimeDelta> {
    match self {
      Self::Today => Some(TimeDelta::hours(24)),
      Self::ThisWeek => Some(TimeDelta::hours(7 * 24)),
      Self::ThisMonth => Some(TimeDelta::hours(30 * 24)),
      Self::All => None,
    }
  }

  /// Human-readable label, as shown in a filter picker.
  pub fn label(self) -> &'static str {
    match self {
      Self::Today => "Today",
      Self::ThisWeek => "This Week",
      Self::ThisMonth => "This Month",
      Self::All => "All Time",
    }
  }

  /// Whether `last_active` falls inside this window ending at `now`.
  pub fn contains(
    self,
    last_active: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
  ) -> bool {
    let Some(lookback) = self.lookback() else {
      return true;
    };
    match last_active {
      Some(at) => now - at < lookback,
      None => false,
    }
  }
}

// ─── Criteria ────────────────────────────────────────────────────────────────

/// Narrowing constraints for a listing. `Default` is "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
  pub subject_field: Option<String>,
  pub country:       Option<String>,
  pub last_active:   Option<ActivityWindow>,
}

impl FilterCriteria {
  /// `true` when no dimension is constrained. `Some(All)` counts as
  /// unconstrained.
  pub fn is_empty(&self) -> bool {
    self.subject_field().is_none()
      && self.country().is_none()
      && self.last_active.is_none_or(|w| w == ActivityWindow::All)
  }

  pub fn reset(&mut self) { *self = Self::default(); }

  /// The subject field constraint. An empty string is no constraint.
  pub fn subject_field(&self) -> Option<&str> {
    self.subject_field.as_deref().filter(|s| !s.is_empty())
  }

  /// The country constraint. An empty string is no constraint.
  pub fn country(&self) -> Option<&str> {
    self.country.as_deref().filter(|s| !s.is_empty())
  }

  /// Summary suffix for a results header, e.g.
  /// `" in Biology from India active today"`. Empty when nothing is set.
  pub fn describe(&self) -> String {
    let mut out = String::new();
    if let Some(field) = self.subject_field() {
      out.push_str(&format!(" in {field}"));
    }
    if let Some(country) = self.country() {
      out.push_str(&format!(" from {country}"));
    }
    if let Some(window) = self.last_active
      && window != ActivityWindow::All
    {
      out.push_str(&format!(" active {}", window.label().to_lowercase()));
    }
    out
  }

  /// Whether `entity` satisfies every populated criterion at time `now`.
  pub fn matches_at(&self, entity: &Entity, now: DateTime<Utc>) -> bool {
    if let Some(field) = self.subject_field()
      && entity.subject_field.as_deref() != Some(field)
    {
      return false;
    }
    if let Some(country) = self.country()
      && entity.country.as_deref() != Some(country)
    {
      return false;
    }
    self
      .last_active
      .is_none_or(|w| w.contains(entity.last_active, now))
  }

  /// [`FilterCriteria::matches_at`] against the current wall-clock time.
  pub fn matches(&self, entity: &Entity) -> bool {
    self.matches_at(entity, Utc::now())
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;
  use crate::entity::{MentorProfile, RoleProfile};

  fn mentor(field: Option<&str>, country: Option<&str>) -> Entity {
    let mut e = Entity::new(
      "Test",
      "test@example.com",
      RoleProfile::Mentor(MentorProfile::default()),
    );
    e.subject_field = field.map(Into::into);
    e.country = country.map(Into::into);
    e
  }

  #[test]
  fn empty_criteria_match_everything() {
    let now = Utc::now();
    let criteria = FilterCriteria::default();
    assert!(criteria.is_empty());
    assert!(criteria.matches_at(&mentor(None, None), now));
    assert!(criteria.matches_at(&mentor(Some("Physics"), Some("India")), now));
  }

  #[test]
  fn subject_field_is_exact_and_case_sensitive() {
    let now = Utc::now();
    let criteria = FilterCriteria {
      subject_field: Some("Biology".into()),
      ..Default::default()
    };
    assert!(criteria.matches_at(&mentor(Some("Biology"), None), now));
    assert!(!criteria.matches_at(&mentor(Some("biology"), None), now));
    assert!(!criteria.matches_at(&mentor(Some("Biology 101"), None), now));
    assert!(!criteria.matches_at(&mentor(None, None), now));
  }

  #[test]
  fn country_and_field_must_both_hold() {
    let now = Utc::now();
    let criteria = FilterCriteria {
      subject_field: Some("Biology".into()),
      country:       Some("India".into()),
      last_active:   None,
    };
    assert!(criteria.matches_at(&mentor(Some("Biology"), Some("India")), now));
    assert!(!criteria.matches_at(&mentor(Some("Biology"), Some("Kenya")), now));
    assert!(!criteria.matches_at(&mentor(Some("Biology"), None), now));
  }

  #[test]
  fn empty_strings_place_no_constraint() {
    let now = Utc::now();
    let criteria = FilterCriteria {
      subject_field: Some(String::new()),
      country:       Some(String::new()),
      last_active:   None,
    };
    assert!(criteria.is_empty());
    assert_eq!(criteria.describe(), "");
    assert!(criteria.matches_at(&mentor(Some("Physics"), Some("India")), now));
    assert!(criteria.matches_at(&mentor(None, None), now));
  }

  #[test]
  fn window_boundaries_are_exclusive() {
    let now = Utc::now();
    let day = TimeDelta::hours(24);
    assert!(ActivityWindow::Today.contains(Some(now - day + TimeDelta::seconds(1)), now));
    assert!(!ActivityWindow::Today.contains(Some(now - day), now));
    assert!(ActivityWindow::ThisWeek.contains(Some(now - day * 6), now));
    assert!(!ActivityWindow::ThisWeek.contains(Some(now - day * 7), now));
    assert!(ActivityWindow::ThisMonth.contains(Some(now - day * 29), now));
    assert!(!ActivityWindow::ThisMonth.contains(Some(now - day * 30), now));
  }

  #[test]
  fn missing_activity_only_passes_all() {
    let now = Utc::now();
    for window in ActivityWindow::iter() {
      assert_eq!(window.contains(None, now), window == ActivityWindow::All);
    }
  }

  #[test]
  fn all_window_is_no_constraint() {
    let criteria = FilterCriteria {
      last_active: Some(ActivityWindow::All),
      ..Default::default()
    };
    assert!(criteria.is_empty());
    assert!(criteria.matches_at(&mentor(None, None), Utc::now()));
  }

  #[test]
  fn describe_lists_set_dimensions() {
    let mut criteria = FilterCriteria {
      subject_field: Some("Biology".into()),
      country:       Some("India".into()),
      last_active:   Some(ActivityWindow::ThisWeek),
    };
    assert_eq!(criteria.describe(), " in Biology from India active this week");

    criteria.reset();
    assert_eq!(criteria, FilterCriteria::default());
    assert_eq!(criteria.describe(), "");
  }

  #[test]
  fn window_text_forms() {
    assert_eq!(ActivityWindow::ThisMonth.to_string(), "this_month");
    assert_eq!(
      "this_week".parse::<ActivityWindow>().unwrap(),
      ActivityWindow::ThisWeek
    );
  }
}
