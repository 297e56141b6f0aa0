//! Plain-text rendering of listings for stdout.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use mentorconnect_core::{
  entity::{Entity, RoleProfile},
  filter::FilterCriteria,
  listing::Page,
};

/// Results header, e.g. `Showing 11-20 of 25 mentors in Biology`.
pub fn header(page: &Page<'_>, noun: &str, criteria: &FilterCriteria) -> String {
  let suffix = criteria.describe();
  match page.showing() {
    Some((first, last)) => {
      format!("Showing {first}-{last} of {} {noun}{suffix}", page.total_count)
    }
    None if page.total_count > 0 => format!(
      "Page {} is past the last page ({}) of {} {noun}{suffix}",
      page.page, page.total_pages, page.total_count
    ),
    None => format!("No {noun} found{suffix}"),
  }
}

/// What to suggest when a page comes back empty.
pub fn hint(page: &Page<'_>, criteria: &FilterCriteria) -> Option<String> {
  if !page.items.is_empty() {
    return None;
  }
  if page.total_count > 0 {
    return Some(format!("Try --page {}.", page.total_pages));
  }
  if criteria.is_empty() {
    Some("Try a different search.".into())
  } else {
    Some("Try adjusting your search or filters.".into())
  }
}

/// Pager footer, or `None` when everything fits on one page.
pub fn footer(page: &Page<'_>) -> Option<String> {
  if page.total_pages <= 1 {
    return None;
  }
  let mut out = format!("Page {} of {}", page.page, page.total_pages);
  if page.has_previous() {
    write!(out, "  [--page {} for previous]", page.page - 1).ok();
  }
  if page.has_next() {
    write!(out, "  [--page {} for next]", page.page + 1).ok();
  }
  Some(out)
}

/// One-line summary of an entity.
pub fn entity_line(e: &Entity) -> String {
  let mut line = e.name.clone();
  let mut details = Vec::new();
  if let Some(field) = &e.subject_field {
    details.push(field.clone());
  }
  if let Some(country) = &e.country {
    details.push(country.clone());
  }
  match e.profile() {
    RoleProfile::Mentor(m) => {
      if let Some(rating) = m.rating {
        let reviews = m.review_count.unwrap_or(0);
        details.push(format!("★ {rating:.1} ({reviews} reviews)"));
      }
      if !m.expertise.is_empty() {
        details.push(m.expertise.join(", "));
      }
    }
    RoleProfile::Mentee(m) => {
      if let Some(level) = &m.education_level {
        details.push(level.clone());
      }
      if !m.goals.is_empty() {
        details.push(format!("goals: {}", m.goals.join(", ")));
      }
    }
    RoleProfile::Admin => {}
  }
  if let Some(at) = e.last_active {
    details.push(format!("last active {}", last_seen(at, Utc::now())));
  }
  if !details.is_empty() {
    write!(line, " — {}", details.join(" · ")).ok();
  }
  line
}

/// Coarse relative time: `today`, `3 days ago`, or the date past a month.
pub fn last_seen(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
  match (now - at).num_days() {
    ..=0 => "today".into(),
    1 => "1 day ago".into(),
    days @ 2..30 => format!("{days} days ago"),
    _ => at.format("%Y-%m-%d").to_string(),
  }
}

pub fn print_page(page: &Page<'_>, noun: &str, criteria: &FilterCriteria) {
  println!("{}", header(page, noun, criteria));
  if let Some(hint) = hint(page, criteria) {
    println!("{hint}");
  }
  for e in &page.items {
    println!("  {}", entity_line(e));
  }
  if let Some(footer) = footer(page) {
    println!("{footer}");
  }
}
