//! The listing pipeline: search, then filter, then paginate.
//!
//! The pipeline never reorders. Any ranking (top-rated, most recent) must be
//! applied to the input before calling [`list`]. Page numbers are 1-based and
//! are not clamped: a page past the end yields no items but correct totals.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
  Error, Result,
  entity::Entity,
  filter::FilterCriteria,
  search::Needle,
};

/// Default number of entries per page in the directory views.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ─── Page ────────────────────────────────────────────────────────────────────

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
  pub items:       Vec<&'a Entity>,
  /// Size of the whole filtered set, across all pages.
  pub total_count: usize,
  pub total_pages: usize,
  /// The requested 1-based page number, echoed back.
  pub page:        usize,
  pub page_size:   usize,
}

impl Page<'_> {
  /// The 1-based, inclusive range of entries shown, for "Showing 11-20 of
  /// 25". `None` when the page has no items.
  pub fn showing(&self) -> Option<(usize, usize)> {
    if self.items.is_empty() {
      return None;
    }
    let first = (self.page - 1) * self.page_size + 1;
    Some((first, first + self.items.len() - 1))
  }

  pub fn has_previous(&self) -> bool { self.page > 1 }

  pub fn has_next(&self) -> bool { self.page < self.total_pages }
}

// ─── Pipeline ────────────────────────────────────────────────────────────────

/// Search, filter and paginate `entities`, with activity windows measured
/// from `now`.
///
/// Fails with [`Error::InvalidArgument`] when `page_size` is zero, or when
/// `page` is zero and `entities` is non-empty.
pub fn list_at<'a>(
  entities: &'a [Entity],
  query: Option<&str>,
  criteria: &FilterCriteria,
  page: usize,
  page_size: usize,
  now: DateTime<Utc>,
) -> Result<Page<'a>> {
  if page_size == 0 {
    return Err(Error::InvalidArgument("page size must be positive".into()));
  }
  if page == 0 && !entities.is_empty() {
    return Err(Error::InvalidArgument("pages are numbered from 1".into()));
  }

  let needle = Needle::new(query);
  let filtered: Vec<&Entity> = entities
    .iter()
    .filter(|e| needle.matches(e))
    .filter(|e| criteria.matches_at(e, now))
    .collect();

  let total_count = filtered.len();
  let total_pages = total_count.div_ceil(page_size);

  let start = page.saturating_sub(1).saturating_mul(page_size);
  let items = if start >= total_count {
    Vec::new()
  } else {
    let end = start.saturating_add(page_size).min(total_count);
    filtered[start..end].to_vec()
  };

  Ok(Page {
    items,
    total_count,
    total_pages,
    page,
    page_size,
  })
}

/// [`list_at`] against the current wall-clock time.
pub fn list<'a>(
  entities: &'a [Entity],
  query: Option<&str>,
  criteria: &FilterCriteria,
  page: usize,
  page_size: usize,
) -> Result<Page<'a>> {
  list_at(entities, query, criteria, page, page_size, Utc::now())
}

// ─── Listing state ───────────────────────────────────────────────────────────

/// The search box, filter bar and pager of one directory view.
///
/// Changing the query or the criteria always moves back to page 1, so a
/// caller holding a `Listing` cannot request a stale page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
  query:     String,
  criteria:  FilterCriteria,
  page:      usize,
  page_size: usize,
}

impl Listing {
  pub fn new(page_size: usize) -> Result<Self> {
    if page_size == 0 {
      return Err(Error::InvalidArgument("page size must be positive".into()));
    }
    Ok(Self {
      query: String::new(),
      criteria: FilterCriteria::default(),
      page: 1,
      page_size,
    })
  }

  pub fn query(&self) -> &str { &self.query }

  pub fn criteria(&self) -> &FilterCriteria { &self.criteria }

  pub fn page(&self) -> usize { self.page }

  pub fn page_size(&self) -> usize { self.page_size }

  pub fn set_query(&mut self, query: impl Into<String>) {
    self.query = query.into();
    self.page = 1;
  }

  pub fn set_criteria(&mut self, criteria: FilterCriteria) {
    self.criteria = criteria;
    self.page = 1;
  }

  /// Clear the query and all criteria.
  pub fn reset(&mut self) {
    self.query.clear();
    self.criteria.reset();
    self.page = 1;
  }

  /// Jump to `page`. Zero is rejected; pages past the end are allowed.
  pub fn go_to(&mut self, page: usize) -> Result<()> {
    if page == 0 {
      return Err(Error::InvalidArgument("pages are numbered from 1".into()));
    }
    self.page = page;
    Ok(())
  }

  pub fn next_page(&mut self) { self.page = self.page.saturating_add(1); }

  pub fn previous_page(&mut self) { self.page = self.page.saturating_sub(1).max(1); }

  pub fn run_at<'a>(
    &self,
    entities: &'a [Entity],
    now: DateTime<Utc>,
  ) -> Result<Page<'a>> {
    list_at(
      entities,
      Some(self.query.as_str()),
      &self.criteria,
      self.page,
      self.page_size,
      now,
    )
  }

  pub fn run<'a>(&self, entities: &'a [Entity]) -> Result<Page<'a>> {
    self.run_at(entities, Utc::now())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::entity::{MenteeProfile, RoleProfile};

  fn mentees(n: usize) -> Vec<Entity> {
    (0..n)
      .map(|i| {
        Entity::new(
          format!("Mentee {i}"),
          format!("mentee{i}@example.com"),
          RoleProfile::Mentee(MenteeProfile::default()),
        )
      })
      .collect()
  }

  #[test]
  fn showing_range_on_partial_last_page() {
    let all = mentees(25);
    let page = list(&all, None, &FilterCriteria::default(), 3, 10).unwrap();
    assert_eq!(page.showing(), Some((21, 25)));
    assert!(page.has_previous());
    assert!(!page.has_next());
  }

  #[test]
  fn showing_is_none_past_the_end() {
    let all = mentees(5);
    let page = list(&all, None, &FilterCriteria::default(), 4, 10).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.showing(), None);
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 1);
  }

  #[test]
  fn page_zero_is_rejected_for_a_non_empty_catalog() {
    let all = mentees(3);
    let err = list(&all, None, &FilterCriteria::default(), 0, 10).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
  }

  #[test]
  fn huge_page_numbers_do_not_overflow() {
    let all = mentees(3);
    let page =
      list(&all, None, &FilterCriteria::default(), usize::MAX, 10).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 3);
  }

  #[test]
  fn listing_rejects_zero_page_size() {
    assert!(matches!(Listing::new(0), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn listing_query_change_resets_page() {
    let all = mentees(25);
    let mut listing = Listing::new(10).unwrap();
    listing.go_to(3).unwrap();
    assert_eq!(listing.run(&all).unwrap().items.len(), 5);

    listing.set_query("Mentee 1");
    assert_eq!(listing.page(), 1);
    // "Mentee 1" and "Mentee 10".."Mentee 19" match.
    let page = listing.run(&all).unwrap();
    assert_eq!(page.total_count, 11);
    assert_eq!(page.items.len(), 10);
  }

  #[test]
  fn listing_criteria_change_resets_page() {
    let all = mentees(25);
    let mut listing = Listing::new(10).unwrap();
    listing.next_page();
    listing.next_page();
    assert_eq!(listing.page(), 3);

    listing.set_criteria(FilterCriteria {
      country: Some("Kenya".into()),
      ..Default::default()
    });
    assert_eq!(listing.page(), 1);
    assert_eq!(listing.run(&all).unwrap().total_count, 0);

    listing.reset();
    assert_eq!(listing.criteria(), &FilterCriteria::default());
    assert_eq!(listing.run(&all).unwrap().total_count, 25);
  }

  #[test]
  fn previous_page_stops_at_one() {
    let mut listing = Listing::new(10).unwrap();
    listing.previous_page();
    assert_eq!(listing.page(), 1);
    assert!(listing.go_to(0).is_err());
  }

  #[test]
  fn next_page_stops_at_the_largest_page_number() {
    let all = mentees(3);
    let mut listing = Listing::new(10).unwrap();
    listing.go_to(usize::MAX).unwrap();
    listing.next_page();
    assert_eq!(listing.page(), usize::MAX);
    let page = listing.run(&all).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 3);
  }
}
