//! Free-text search predicates.
//!
//! Both predicates are case-insensitive substring matches, OR-ed across a
//! fixed set of fields. An empty query matches everything.

use crate::entity::Entity;

/// A lowercased search needle. Build once per listing, test many entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(Option<String>);

impl Needle {
  pub fn new(query: Option<&str>) -> Self {
    Self(query.filter(|q| !q.is_empty()).map(str::to_lowercase))
  }

  /// `true` when the needle matches everything.
  pub fn is_empty(&self) -> bool { self.0.is_none() }

  fn found_in(&self, haystack: &str) -> bool {
    match &self.0 {
      Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
      None => true,
    }
  }

  fn found_in_opt(&self, haystack: Option<&String>) -> bool {
    haystack.is_some_and(|h| self.found_in(h))
  }

  /// Directory search: name, bio, subject field, and the role's list fields
  /// (mentor expertise, mentee goals and looking-for).
  pub fn matches(&self, entity: &Entity) -> bool {
    if self.is_empty() {
      return true;
    }
    self.found_in(&entity.name)
      || self.found_in_opt(entity.bio.as_ref())
      || self.found_in_opt(entity.subject_field.as_ref())
      || entity.searchable_tags().any(|tag| self.found_in(tag))
  }

  /// Admin roster search: name, email, subject field, country.
  pub fn matches_roster(&self, entity: &Entity) -> bool {
    if self.is_empty() {
      return true;
    }
    self.found_in(&entity.name)
      || self.found_in(&entity.email)
      || self.found_in_opt(entity.subject_field.as_ref())
      || self.found_in_opt(entity.country.as_ref())
  }
}

/// Whether `entity` matches the directory `query`.
pub fn matches(entity: &Entity, query: Option<&str>) -> bool {
  Needle::new(query).matches(entity)
}

/// Whether `entity` matches the admin roster `query`.
pub fn matches_roster(entity: &Entity, query: Option<&str>) -> bool {
  Needle::new(query).matches_roster(entity)
}

/// Filter `entities` for the admin roster, preserving order.
pub fn roster<'a>(entities: &'a [Entity], query: Option<&str>) -> Vec<&'a Entity> {
  let needle = Needle::new(query);
  entities.iter().filter(|e| needle.matches_roster(e)).collect()
}
