//! Directory — the read-only entity collection for one session.
//!
//! Entities are loaded once from a static JSON source. The directory checks
//! id uniqueness on load; after that nothing mutates it.

use std::collections::HashSet;

use uuid::Uuid;

use crate::{
  Error, Result,
  entity::{Entity, Role},
};

#[derive(Debug, Clone, Default)]
pub struct Directory {
  entities: Vec<Entity>,
}

impl Directory {
  /// Wrap `entities`, rejecting duplicate ids.
  pub fn new(entities: Vec<Entity>) -> Result<Self> {
    let mut seen = HashSet::with_capacity(entities.len());
    for e in &entities {
      if !seen.insert(e.id) {
        return Err(Error::DuplicateId(e.id));
      }
    }
    Ok(Self { entities })
  }

  /// Parse a JSON array of entities.
  pub fn from_json(input: &str) -> Result<Self> {
    let entities: Vec<Entity> = serde_json::from_str(input)?;
    let directory = Self::new(entities)?;
    tracing::debug!(
      entities = directory.len(),
      mentors = directory.mentors().len(),
      mentees = directory.mentees().len(),
      "loaded directory"
    );
    Ok(directory)
  }

  pub fn len(&self) -> usize { self.entities.len() }

  pub fn is_empty(&self) -> bool { self.entities.is_empty() }

  pub fn entities(&self) -> &[Entity] { &self.entities }

  pub fn get(&self, id: Uuid) -> Option<&Entity> {
    self.entities.iter().find(|e| e.id == id)
  }

  /// Entities of `role`, in directory order.
  pub fn by_role(&self, role: Role) -> Vec<Entity> {
    self
      .entities
      .iter()
      .filter(|e| e.role() == role)
      .cloned()
      .collect()
  }

  pub fn mentors(&self) -> Vec<Entity> { self.by_role(Role::Mentor) }

  pub fn mentees(&self) -> Vec<Entity> { self.by_role(Role::Mentee) }

  /// Find the admin account with `email`, compared case-insensitively.
  pub fn admin_by_email(&self, email: &str) -> Option<&Entity> {
    self
      .entities
      .iter()
      .find(|e| e.role() == Role::Admin && e.email.eq_ignore_ascii_case(email))
  }

  /// The collection a viewer browses: mentees see mentors, mentors see
  /// mentees, and admins or anonymous viewers see both.
  pub fn for_viewer(&self, viewer: Option<&Entity>) -> Vec<Entity> {
    match viewer.and_then(|v| v.role().counterpart()) {
      Some(role) => self.by_role(role),
      None => self
        .entities
        .iter()
        .filter(|e| e.role() != Role::Admin)
        .cloned()
        .collect(),
    }
  }
}
