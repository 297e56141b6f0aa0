//! Entity — a person listed in the directory.
//!
//! The role is a sum type: the variant carries the fields that only make sense
//! for that role, so a mentee can never hold `expertise`. The variant is fixed
//! when the entity is constructed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Role ────────────────────────────────────────────────────────────────────

/// The closed set of roles an entity can have.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
  Mentor,
  Mentee,
  Admin,
}

impl Role {
  /// The role a user of this role browses: mentees look for mentors and
  /// mentors look for mentees. Admins have no single counterpart.
  pub fn counterpart(self) -> Option<Role> {
    match self {
      Self::Mentor => Some(Self::Mentee),
      Self::Mentee => Some(Self::Mentor),
      Self::Admin => None,
    }
  }
}

// ─── Role variants ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
  /// Ordered expertise tags; searchable.
  #[serde(default)]
  pub expertise:          Vec<String>,
  pub rating:             Option<f32>,
  pub review_count:       Option<u32>,
  /// Free text, e.g. "Weekends, 10am-2pm".
  pub availability_hours: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenteeProfile {
  #[serde(default)]
  pub goals:           Vec<String>,
  #[serde(default)]
  pub looking_for:     Vec<String>,
  pub education_level: Option<String>,
}

/// Role-specific payload. Serialised as an internal `"role"` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
  Mentor(MentorProfile),
  Mentee(MenteeProfile),
  Admin,
}

impl RoleProfile {
  pub fn role(&self) -> Role {
    match self {
      Self::Mentor(_) => Role::Mentor,
      Self::Mentee(_) => Role::Mentee,
      Self::Admin => Role::Admin,
    }
  }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
  pub id:            Uuid,
  pub name:          String,
  pub email:         String,
  pub bio:           Option<String>,
  pub subject_field: Option<String>,
  pub country:       Option<String>,
  pub title:         Option<String>,
  pub organization:  Option<String>,
  /// `None` means the entity has never been seen active.
  pub last_active:   Option<DateTime<Utc>>,
  pub created_at:    DateTime<Utc>,
  #[serde(flatten)]
  profile:           RoleProfile,
}

impl Entity {
  /// Build an entity with a fresh id and every optional field unset.
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    profile: RoleProfile,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      name: name.into(),
      email: email.into(),
      bio: None,
      subject_field: None,
      country: None,
      title: None,
      organization: None,
      last_active: None,
      created_at: Utc::now(),
      profile,
    }
  }

  pub fn role(&self) -> Role { self.profile.role() }

  pub fn profile(&self) -> &RoleProfile { &self.profile }

  /// Mentor-only fields, if this entity is a mentor.
  pub fn as_mentor(&self) -> Option<&MentorProfile> {
    match &self.profile {
      RoleProfile::Mentor(m) => Some(m),
      _ => None,
    }
  }

  /// Mentee-only fields, if this entity is a mentee.
  pub fn as_mentee(&self) -> Option<&MenteeProfile> {
    match &self.profile {
      RoleProfile::Mentee(m) => Some(m),
      _ => None,
    }
  }

  /// Mutable access to the variant fields. The variant itself cannot change.
  pub fn as_mentor_mut(&mut self) -> Option<&mut MentorProfile> {
    match &mut self.profile {
      RoleProfile::Mentor(m) => Some(m),
      _ => None,
    }
  }

  pub fn as_mentee_mut(&mut self) -> Option<&mut MenteeProfile> {
    match &mut self.profile {
      RoleProfile::Mentee(m) => Some(m),
      _ => None,
    }
  }

  /// The role-specific list fields that free-text search looks into.
  pub fn searchable_tags(&self) -> impl Iterator<Item = &str> {
    const NONE: &[String] = &[];
    let (first, second) = match &self.profile {
      RoleProfile::Mentor(m) => (m.expertise.as_slice(), NONE),
      RoleProfile::Mentee(m) => (m.goals.as_slice(), m.looking_for.as_slice()),
      RoleProfile::Admin => (NONE, NONE),
    };
    first.iter().chain(second).map(String::as_str)
  }
}
