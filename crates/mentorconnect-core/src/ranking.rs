//! Pre-sorts for "top N" views.
//!
//! These run before the listing pipeline, which never reorders. Both sorts
//! are stable, so ties keep their directory order.

use std::cmp::Ordering;

use crate::entity::{Entity, Role};

/// Mentors ordered by rating, highest first; an unrated mentor counts as 0.
pub fn top_rated_mentors(entities: &[Entity], n: usize) -> Vec<&Entity> {
  let rating = |e: &Entity| e.as_mentor().and_then(|m| m.rating).unwrap_or(0.0);

  let mut mentors: Vec<&Entity> =
    entities.iter().filter(|e| e.as_mentor().is_some()).collect();
  mentors.sort_by(|a, b| rating(*b).total_cmp(&rating(*a)));
  mentors.truncate(n);
  mentors
}

/// Entities of `role` ordered by most recent activity. Entities that were
/// never active sort after every active one.
pub fn most_recently_active(
  entities: &[Entity],
  role: Role,
  n: usize,
) -> Vec<&Entity> {
  let mut ranked: Vec<&Entity> =
    entities.iter().filter(|e| e.role() == role).collect();
  ranked.sort_by(|a, b| match (a.last_active, b.last_active) {
    (Some(a), Some(b)) => b.cmp(&a),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  });
  ranked.truncate(n);
  ranked
}

#[cfg(test)]
mod tests {
  use chrono::{TimeDelta, Utc};

  use super::*;
  use crate::entity::{MenteeProfile, MentorProfile, RoleProfile};

  fn rated(name: &str, rating: Option<f32>) -> Entity {
    Entity::new(
      name,
      "m@example.com",
      RoleProfile::Mentor(MentorProfile {
        rating,
        ..Default::default()
      }),
    )
  }

  fn names(list: &[&Entity]) -> Vec<String> {
    list.iter().map(|e| e.name.clone()).collect()
  }

  #[test]
  fn top_rated_sorts_descending_and_truncates() {
    let mut all = vec![
      rated("low", Some(3.1)),
      rated("none", None),
      rated("high", Some(4.9)),
      rated("mid", Some(4.2)),
    ];
    all.push(Entity::new(
      "mentee",
      "x@example.com",
      RoleProfile::Mentee(MenteeProfile::default()),
    ));

    assert_eq!(names(&top_rated_mentors(&all, 3)), vec!["high", "mid", "low"]);
    assert_eq!(top_rated_mentors(&all, 10).len(), 4);
  }

  #[test]
  fn top_rated_ties_keep_directory_order() {
    let all = vec![rated("a", Some(4.0)), rated("b", Some(4.0))];
    assert_eq!(names(&top_rated_mentors(&all, 2)), vec!["a", "b"]);
  }

  #[test]
  fn most_recent_puts_inactive_last() {
    let now = Utc::now();
    let mentee = |name: &str, hours: Option<i64>| {
      let mut e = Entity::new(
        name,
        "x@example.com",
        RoleProfile::Mentee(MenteeProfile::default()),
      );
      e.last_active = hours.map(|h| now - TimeDelta::hours(h));
      e
    };
    let all = vec![
      mentee("never", None),
      mentee("old", Some(200)),
      mentee("fresh", Some(1)),
      rated("mentor", Some(5.0)),
    ];

    let ranked = most_recently_active(&all, Role::Mentee, 10);
    assert_eq!(names(&ranked), vec!["fresh", "old", "never"]);
  }
}
