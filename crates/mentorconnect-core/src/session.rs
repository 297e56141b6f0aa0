//! Mock sign-in session.
//!
//! There is no identity provider. Signing in with the configured admin email
//! and a password matching the admin's argon2 hash yields the admin account;
//! any other email is assigned a random mentor or mentee from the directory.
//! The session is an explicit value owned by the caller and is never seen by
//! the listing pipeline.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use rand_core::{OsRng, RngCore};

use crate::{
  Error, Result,
  directory::Directory,
  entity::{Entity, Role, RoleProfile},
};

/// The admin login accepted by [`Session::sign_in`].
#[derive(Debug, Clone)]
pub struct AdminCredentials {
  pub email:         String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

impl AdminCredentials {
  fn accepts(&self, email: &str, password: Option<&str>) -> bool {
    if !self.email.eq_ignore_ascii_case(email) {
      return false;
    }
    let Some(password) = password else {
      return false;
    };
    let parsed = match PasswordHash::new(&self.password_hash) {
      Ok(parsed) => parsed,
      Err(e) => {
        tracing::warn!("configured admin password hash is invalid: {e}");
        return false;
      }
    };
    Argon2::default()
      .verify_password(password.as_bytes(), &parsed)
      .is_ok()
  }
}

/// Produce an argon2 PHC string for `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|h| h.to_string())
    .map_err(|e| Error::PasswordHash(e.to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct Session {
  current: Option<Entity>,
}

impl Session {
  pub fn new() -> Self { Self::default() }

  /// Sign in as `email`. Replaces any existing user.
  pub fn sign_in<R: RngCore>(
    &mut self,
    directory: &Directory,
    admin: &AdminCredentials,
    email: &str,
    password: Option<&str>,
    rng: &mut R,
  ) -> Result<&Entity> {
    let email = email.trim();
    if email.is_empty() {
      return Err(Error::EmailRequired);
    }

    let user = if admin.accepts(email, password) {
      directory.admin_by_email(email).cloned().unwrap_or_else(|| {
        Entity::new("Administrator", email, RoleProfile::Admin)
      })
    } else {
      let mut user = random_member(directory, rng)?;
      user.email = email.to_owned();
      user
    };

    tracing::info!(role = %user.role(), name = %user.name, "signed in");
    Ok(&*self.current.insert(user))
  }

  pub fn sign_out(&mut self) {
    if let Some(user) = self.current.take() {
      tracing::info!(name = %user.name, "signed out");
    }
  }

  pub fn current_user(&self) -> Option<&Entity> { self.current.as_ref() }

  pub fn is_admin(&self) -> bool { self.has_role(Role::Admin) }

  pub fn is_mentor(&self) -> bool { self.has_role(Role::Mentor) }

  pub fn is_mentee(&self) -> bool { self.has_role(Role::Mentee) }

  fn has_role(&self, role: Role) -> bool {
    self.current.as_ref().is_some_and(|u| u.role() == role)
  }
}

/// Pick a role uniformly between mentor and mentee, then a member of it.
/// Falls back to the other role when the chosen one is empty.
fn random_member<R: RngCore>(directory: &Directory, rng: &mut R) -> Result<Entity> {
  let (first, second) = if rng.next_u32() % 2 == 0 {
    (Role::Mentor, Role::Mentee)
  } else {
    (Role::Mentee, Role::Mentor)
  };

  let mut pool = directory.by_role(first);
  if pool.is_empty() {
    pool = directory.by_role(second);
  }
  if pool.is_empty() {
    return Err(Error::EmptyDirectory);
  }
  let index = rng.next_u32() as usize % pool.len();
  Ok(pool.swap_remove(index))
}
