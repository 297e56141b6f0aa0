//! `mentorconnect` — browse a static mentor/mentee directory from the terminal.
//!
//! # Usage
//!
//! ```
//! mentorconnect mentors --query genetics --country India
//! mentorconnect --email me@example.com browse --last-active this_week
//! mentorconnect --email admin@example.org --password ... roster --role mentee
//! ```

mod render;
mod settings;

use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::{Args, Parser, Subcommand};
use mentorconnect_core::{
  Directory,
  entity::Role,
  filter::{ActivityWindow, FilterCriteria},
  listing::list,
  ranking::{most_recently_active, top_rated_mentors},
  search::roster,
  session::{Session, hash_password},
};
use rand_core::OsRng;
use settings::{Settings, expand_tilde};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Browse the MentorConnect directory")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "mentorconnect.toml")]
  config: PathBuf,

  /// Directory JSON file; overrides `data_path` from the config.
  #[arg(long, value_name = "FILE")]
  data: Option<PathBuf>,

  /// Sign in with this email for the duration of the command.
  #[arg(long, env = "MENTORCONNECT_EMAIL")]
  email: Option<String>,

  /// Password; only checked for the admin account.
  #[arg(long, env = "MENTORCONNECT_PASSWORD")]
  password: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the argon2 hash for a password entered on stdin and exit.
  HashPassword,
  #[command(flatten)]
  Directory(DirectoryCommand),
}

/// Commands that read the directory.
#[derive(Subcommand)]
enum DirectoryCommand {
  /// List mentors.
  Mentors(ListArgs),
  /// List mentees.
  Mentees(ListArgs),
  /// List whoever the signed-in user is looking for.
  Browse(ListArgs),
  /// Top mentors by rating, or most recently active mentees.
  Top {
    #[arg(long, default_value = "mentor")]
    role:  Role,
    #[arg(long, default_value_t = 10)]
    limit: usize,
  },
  /// Admin roster search over name, email, subject field and country.
  Roster {
    #[arg(long, default_value = "mentor")]
    role:  Role,
    #[arg(short, long)]
    query: Option<String>,
  },
  /// Show the signed-in user.
  Whoami,
}

#[derive(Args)]
struct ListArgs {
  /// Free-text search over name, bio, subject field and tags.
  #[arg(short, long)]
  query:         Option<String>,
  #[arg(long)]
  subject_field: Option<String>,
  #[arg(long)]
  country:       Option<String>,
  /// One of `today`, `this_week`, `this_month`, `all`.
  #[arg(long)]
  last_active:   Option<ActivityWindow>,
  #[arg(long, default_value_t = 1)]
  page:          usize,
  /// Defaults to `page_size` from the config.
  #[arg(long)]
  page_size:     Option<usize>,
}

impl ListArgs {
  fn criteria(&self) -> FilterCriteria {
    FilterCriteria {
      subject_field: self.subject_field.clone(),
      country:       self.country.clone(),
      last_active:   self.last_active,
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  // Initialise tracing on stderr; stdout carries the listing.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Helper mode: hash a password and exit.
  let command = match cli.command {
    Command::HashPassword => {
      let password = read_password()?;
      println!("{}", hash_password(&password)?);
      return Ok(());
    }
    Command::Directory(command) => command,
  };

  let settings = Settings::load(&cli.config)?;
  let data_path =
    expand_tilde(cli.data.as_deref().unwrap_or(&settings.data_path));
  let raw = std::fs::read_to_string(&data_path)
    .with_context(|| format!("failed to read directory at {data_path:?}"))?;
  let directory = Directory::from_json(&raw)
    .with_context(|| format!("failed to parse directory at {data_path:?}"))?;
  tracing::info!(path = ?data_path, entities = directory.len(), "directory loaded");

  let mut session = Session::new();
  if let Some(email) = &cli.email {
    session
      .sign_in(
        &directory,
        &settings.admin(),
        email,
        cli.password.as_deref(),
        &mut OsRng,
      )
      .context("sign-in failed")?;
  }

  match command {
    DirectoryCommand::Mentors(args) => {
      show_listing(&directory.mentors(), "mentors", &args, &settings)?
    }
    DirectoryCommand::Mentees(args) => {
      show_listing(&directory.mentees(), "mentees", &args, &settings)?
    }
    DirectoryCommand::Browse(args) => {
      let viewer = session.current_user();
      let noun = match viewer.and_then(|v| v.role().counterpart()) {
        Some(Role::Mentor) => "mentors",
        Some(Role::Mentee) => "mentees",
        _ => "members",
      };
      show_listing(&directory.for_viewer(viewer), noun, &args, &settings)?
    }
    DirectoryCommand::Top { role, limit } => {
      let ranked = match role {
        Role::Mentor => top_rated_mentors(directory.entities(), limit),
        Role::Mentee => most_recently_active(directory.entities(), role, limit),
        Role::Admin => bail!("admins are not ranked"),
      };
      for (i, e) in ranked.iter().enumerate() {
        println!("{:>3}. {}", i + 1, render::entity_line(e));
      }
    }
    DirectoryCommand::Roster { role, query } => {
      if !session.is_admin() {
        bail!("the roster is only available to the admin account");
      }
      let members = directory.by_role(role);
      let shown = roster(&members, query.as_deref());
      for e in &shown {
        println!("  {} <{}>", render::entity_line(e), e.email);
      }
      println!("Showing {} of {} {role}s", shown.len(), members.len());
    }
    DirectoryCommand::Whoami => match session.current_user() {
      Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role()),
      None => println!("not signed in"),
    },
  }

  Ok(())
}

fn show_listing(
  entities: &[mentorconnect_core::entity::Entity],
  noun: &str,
  args: &ListArgs,
  settings: &Settings,
) -> anyhow::Result<()> {
  let criteria = args.criteria();
  let page_size = args.page_size.unwrap_or(settings.page_size);
  let page = list(entities, args.query.as_deref(), &criteria, args.page, page_size)
    .context("invalid listing request")?;
  tracing::debug!(
    total = page.total_count,
    pages = page.total_pages,
    "listing computed"
  );
  render::print_page(&page, noun, &criteria);
  Ok(())
}

/// Read a password from stdin.
fn read_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  let stdin = io::stdin();
  eprint!("Password: ");
  io::stderr().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}
