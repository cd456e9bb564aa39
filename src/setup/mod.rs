//! Role configuration and assignment.
//!
//! ## Key Types
//!
//! - `RoleConfiguration`: how many of each role a game deals
//! - `ValidationReport`: hard errors, soft warnings, and suggestions for a
//!   configuration
//!
//! ## Example
//!
//! ```
//! use werewolf_engine::core::{GameRng, PlayerId};
//! use werewolf_engine::setup::{assign_roles, generate_default_config, validate_config};
//!
//! let config = generate_default_config(8);
//! assert!(validate_config(&config, 8).is_valid);
//!
//! let ids: Vec<PlayerId> = PlayerId::range(8).collect();
//! let roles = assign_roles(&ids, &config, &GameRng::new(7)).unwrap();
//! assert_eq!(roles.len(), 8);
//! ```

mod assignment;
mod config;
mod validation;

pub use assignment::{assign_roles, deal_roster, ASSIGNMENT_CONTEXT};
pub use config::{generate_default_config, recommended_werewolves, RoleConfiguration};
pub use validation::{validate_config, validate_config_with, ValidationReport};
