//! Scenario catalog for the public reqres deployment.
//!
//! Every scenario takes its own client, installs the specification it needs,
//! performs exactly one call and checks the result. Nothing is shared between
//! scenarios, so they can run in any order or in parallel.
//!
//! The expected values below are fixtures of the public deployment.

mod auth;
mod latency;
mod resources;
mod users;

use std::time::Duration;

pub use auth::{login_successful, login_unsuccessful, register_successful, register_unsuccessful};
pub use latency::delayed_response;
pub use resources::{list_resources, single_resource, single_resource_not_found};
pub use users::{
    create_user, delete_user, list_users, single_user, single_user_not_found, update_user_patch,
    update_user_put,
};

/// Substring every listed user's email must contain.
pub const EMAIL_DOMAIN: &str = "reqres.in";

/// Page requested by the list scenario.
pub const USERS_PAGE: u32 = 2;

/// User and resource id known to exist.
pub const KNOWN_ID: u32 = 2;

/// User and resource id known not to exist.
pub const MISSING_ID: u32 = 23;

pub const KNOWN_USER_FIRST_NAME: &str = "Janet";
pub const KNOWN_RESOURCE_COLOR: &str = "#C74375";

pub const NEW_USER_NAME: &str = "morpheus";
pub const NEW_USER_JOB: &str = "leader";
pub const UPDATED_USER_JOB: &str = "zion resident";

pub const REGISTERED_EMAIL: &str = "eve.holt@reqres.in";
pub const REGISTER_PASSWORD: &str = "pistol";
pub const REGISTERED_ID: &str = "4";
pub const LOGIN_PASSWORD: &str = "cityslicka";
pub const LOGIN_TOKEN: &str = "QpwL5tke4Pnpja7X4";
pub const UNREGISTERED_EMAIL: &str = "peter@klaven";
pub const MISSING_PASSWORD_ERROR: &str = "Missing password";

/// Server-side delay requested by the latency scenario, in seconds.
pub const DELAY_SECS: u32 = 3;

/// Upper bound on the delayed response.
pub const LATENCY_LIMIT: Duration = Duration::from_millis(4000);
