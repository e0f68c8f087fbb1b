pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;

/// Delay between a successful login/register and the next page
pub(crate) const AUTH_REDIRECT_MS: u32 = 800;
