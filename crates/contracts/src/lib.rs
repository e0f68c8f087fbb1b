//! Wire types shared between the admin panel and the remote REST API.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
