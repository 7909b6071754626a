#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod constants;
pub mod error;
pub mod form;
pub mod identity;
pub mod navigation;
pub mod screen;
pub mod services;

pub use crate::api::*;
pub use crate::constants::*;
pub use crate::error::*;
pub use crate::form::*;
pub use crate::identity::*;
pub use crate::navigation::*;
pub use crate::screen::*;
pub use crate::services::*;
