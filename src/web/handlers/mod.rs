//! HTTP handlers for the go link surface.

mod add;
mod home;
mod redirect;

pub use add::{AddLinkForm, add_handler, method_not_allowed};
pub use home::{HomeTemplate, home_handler};
pub use redirect::redirect_handler;
