//! The views module contains the components for all Layouts and Routes for our app.
//! Each submodule corresponds to a specific section of the application,
//! encapsulating the layout and routing logic for that section.

mod home;
pub use home::Home;

mod navbar;
pub use navbar::Navbar;
