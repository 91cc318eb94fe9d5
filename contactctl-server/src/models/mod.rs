//! Domain models

mod contact;
mod validation;

pub use contact::Contact;
pub use validation::ValidationError;
