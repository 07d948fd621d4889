pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::SessionClaims;
pub use errors::TokenError;
pub use handler::TokenHandler;
