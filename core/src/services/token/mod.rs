//! Access token issuing

mod jwt;


pub use jwt::{Claims, JwtTokenIssuer};
