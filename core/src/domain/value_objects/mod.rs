//! Self-validating value objects.
//!
//! Construction is the only validation point: every constructor returns
//! `Result<_, ValidationError>` and a built instance stays valid for its
//! whole lifetime.

pub mod amount;
pub mod description;
pub mod email;
pub mod id;
pub mod name;
pub mod password;
pub mod token;

pub use amount::Amount;
pub use description::Description;
pub use email::Email;
pub use id::Id;
pub use name::Name;
pub use password::Password;
pub use token::Token;
