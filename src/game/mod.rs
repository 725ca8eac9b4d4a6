//! Round controller and console session

pub mod round;
pub mod session;

pub use round::{Attempt, DEFAULT_MAX_ATTEMPTS, Round, RoundError, RoundStatus};
pub use session::{Session, SessionConfig};
