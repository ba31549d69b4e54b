pub mod language;
pub mod digits;
pub mod grammar;
pub mod date;
pub mod airport;
pub mod query;
pub mod parser;
pub mod search;
pub mod session;

pub use language::Language;
pub use query::{ParseFailure, ParsedQuery, RawInput};
pub use parser::QueryParser;
pub use airport::AirportResolver;
pub use search::{FlightOffer, FlightSearch, RouteLeg};
pub use session::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Session store failure: {0}")]
    SessionError(String),
    #[error("Airport resolver failure: {0}")]
    ResolverError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
