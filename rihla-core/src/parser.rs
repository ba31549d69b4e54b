use std::sync::Arc;
use std::time::Duration;
use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

use crate::airport::{canonical_code, is_iata_code, AirportResolver};
use crate::date::{correct_date, validate_travel_date};
use crate::digits::normalize_digits;
use crate::grammar::match_line;
use crate::query::{ParseFailure, ParsedQuery, RawInput};

const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(10);

/// Turns a raw chat line into a validated flight search.
pub struct QueryParser {
    resolver: Arc<dyn AirportResolver>,
    resolve_timeout: Duration,
}

impl QueryParser {
    pub fn new(resolver: Arc<dyn AirportResolver>) -> Self {
        Self {
            resolver,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
        }
    }

    /// Upper bound on a single airport lookup. An elapsed lookup counts as "not found".
    pub fn with_resolve_timeout(mut self, timeout: Duration) -> Self {
        self.resolve_timeout = timeout;
        self
    }

    /// Parse against today's local date.
    pub async fn parse(&self, input: &RawInput) -> Result<ParsedQuery, ParseFailure> {
        self.parse_on(input, Local::now().date_naive()).await
    }

    /// Parse with an explicit "today".
    pub async fn parse_on(&self, input: &RawInput, today: NaiveDate) -> Result<ParsedQuery, ParseFailure> {
        let normalized = normalize_digits(&input.text);

        let line = match match_line(&normalized) {
            Some(line) => line,
            None => {
                debug!("Input does not match search grammar ({}): {:?}", input.language, normalized);
                return Err(ParseFailure::Malformed);
            }
        };

        let corrected = correct_date(line.date);
        let travel_date = validate_travel_date(&corrected, today)?;

        let (from, to) = tokio::join!(
            self.resolve_token(line.origin),
            self.resolve_token(line.destination),
        );

        match (from?, to?) {
            (Some(from), Some(to)) => Ok(ParsedQuery {
                from,
                to,
                date: corrected,
                original_date: line.date.to_string(),
                travel_date,
            }),
            _ => Err(ParseFailure::Malformed),
        }
    }

    /// Resolve one place token to an uppercase IATA code.
    /// `Ok(None)` for absence, `Err(ProcessingError)` for resolver faults.
    async fn resolve_token(&self, token: &str) -> Result<Option<String>, ParseFailure> {
        if is_iata_code(token) {
            return Ok(Some(token.to_ascii_uppercase()));
        }

        let lookup = tokio::time::timeout(self.resolve_timeout, self.resolver.resolve(token)).await;
        match lookup {
            Ok(Ok(Some(code))) => {
                let canonical = canonical_code(&code);
                if canonical.is_none() {
                    warn!("Resolver returned an unusable code {:?} for {:?}", code, token);
                }
                Ok(canonical)
            }
            Ok(Ok(None)) => {
                debug!("No airport found for {:?}", token);
                Ok(None)
            }
            Ok(Err(e)) => {
                error!("Airport resolution failed for {:?}: {}", token, e);
                Err(ParseFailure::ProcessingError)
            }
            Err(_) => {
                warn!("Airport resolution for {:?} timed out after {:?}", token, self.resolve_timeout);
                Ok(None)
            }
        }
    }
}
