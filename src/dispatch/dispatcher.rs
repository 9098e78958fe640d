use std::sync::Arc;

use crate::controller::{Exchange, Resolution};
use crate::dispatch::{DispatchMode, DispatcherOptions, Outcome};
use crate::enums::HttpMethod;
use crate::errors::DispatchResult;
use crate::pattern::{self, CompiledPattern, PatternCache, PlaceholderPolicy};
use crate::request::RequestContext;
use crate::response::Response;
use crate::signal::StatusSignal;
use crate::table::RoutingTable;

/// Walks a routing table in declaration order, invokes the first matching
/// controller operation, and folds every terminal condition into a
/// [`StatusSignal`] routed per the configured [`DispatchMode`].
#[derive(Debug)]
pub struct Dispatcher {
    options: DispatcherOptions,
    cache: Option<PatternCache>,
}

impl Dispatcher {
    pub fn new(options: Option<DispatcherOptions>) -> Self {
        let options = options.unwrap_or_default();
        let cache = options
            .cache_patterns
            .then(|| PatternCache::new(options.cache_capacity));
        Self { options, cache }
    }

    pub fn options(&self) -> &DispatcherOptions {
        &self.options
    }

    /// Exactly one route is attempted to completion; nothing is written to
    /// the sink before the final decision.
    #[tracing::instrument(
        level = "trace",
        skip(self, table, request, response),
        fields(method = %request.method(), path = %request.path())
    )]
    pub fn dispatch(
        &self,
        table: &RoutingTable,
        request: &RequestContext,
        response: &mut Response<'_>,
    ) -> DispatchResult<Outcome> {
        for route in table.iter() {
            let compiled = self.compiled(route.pattern())?;
            let Some(params) = compiled.capture(request.path()) else {
                continue;
            };

            tracing::event!(
                tracing::Level::DEBUG,
                operation = "match",
                pattern = %route.pattern(),
                params = params.len() as u64
            );

            let Some(verb) = HttpMethod::from_token(request.method()) else {
                return self.finish(StatusSignal::not_implemented(), response);
            };

            let handler = match route.controller().resolve(verb) {
                Resolution::Handler(handler) => handler,
                Resolution::Unsupported => {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        operation = "unimplemented",
                        pattern = %route.pattern(),
                        verb = verb.as_token()
                    );
                    return self.finish(StatusSignal::not_implemented(), response);
                }
            };

            let reply = {
                let mut exchange = Exchange {
                    request,
                    response: &mut *response,
                };
                handler.invoke(&mut exchange, &params)
            };

            // First structural match wins; later routes are never tried,
            // whatever the handler produced.
            return match reply {
                Ok(value) => Ok(Outcome::Completed(value)),
                Err(signal) => self.finish(signal, response),
            };
        }

        tracing::event!(tracing::Level::DEBUG, operation = "miss", path = %request.path());
        self.finish(StatusSignal::not_found(), response)
    }

    fn finish(
        &self,
        signal: StatusSignal,
        response: &mut Response<'_>,
    ) -> DispatchResult<Outcome> {
        match self.options.mode {
            DispatchMode::Signal => Ok(Outcome::Signal(signal)),
            DispatchMode::Emit => {
                response.emit_signal(&signal)?;
                Ok(Outcome::Emitted(signal))
            }
        }
    }

    fn compiled(&self, route_pattern: &str) -> DispatchResult<Arc<CompiledPattern>> {
        if let Some(cache) = &self.cache
            && let Some(hit) = cache.fetch(route_pattern)
        {
            return Ok(hit);
        }

        let compiled = Arc::new(pattern::compile(route_pattern, &self.policy())?);
        if let Some(cache) = &self.cache {
            cache.store(route_pattern, compiled.clone());
        }
        Ok(compiled)
    }

    fn policy(&self) -> PlaceholderPolicy {
        PlaceholderPolicy {
            capture: self.options.capture_mode,
            allow_adjacent: self.options.allow_adjacent_params,
        }
    }
}
