use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    display::DisplaySurface,
    model::{DisplayResult, Quote, RenderState},
    quoteapi::api_caller::QuoteSource,
};

/// Fetches one quote and writes it, or an error label, to the surface.
pub struct QuoteFetchRenderer<S, D> {
    source: S,
    surface: D,
    in_flight: AtomicBool,
    state: Mutex<Option<RenderState>>,
}

// Releases the in-flight flag on every exit path.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: QuoteSource, D: DisplaySurface> QuoteFetchRenderer<S, D> {
    pub fn new(source: S, surface: D) -> Self {
        Self {
            source,
            surface,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(None),
        }
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// State of the latest run; `None` before the first one.
    pub fn state(&self) -> Option<RenderState> {
        match self.state.lock() {
            Ok(state) => *state,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn set_state(&self, next: RenderState) {
        match self.state.lock() {
            Ok(mut state) => *state = Some(next),
            Err(poisoned) => *poisoned.into_inner() = Some(next),
        }
    }

    /// Runs fetch → validate → render once for `symbol`.
    ///
    /// Returns the terminal state, or `None` if another render on this
    /// renderer is still in flight (the surface is left to that run).
    pub async fn render(&self, symbol: &str) -> Option<RenderState> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            log::warn!("render for {} skipped, another render is in flight", symbol);
            return None;
        }
        let _guard = InFlight(&self.in_flight);
        self.set_state(RenderState::Pending);

        let (state, result) = match self.source.fetch(symbol).await {
            Err(err) => {
                log::error!("error while fetching {}: {}", symbol, err);
                (RenderState::Failed, DisplayResult::failed())
            }
            Ok(payload) => match Quote::try_from(payload) {
                Err(err) => {
                    log::warn!("no data for {}: {}", symbol, err);
                    (RenderState::EmptyResult, DisplayResult::empty_result())
                }
                Ok(quote) => {
                    let row = quote.row();
                    log::debug!("row for {}: {}", symbol, row.to_html());
                    let label = quote.symbol.as_deref().unwrap_or(symbol);
                    (RenderState::Success, DisplayResult::success(label, row))
                }
            },
        };

        self.surface.write(&result);
        self.set_state(state);
        log::info!("render for {} finished: {:?}", symbol, state);
        Some(state)
    }
}
