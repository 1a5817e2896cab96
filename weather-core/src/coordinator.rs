use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    FetchError, WeatherProvider,
    view_state::{Completion, Ticket, WeatherView},
};

/// Runs lookups against a provider. Every ticket produces exactly one
/// [`Completion`], even when the lookup task itself fails.
#[derive(Debug, Clone)]
pub struct FetchCoordinator {
    provider: Arc<dyn WeatherProvider>,
}

impl FetchCoordinator {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch(&self, ticket: Ticket) -> Completion {
        let provider = Arc::clone(&self.provider);
        let city = ticket.city.clone();

        let outcome = match tokio::spawn(async move { provider.current_weather(&city).await }).await
        {
            Ok(outcome) => outcome,
            Err(join_err) => {
                warn!(ticket = ticket.id, error = %join_err, "lookup task failed");
                Err(FetchError::Unexpected(join_error_message(join_err)))
            }
        };

        match &outcome {
            Ok(summary) => debug!(ticket = ticket.id, location = %summary.name, "lookup succeeded"),
            Err(err) => debug!(ticket = ticket.id, error = %err, "lookup failed"),
        }

        Completion { ticket, outcome }
    }

    /// Submit the view's current input and wait for the outcome.
    ///
    /// Returns `true` when a lookup ran and its result was applied.
    pub async fn submit(&self, view: &mut WeatherView) -> bool {
        match view.submit() {
            Some(ticket) => {
                let completion = self.fetch(ticket).await;
                view.apply(completion)
            }
            None => false,
        }
    }
}

fn join_error_message(err: tokio::task::JoinError) -> String {
    if err.is_cancelled() {
        return "weather lookup was cancelled".to_string();
    }

    let payload = err.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "weather lookup failed unexpectedly".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CityQuery, RequestState, WeatherSummary};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct FakeProvider {
        calls: AtomicUsize,
        fail_with: Option<FetchError>,
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current_weather(&self, city: &CityQuery) -> Result<WeatherSummary, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(WeatherSummary {
                name: city.to_string(),
                country: "GB".into(),
                temperature_c: 15.3,
                humidity_pct: 72,
                description: "clear sky".into(),
                icon: "01d".into(),
            })
        }
    }

    #[derive(Debug)]
    struct PanickingProvider;

    #[async_trait]
    impl WeatherProvider for PanickingProvider {
        async fn current_weather(&self, _city: &CityQuery) -> Result<WeatherSummary, FetchError> {
            panic!("provider blew up");
        }
    }

    #[tokio::test]
    async fn submit_applies_success() {
        let provider = Arc::new(FakeProvider::default());
        let coordinator = FetchCoordinator::new(provider.clone());
        let mut view = WeatherView::new();
        view.set_city(" London ");

        assert!(coordinator.submit(&mut view).await);
        assert_eq!(view.state().summary().map(|s| s.name.as_str()), Some("London"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_input_never_reaches_provider() {
        let provider = Arc::new(FakeProvider::default());
        let coordinator = FetchCoordinator::new(provider.clone());
        let mut view = WeatherView::new();
        view.set_city(" \t ");

        assert!(!coordinator.submit(&mut view).await);
        assert_eq!(view.state(), &RequestState::Error(FetchError::EmptyCity));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_error_clears_loading() {
        let err = FetchError::provider(Some("city not found"));
        let provider = Arc::new(FakeProvider { fail_with: Some(err.clone()), ..Default::default() });
        let coordinator = FetchCoordinator::new(provider);
        let mut view = WeatherView::new();
        view.set_city("Nowhereville");

        assert!(coordinator.submit(&mut view).await);
        assert_eq!(view.state(), &RequestState::Error(err));
        assert_eq!(view.state().error().unwrap().to_string(), "Error: city not found");
    }

    #[tokio::test]
    async fn panicking_provider_still_releases_loading() {
        let coordinator = FetchCoordinator::new(Arc::new(PanickingProvider));
        let mut view = WeatherView::new();
        view.set_city("London");

        assert!(coordinator.submit(&mut view).await);
        assert!(!view.state().is_loading());
        assert_eq!(
            view.state().error(),
            Some(&FetchError::Unexpected("provider blew up".into()))
        );
        assert_eq!(view.state().error().unwrap().to_string(), "Error: provider blew up");
    }

    #[tokio::test]
    async fn overlapping_fetches_keep_latest() {
        let coordinator = FetchCoordinator::new(Arc::new(FakeProvider::default()));
        let mut view = WeatherView::new();

        view.set_city("Paris");
        let first = view.submit().unwrap();
        view.set_city("London");
        let second = view.submit().unwrap();

        let (first, second) = tokio::join!(coordinator.fetch(first), coordinator.fetch(second));
        assert!(!view.apply(first));
        assert!(view.state().is_loading());
        assert!(view.apply(second));
        assert_eq!(view.state().summary().map(|s| s.name.as_str()), Some("London"));
    }
}
