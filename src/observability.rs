use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("liaison.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("liaison.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("liaison.client.request_duration_seconds");

pub(crate) static SESSION_TURNS: Counter = Counter::new("liaison.session.turns");
pub(crate) static SESSION_FALLBACKS: Counter = Counter::new("liaison.session.fallbacks");
pub(crate) static SESSION_SUBMITS_IGNORED: Counter =
    Counter::new("liaison.session.submits_ignored");

pub(crate) static FEEDBACK_SENT: Counter = Counter::new("liaison.feedback.sent");
pub(crate) static FEEDBACK_ERRORS: Counter = Counter::new("liaison.feedback.errors");

pub(crate) static STATS_POLLS: Counter = Counter::new("liaison.stats.polls");
pub(crate) static STATS_POLL_ERRORS: Counter = Counter::new("liaison.stats.poll_errors");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_TURNS);
    collector.register_counter(&SESSION_FALLBACKS);
    collector.register_counter(&SESSION_SUBMITS_IGNORED);

    collector.register_counter(&FEEDBACK_SENT);
    collector.register_counter(&FEEDBACK_ERRORS);

    collector.register_counter(&STATS_POLLS);
    collector.register_counter(&STATS_POLL_ERRORS);
}
