//! Application state management

use domain_lessons::HttpLessonsClient;
use domain_statistics::StatisticProducer;

/// Shared application state
///
/// Holds a producer handle: the statistics worker keeps running until every
/// clone of it, including this one, has been dropped.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub lessons_client: HttpLessonsClient,
    pub producer: StatisticProducer,
}
