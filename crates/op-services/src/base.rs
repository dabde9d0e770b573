//! Shared service dependencies

use std::sync::Arc;

use chrono::NaiveDate;
use op_client::{MemberSource, ProjectSource, WorkItemSource};
use op_core::traits::{Clock, SystemClock};

/// Data sources and clock the services run against
#[derive(Clone)]
pub struct ServiceContext {
    pub projects: Arc<dyn ProjectSource>,
    pub work_items: Arc<dyn WorkItemSource>,
    pub members: Arc<dyn MemberSource>,
    pub clock: Arc<dyn Clock>,
}

impl ServiceContext {
    /// Context reading everything from one source, on the wall clock
    pub fn new<S>(source: Arc<S>) -> Self
    where
        S: ProjectSource + WorkItemSource + MemberSource + 'static,
    {
        Self {
            projects: source.clone(),
            work_items: source.clone(),
            members: source,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("now", &self.clock.now())
            .finish_non_exhaustive()
    }
}
