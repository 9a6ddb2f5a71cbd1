//! Capabilities handed to components through a Yew context

use super::report::{HttpReportService, ReportService};
use portal_frontend_common::{
    BrowserSessionStore, GlooScheduler, PortalConfig, Scheduler, SessionStore,
};
use std::rc::Rc;
use yew::prelude::*;

/// Storage, timers and the report API, injected so tests can swap them
#[derive(Clone)]
pub struct PortalServices {
    pub config: Rc<PortalConfig>,
    pub store: Rc<dyn SessionStore>,
    pub scheduler: Rc<dyn Scheduler>,
    pub reports: Rc<dyn ReportService>,
}

impl PortalServices {
    /// Browser-backed services for `config`
    pub fn browser(config: PortalConfig) -> Self {
        Self {
            reports: Rc::new(HttpReportService::new(config.clone())),
            config: Rc::new(config),
            store: Rc::new(BrowserSessionStore),
            scheduler: Rc::new(GlooScheduler),
        }
    }
}

impl Default for PortalServices {
    fn default() -> Self {
        Self::browser(PortalConfig::default())
    }
}

impl PartialEq for PortalServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.store, &other.store)
            && Rc::ptr_eq(&self.scheduler, &other.scheduler)
            && Rc::ptr_eq(&self.reports, &other.reports)
    }
}

/// Services from the nearest provider, or browser defaults without one
#[hook]
pub fn use_portal_services() -> PortalServices {
    use_context::<PortalServices>().unwrap_or_default()
}
