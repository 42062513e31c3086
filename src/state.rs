//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{LinkAllocator, RedirectResolver};
use crate::config::Config;
use crate::domain::Deadline;
use crate::domain::repositories::LinkStore;

/// Per-request knobs for the short-link endpoints.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    pub default_ttl_seconds: u64,
    pub retry_budget: u32,
    pub request_timeout: Duration,
}

impl LinkSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_ttl_seconds: config.default_ttl_seconds,
            retry_budget: config.retry_budget,
            request_timeout: config.request_timeout,
        }
    }

    /// A fresh deadline for one inbound request.
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.request_timeout)
    }
}

/// Identity reported by the health check.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub service_name: String,
    pub instance_id: String,
}

#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<LinkAllocator<dyn LinkStore>>,
    pub resolver: Arc<RedirectResolver<dyn LinkStore>>,
    pub store: Arc<dyn LinkStore>,
    pub settings: Arc<LinkSettings>,
    pub service: Arc<ServiceInfo>,
}

impl AppState {
    /// Wires the services around a single store.
    pub fn new(
        store: Arc<dyn LinkStore>,
        code_length: usize,
        settings: LinkSettings,
        service: ServiceInfo,
    ) -> Self {
        Self {
            allocator: Arc::new(LinkAllocator::new(store.clone(), code_length)),
            resolver: Arc::new(RedirectResolver::new(store.clone())),
            store,
            settings: Arc::new(settings),
            service: Arc::new(service),
        }
    }

    pub fn from_config(store: Arc<dyn LinkStore>, config: &Config) -> Self {
        Self::new(
            store,
            config.code_length,
            LinkSettings::from_config(config),
            ServiceInfo {
                service_name: config.service_name.clone(),
                instance_id: config.instance_id.clone(),
            },
        )
    }
}
