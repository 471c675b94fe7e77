// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Honour the first `X-Forwarded-For` entry when resolving client
    /// addresses. Only safe behind a proxy that overwrites the header.
    pub trust_forwarded_for: bool,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self {
            services,
            trust_forwarded_for: false,
        }
    }

    pub fn with_trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }
}
