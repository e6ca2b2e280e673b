use std::sync::Arc;

use glowguard_core::application::GlowGuardService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: GlowGuardService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: GlowGuardService) -> Self {
        Self { args, service }
    }
}
