use std::sync::Arc;

use scrapchef_core::application::ScrapchefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ScrapchefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ScrapchefService) -> Self {
        Self { args, service }
    }
}
