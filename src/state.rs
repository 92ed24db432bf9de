use std::sync::Arc;

use crate::config::Config;
use crate::notion::{NotionClient, PropertyMap};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub notion: NotionClient,
    pub properties: PropertyMap,
}
