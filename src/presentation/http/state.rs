// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::session::SessionSettings;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub sessions: SessionSettings,
    /// Root of the `/js` and `/css` asset directories.
    pub public_dir: PathBuf,
}
