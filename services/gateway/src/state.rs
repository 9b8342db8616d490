use crate::worker::EngineHandle;

#[derive(Clone)]
pub struct AppState {
    pub engine: EngineHandle,
}

impl AppState {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }
}
