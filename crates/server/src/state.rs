use m4a2mp3_core::Predictor;

/// Shared application state
pub struct AppState {
    predictor: Predictor,
}

impl AppState {
    pub fn new(predictor: Predictor) -> Self {
        Self { predictor }
    }

    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }
}
