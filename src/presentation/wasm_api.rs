use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::application::RateBoardCoordinator;
use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::infrastructure::{EmbeddedRateRepository, StaticRateRepository};
use crate::log_info;

/// Rate board for plain-JS hosts that draw the page themselves.
/// `search` returns `{ cards, average, max, min, count }`.
#[wasm_bindgen]
pub struct RateBoardApi {
    coordinator: RateBoardCoordinator,
}

#[wasm_bindgen]
impl RateBoardApi {
    /// Board over the bundled dataset
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<RateBoardApi, JsValue> {
        let coordinator = RateBoardCoordinator::from_repository(&EmbeddedRateRepository)?;
        log_info!(
            LogComponent::Presentation("WASM_API"),
            "RateBoardApi created over {} records",
            coordinator.board().len()
        );
        Ok(Self { coordinator })
    }

    /// Board over a `rates_data.json` or `data.js` document
    #[wasm_bindgen(js_name = fromDocument)]
    pub fn from_document(document: &str) -> Result<RateBoardApi, JsValue> {
        let repository = StaticRateRepository::from_document(document).map_err(AppError::from)?;
        let coordinator = RateBoardCoordinator::from_repository(&repository)?;
        Ok(Self { coordinator })
    }

    pub fn search(&mut self, term: &str) -> Result<JsValue, JsValue> {
        let result = self.coordinator.handle_search_input(term);
        to_js(&result)
    }

    #[wasm_bindgen(js_name = recordCount)]
    pub fn record_count(&self) -> usize {
        self.coordinator.board().len()
    }

    #[wasm_bindgen(js_name = isFiltered)]
    pub fn is_filtered(&self) -> bool {
        self.coordinator.state().is_filtered()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}
