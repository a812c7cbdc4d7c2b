//! WASM API for the tracer.
//!
//! Provides JavaScript-callable interfaces for access classification, bank
//! enumeration and listing retrieval.

use crate::disassembler::formatter::{format_line, format_raw, format_row};
use crate::{BankId, TraceAccess, TraceOverride, Tracer, TracerError};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<TracerError> for JsError {
    fn from(error: TracerError) -> Self {
        JsError::new(&error.to_string())
    }
}

/// One entry of the page selector
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct PageInfo {
    id: String,
    name: String,
}

#[wasm_bindgen]
impl PageInfo {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }
}

/// One row of a bank listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ListingRow {
    address: u32,
    bytes: String,
    label: Option<String>,
    text: String,
}

#[wasm_bindgen]
impl ListingRow {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u32 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> String {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> Option<String> {
        self.label.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Tracer instance owned by the JavaScript side
#[wasm_bindgen]
pub struct TracerHandle {
    tracer: Tracer,
}

#[wasm_bindgen]
impl TracerHandle {
    /// Create a tracer with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        TracerHandle {
            tracer: Tracer::new(),
        }
    }

    /// Create a tracer from a JSON configuration
    pub fn with_config(json: &str) -> Result<TracerHandle, JsError> {
        let config = crate::TracerConfig::from_json(json)?;
        Ok(TracerHandle {
            tracer: Tracer::with_config(config)?,
        })
    }

    // Memory

    /// Insert a cartridge image and rebuild the banks
    pub fn load_cartridge(&mut self, bytes: &[u8]) -> Result<(), JsError> {
        Ok(self.tracer.load_cartridge(bytes)?)
    }

    /// Replace the BIOS image
    pub fn load_bios(&mut self, bytes: &[u8]) -> Result<(), JsError> {
        Ok(self.tracer.load_bios(bytes)?)
    }

    pub fn eject(&mut self) {
        self.tracer.eject();
    }

    // Classification

    /// Record one memory access; `kind` is the raw classification word
    pub fn classify(&mut self, address: u32, kind: u32, value: u8) {
        self.tracer.classify(address, TraceAccess::from_raw(kind), value);
    }

    /// Overwrite the classification of an address and notify at once
    pub fn force_trace(&mut self, address: u32, kind: u32) -> bool {
        self.tracer.force_trace(address, TraceAccess::from_raw(kind))
    }

    /// Debugger hot keys: `u` unknown, `c` code, `d` data, `w` word
    pub fn override_trace(&mut self, address: u32, key: &str) -> Result<bool, JsError> {
        let kind = match key {
            "u" => TraceOverride::Unknown,
            "c" => TraceOverride::Code,
            "d" => TraceOverride::Data,
            "w" => TraceOverride::Word,
            _ => return Err(JsError::new(&format!("unknown override key: {}", key))),
        };

        Ok(self.tracer.override_trace(address, kind))
    }

    /// Stored classification word of an address
    pub fn trace_at(&self, address: u32) -> u32 {
        self.tracer.trace_at(address).bits()
    }

    /// Call `on_change` with the id of every bank that changed since the
    /// last update. Returns the number of changed banks.
    pub fn update(&mut self, on_change: &js_sys::Function) -> usize {
        let mut changed = 0;

        self.tracer.update_with(|summary| {
            changed += 1;
            let _ = on_change.call1(&JsValue::NULL, &JsValue::from_str(&summary.id.to_string()));
        });

        changed
    }

    // Listings

    /// Banks in display order, as `PageInfo` objects
    pub fn pages(&self) -> Vec<JsValue> {
        self.tracer
            .pages()
            .into_iter()
            .map(|(id, name)| {
                JsValue::from(PageInfo {
                    id: id.to_string(),
                    name,
                })
            })
            .collect()
    }

    /// Rows of a bank as `ListingRow` objects
    pub fn rows(&mut self, bank: &str) -> Result<Vec<JsValue>, JsError> {
        let rows = self.tracer.render_named(bank)?;

        Ok(rows
            .iter()
            .map(|row| {
                JsValue::from(ListingRow {
                    address: row.address,
                    bytes: format_raw(row),
                    label: row.label.clone(),
                    text: format_row(row),
                })
            })
            .collect())
    }

    /// Rows of a bank as preformatted listing lines
    pub fn render_text(&mut self, bank: &str) -> Result<Vec<JsValue>, JsError> {
        let rows = self.tracer.render_named(bank)?;

        Ok(rows
            .iter()
            .map(|row| JsValue::from_str(&format_line(row)))
            .collect())
    }

    /// Id of the bank containing an address
    pub fn bank_for(&self, address: u32) -> Option<String> {
        self.tracer.bank_for(address).map(|id| id.to_string())
    }

    /// Row index of the row covering an address, for scrolling to the PC
    pub fn row_index_for(&mut self, bank: &str, address: u32) -> Result<Option<usize>, JsError> {
        let id = bank.parse::<BankId>()?;
        Ok(self.tracer.row_index_for(id, address)?)
    }

    pub fn label_for(&self, address: u32) -> Option<String> {
        self.tracer.label_for(address).map(str::to_string)
    }
}

impl Default for TracerHandle {
    fn default() -> Self {
        Self::new()
    }
}
