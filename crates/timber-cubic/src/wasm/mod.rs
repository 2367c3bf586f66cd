//! WASM front end
//!
//! Everything except [`BrowserTimber`] compiles natively and runs against
//! [`MockDom`], so the browser path is covered by ordinary tests.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;
mod timber;

#[cfg(feature = "wasm")]
pub use browser::BrowserTimber;
pub use dom::{field_element_id, DomElement, DomEvent, MockDom, ACTIVE_CLASS, RESULT_ID, ROOT_ID};
pub use driver::WasmDriver;
pub use keypad::{button_id, role_class, KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
pub use timber::{field_for_element, WasmTimber};
