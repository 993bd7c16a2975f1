//! File-input glue for multipart uploads.
//!
//! Selected files are read back from the DOM at submit time instead of
//! being held in signals, so page state stays plain data on every target.

/// Display name of the file currently selected in the input element
/// `input_id`, if any.
pub fn selected_file_name(input_id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        selected_file(input_id).map(|file| file.name())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_id;
        None
    }
}

/// The file currently selected in the input element `input_id`.
#[cfg(feature = "csr")]
pub fn selected_file(input_id: &str) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

/// Clear the selection of the file input element `input_id`.
pub fn clear_file_input(input_id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(input_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            input.set_value("");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_id;
    }
}
