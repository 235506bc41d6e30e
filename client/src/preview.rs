use data::ImageFileInfo;
use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FileReader};

pub fn file_info(file: &File) -> ImageFileInfo {
    ImageFileInfo {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    }
}

/// Reads `file` as a `data:` URL and hands it to `on_loaded` once the browser is done.
pub fn read_data_url(file: &File, on_loaded: impl FnOnce(String) + 'static) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            error!("cannot create FileReader: {err:?}");
            return;
        }
    };
    let reader_clone = reader.clone();
    let onload = Closure::once(move |_: Event| match reader_clone.result() {
        Ok(result) => match result.as_string() {
            Some(url) => on_loaded(url),
            None => error!("FileReader produced a non-string result"),
        },
        Err(err) => error!("FileReader failed: {err:?}"),
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(err) = reader.read_as_data_url(file) {
        error!("cannot read image preview: {err:?}");
    }
}
