//! Image upload preview manager.
//!
//! Reacts to file-input changes by re-rendering a thumbnail per selected
//! image: each file is decoded to a data URL off the main flow, and each
//! cell carries a removal control tagged with the file's index in the input
//! at render time. Removal rebuilds the input's file list (ordered
//! exclusion) and explicitly re-renders - no synthetic change event, so the
//! control flow stays linear.
//!
//! Every render starts from a fresh snapshot of the input's file list and
//! drops the previous render's still-pending reads, so a removal landing
//! mid-read can never resurrect a stale cell.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use pagekit_core::{is_image_mime, remove_index};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, Document, Element, File, FileList, FileReader, HtmlInputElement};

/// Listener handles for reads and per-cell callbacks of the current render.
/// Cleared (dropping the listeners) whenever a new render supersedes it.
type Pending = Rc<RefCell<Vec<EventListener>>>;

/// Owns the change and removal-click listeners for one input/container pair.
pub struct PreviewManager {
    _change: EventListener,
    _removals: EventListener,
}

impl PreviewManager {
    /// Wire previews onto `#input_id` / `#container_id`.
    ///
    /// Returns `None` when either element is absent or the input is not an
    /// `<input>`: the upload feature simply isn't present on this page.
    pub fn wire(document: &Document, input_id: &str, container_id: &str) -> Option<Self> {
        let input: HtmlInputElement = document
            .get_element_by_id(input_id)?
            .dyn_into()
            .ok()?;
        let container = document.get_element_by_id(container_id)?;
        let pending: Pending = Rc::new(RefCell::new(Vec::new()));

        let change = {
            let document = document.clone();
            let input = input.clone();
            let container = container.clone();
            let pending = pending.clone();
            EventListener::new(&input.clone(), "change", move |_| {
                render(&document, &input, &container, &pending);
            })
        };

        // Removal clicks are delegated at the container, so cells built
        // later need no per-button wiring.
        let removals = {
            let document = document.clone();
            let input = input.clone();
            let container = container.clone();
            EventListener::new(&container.clone(), "click", move |event| {
                let Some(index) = removal_index(event) else {
                    return;
                };
                match rebuild_input_files(&input, index) {
                    // Explicit pull: re-render against the updated list.
                    Ok(()) => render(&document, &input, &container, &pending),
                    Err(e) => tracing::error!("error removing image {index}: {:?}", e),
                }
            })
        };

        Some(Self {
            _change: change,
            _removals: removals,
        })
    }
}

/// Index carried by the removal control the click landed on, if any.
fn removal_index(event: &web_sys::Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(".remove-image").ok().flatten()?;
    button.get_attribute("data-index")?.parse().ok()
}

/// Full re-render of the preview container from the input's current files.
fn render(document: &Document, input: &HtmlInputElement, container: &Element, pending: &Pending) {
    // Drop reads still in flight for the previous render; their completions
    // must not touch the new cells.
    pending.borrow_mut().clear();
    container.set_inner_html("");

    let Some(files) = input.files() else {
        return;
    };

    for index in 0..files.length() {
        let Some(file) = files.item(index) else {
            continue;
        };
        // Non-image files get no preview and no error; they stay attached
        // to the input.
        if !is_image_mime(&file.type_()) {
            continue;
        }
        if let Err(e) = spawn_read(document, container, &file, index as usize, pending) {
            tracing::error!("failed to start reading {:?}: {:?}", file.name(), e);
        }
    }
}

/// Start an async data-URL read for one file.
///
/// Reads are independent; completion order across files is not guaranteed
/// to match selection order, and a failed read only costs its own cell.
fn spawn_read(
    document: &Document,
    container: &Element,
    file: &File,
    index: usize,
    pending: &Pending,
) -> Result<(), JsValue> {
    let reader = FileReader::new()?;

    let load = {
        let document = document.clone();
        let container = container.clone();
        let rdr = reader.clone();
        let pending = pending.clone();
        let name = file.name();
        EventListener::once(&reader, "load", move |_| {
            let data_url = match rdr.result() {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    tracing::error!("no read result for {name:?}: {:?}", e);
                    return;
                }
            };
            match build_cell(&document, &data_url, index, &pending) {
                Ok(cell) => {
                    if let Err(e) = container.append_child(&cell) {
                        tracing::warn!("failed to attach preview cell: {:?}", e);
                    }
                }
                Err(e) => tracing::error!("failed to build preview cell: {:?}", e),
            }
        })
    };

    let error = {
        let name = file.name();
        EventListener::once(&reader, "error", move |_| {
            tracing::error!("failed to read file {name:?}");
        })
    };

    reader.read_as_data_url(file)?;
    pending.borrow_mut().extend([load, error]);
    Ok(())
}

/// Build one preview cell: the image plus its removal control.
fn build_cell(
    document: &Document,
    data_url: &str,
    index: usize,
    pending: &Pending,
) -> Result<Element, JsValue> {
    let cell = document.create_element("div")?;
    cell.set_class_name("preview-item");

    let img: web_sys::HtmlImageElement = document.create_element("img")?.unchecked_into();
    img.set_src(data_url);
    img.set_alt("Preview");

    // A decode failure removes only this cell; the rest of the batch stands.
    let decode_error = {
        let cell = cell.clone();
        EventListener::once(&img, "error", move |_| {
            tracing::error!("failed to load image preview");
            cell.remove();
        })
    };
    pending.borrow_mut().push(decode_error);

    let button = document.create_element("button")?;
    button.set_attribute("type", "button")?;
    button.set_class_name("remove-image");
    button.set_attribute("data-index", &index.to_string())?;
    let icon = document.create_element("i")?;
    icon.set_class_name("fas fa-times");
    button.append_child(&icon)?;

    cell.append_child(&img)?;
    cell.append_child(&button)?;
    Ok(cell)
}

/// Reassign the input's file list with `index` excluded, order preserved.
fn rebuild_input_files(input: &HtmlInputElement, index: usize) -> Result<(), JsValue> {
    let Some(files) = input.files() else {
        return Ok(());
    };

    let kept = remove_index(snapshot(&files), index);
    let transfer = DataTransfer::new()?;
    for file in &kept {
        transfer.items().add_with_file(file)?;
    }
    input.set_files(transfer.files().as_ref());
    Ok(())
}

/// Ordered snapshot of a live file list.
fn snapshot(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.item(i)).collect()
}
