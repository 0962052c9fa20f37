//! Browser side of the export action: hand the artifact to the user.

use crate::core::errors::ApiError;
use crate::services::api::ExportArtifact;
use gloo::file::{Blob, ObjectUrl};
use gloo::utils::window;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Open the artifact in a new view, falling back to an anchor download.
///
/// The object URL is parked in `slot`; replacing it revokes the previous one.
pub(crate) fn open_artifact(
    artifact: &ExportArtifact,
    filename: &str,
    slot: &RefCell<Option<ObjectUrl>>,
) -> Result<(), ApiError> {
    let blob = Blob::new_with_options(artifact.bytes.as_slice(), Some(&artifact.content_type));
    let url = ObjectUrl::from(blob);
    let opened = window()
        .open_with_url_and_target(&url, "_blank")
        .ok()
        .flatten()
        .is_some();
    if !opened {
        download_via_anchor(&url, filename)?;
    }
    slot.replace(Some(url));
    Ok(())
}

fn download_via_anchor(url: &str, filename: &str) -> Result<(), ApiError> {
    let document = window().document().ok_or(ApiError::PopupBlocked)?;
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or(ApiError::PopupBlocked)?;
    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}
