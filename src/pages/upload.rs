//! Media upload page.

use leptos::prelude::*;

use crate::components::ajax_form::AjaxForm;
use crate::components::file_picker::FilePicker;

/// Upload form: files plus an optional caption, posted to `/upload`.
#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <div class="upload-page">
            <h1>"Upload Media"</h1>
            <AjaxForm action="/upload">
                <label class="form-label" for="caption">
                    "Caption"
                </label>
                <input class="form-control" type="text" id="caption" name="caption"/>
                <FilePicker name="files"/>
                <button class="btn btn--primary" type="submit">
                    "Upload"
                </button>
            </AjaxForm>
        </div>
    }
}
