//! Multi-file input with a live "N files selected" listing.

#[cfg(test)]
#[path = "file_picker_test.rs"]
mod file_picker_test;

use leptos::prelude::*;

use crate::state::files::{ALLOWED_EXTENSIONS, FileListBlock, FileSelection};
use crate::util::format::format_file_size;

const UNSUPPORTED_WARNING: &str = "Some files have an unsupported type and will be skipped.";

fn accept_attr() -> String {
    ALLOWED_EXTENSIONS.iter().map(|ext| format!(".{ext}")).collect::<Vec<_>>().join(",")
}

fn row_class(allowed: bool) -> &'static str {
    if allowed { "file-list__row" } else { "file-list__row file-list__row--rejected" }
}

/// Total size line under the list; `None` for an empty selection.
fn total_line(selection: &FileSelection) -> Option<String> {
    if selection.files().is_empty() {
        return None;
    }
    Some(format!("Total: {}", format_file_size(selection.total_bytes())))
}

fn unsupported_warning(selection: &FileSelection) -> Option<&'static str> {
    selection.has_disallowed().then_some(UNSUPPORTED_WARNING)
}

fn render_block(block: FileListBlock) -> impl IntoView {
    view! {
        <div class="file-list">
            {block.heading.map(|heading| view! { <h4 class="file-list__heading">{heading}</h4> })}
            <ul class="file-list__rows">
                {block
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <li class=row_class(row.allowed)>
                                <span class="file-list__name">{row.name}</span>
                                <span class="file-list__size">{row.size_label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// File input named `name`; each change replaces the listed selection.
#[component]
pub fn FilePicker(#[prop(into)] name: String) -> impl IntoView {
    let selection = RwSignal::new(FileSelection::default());

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let files = selected_files(&ev);
            log::debug!("file selection changed: {} file(s)", files.len());
            selection.update(|s| s.replace(files));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="file-picker">
            <input type="file" multiple name=name accept=accept_attr() on:change=on_change/>
            {move || selection.get().block().cloned().map(render_block)}
            {move || total_line(&selection.get()).map(|line| view! { <p class="file-list__total">{line}</p> })}
            {move || {
                unsupported_warning(&selection.get())
                    .map(|warning| view! { <p class="file-list__warning">{warning}</p> })
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn selected_files(ev: &web_sys::Event) -> Vec<crate::state::files::SelectedFile> {
    use crate::state::files::SelectedFile;
    use wasm_bindgen::JsCast;

    let Some(list) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            SelectedFile::new(file.name(), size)
        })
        .collect()
}
