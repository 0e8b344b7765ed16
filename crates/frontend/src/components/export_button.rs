//! PDF and spreadsheet export buttons.
//!
//! Each click fetches the full filtered row set, renders it in memory and
//! hands the bytes to the browser as a download. If the fetch or the
//! rendering fails, no file is produced and the failure surfaces as a
//! notification.

use roster_core::export;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::auth::use_auth;
use crate::services::UserService;
use crate::utils::download_file;

const PDF_MIME: &str = "application/pdf";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Clone, Copy, PartialEq)]
enum ExportKind {
    Pdf,
    Xlsx,
}

#[derive(Properties, PartialEq)]
pub struct ExportButtonsProps {
    /// Current search filter; the export carries the same row set the
    /// operator is looking at, across all pages.
    pub search: String,
    pub on_error: Callback<String>,
}

#[function_component(ExportButtons)]
pub fn export_buttons(props: &ExportButtonsProps) -> Html {
    let auth = use_auth();
    let exporting = use_state(|| false);

    let run_export = {
        let auth = auth.clone();
        let exporting = exporting.clone();
        let search = props.search.clone();
        let on_error = props.on_error.clone();
        move |kind: ExportKind| {
            let Some(token) = auth.auth_state.as_ref().map(|s| s.token.clone()) else {
                return;
            };
            let exporting = exporting.clone();
            let search = search.clone();
            let on_error = on_error.clone();
            exporting.set(true);
            spawn_local(async move {
                let result = async {
                    let service = UserService::new(&token).map_err(|e| e.to_string())?;
                    let users = service.fetch_all(&search).await.map_err(|e| e.to_string())?;
                    let export_rows = export::rows(&users);
                    match kind {
                        ExportKind::Pdf => {
                            let bytes = export::to_pdf(&export_rows).map_err(|e| e.to_string())?;
                            download_file(&bytes, "UserList.pdf", PDF_MIME);
                        }
                        ExportKind::Xlsx => {
                            let bytes = export::to_xlsx(&export_rows).map_err(|e| e.to_string())?;
                            download_file(&bytes, "UserList.xlsx", XLSX_MIME);
                        }
                    }
                    Ok::<(), String>(())
                }
                .await;
                exporting.set(false);
                if let Err(message) = result {
                    web_sys::console::error_1(&format!("Export failed: {message}").into());
                    on_error.emit(message);
                }
            });
        }
    };

    let on_pdf = {
        let run_export = run_export.clone();
        Callback::from(move |_| run_export(ExportKind::Pdf))
    };
    let on_xlsx = Callback::from(move |_| run_export(ExportKind::Xlsx));

    html! {
        <div class="flex space-x-2">
            <button
                onclick={on_pdf}
                disabled={*exporting}
                class="px-3 py-2 text-sm border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50"
            >
                {"Export PDF"}
            </button>
            <button
                onclick={on_xlsx}
                disabled={*exporting}
                class="px-3 py-2 text-sm border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50"
            >
                {"Export Excel"}
            </button>
        </div>
    }
}
