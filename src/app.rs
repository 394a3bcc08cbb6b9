use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::log::LogKind;
use crate::domain::entities::table::CellKey;
use crate::infra::import::csv::CsvFileIngestor;
use crate::platform::desktop::file_picker::{pick_upload, read_upload, upload_file_name};
use crate::ui::cell_style::{accent_color, cell_tone, container_class};
use crate::ui::console::{console_line, log_color, EMPTY_CONSOLE};
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::ingest::CsvIngestor;
use crate::usecase::services::import_service::UploadOutcome;
use crate::usecase::session::SessionPhase;

#[component]
fn Heading(busy: bool) -> Element {
    rsx! {
        div {
            style: "padding: 1rem 2rem; margin-bottom: 1.5rem; border-radius: 8px; text-align: center;",
            h2 {
                style: "margin: 0; font-weight: bold; font-size: 2rem; color: rgb(71, 52, 0);",
                "DATA BOARD"
            }
            if busy {
                p { style: "margin: 4px 0 0; color: #8b6500;", "Parsing CSV..." }
            }
        }
    }
}

#[component]
fn Navbar(
    phase: SessionPhase,
    on_upload: EventHandler<()>,
    on_toggle: EventHandler<()>,
    on_save: EventHandler<()>,
) -> Element {
    let editing = phase == SessionPhase::Editing;
    let accent = accent_color(phase);
    let bar_background = if editing { "#fcecc5cb" } else { "#e6f8fac2" };
    let knob_left = if editing { "26px" } else { "2px" };
    let mode_label = if editing { "Edit Mode" } else { "View Mode" };

    rsx! {
        nav {
            style: "background-color: {bar_background}; padding: 1rem; border-radius: 20px; margin-bottom: 1.5rem; display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; font-size: 1.2rem;",
            button {
                style: "background-color: {accent}; color: #000; padding: 10px 20px; border: none; border-radius: 30px; font-weight: bold; font-size: 1rem; cursor: pointer;",
                onclick: move |_| on_upload.call(()),
                "Upload Another File"
            }
            div {
                style: "display: flex; align-items: center; cursor: pointer;",
                onclick: move |_| on_toggle.call(()),
                span { style: "margin-right: 10px; font-weight: bold; color: #000;", "{mode_label}" }
                div {
                    style: "width: 50px; height: 26px; border-radius: 15px; background-color: {accent}; position: relative;",
                    div {
                        style: "height: 22px; width: 22px; border-radius: 50%; background-color: #fff; position: absolute; top: 2px; left: {knob_left}; box-shadow: 0 0 4px rgba(0,0,0,0.2);",
                    }
                }
            }
            button {
                style: "background-color: {accent}; color: #000; padding: 10px 20px; border: none; border-radius: 30px; cursor: pointer; font-weight: bold; font-size: 1rem;",
                onclick: move |_| on_save.call(()),
                "Save"
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let AppState {
        mut session,
        mut busy,
    } = AppState::new(config.rules);

    let mut start_upload = move || {
        let Some(path) = pick_upload() else {
            tracing::debug!("upload cancelled");
            return;
        };
        let file_name = upload_file_name(&path);
        let Some(ticket) = session.write().begin_upload(&file_name) else {
            return;
        };
        busy.set(true);

        spawn(async move {
            let result = read_upload(&path).and_then(|bytes| CsvFileIngestor.ingest(&bytes));
            let outcome = session.write().finish_upload(&ticket, result);
            if outcome != UploadOutcome::Stale {
                busy.set(false);
            }
        });
    };

    let current = session.read();
    let phase = current.phase();
    let editing = current.is_editing();

    if !current.is_started() {
        let last_error = current
            .logs()
            .entries()
            .iter()
            .rev()
            .find(|entry| entry.kind == LogKind::Error)
            .map(|entry| entry.message.clone())
            .unwrap_or_default();

        return rsx! {
            div {
                class: "container-start",
                style: "display: flex; flex-direction: column; align-items: center; padding-top: 20vh;",
                h1 { style: "font-size: 2rem; margin-bottom: 1.5rem; color: #5e4400;", "Let’s Start!" }
                button {
                    class: "upload-btn",
                    style: "background-color: #90e0ef; padding: 12px 24px; border: none; border-radius: 30px; font-weight: bold; cursor: pointer;",
                    onclick: move |_| start_upload(),
                    "📁 Upload CSV"
                }
                if !last_error.is_empty() {
                    p { style: "color: #b20000; margin-top: 1rem;", "{last_error}" }
                }
            }
        };
    }

    let headers = current.table().headers().to_vec();
    let row_count = current.table().row_count();
    let file_label = current.file_name().unwrap_or_default().to_string();

    rsx! {
        div {
            class: "{container_class(phase)}",
            Heading { busy: busy() }
            Navbar {
                phase: phase,
                on_upload: move |_| start_upload(),
                on_toggle: move |_| {
                    session.write().toggle_mode();
                },
                on_save: move |_| {
                    session.write().save();
                },
            }

            h3 { style: "text-align: center; font-weight: bold; font-size: 1.5rem; margin: 1rem 0;", "{file_label}" }

            div {
                class: "mode-transition",
                style: "display: flex; flex-direction: row; gap: 1rem; align-items: flex-start; margin-top: 20px;",
                div {
                    style: "flex: 1 1 80%; overflow-x: auto;",
                    table { style: "border-collapse: collapse; width: 100%; font-size: 1.1rem;",
                        thead {
                            tr {
                                for header in headers.iter() {
                                    th { "{header}" }
                                }
                            }
                        }
                        tbody {
                            {(0..row_count).map(|row_idx| {
                                rsx!(
                                    tr { key: "{row_idx}",
                                        {headers.iter().map(|header| {
                                            let column = header.clone();
                                            let value = current.table().get_cell(row_idx, header).to_string();
                                            let has_error = current
                                                .errors()
                                                .contains_key(&CellKey::new(row_idx, header.as_str()));
                                            let tone = cell_tone(has_error, value.is_empty(), editing);
                                            rsx!(
                                                td {
                                                    div { style: "position: relative;",
                                                        input {
                                                            r#type: "text",
                                                            disabled: !editing,
                                                            value: "{value}",
                                                            style: "{tone.style()}",
                                                            oninput: move |event| {
                                                                if let Err(err) = session.write().edit_cell(row_idx, &column, event.value()) {
                                                                    tracing::warn!(row = row_idx, column = column.as_str(), %err, "cell edit rejected");
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            )
                                        })}
                                    }
                                )
                            })}
                        }
                    }
                }

                if editing {
                    div {
                        style: "width: 20%; background-color: #fffaf0; border: 2px solid #d4a300; border-radius: 8px; padding: 1rem; font-size: 0.9rem; max-height: 80vh; overflow-y: auto;",
                        h4 { style: "margin-top: 0; color: #8b6500;", "Console" }
                        if current.logs().is_empty() {
                            p { style: "color: #666;", "{EMPTY_CONSOLE}" }
                        } else {
                            ul { style: "padding-left: 1rem; list-style-type: none; margin: 0;",
                                {current.logs().entries().iter().enumerate().map(|(idx, entry)| {
                                    let color = log_color(entry.kind);
                                    let line = console_line(entry);
                                    rsx!(
                                        li { key: "{idx}", style: "color: {color}; margin-bottom: 0.5rem;", "{line}" }
                                    )
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
