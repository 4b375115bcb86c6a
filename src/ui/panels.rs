use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::outcome_color;
use crate::data::format::format_number;
use crate::data::loader::ACCEPTED_EXTENSIONS;
use crate::data::model::Delimiter;
use crate::service::download::{export_items, save_payload, DEFAULT_DOWNLOAD_NAME};
use crate::service::model::{Descriptor, Ro5Item};
use crate::state::AppState;

const RESULT_COLUMNS: [&str; 13] = [
    "SMILES",
    "Name",
    "MWT",
    "LogP",
    "HBD",
    "HBA",
    "Violations",
    "Passes",
    "VMAX",
    "MWT_violation",
    "HBD_violation",
    "HBA_violation",
    "LOGP_violation",
];

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Clear input").clicked() {
                state.clear_input();
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.parsed.is_empty() {
            ui.label(format!(
                "{} molecules ready ({} parsed)",
                state.parsed.len(),
                state.total_rows
            ));
        }

        if state.loading {
            ui.separator();
            ui.spinner();
            ui.label("Computing…");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – input, parse options, review
// ---------------------------------------------------------------------------

/// Render the input panel: raw text, parse options, review box and submit.
pub fn input_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Input");
            if let Some(name) = &state.filename {
                ui.label(RichText::new(format!("File: {name}")).italics());
            }
            let pasted = ui.add(
                egui::TextEdit::multiline(&mut state.raw_text)
                    .hint_text("Paste SMILES, one per line (optionally followed by a name)")
                    .code_editor()
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
            if pasted.changed() {
                state.raw_text_edited();
            }

            egui::CollapsingHeader::new(RichText::new("Parse options").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| parse_options(ui, state));

            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Re-parse").clicked() {
                    state.reparse();
                }
                if ui.button("Open file…").clicked() {
                    open_file_dialog(state);
                }
            });

            if let Some(header) = &state.parsed.header {
                ui.label(format!("Header: {}", header.join(" | ")));
            }

            ui.separator();
            ui.heading("Review");
            ui.label(format!("{} molecules", state.parsed.len()));
            ui.add(
                egui::TextEdit::multiline(&mut state.review_text)
                    .code_editor()
                    .desired_rows(10)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("Apply edits").clicked() {
                state.apply_review_text();
            }

            ui.separator();
            let can_submit = !state.parsed.is_empty() && !state.loading;
            let label = if state.loading { "Computing…" } else { "Compute" };
            if ui.add_enabled(can_submit, egui::Button::new(label)).clicked() {
                state.submit();
            }
        });
}

fn parse_options(ui: &mut Ui, state: &mut AppState) {
    let options = &mut state.options;

    egui::Grid::new("parse_options")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Delimiter");
            egui::ComboBox::from_id_salt("delimiter")
                .selected_text(options.delimiter.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for d in Delimiter::ALL {
                        ui.selectable_value(&mut options.delimiter, d, d.label());
                    }
                });
            ui.end_row();

            ui.label("Header row");
            ui.checkbox(&mut options.has_header, "first line is a header");
            ui.end_row();

            ui.label("SMILES column");
            optional_index(ui, &mut options.smiles_col, 0);
            ui.end_row();

            ui.label("Name column");
            optional_index(ui, &mut options.name_col, 1);
            ui.end_row();

            ui.label("Start row");
            ui.add(egui::DragValue::new(&mut options.start_index).range(0..=usize::MAX));
            ui.end_row();

            ui.label("Molecules");
            optional_index(ui, &mut options.n_molecules, 100);
            ui.end_row();
        });
    ui.label(
        RichText::new("Start row and count apply to the next re-parse only.")
            .small()
            .weak(),
    );
}

/// Checkbox + drag value for an optional index; unchecked means "auto".
fn optional_index(ui: &mut Ui, value: &mut Option<usize>, initial: usize) {
    ui.horizontal(|ui: &mut Ui| {
        let mut set = value.is_some();
        if ui.checkbox(&mut set, "").changed() {
            *value = set.then_some(value.unwrap_or(initial));
        }
        match value {
            Some(v) => {
                ui.add(egui::DragValue::new(v).range(0..=usize::MAX));
            }
            None => {
                ui.label(RichText::new("auto").weak());
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – results table, summary, downloads
// ---------------------------------------------------------------------------

/// Render per-molecule results, the summary block and download actions.
pub fn results_panel(ui: &mut Ui, state: &mut AppState) {
    if state.items.is_empty() && state.summary.is_none() && state.note.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Paste SMILES or open a file, then press Compute");
        });
        return;
    }

    if !state.items.is_empty() {
        ui.heading("Results");
        let visible: Vec<Ro5Item> = state.visible_items().to_vec();
        results_table(ui, &visible);
        pagination(ui, state);
    }

    if let Some(summary) = &state.summary {
        ui.add_space(12.0);
        ui.heading(format!("Summary (n={})", summary.mwt.n));
        for d in Descriptor::ALL {
            let stat = summary.stat(d);
            ui.label(format!(
                "{}: mean {}, stdev {}",
                d.label(),
                format_number(stat.mean, 3),
                format_number(stat.stdev, 3)
            ));
        }

        ui.add_space(6.0);
        ui.strong("Pass / Fail");
        let pf = &summary.pass_fail;
        ui.label(format!("Pass: {} ({}%)", pf.pass.count, format_number(pf.pass.pct, 1)));
        ui.label(format!("Fail: {} ({}%)", pf.fail.count, format_number(pf.fail.pct, 1)));
    }

    if let Some(note) = &state.note {
        ui.add_space(8.0);
        ui.label(RichText::new(note).color(Color32::GRAY));
    }

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        if let Some(payload) = &state.download {
            if ui.button("Download results (.csv)").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(payload.suggested_filename())
                    .save_file()
                {
                    if let Err(e) = save_payload(payload, &path) {
                        log::error!("Failed to save download: {e:#}");
                        state.status_message = Some(format!("Error: {e:#}"));
                    }
                }
            }
        } else if !state.items.is_empty() && ui.button("Export table (.csv)").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(DEFAULT_DOWNLOAD_NAME)
                .add_filter("CSV", &["csv"])
                .save_file()
            {
                if let Err(e) = export_items(&state.items, &path) {
                    log::error!("Failed to export results: {e:#}");
                    state.status_message = Some(format!("Error: {e:#}"));
                }
            }
        }
    });
}

fn results_table(ui: &mut Ui, items: &[Ro5Item]) {
    let yes_no = |ui: &mut Ui, flag: bool, good_when: bool| {
        let text = if flag { "Yes" } else { "No" };
        ui.label(RichText::new(text).color(outcome_color(flag == good_when)));
    };

    ui.push_id("results_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .columns(Column::auto().at_least(40.0), RESULT_COLUMNS.len())
            .header(20.0, |mut header| {
                for title in RESULT_COLUMNS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for item in items {
                    body.row(18.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.monospace(&item.smiles);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(item.name.as_deref().unwrap_or(""));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format_number(Some(item.mwt), 3));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format_number(Some(item.logp), 3));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(item.hbd.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(item.hba.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(item.violations.to_string());
                        });
                        row.col(|ui: &mut Ui| yes_no(ui, item.passes_ro5, true));
                        row.col(|ui: &mut Ui| {
                            ui.label(item.vmax.to_string());
                        });
                        row.col(|ui: &mut Ui| yes_no(ui, item.mwt_violation, false));
                        row.col(|ui: &mut Ui| yes_no(ui, item.hbd_violation, false));
                        row.col(|ui: &mut Ui| yes_no(ui, item.hba_violation, false));
                        row.col(|ui: &mut Ui| yes_no(ui, item.logp_violation, false));
                    });
                }
            });
    });
}

fn pagination(ui: &mut Ui, state: &mut AppState) {
    let total_pages = state.total_pages();
    if state.show_all {
        if ui.button("Show less").clicked() {
            state.set_show_all(false);
        }
        return;
    }
    if total_pages <= 1 {
        return;
    }
    ui.horizontal(|ui: &mut Ui| {
        if ui.add_enabled(state.page > 1, egui::Button::new("Prev")).clicked() {
            state.prev_page();
        }
        ui.label(format!("Page {} / {total_pages}", state.page));
        if ui
            .add_enabled(state.page < total_pages, egui::Button::new("Next"))
            .clicked()
        {
            state.next_page();
        }
        if ui.button("Show all").clicked() {
            state.set_show_all(true);
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open SMILES list")
        .add_filter("Supported files", ACCEPTED_EXTENSIONS)
        .add_filter("CSV / TSV", &["csv", "tsv"])
        .add_filter("SMILES", &["smi", "smiles"])
        .add_filter("Text", &["txt"])
        .pick_file();

    if let Some(path) = file {
        state.load_file(&path);
    }
}
