use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::{core::views::TopTable, dashboard::selection_meta};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn ExportPanel(table: TopTable) -> Element {
    let row_count = table.rows.len();
    let meta = selection_meta(&table.continent, table.year);

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("dashboard-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let download_handler = {
        let export_table = table.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing CSV"));
            let export_table = export_table.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let status_signal = status_signal;
                let busy_signal = busy_signal;
                platform::spawn_future(async move {
                    let outcome = perform_csv_download(export_table).await;
                    match outcome {
                        Ok(message) => status_signal.set(ExportStatus::Done(message)),
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(perform_csv_download(export_table));
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    let copy_handler = {
        let export_table = table.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Copying CSV"));
            let export_table = export_table.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let status_signal = status_signal;
                let busy_signal = busy_signal;
                platform::spawn_future(async move {
                    let outcome = perform_csv_copy(export_table).await;
                    match outcome {
                        Ok(message) => status_signal.set(ExportStatus::Done(message)),
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(perform_csv_copy(export_table));
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-card__header",
                h2 { "Export" }
                span { class: "dashboard-card__meta", "{meta}" }
            }

            if row_count == 0 {
                p { class: "dashboard-card__placeholder",
                    "The export unlocks once the table has rows."
                }
            } else {
                p { "Download the filtered top-{row_count} table as CSV, or copy it for a spreadsheet." }

                div { class: "dashboard-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: download_handler,
                        "Download CSV"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: copy_handler,
                        "Copy CSV"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

async fn perform_csv_download(table: TopTable) -> Result<String, String> {
    let csv = build_csv(&table)?;
    let filename = export_filename(&table);
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => format!("Download of {filename} started"),
    })
}

async fn perform_csv_copy(table: TopTable) -> Result<String, String> {
    let csv = build_csv(&table)?;
    copy_to_clipboard(csv).await?;
    Ok("CSV copied to clipboard".to_string())
}

/// Serializes the three projected columns, header row included.
fn build_csv(table: &TopTable) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Country/Region", table.year.label(), "2022 Population"])
        .map_err(|err| err.to_string())?;
    for row in &table.rows {
        writer
            .write_record([
                row.country_region.as_str(),
                &row.servings.to_string(),
                &row.population_2022.to_string(),
            ])
            .map_err(|err| err.to_string())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

fn export_filename(table: &TopTable) -> String {
    format!("filtered_noodles_data_{}.csv", table.continent)
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Noodleboard", "Noodleboard")
        .ok_or("Unable to determine export directory")?;
    let dir = dirs.data_dir().join("exports");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{dataset::Year, views::TopRow};

    fn sample_table() -> TopTable {
        TopTable {
            continent: "Asia".to_string(),
            year: Year::Y2022,
            rows: vec![
                TopRow {
                    country_region: "China".to_string(),
                    servings: 45070.0,
                    population_2022: 1_425_887_337,
                },
                TopRow {
                    country_region: "Korea, South".to_string(),
                    servings: 3950.0,
                    population_2022: 51_815_810,
                },
            ],
        }
    }

    #[test]
    fn filename_includes_the_continent() {
        assert_eq!(
            export_filename(&sample_table()),
            "filtered_noodles_data_Asia.csv"
        );
    }

    #[test]
    fn csv_round_trips_through_a_reader() {
        let csv_text = build_csv(&sample_table()).unwrap();
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 3);
        assert_eq!(&headers[0], "Country/Region");
        assert_eq!(&headers[1], "2022");
        assert_eq!(&headers[2], "2022 Population");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "China");
        assert_eq!(&rows[1][0], "Korea, South");
        assert_eq!(rows[1][1].parse::<f64>().unwrap(), 3950.0);
        assert_eq!(rows[0][2].parse::<u64>().unwrap(), 1_425_887_337);
    }

    #[test]
    fn commas_in_country_names_are_quoted() {
        let csv_text = build_csv(&sample_table()).unwrap();
        assert!(csv_text.contains("\"Korea, South\""));
    }
}
