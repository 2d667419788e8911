use std::path::{Path, PathBuf};

use agenda_core::model::BookedAppointment;
use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Load booked appointments from a JSON/YAML file, or merge every supported
/// file under a directory (swept recursively, in path order).
pub fn load_appointments(path: &Path) -> Result<Vec<BookedAppointment>> {
    if !path.exists() {
        anyhow::bail!(
            "Appointments path not found: {}\nPlease check the path and try again.",
            path.display()
        );
    }

    if path.is_dir() {
        load_directory(path)
    } else {
        load_file(path)
    }
}

fn load_directory(dir: &Path) -> Result<Vec<BookedAppointment>> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| supported_extension(path).is_some())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!(
            "No appointment files (*.json, *.yaml, *.yml) found under: {}",
            dir.display()
        );
    }

    let mut appointments = Vec::new();
    for file in files {
        appointments.extend(load_file(&file)?);
    }
    Ok(appointments)
}

fn load_file(path: &Path) -> Result<Vec<BookedAppointment>> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read appointments file: {}\nPlease check file permissions.",
            path.display()
        )
    })?;

    // serde_path_to_error reports the exact field path on a mismatch, which
    // matters for hand-edited fixture files.
    match supported_extension(path) {
        Some(Format::Json) => {
            let mut deserializer = serde_json::Deserializer::from_str(&content);
            serde_path_to_error::deserialize(&mut deserializer).with_context(|| {
                format!(
                    "Failed to parse JSON appointments from: {}\n\
                     Expected an array of records with 'date' (YYYY-MM-DD) and 'time' (HH:MM).",
                    path.display()
                )
            })
        }
        Some(Format::Yaml) => {
            let deserializer = serde_yaml::Deserializer::from_str(&content);
            serde_path_to_error::deserialize(deserializer).with_context(|| {
                format!(
                    "Failed to parse YAML appointments from: {}\n\
                     Expected an array of records with 'date' (YYYY-MM-DD) and 'time' (HH:MM).",
                    path.display()
                )
            })
        }
        None => anyhow::bail!(
            "Unsupported appointments file extension: {}\nSupported: .json, .yaml, .yml",
            path.display()
        ),
    }
}

enum Format {
    Json,
    Yaml,
}

fn supported_extension(path: &Path) -> Option<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Some(Format::Json),
        Some("yaml") | Some("yml") => Some(Format::Yaml),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::load_appointments;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_a_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("booked.json");
        fs::write(&path, r#"[{"date": "2024-06-11", "time": "09:00"}]"#).unwrap();

        let appointments = load_appointments(&path).unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].date, "2024-06-11");
    }

    #[test]
    fn loads_a_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("booked.yaml");
        fs::write(&path, "- date: \"2024-06-11\"\n  time: \"10:30\"\n").unwrap();

        let appointments = load_appointments(&path).unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].time.to_string(), "10:30");
    }

    #[test]
    fn merges_a_directory_in_path_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("a.json"),
            r#"[{"date": "2024-06-11", "time": "09:00"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("b.yaml"),
            "- date: \"2024-06-12\"\n  time: \"08:00\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let appointments = load_appointments(dir.path()).unwrap();
        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].date, "2024-06-11");
        assert_eq!(appointments[1].date, "2024-06-12");
    }

    #[test]
    fn missing_path_reports_with_context() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");

        let error = load_appointments(&missing).unwrap_err().to_string();
        assert!(error.contains("Appointments path not found"));
        assert!(error.contains(&missing.display().to_string()));
    }

    #[test]
    fn field_mismatch_reports_the_failing_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"date": "2024-06-11", "time": 930}]"#).unwrap();

        let error = format!("{:#}", load_appointments(&path).unwrap_err());
        assert!(error.contains("Failed to parse JSON"));
    }
}
