use anyhow::Context;
use sortgraphql_core::SortError;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The encodings schema files can be read and written with.
const SUPPORTED_ENCODINGS: [&str; 2] = ["UTF-8", "UTF8"];

/// Fails with a configuration error unless schema files can be read and
/// written with `encoding`.
pub(crate) fn check_encoding(encoding: &str) -> Result<(), SortError> {
    let supported =
        SUPPORTED_ENCODINGS.iter()
            .any(|supported| supported.eq_ignore_ascii_case(encoding.trim()));
    if supported {
        Ok(())
    } else {
        Err(SortError::Configuration {
            reason: format!("Could not handle encoding: {encoding}"),
            setting: "encoding".to_string(),
        })
    }
}

/// Finds every file at or below `paths` whose extension is one of
/// `graphql_file_exts`, in the order encountered.
///
/// A single file argument is always used, whatever its extension.
pub(crate) fn find_schema_files(
    paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    // Normalize the set of file extensions to filter with
    let graphql_file_exts: HashSet<String> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!(
                "Could not search for schema files at {}",
                path.display(),
            ))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let has_graphql_ext =
                entry_path.extension()
                    .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
            if has_graphql_ext {
                log::trace!("Found schema file at {entry_path:#?}.");
                file_paths.push(canonicalize(entry_path)?);
            }
        }
    }

    if file_paths.is_empty() && paths.len() == 1 && paths[0].is_file() {
        let file_path = canonicalize(&paths[0])?;
        log::warn!(
            "Proceeding to sort {file_path:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(file_path);
    }

    let mut seen = HashSet::new();
    file_paths.retain(|path| seen.insert(path.to_owned()));
    log::debug!("Found {} schema files.", file_paths.len());
    Ok(file_paths)
}

pub(crate) fn read_schema(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!(
        "Could not read schema file: {}",
        path.display(),
    ))?;
    String::from_utf8(bytes).with_context(|| format!(
        "Schema file is not valid UTF-8: {}",
        path.display(),
    ))
}

pub(crate) fn check_backup_extension(extension: &str) -> Result<(), SortError> {
    if extension.trim().is_empty() {
        return Err(SortError::Configuration {
            reason: "Could not create backup file, extension name was empty".to_string(),
            setting: "backup-file-extension".to_string(),
        });
    }
    Ok(())
}

/// Copies `path` to `path` + `extension`, replacing an older backup.
pub(crate) fn backup_file(path: &Path, extension: &str) -> anyhow::Result<PathBuf> {
    check_backup_extension(extension)?;

    let mut backup_name = path.as_os_str().to_owned();
    backup_name.push(extension);
    let backup_path = PathBuf::from(backup_name);

    if backup_path.exists() {
        std::fs::remove_file(&backup_path).with_context(|| format!(
            "Could not remove old backup file, filename: {}",
            backup_path.display(),
        ))?;
    }
    std::fs::copy(path, &backup_path).with_context(|| format!(
        "Could not create backup file to filename: {}",
        backup_path.display(),
    ))?;
    Ok(backup_path)
}

pub(crate) fn save_schema(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!(
            "Could not create directory: {}",
            parent.display(),
        ))?;
    }
    std::fs::write(path, content).with_context(|| format!(
        "Could not save sorted schema file: {}",
        path.display(),
    ))
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path).with_context(|| format!(
        "Could not resolve path: {}",
        path.display(),
    ))
}
