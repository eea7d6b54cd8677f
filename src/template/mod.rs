//! Template substitution
//!
//! Templates reference variables either delimited (`#PACKAGE#`) or bare
//! (`PACKAGE`). File contents are normally substituted delimited; template
//! file and directory names use bare mode so a `PACKAGEPATH` directory
//! expands into the package directory layout.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, UmcError, file_write_failed};
use crate::variables::ResolvedVariables;

/// Marker wrapped around variable names in delimited mode
pub const DELIMITER: char = '#';

/// Substitute every variable of `table` in `text`
///
/// Text is scanned once, left to right. At each position the longest matching
/// name wins, so `#ABC#` is never consumed by a shorter `AB`; names of equal
/// length keep table order. Replacement is literal and substituted values are
/// never scanned again, so a value containing a token stays as written. Text
/// without any matching token comes back unchanged.
pub fn substitute(text: &str, table: &ResolvedVariables, delimited: bool) -> String {
    let mut tokens: Vec<(String, &str)> = table
        .iter()
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| {
            let token = if delimited {
                format!("{DELIMITER}{name}{DELIMITER}")
            } else {
                name.to_string()
            };
            (token, value)
        })
        .collect();
    // sort_by_key is stable: equal lengths keep table order
    tokens.sort_by_key(|(token, _)| std::cmp::Reverse(token.len()));

    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        match tokens.iter().find(|(token, _)| rest.starts_with(token.as_str())) {
            Some((token, value)) => {
                output.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                output.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    output
}

/// Read UTF-8 text from `reader`, substitute, and return the encoded result
///
/// # Errors
///
/// `TemplateDecodeFailed` when the input is not valid UTF-8, `IoError` when
/// reading fails.
pub fn substitute_stream(
    mut reader: impl Read,
    table: &ResolvedVariables,
    delimited: bool,
    label: &str,
) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|e| UmcError::TemplateDecodeFailed {
        path: label.to_string(),
        reason: e.to_string(),
    })?;
    Ok(substitute(&text, table, delimited).into_bytes())
}

/// Render one template file into `output`, creating parent directories
pub fn render_file(
    template: &Path,
    output: &Path,
    table: &ResolvedVariables,
    delimited: bool,
) -> Result<()> {
    let file = std::fs::File::open(template).map_err(|e| UmcError::IoError {
        message: format!("failed to open template {}: {e}", template.display()),
    })?;
    let rendered = substitute_stream(file, table, delimited, &template.display().to_string())?;

    let write_failed = |e: std::io::Error| file_write_failed(output.display().to_string(), e.to_string());
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(output, rendered).map_err(write_failed)?;

    debug!(template = %template.display(), output = %output.display(), "rendered template");
    Ok(())
}

/// Render every file under `template_root` into `output_root`
///
/// Relative paths are substituted in bare mode component by component, file
/// contents with `delimited`. Returns the written files in walk order.
pub fn render_tree(
    template_root: &Path,
    output_root: &Path,
    table: &ResolvedVariables,
    delimited: bool,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for entry in WalkDir::new(template_root).sort_by_file_name() {
        let entry = entry.map_err(|e| UmcError::IoError {
            message: format!("failed to walk {}: {e}", template_root.display()),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| UmcError::IoError {
                message: e.to_string(),
            })?;
        let output = output_root.join(render_path(relative, table));

        render_file(entry.path(), &output, table, delimited)?;
        written.push(output);
    }

    Ok(written)
}

/// Substitute each component of a relative template path in bare mode
pub fn render_path(relative: &Path, table: &ResolvedVariables) -> PathBuf {
    relative
        .components()
        .map(|component| substitute(&component.as_os_str().to_string_lossy(), table, false))
        .collect()
}
