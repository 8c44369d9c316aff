use crate::error::{QuickJumpError, Result};
use std::env;
use std::path::Path;
use std::process::Command;

pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(QuickJumpError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Open `file_path` in the user's editor and wait for it to exit.
///
/// `$EDITOR` may carry arguments (`code --wait`); they go before the file.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<()> {
    let editor = get_editor()?;
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| QuickJumpError::Api("Empty editor command".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(file_path.as_ref())
        .status()
        .map_err(|e| {
            QuickJumpError::Api(format!("Failed to launch editor '{}': {}", editor, e))
        })?;

    if !status.success() {
        return Err(QuickJumpError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(())
}
