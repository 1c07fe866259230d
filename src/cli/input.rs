//! User input utilities for interactive CLI prompts
//!
//! This module provides functions for interactive user input, including the
//! input file selection menu and confirmation prompts.

use crate::{Error, Result};
use std::io::{self, Write};
use std::path::PathBuf;

/// Display an interactive file selection menu and get user choice
///
/// Returns the selected files or all files if "all" is chosen
pub fn prompt_file_selection(available_files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if available_files.is_empty() {
        return Err(Error::configuration(
            "No CSV files available for selection".to_string(),
        ));
    }

    // Display menu
    println!("\nAvailable CSV files:");
    for (i, file) in available_files.iter().enumerate() {
        println!("  {}. {}", i + 1, file.display());
    }
    println!("  {}. all (default)", available_files.len() + 1);
    println!();

    // Get user input
    print!("Select files to render [{}]: ", available_files.len() + 1);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    let input = input.trim();

    // Handle empty input (default to "all")
    if input.is_empty() {
        return Ok(available_files.to_vec());
    }

    // Parse input
    if input == "all" || input == (available_files.len() + 1).to_string() {
        return Ok(available_files.to_vec());
    }

    // Handle single selection
    if let Ok(choice) = input.parse::<usize>() {
        if choice >= 1 && choice <= available_files.len() {
            return Ok(vec![available_files[choice - 1].clone()]);
        }
    }

    // Handle comma-separated selections
    let mut selected = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if let Ok(choice) = part.parse::<usize>() {
            if choice >= 1 && choice <= available_files.len() {
                selected.push(available_files[choice - 1].clone());
            } else {
                return Err(Error::data_validation(format!(
                    "Invalid selection '{}'. Please choose 1-{} or 'all'",
                    choice,
                    available_files.len()
                )));
            }
        } else {
            return Err(Error::data_validation(format!(
                "Invalid input '{}'. Please enter numbers separated by commas, or 'all'",
                part
            )));
        }
    }

    if selected.is_empty() {
        return Err(Error::data_validation(
            "No valid files selected".to_string(),
        ));
    }

    Ok(selected)
}

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, default_text);

    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return Ok(default_yes);
    }

    match input.as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => {
            println!("Please enter 'y' for yes or 'n' for no.");
            prompt_confirmation(message, default_yes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test file selection validation handles edge cases
    #[test]
    fn test_file_selection_validation() {
        // Empty file list should return error
        let result = prompt_file_selection(&[]);
        assert!(result.is_err());
    }
}
