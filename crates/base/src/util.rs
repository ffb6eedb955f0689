// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ffi::OsStr;
use std::io;
use std::path::Path as StdPath;

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::unwrap_used)]
pub static NON_IDENT_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
#[allow(clippy::unwrap_used)]
pub static MULTI_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__+").unwrap());

/// Turns an arbitrary string into something usable
/// as (part of) a Rust identifier.
///
/// Every run of characters outside `[A-Za-z0-9_]` becomes a single `_`,
/// runs of underscores collapse to one,
/// and a leading digit gets an `_` put in front of it.
/// The empty string maps to `"_"`.
///
/// # Examples
///
/// ```
/// use rdfvocab_base::util::identifierify;
///
/// assert_eq!(identifierify("IN_XSD-DATE.TIME"), "IN_XSD_DATE_TIME");
/// assert_eq!(identifierify("3D_MODEL"), "_3D_MODEL");
/// ```
#[must_use]
pub fn identifierify(raw: &str) -> String {
    let cleaned = NON_IDENT_CHARS.replace_all(raw, "_");
    let collapsed = MULTI_UNDERSCORES.replace_all(&cleaned, "_");
    match collapsed.chars().next() {
        None => "_".to_owned(),
        Some(first) if first.is_ascii_digit() => format!("_{collapsed}"),
        Some(_) => collapsed.into_owned(),
    }
}

fn remap_create_dir_res(create_dir_res: io::Result<()>) -> io::Result<()> {
    create_dir_res.or_else(|err| {
        if err.kind() == io::ErrorKind::AlreadyExists {
            Ok(())
        } else {
            Err(err)
        }
    })
}

/// Create a directory if it does not yet exist.
/// There is no error if the directory already exists.
///
/// # Errors
///
/// If the directory cannot be created due to an IO- or permission-error.
pub fn create_dir_res<P: AsRef<StdPath>>(dir: P) -> io::Result<()> {
    remap_create_dir_res(std::fs::create_dir_all(dir))
}

fn report_err_if_not_a_file(file_path: &StdPath) -> io::Result<bool> {
    Err(io::Error::new(
        io::ErrorKind::Other,
        format!(
            "Should be a file, but is not: '{}' - possible solution: delete it",
            file_path.display()
        ),
    ))
}

/// Checks whether the given path exists and is a file.
///
/// # Errors
///
/// - If the path exists but is not a file.
/// - If there is a permission problem.
/// - If there is an IO error.
pub fn look_for_file(file_path: &StdPath) -> io::Result<bool> {
    let path_exists = StdPath::try_exists(file_path)?;
    if path_exists && !std::fs::metadata(file_path)?.is_file() {
        return report_err_if_not_a_file(file_path);
    }
    Ok(path_exists)
}

/// Ensures the provided dir exists.
/// Returns whether it was created.
///
/// # Errors
///
/// - if Checking if the directory exists fails.
/// - if the path exists but is not a directory.
/// - if Creating the directory fails.
pub fn ensure_dir_exists(dir_path: &StdPath) -> io::Result<bool> {
    let dir_path_exists = StdPath::try_exists(dir_path)?;
    if dir_path_exists {
        if !std::fs::metadata(dir_path)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "Should be an output directory, but is not a directory: '{}' - possible solution: delete it",
                    dir_path.display()
                ),
            ));
        }
    } else {
        create_dir_res(dir_path)?;
    }
    Ok(!dir_path_exists)
}

pub fn extract_file_ext(file: &StdPath) -> Option<&str> {
    file.extension().and_then(OsStr::to_str)
}

pub fn extract_file_stem(file: &StdPath) -> Option<&str> {
    file.file_stem().and_then(OsStr::to_str)
}
