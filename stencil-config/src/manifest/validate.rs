//! Cross-unit validation of a parsed manifest.

use std::{
    collections::HashSet,
    path::{Component, Path},
};

use miette::{NamedSource, SourceSpan};

use super::Manifest;
use crate::{Error, Result};

/// Check every unit's name, path and dependency list.
pub(super) fn validate(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let named = || NamedSource::new(filename, src.to_string());

    for (name, unit) in &manifest.units {
        if !is_plain_name(name) {
            return Err(Box::new(Error::InvalidUnitName {
                src: named(),
                span: find_unit_span(src, name),
                unit: name.clone(),
            }));
        }
        if unit.path.as_os_str().is_empty() {
            return Err(Box::new(Error::EmptyPath {
                src: named(),
                span: find_unit_span(src, name),
                unit: name.clone(),
            }));
        }

        let mut seen = HashSet::new();
        for dependency in &unit.dependencies {
            let span = find_dependency_span(src, name, dependency, seen.contains(dependency));

            if dependency == name {
                return Err(Box::new(Error::SelfDependency {
                    src: named(),
                    span,
                    unit: name.clone(),
                }));
            }
            if !manifest.has_unit(dependency) {
                return Err(Box::new(Error::UnknownDependency {
                    src: named(),
                    span,
                    unit: name.clone(),
                    dependency: dependency.clone(),
                }));
            }
            if !seen.insert(dependency) {
                return Err(Box::new(Error::DuplicateDependency {
                    src: named(),
                    span,
                    unit: name.clone(),
                    dependency: dependency.clone(),
                }));
            }
        }
    }
    Ok(())
}

/// Whether `name` is exactly one normal path component.
fn is_plain_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Find the `[units.<name>]` header of a unit, bare or quoted.
fn find_unit_span(src: &str, unit: &str) -> Option<SourceSpan> {
    [format!("[units.{}]", unit), format!("[units.\"{}\"]", unit)]
        .into_iter()
        .find_map(|header| {
            src.find(&header)
                .map(|pos| SourceSpan::from((pos, header.len())))
        })
}

/// Find a quoted dependency name inside a unit's table.
///
/// With `repeated`, the second occurrence is returned so duplicate errors
/// point at the entry that repeats.
fn find_dependency_span(
    src: &str,
    unit: &str,
    dependency: &str,
    repeated: bool,
) -> Option<SourceSpan> {
    let start = find_unit_span(src, unit).map_or(0, |span| span.offset());
    let quoted = format!("\"{}\"", dependency);

    let first = src[start..].find(&quoted)? + start;
    let pos = if repeated {
        let after = first + quoted.len();
        src[after..].find(&quoted)? + after
    } else {
        first
    };
    Some(SourceSpan::from((pos, quoted.len())))
}
