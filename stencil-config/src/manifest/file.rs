use std::path::{Path, PathBuf};

use stencilpack_core::BuildUnit;

use super::Manifest;
use crate::{Error, Result};

/// A stencil.toml file together with the project root it describes.
#[derive(Debug)]
pub struct StencilToml {
    path: PathBuf,
    root: PathBuf,
    manifest: Manifest,
}

impl StencilToml {
    /// Open and parse a stencil.toml file.
    ///
    /// The project root is the absolute directory containing the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let io_error = |source| {
            Box::new(Error::Io {
                path: path.clone(),
                source,
            })
        };

        let content = std::fs::read_to_string(&path).map_err(io_error)?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        let absolute = std::path::absolute(&path).map_err(io_error)?;
        let root = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self::from_manifest(manifest, root).with_path(path))
    }

    /// Wrap an already parsed manifest rooted at `root`.
    pub fn from_manifest(manifest: Manifest, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            path: root.join("stencil.toml"),
            root,
            manifest,
        }
    }

    fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Generator program as configured: a name to look up, or a path
    /// resolved against the project root.
    pub fn generator(&self) -> String {
        let generator = &self.manifest.project.generator;
        if generator.contains(std::path::MAIN_SEPARATOR) || generator.contains('/') {
            self.root.join(generator).display().to_string()
        } else {
            generator.clone()
        }
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.project.templates_dir)
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.project.work_dir)
    }

    pub fn debug_only_default(&self) -> Option<bool> {
        self.manifest.project.debug_only_default
    }

    /// Unit names in declaration order.
    pub fn unit_names(&self) -> impl Iterator<Item = &str> {
        self.manifest.units.keys().map(String::as_str)
    }

    /// Build the unit called `name`.
    pub fn build_unit(&self, name: &str) -> Option<BuildUnit> {
        let config = self.manifest.units.get(name)?;

        let mut unit = BuildUnit::new(name, &self.root, self.root.join(&config.path));
        if let Some(is_test) = config.test {
            unit = unit.test(is_test);
        }
        if let Some(flavors) = &config.flavors {
            unit = unit.with_flavors(flavors.iter().copied());
        }
        for dependency in &config.dependencies {
            // Validation guarantees every dependency names a unit.
            if let Some(dep) = self.manifest.units.get(dependency) {
                unit = unit.dependency(dependency, self.root.join(&dep.path));
            }
        }
        Some(unit)
    }

    /// Build every unit in declaration order.
    pub fn build_units(&self) -> Vec<BuildUnit> {
        self.unit_names()
            .filter_map(|name| self.build_unit(name))
            .collect()
    }
}
