//! Config command report data structures.

use std::path::PathBuf;

use stencilpack_driver::Flavor;

use super::output::{Output, Report};

/// Effective configuration of one flavor.
#[derive(Debug)]
pub struct FlavorConfig {
    pub flavor: Flavor,
    /// Config file the flavor reads.
    pub path: PathBuf,
    /// Whether that file exists.
    pub present: bool,
    /// Option names and rendered values, in schema order.
    pub values: Vec<(String, String)>,
    pub warnings: Vec<String>,
}

/// Report data for a unit's configuration.
#[derive(Debug)]
pub struct ConfigReport {
    pub unit: String,
    pub is_test: bool,
    pub flavors: Vec<FlavorConfig>,
}

impl Report for ConfigReport {
    fn render(&self, out: &mut dyn Output) {
        let kind = if self.is_test { "test" } else { "production" };
        out.key_value("unit", &format!("{} ({})", self.unit, kind));

        for config in &self.flavors {
            for warning in &config.warnings {
                out.warning(warning);
            }

            out.newline();
            out.section(config.flavor.display_name());
            let source = if config.present {
                config.path.display().to_string()
            } else {
                format!("{} (not present, defaults)", config.path.display())
            };
            out.key_value_indented("file", &source);
            for (name, value) in &config.values {
                out.key_value_indented(name, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::render;

    #[test]
    fn test_render_defaults() {
        let report = ConfigReport {
            unit: "Widgets".to_string(),
            is_test: false,
            flavors: vec![FlavorConfig {
                flavor: Flavor::Source,
                path: PathBuf::from("/p/.sourcepack.json"),
                present: false,
                values: vec![
                    ("debugOnly".to_string(), "false".to_string()),
                    ("imports".to_string(), "[]".to_string()),
                ],
                warnings: Vec::new(),
            }],
        };

        let (out, err) = render(&report);

        assert_eq!(
            out,
            "unit: Widgets (production)\n\nSourcePack:\n  file: /p/.sourcepack.json (not present, defaults)\n  debugOnly: false\n  imports: []\n"
        );
        assert!(err.is_empty());
    }
}
