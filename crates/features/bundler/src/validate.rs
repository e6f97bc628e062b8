use crate::config::{BundlerConfig, Plugin};
use crate::error::BundlerError;
use std::collections::HashMap;
use suite_domain::constants::{REACT, THREE};

/// Packages with internal global registries; two copies break them.
const MUST_DEDUPE: &[&str] = &[THREE, REACT];

impl BundlerConfig {
    /// Checks the invariants the external bundler relies on.
    ///
    /// # Errors
    /// Returns the first violation found, see [`BundlerConfig::violations`].
    pub fn validate(&self) -> Result<(), BundlerError> {
        self.violations().into_iter().next().map_or(Ok(()), Err)
    }

    /// Every invariant violation, in a stable order.
    #[must_use]
    pub fn violations(&self) -> Vec<BundlerError> {
        let mut errors = Vec::new();

        if !is_valid_base(&self.base) {
            errors.push(BundlerError::InvalidBasePath { base: self.base.clone() });
        }

        for package in MUST_DEDUPE {
            if !self.resolve.dedupe.iter().any(|p| p == package) {
                errors.push(BundlerError::MissingDedupe { package: (*package).to_owned() });
            }
        }

        self.check_chunks(&mut errors);
        self.check_plugins(&mut errors);
        self.check_worker(&mut errors);

        tracing::debug!(violations = errors.len(), "Bundler config validated");
        errors
    }

    fn check_chunks(&self, errors: &mut Vec<BundlerError>) {
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for (chunk, packages) in self.manual_chunks() {
            if packages.is_empty() {
                errors.push(BundlerError::EmptyChunk { chunk: chunk.clone() });
            }
            for package in packages {
                match owners.insert(package.as_str(), chunk.as_str()) {
                    Some(first) if first == chunk.as_str() => {
                        errors.push(BundlerError::RepeatedChunkMember {
                            package: package.clone(),
                            chunk: chunk.clone(),
                        });
                    },
                    Some(first) => errors.push(BundlerError::DuplicateChunkMember {
                        package: package.clone(),
                        first: first.to_owned(),
                        second: chunk.clone(),
                    }),
                    None => {},
                }
            }
        }
    }

    fn check_plugins(&self, errors: &mut Vec<BundlerError>) {
        let interop = self.plugins.iter().position(Plugin::is_interop);
        let framework = self.plugins.iter().position(Plugin::is_framework);

        let message = match (interop, framework) {
            (Some(i), Some(f)) if i < f => return,
            (Some(_), Some(_)) => "module-interop plugin must precede the UI-framework plugin",
            (None, _) => "module-interop plugin is missing",
            (_, None) => "UI-framework plugin is missing",
        };
        errors.push(BundlerError::PluginOrder { message: message.into() });
    }

    fn check_worker(&self, errors: &mut Vec<BundlerError>) {
        let worker = &self.worker;

        if worker.format != self.output_format() {
            errors.push(BundlerError::WorkerFormatMismatch {
                worker: worker.format,
                main: self.output_format(),
            });
        }

        if !worker.rollup_options.output.inline_dynamic_imports {
            errors.push(BundlerError::WorkerNotInlined);
        }

        let main_framework = self.plugins.iter().find(|p| p.is_framework());
        let worker_framework = worker.plugins.iter().find(|p| p.is_framework());
        if main_framework.is_none() || main_framework != worker_framework {
            errors.push(BundlerError::WorkerPluginMismatch);
        }
    }
}

fn is_valid_base(base: &str) -> bool {
    base == "./" || (base.starts_with('/') && base.ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModuleFormat;

    #[test]
    fn preset_is_valid() {
        let config = BundlerConfig::preset();
        assert!(config.violations().is_empty(), "{:?}", config.violations());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_path_forms() {
        assert!(is_valid_base("./"));
        assert!(is_valid_base("/"));
        assert!(is_valid_base("/3d-printer-suite/"));
        assert!(!is_valid_base("3d-printer-suite/"));
        assert!(!is_valid_base("/3d-printer-suite"));
        assert!(!is_valid_base(""));
    }

    #[test]
    fn missing_dedupe_is_reported_per_package() {
        let mut config = BundlerConfig::preset();
        config.resolve.dedupe.retain(|p| p != THREE && p != REACT);

        let missing: Vec<_> = config
            .violations()
            .into_iter()
            .filter_map(|e| match e {
                BundlerError::MissingDedupe { package } => Some(package),
                _ => None,
            })
            .collect();
        assert_eq!(missing, ["three", "react"]);
    }

    #[test]
    fn package_in_two_chunks_is_rejected() {
        let mut config = BundlerConfig::preset();
        config
            .build
            .rollup_options
            .output
            .manual_chunks
            .insert("engine".to_owned(), vec!["three".to_owned()]);

        let err = config.validate().unwrap_err();
        assert!(
            matches!(
                &err,
                BundlerError::DuplicateChunkMember { package, first, second }
                    if package == "three" && first == "engine" && second == "three"
            ),
            "got: {err}"
        );
    }

    #[test]
    fn package_repeated_within_one_chunk_names_that_chunk_once() {
        let mut config = BundlerConfig::preset();
        if let Some(three) = config.build.rollup_options.output.manual_chunks.get_mut("three") {
            three.push("three".to_owned());
        }

        let violations = config.violations();
        assert_eq!(violations.len(), 1, "{violations:?}");
        assert!(
            matches!(
                &violations[0],
                BundlerError::RepeatedChunkMember { package, chunk }
                    if package == "three" && chunk == "three"
            ),
            "got: {}",
            violations[0]
        );
        assert_eq!(
            violations[0].to_string(),
            "Package 'three' is listed more than once in chunk 'three'"
        );
    }

    #[test]
    fn empty_chunk_is_rejected() {
        let mut config = BundlerConfig::preset();
        config.build.rollup_options.output.manual_chunks.insert("misc".to_owned(), Vec::new());
        assert!(matches!(config.validate(), Err(BundlerError::EmptyChunk { chunk }) if chunk == "misc"));
    }

    #[test]
    fn worker_must_match_main_format_and_inline() {
        let mut config = BundlerConfig::preset();
        config.worker.format = ModuleFormat::Iife;
        config.worker.rollup_options.output.inline_dynamic_imports = false;

        let violations = config.violations();
        assert!(violations.iter().any(|e| matches!(
            e,
            BundlerError::WorkerFormatMismatch { worker: ModuleFormat::Iife, main: ModuleFormat::Es }
        )));
        assert!(violations.iter().any(|e| matches!(e, BundlerError::WorkerNotInlined)));
    }

    #[test]
    fn plugin_order_matters() {
        let mut config = BundlerConfig::preset();
        config.plugins.reverse();
        assert!(matches!(config.validate(), Err(BundlerError::PluginOrder { .. })));

        config.plugins.retain(Plugin::is_framework);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("module-interop plugin is missing"), "got: {err}");
    }

    #[test]
    fn worker_needs_the_framework_plugin() {
        let mut config = BundlerConfig::preset();
        config.worker.plugins.clear();
        assert!(matches!(config.validate(), Err(BundlerError::WorkerPluginMismatch)));
    }
}
