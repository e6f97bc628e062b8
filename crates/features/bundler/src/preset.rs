use crate::config::{
    BuildConfig, BuildOutput, BundlerConfig, DevServerConfig, ModuleFormat, OptimizeDeps, Plugin,
    ResolveConfig, RollupOptions, WatchConfig, WorkerConfig, WorkerOutput,
};
use std::collections::BTreeMap;
use suite_domain::constants::{R3F_DREI, R3F_FIBER, REACT, REACT_DOM, THREE, ZUSTAND};

/// Relative base, so the bundle works under any `/<repository>/<site>/` path.
pub const BASE_PATH: &str = "./";

const POLL_INTERVAL_MS: u32 = 300;

const PREBUNDLE: &[&str] = &[
    THREE,
    "three/examples/jsm/controls/OrbitControls",
    "three/examples/jsm/loaders/STLLoader",
    R3F_FIBER,
    R3F_DREI,
    ZUSTAND,
];

// Framework runtime is isolated: it changes least often.
const CHUNKS: &[(&str, &[&str])] = &[
    ("react-vendor", &[REACT, REACT_DOM]),
    ("state", &[ZUSTAND]),
    ("three", &[THREE]),
    ("r3f", &[R3F_FIBER, R3F_DREI]),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl BundlerConfig {
    /// The configuration the 3D front-end ships with.
    #[must_use]
    pub fn preset() -> Self {
        let manual_chunks =
            CHUNKS.iter().map(|(name, packages)| ((*name).to_owned(), owned(packages))).collect();

        let define = BTreeMap::from([
            ("process.env.NODE_ENV".to_owned(), "\"production\"".to_owned()),
            ("global".to_owned(), "globalThis".to_owned()),
        ]);

        let alias = BTreeMap::from([
            (THREE.to_owned(), THREE.to_owned()),
            (REACT.to_owned(), REACT.to_owned()),
        ]);

        Self {
            base: BASE_PATH.to_owned(),
            plugins: vec![
                Plugin::CommonJs { include: vec!["node_modules/**".to_owned()] },
                Plugin::React,
            ],
            worker: WorkerConfig {
                format: ModuleFormat::Es,
                plugins: vec![Plugin::React],
                rollup_options: RollupOptions {
                    output: WorkerOutput { inline_dynamic_imports: true },
                },
            },
            resolve: ResolveConfig { dedupe: owned(&[REACT, REACT_DOM, THREE]), alias },
            optimize_deps: OptimizeDeps { include: owned(PREBUNDLE) },
            build: BuildConfig {
                rollup_options: RollupOptions {
                    output: BuildOutput { format: ModuleFormat::Es, manual_chunks },
                },
            },
            define,
            server: DevServerConfig {
                watch: WatchConfig { use_polling: true, interval: POLL_INTERVAL_MS },
                force: true,
            },
        }
    }
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self::preset()
    }
}
