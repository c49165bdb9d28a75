use std::path::PathBuf;
use std::time::Duration;

use crate::common::GeneratorConfig;
use crate::excel::BcPackageGenerator;

#[derive(Clone)]
pub struct ApiState {
    pub generator: BcPackageGenerator,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub template_url: Option<String>,
    pub scratch_dir: PathBuf,
    pub max_payload_bytes: usize,
    pub template_fetch_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            template_url: None,
            scratch_dir: std::env::temp_dir().join("bc_package_work"),
            max_payload_bytes: 20_971_520, // 20MB
            template_fetch_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::builder()
            .scratch_root(self.scratch_dir.clone())
            .template_location(self.template_url.clone())
            .fetch_timeout(Duration::from_secs(self.template_fetch_timeout_secs))
            .build()
    }
}

impl ApiState {
    pub fn new(config: AppConfig) -> Self {
        let generator = BcPackageGenerator::new(config.generator_config());

        ApiState { generator }
    }
}
