use std::path::PathBuf;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    config_paths: Vec<PathBuf>,
    log_toml: String,
}

impl Resources {

    pub fn new(config_paths: Vec<PathBuf>) -> Self {
        Resources { config_paths, log_toml: env!("RESOURCE_LOG_FILE").to_string() }
    }

    /// `<exe_dir>/resources`, then the development tree's `resources/`.
    pub fn default_paths() -> Vec<PathBuf> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()));

        match exe_dir {
            Some(exe_dir) => vec![
                exe_dir.join("resources"),
                exe_dir.join("..").join("..").join("resources"),
            ],
            None => Vec::new(),
        }
    }

    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    pub fn file(&self, file_name: &str) -> Option<PathBuf> {
        for path in &self.config_paths {
            let file_path = path.join(file_name);
            if file_path.exists() {
                return Some(file_path);
            }
        }
        None
    }

    pub fn log_toml(&self) -> Option<PathBuf> {
        self.file(&self.log_toml)
    }
}

impl Default for Resources {
    fn default() -> Self {
        Resources::new(Resources::default_paths())
    }
}
