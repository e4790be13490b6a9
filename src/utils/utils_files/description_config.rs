use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::utils::utils_errors::RobotDescriptionError;
use crate::utils::utils_files::{FileUtils, RobotDescriptionPaths};

/// Environment variable holding the root of the NAO description folder.
pub const MODEL_ROOT_ENV_VAR: &str = "NAO_DESCRIPTION_PATH";

/// Settings used to locate and parse the robot description.
///
/// Every field but `model_root` has a default, so a TOML file only needs to give the
/// model root:
/// ```
/// use nao_description::utils::utils_files::description_config::DescriptionConfig;
/// let config = DescriptionConfig::load_from_toml_string("model_root = \"/opt/nao_description\"").unwrap();
/// assert_eq!(config.robot_name, "nao");
/// assert_eq!(config.base_link, "base_link");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DescriptionConfig {
    pub model_root: PathBuf,
    #[serde(default = "default_robot_name")]
    pub robot_name: String,
    #[serde(default = "default_base_link")]
    pub base_link: String,
    #[serde(default)]
    pub fixed_base: bool,
    #[serde(default = "default_true")]
    pub transform_inertia: bool,
    #[serde(default = "default_true")]
    pub verbose: bool
}
impl DescriptionConfig {
    pub fn new(model_root: &Path) -> Self {
        Self {
            model_root: model_root.to_path_buf(),
            robot_name: default_robot_name(),
            base_link: default_base_link(),
            fixed_base: false,
            transform_inertia: true,
            verbose: true
        }
    }
    /// Uses `NAO_DESCRIPTION_PATH` when set, otherwise `<data dir>/nao_description`.
    pub fn load_default() -> Result<Self, RobotDescriptionError> {
        Self::resolve_default(env::var_os(MODEL_ROOT_ENV_VAR), dirs::data_dir())
    }
    fn resolve_default(env_value: Option<OsString>, data_dir: Option<PathBuf>) -> Result<Self, RobotDescriptionError> {
        if let Some(p) = env_value {
            if p.to_string_lossy().trim().is_empty() {
                return Err(RobotDescriptionError::new_config_error(&format!("{} is set but empty.", MODEL_ROOT_ENV_VAR), file!(), line!()));
            }
            return Ok(Self::new(&PathBuf::from(p)));
        }

        match data_dir {
            None => {
                Err(RobotDescriptionError::new_config_error(&format!("{} is not set and no data directory is available on this platform.", MODEL_ROOT_ENV_VAR), file!(), line!()))
            }
            Some(d) => { Ok(Self::new(&d.join("nao_description"))) }
        }
    }
    pub fn load_from_toml_string(toml_str: &str) -> Result<Self, RobotDescriptionError> {
        toml::from_str(toml_str).map_err(|e| RobotDescriptionError::new_config_error(&e.to_string(), file!(), line!()))
    }
    pub fn load_from_toml_file(p: &Path) -> Result<Self, RobotDescriptionError> {
        let s = FileUtils::read_file_contents_to_string(p)?;
        Self::load_from_toml_string(&s)
    }
    pub fn paths(&self) -> RobotDescriptionPaths {
        RobotDescriptionPaths::new(&self.model_root, &self.robot_name)
    }
}

fn default_robot_name() -> String { "nao".to_string() }
fn default_base_link() -> String { "base_link".to_string() }
fn default_true() -> bool { true }
