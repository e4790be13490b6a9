pub mod description_config;

use std::fs;
use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;
use crate::utils::utils_errors::RobotDescriptionError;

/// Convenience struct that holds many class functions related to file utils.
pub struct FileUtils;
impl FileUtils {
    /// Reads contents of file and outputs it to a string.
    pub fn read_file_contents_to_string(p: &Path) -> Result<String, RobotDescriptionError> {
        let mut file = File::open(p).map_err(|e| {
            RobotDescriptionError::new_missing_resource_error(&format!("Could not open file ({})", e), &p.display().to_string(), file!(), line!())
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            RobotDescriptionError::new_generic_error_str(&format!("Could not read {:?}: {}", p, e), file!(), line!())
        })?;
        Ok(contents)
    }
    /// Saves given object to a file as a JSON string.  The object must be serializable using serde json.
    pub fn save_object_to_file_as_json<T: Serialize>(object: &T, p: &Path) -> Result<(), RobotDescriptionError> {
        match p.parent() {
            None => { return Err(RobotDescriptionError::new_generic_error_str("Could not get parent of path in save_object_to_file_as_json.", file!(), line!())) }
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| RobotDescriptionError::new_generic_error_str(&e.to_string(), file!(), line!()))?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(p)
            .map_err(|e| RobotDescriptionError::new_generic_error_str(&e.to_string(), file!(), line!()))?;
        serde_json::to_writer(file, object).map_err(|e| RobotDescriptionError::new_generic_error_str(&e.to_string(), file!(), line!()))
    }
    /// Reads object that was serialized by serde JSON from a file.
    pub fn load_object_from_json_file<T: DeserializeOwned>(p: &Path) -> Result<T, RobotDescriptionError> {
        let contents = Self::read_file_contents_to_string(p)?;
        Self::load_object_from_json_string(&contents)
    }
    pub fn load_object_from_json_string<T: DeserializeOwned>(json_str: &str) -> Result<T, RobotDescriptionError> {
        serde_json::from_str(json_str).map_err(|_| {
            RobotDescriptionError::new_generic_error_str("load_object_from_json_string() failed.  The given json_string is incompatible with the requested type.", file!(), line!())
        })
    }
}

/// Locations inside a robot description folder.
#[derive(Clone, Debug)]
pub enum RobotDescriptionLocation {
    Urdf { robot_name: String },
    ConvexDir,
    RsdfDir,
    CalibDir
}
impl RobotDescriptionLocation {
    pub fn get_path_wrt_model_root(&self) -> PathBuf {
        return match self {
            RobotDescriptionLocation::Urdf { robot_name } => {
                Path::new("urdf").join(format!("{}.urdf", robot_name))
            }
            RobotDescriptionLocation::ConvexDir => { Path::new("convex").to_path_buf() }
            RobotDescriptionLocation::RsdfDir => { Path::new("rsdf").to_path_buf() }
            RobotDescriptionLocation::CalibDir => { Path::new("calib").to_path_buf() }
        }
    }
}

/// Resolved filesystem layout of a robot description:
/// `<model-root>/urdf/<robot-name>.urdf`, `<model-root>/convex/`, `<model-root>/rsdf/`
/// and `<model-root>/calib/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotDescriptionPaths {
    model_root: PathBuf,
    urdf_path: PathBuf,
    convex_dir: PathBuf,
    rsdf_dir: PathBuf,
    calib_dir: PathBuf
}
impl RobotDescriptionPaths {
    pub fn new(model_root: &Path, robot_name: &str) -> Self {
        let get = |l: RobotDescriptionLocation| model_root.join(l.get_path_wrt_model_root());
        Self {
            model_root: model_root.to_path_buf(),
            urdf_path: get(RobotDescriptionLocation::Urdf { robot_name: robot_name.to_string() }),
            convex_dir: get(RobotDescriptionLocation::ConvexDir),
            rsdf_dir: get(RobotDescriptionLocation::RsdfDir),
            calib_dir: get(RobotDescriptionLocation::CalibDir)
        }
    }
    pub fn model_root(&self) -> &Path {
        &self.model_root
    }
    pub fn urdf_path(&self) -> &Path {
        &self.urdf_path
    }
    pub fn convex_dir(&self) -> &Path {
        &self.convex_dir
    }
    pub fn rsdf_dir(&self) -> &Path {
        &self.rsdf_dir
    }
    pub fn calib_dir(&self) -> &Path {
        &self.calib_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_layout() {
        let paths = RobotDescriptionPaths::new(Path::new("/opt/nao_description"), "nao");
        assert_eq!(paths.urdf_path(), Path::new("/opt/nao_description/urdf/nao.urdf"));
        assert_eq!(paths.convex_dir(), Path::new("/opt/nao_description/convex"));
        assert_eq!(paths.rsdf_dir(), Path::new("/opt/nao_description/rsdf"));
        assert_eq!(paths.calib_dir(), Path::new("/opt/nao_description/calib"));
    }

    #[test]
    fn reading_a_missing_file_is_a_missing_resource() {
        let res = FileUtils::read_file_contents_to_string(Path::new("/definitely/not/here.toml"));
        assert!(matches!(res, Err(RobotDescriptionError::MissingResourceError(_))));
    }
}
