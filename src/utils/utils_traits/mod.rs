use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::utils::utils_errors::RobotDescriptionError;
use crate::utils::utils_files::FileUtils;

pub trait SaveAndLoadable: Serialize + DeserializeOwned {
    fn get_serialization_string(&self) -> Result<String, RobotDescriptionError> {
        serde_json::to_string(self).map_err(|e| RobotDescriptionError::new_generic_error_str(&e.to_string(), file!(), line!()))
    }
    fn save_to_path(&self, path: &Path) -> Result<(), RobotDescriptionError> {
        FileUtils::save_object_to_file_as_json(self, path)
    }
    fn load_from_path(path: &Path) -> Result<Self, RobotDescriptionError> where Self: Sized {
        FileUtils::load_object_from_json_file(path)
    }
    fn load_from_json_string(json_str: &str) -> Result<Self, RobotDescriptionError> where Self: Sized {
        FileUtils::load_object_from_json_string(json_str)
    }
}
impl <T> SaveAndLoadable for T where T: Serialize + DeserializeOwned {  }

pub trait ToAndFromRonString: Serialize + DeserializeOwned {
    fn convert_to_ron_string(&self) -> Result<String, RobotDescriptionError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| RobotDescriptionError::new_generic_error_str(&e.to_string(), file!(), line!()))
    }
    fn load_from_ron_string(ron_string: &str) -> Result<Self, RobotDescriptionError> where Self: Sized {
        let load: Result<Self, _> = ron::from_str(ron_string);
        return if let Ok(load) = load { Ok(load) } else {
            Err(RobotDescriptionError::new_generic_error_str(&format!("Could not load ron string {:?} into correct type.", ron_string), file!(), line!()))
        }
    }
}
impl <T> ToAndFromRonString for T where T: Serialize + DeserializeOwned {  }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::utils_robot::stabilizer::LipmStabilizerConfig;

    #[test]
    fn stabilizer_config_through_ron_and_json() {
        let config = LipmStabilizerConfig::nao();
        let ron_string = config.convert_to_ron_string().unwrap();
        assert_eq!(LipmStabilizerConfig::load_from_ron_string(&ron_string).unwrap(), config);

        let json_string = config.get_serialization_string().unwrap();
        assert_eq!(LipmStabilizerConfig::load_from_json_string(&json_string).unwrap(), config);
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(LipmStabilizerConfig::load_from_ron_string("(com_height: ").is_err());
    }
}
