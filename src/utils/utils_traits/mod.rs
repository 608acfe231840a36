use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::utils::utils_errors::AstrokinError;

pub trait ToAndFromRonString: Serialize + DeserializeOwned {
    fn convert_to_ron_string(&self) -> Result<String, AstrokinError> {
        ron::to_string(self).map_err(|e| AstrokinError::new_serialization_error(&format!("Could not convert object to ron string: {}", e), file!(), line!()))
    }
    fn from_ron_string(ron_string: &str) -> Result<Self, AstrokinError> where Self: Sized {
        let load: Result<Self, _> = ron::from_str(ron_string);
        return if let Ok(load) = load { Ok(load) } else {
            Err(AstrokinError::new_serialization_error(&format!("Could not load ron string {:?} into correct type.", ron_string), file!(), line!()))
        }
    }
}
impl <T> ToAndFromRonString for T where T: Serialize + DeserializeOwned {  }

pub trait ToAndFromJsonString: Serialize + DeserializeOwned {
    fn convert_to_json_string(&self) -> Result<String, AstrokinError> {
        serde_json::to_string(self).map_err(|e| AstrokinError::new_serialization_error(&format!("Could not convert object to json string: {}", e), file!(), line!()))
    }
    fn from_json_string(json_string: &str) -> Result<Self, AstrokinError> where Self: Sized {
        serde_json::from_str(json_string).map_err(|e| AstrokinError::new_serialization_error(&format!("Could not load json string into correct type: {}", e), file!(), line!()))
    }
}
impl <T> ToAndFromJsonString for T where T: Serialize + DeserializeOwned {  }
