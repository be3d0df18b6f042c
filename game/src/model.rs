use serde::Serialize;

pub const DEFAULT_TITLE: &str = "POTATOES!!!";

pub struct UniverseDomain {
    pub title: String,
}

impl Default for UniverseDomain {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Universe {
    FarmRenamed { title: String },
}

impl Universe {
    pub fn headline(&self) -> Option<String> {
        match self {
            Universe::FarmRenamed { .. } => Some("Farm name updated!".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniverseError {
    #[error("Please enter a valid name.")]
    InvalidFarmName,
}

impl UniverseDomain {
    pub fn rename_farm(
        &mut self,
        name: &str,
    ) -> Result<impl FnOnce() -> Vec<Universe> + '_, UniverseError> {
        let title = name.trim().to_string();
        if title.is_empty() {
            return Err(UniverseError::InvalidFarmName);
        }
        let command = move || {
            self.title = title.clone();
            vec![Universe::FarmRenamed { title }]
        };
        Ok(command)
    }
}
