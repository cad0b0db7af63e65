use serde::{Deserialize, Serialize};

use crate::domain::common::form::{require_text, text_of};
use crate::domain::common::Resource;

/// Checklist used by maintenance plans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTemplate {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for MaintenanceTemplate {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_path() -> &'static str {
        "/api/maintenance/templates"
    }

    fn element_name() -> &'static str {
        "Maintenance template"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTemplateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

impl From<&MaintenanceTemplate> for MaintenanceTemplateDto {
    fn from(t: &MaintenanceTemplate) -> Self {
        Self {
            id: Some(t.id),
            name: t.name.clone(),
            description: text_of(&t.description),
        }
    }
}

impl MaintenanceTemplateDto {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Template name is required")
    }
}

pub fn template_name(templates: &[MaintenanceTemplate], id: Option<i64>) -> String {
    id.and_then(|id| templates.iter().find(|t| t.id == id))
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_form() {
        let t = MaintenanceTemplate {
            id: 2,
            name: "Monthly PM".into(),
            description: None,
        };
        let dto = MaintenanceTemplateDto::from(&t);
        assert_eq!(dto.description, "");
        assert!(dto.validate().is_ok());
        assert!(MaintenanceTemplateDto::default().validate().is_err());
        assert_eq!(template_name(&[t], Some(2)), "Monthly PM");
    }
}
