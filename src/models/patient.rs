use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Female
    }
}

impl Gender {
    /// Acepta cualquier capitalización ("female", "FEMALE", "Female")
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            "OTHER" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

/// Body de `POST /patient/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub user_firebase_uid: String,
    pub full_name: String,
    pub age: u32,
    pub gender: Gender,
    pub phone_number: String,
    pub medical_condition: Option<String>,
}

/// Contenido de la clave `profile` en la respuesta de creación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedProfile {
    pub id: i64,
}

/// Perfil de `GET /patient/{uid}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub medical_condition: Option<String>,
}

impl PatientProfile {
    /// Género normalizado; el backend puede devolver valores libres
    pub fn gender(&self) -> Gender {
        self.gender
            .as_deref()
            .and_then(Gender::parse)
            .unwrap_or(Gender::Other)
    }
}
