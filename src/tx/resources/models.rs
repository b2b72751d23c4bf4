//! Resource data models

use serde::{Deserialize, Serialize};

use crate::tx::ids::{LocaleCode, ResourceSlug};

/// Resource entry from `/project/<slug>/resources/`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Resource {
    pub slug: ResourceSlug,
    pub name: Option<String>,
    pub i18n_type: Option<String>,
    pub source_language_code: Option<LocaleCode>,
    pub category: Option<String>,
}
