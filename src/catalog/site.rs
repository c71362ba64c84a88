//! Portfolio site records.

use serde::{Deserialize, Serialize};

/// A single portfolio entry exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Site {
    /// Unique, positive identifier.
    pub id: u64,

    /// Absolute URL of the site.
    pub url: String,

    /// Display name.
    pub title: String,

    /// Short description.
    pub description: String,

    /// Free-form tag (e.g. "main", "projects", "docs").
    pub category: String,
}

impl Site {
    fn new(id: u64, url: &str, title: &str, description: &str, category: &str) -> Self {
        Self {
            id,
            url: url.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

/// The catalog served when the config file declares no `[[sites]]`.
pub fn default_sites() -> Vec<Site> {
    vec![
        Site::new(
            1,
            "http://76.102.42.17:5100/",
            "Main Site (Port 5100)",
            "Primary portfolio website",
            "main",
        ),
        Site::new(
            2,
            "http://76.102.42.17:5000/video",
            "Video Demo",
            "Video demonstration and media showcase",
            "projects",
        ),
        Site::new(
            3,
            "https://instructions.online/?id=4610-25-0922-0650-rq200-servoarms_small-now",
            "Instructions Online",
            "RQ200 Servo Arms instructions and guide",
            "docs",
        ),
        Site::new(
            4,
            "http://quest.tny.cc/r200-ServoArmSm_Left-Test",
            "Quest Test - Servo Arm Left",
            "R200 ServoArm Left interactive test",
            "projects",
        ),
    ]
}
