/// CORS configuration (`CORS_ALLOWED_ORIGINS`, comma separated).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => {
                let allowed_origins: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect();
                if allowed_origins.is_empty() {
                    Self::default()
                } else {
                    Self { allowed_origins }
                }
            }
            None => Self::default(),
        }
    }
}
