/// Build-time settings. Set through the environment or a local `.env`
/// (see `build.rs` and `.env.example`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub default_brand: String,
    pub author: String,
}

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_BRAND: &str = "pacific";
pub const DEFAULT_AUTHOR: &str = "Harshit Roy";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            default_brand: DEFAULT_BRAND.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PACIFIC_API_BASE"),
            option_env!("PACIFIC_API_KEY"),
            option_env!("PACIFIC_DEFAULT_BRAND"),
            option_env!("PACIFIC_AUTHOR"),
        )
    }

    /// Empty strings count as unset.
    fn from_values(
        api_base: Option<&str>,
        api_key: Option<&str>,
        default_brand: Option<&str>,
        author: Option<&str>,
    ) -> Self {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }

        Self {
            api_base: non_empty(api_base)
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            api_key: non_empty(api_key).map(str::to_string),
            default_brand: non_empty(default_brand).unwrap_or(DEFAULT_BRAND).to_string(),
            author: non_empty(author).unwrap_or(DEFAULT_AUTHOR).to_string(),
        }
    }
}
