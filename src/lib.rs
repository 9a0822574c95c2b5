//! NutriPlan library exports for the binary and integration tests

use clap::ValueEnum;

pub mod core;
pub mod inference;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    #[default]
    #[value(name = "openrouter")]
    OpenRouter,
    #[value(name = "lmstudio")]
    LmStudio,
}

impl Provider {
    /// Name used in config files and by `build_provider`.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::OpenRouter => "openrouter",
            Provider::LmStudio => "lmstudio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_value_names_match_config_names() {
        for provider in Provider::value_variants() {
            let value = provider.to_possible_value().unwrap();
            assert_eq!(value.get_name(), provider.as_str());
        }
    }
}
