use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A complex number seeded onto the plane at startup. Either part may be
/// omitted in the config file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SeedPoint {
    pub re: Option<f64>,
    pub im: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Canvas units per complex unit.
    pub scale: f64,
    /// External speech synthesizer command. Empty disables narration.
    pub speech_command: String,
    /// Whether the angle arc, projection vectors, and position label are
    /// shown at startup.
    pub show_details: bool,
    /// Complex numbers plotted at startup.
    pub seed: Vec<SeedPoint>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: 20.0,
            speech_command: "espeak".to_string(),
            show_details: true,
            seed: vec![
                SeedPoint { re: Some(5.0), im: Some(2.5) },
                SeedPoint { re: Some(-3.0), im: Some(2.0) },
            ],
        }
    }
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    Some(super::config_dir()?.join("config.toml"))
}

/// Load config from disk, returning defaults if file doesn't exist or is invalid.
pub fn load_config() -> Config {
    let path = match config_path() {
        Some(p) => p,
        None => return Config::default(),
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => {
            // Create default config file on first run
            let config = Config::default();
            let _ = write_default_config(&path, &config);
            config
        }
    }
}

/// Write a default config file with comments.
fn write_default_config(path: &PathBuf, config: &Config) -> Result<(), String> {
    let mut content = format!(
        "# Argand configuration\n\
         \n\
         # Canvas units per complex unit\n\
         scale = {:.1}\n\
         \n\
         # External speech synthesizer command (\"\" disables narration)\n\
         speech_command = \"{}\"\n\
         \n\
         # Show the angle arc, projection vectors and position label at startup\n\
         show_details = {}\n\
         \n\
         # Complex numbers plotted at startup\n",
        config.scale, config.speech_command, config.show_details,
    );
    for seed in &config.seed {
        content.push_str("\n[[seed]]\n");
        if let Some(re) = seed.re {
            content.push_str(&format!("re = {:?}\n", re));
        }
        if let Some(im) = seed.im {
            content.push_str(&format!("im = {:?}\n", im));
        }
    }
    std::fs::write(path, content.as_bytes()).map_err(|e| format!("write error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_the_sample_numbers() {
        let config = Config::default();
        assert_eq!(config.seed.len(), 2);
        assert_eq!(config.seed[0].re, Some(5.0));
        assert_eq!(config.seed[1].im, Some(2.0));
    }

    #[test]
    fn test_partial_config_falls_back_per_field() {
        let config: Config = toml::from_str("scale = 30.0").unwrap();
        assert_eq!(config.scale, 30.0);
        assert_eq!(config.speech_command, "espeak");
        assert_eq!(config.seed.len(), 2);
    }

    #[test]
    fn test_seed_parts_may_be_absent() {
        let config: Config = toml::from_str("[[seed]]\nre = 2.0\n\n[[seed]]\nim = -1.5\n").unwrap();
        assert_eq!(config.seed[0], SeedPoint { re: Some(2.0), im: None });
        assert_eq!(config.seed[1], SeedPoint { re: None, im: Some(-1.5) });
    }
}
