use std::{io::Read, path::PathBuf, str::FromStr};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub export_dir: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
    pub crop_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("plots"),
            chart_width: 800,
            chart_height: 600,
            crop_offset: 1.0,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(PathBuf::from(".kurve"));
            let mut file = std::fs::File::open(path)
                .map_err(|err| format!("could not open config file: {err}"))?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .map_err(|err| format!("could not load config file: {err}"))?;
            buf
        };
        Ok(Self::parse(&config_raw))
    }

    fn parse(raw: &str) -> Self {
        let mut config = Self::default();
        for line in raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.starts_with('#') {
                continue;
            }
            let mut iter = line.split('=');
            let key = iter.next();
            let val = iter.next();
            match (key, val) {
                (Some("export_dir"), Some(path_str)) => {
                    if let Ok(path) = PathBuf::from_str(path_str) {
                        config.export_dir = path;
                    }
                }
                (Some("chart_width"), Some(width_str)) => {
                    if let Ok(width) = width_str.parse::<u32>() {
                        config.chart_width = width;
                    } else {
                        log::warn!("could not parse 'chart_width' as number")
                    }
                }
                (Some("chart_height"), Some(height_str)) => {
                    if let Ok(height) = height_str.parse::<u32>() {
                        config.chart_height = height;
                    } else {
                        log::warn!("could not parse 'chart_height' as number")
                    }
                }
                (Some("crop_offset"), Some(offset_str)) => {
                    match offset_str.parse::<f64>() {
                        Ok(offset) if offset >= 0.0 => config.crop_offset = offset,
                        _ => log::warn!("could not parse 'crop_offset' as non-negative number"),
                    }
                }
                _ => continue,
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let raw = "# comment\nexport_dir=/tmp/charts\nchart_width=1024\ncrop_offset=2.5\n";
        let config = Config::parse(raw);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/charts"));
        assert_eq!(config.chart_width, 1024);
        assert_eq!(config.chart_height, 600);
        assert_eq!(config.crop_offset, 2.5);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let raw = "chart_width=wide\ncrop_offset=-1\n";
        assert_eq!(Config::parse(raw), Config::default());
    }
}
