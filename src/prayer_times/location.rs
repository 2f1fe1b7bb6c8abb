use crate::config::settings::LocationConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

pub trait LocationProvider {
    /// Where the user is, if known. Not knowing is not an error.
    fn locate(&self) -> Option<Coordinates>;
}

/// Coordinates written in config.toml.
#[derive(Debug, Clone)]
pub struct ConfigLocation {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl ConfigLocation {
    pub fn from_config(config: &LocationConfig) -> Self {
        Self {
            latitude: config.latitude,
            longitude: config.longitude,
        }
    }
}

impl LocationProvider for ConfigLocation {
    fn locate(&self) -> Option<Coordinates> {
        let (latitude, longitude) = (self.latitude?, self.longitude?);
        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        if !valid {
            log::warn!("Ignoring out-of-range coordinates {}, {}", latitude, longitude);
            return None;
        }
        Some(Coordinates {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(latitude: Option<f64>, longitude: Option<f64>) -> ConfigLocation {
        ConfigLocation {
            latitude,
            longitude,
        }
    }

    #[test]
    fn both_coordinates_required() {
        assert_eq!(location(Some(21.4), None).locate(), None);
        assert_eq!(location(None, Some(39.8)).locate(), None);
        assert!(location(Some(21.4), Some(39.8)).locate().is_some());
    }

    #[test]
    fn out_of_range_is_ignored() {
        assert_eq!(location(Some(95.0), Some(10.0)).locate(), None);
    }
}
