use crate::{condition::Condition, error::WeatherError};

/// Unit system requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_imperial(imperial: bool) -> Self {
        if imperial { Units::Imperial } else { Units::Metric }
    }

    pub fn as_query_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature suffix, without the degree sign.
    pub fn suffix(&self) -> &'static str {
        match self {
            Units::Metric => "C",
            Units::Imperial => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub city: String,
    pub units: Units,
}

impl WeatherRequest {
    /// Build a request from the city tokens as collected on the command line.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], units: Units) -> Result<Self, WeatherError> {
        let parts: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        let city = parts.join(" ").trim().to_string();

        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        Ok(Self { city, units })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub city: String,
    pub condition_code: u16,
    pub description: String,
    pub temperature: f64,
    pub units: Units,
}

impl CurrentWeather {
    pub fn condition(&self) -> Condition {
        Condition::from_code(self.condition_code)
    }
}
