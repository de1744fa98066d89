use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between reading the config and printing a line.
///
/// The `Display` strings are shown to the user as-is.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please enter a city name.")]
    EmptyCity,

    #[error(
        "No OpenWeather API key configured.\n\
         Hint: run `weather --configure` or set OPENWEATHER_API_KEY."
    )]
    MissingApiKey,

    #[error("Invalid API endpoint '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Access denied. Check your API key.")]
    Unauthorized,

    #[error("Can't find weather data for this city.")]
    NotFound,

    #[error("Something went wrong...({0})")]
    Status(u16),

    /// The wrapped error never carries the request URL, which holds the API key.
    #[error("Couldn't reach the weather service: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Couldn't read the server response.")]
    Decode(#[source] serde_json::Error),

    #[error("Couldn't read the server response.")]
    MissingCondition,
}

impl WeatherError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
            StatusCode::NOT_FOUND => WeatherError::NotFound,
            other => WeatherError::Status(other.as_u16()),
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Request(err.without_url())
    }
}
