use std::time::Duration;

use serde_json::Value;

use crate::core::comfort::reading::{Parameter, Reading, SensorOutcome};
use crate::core::config::MonitorConfig;
use crate::error::{MonitorError, Result};

pub const SERVICE_HEADER: &str = "Fiware-Service";
pub const SERVICE_PATH_HEADER: &str = "Fiware-ServicePath";

/// Reads the device entity from an NGSI-v2 context broker.
#[derive(Debug)]
pub struct LiveReader {
    client: reqwest::Client,
    url: String,
    service: String,
    service_path: String,
}

impl LiveReader {
    pub fn new(
        broker_url: &str,
        device_id: &str,
        service: &str,
        service_path: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, broker_url, device_id, service, service_path))
    }

    /// Use a preconfigured client; it must carry its own request timeout.
    pub fn with_client(
        client: reqwest::Client,
        broker_url: &str,
        device_id: &str,
        service: &str,
        service_path: &str,
    ) -> Self {
        Self {
            client,
            url: format!("{}/v2/entities/{}", broker_url.trim_end_matches('/'), device_id),
            service: service.to_string(),
            service_path: service_path.to_string(),
        }
    }

    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        let device_id = config
            .device_id
            .as_deref()
            .ok_or_else(|| MonitorError::config("device_id is required in live mode"))?;

        Self::new(
            &config.broker_url,
            device_id,
            &config.service,
            &config.service_path,
            config.request_timeout(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET against the broker; every failure collapses to `Unavailable`.
    pub async fn read(&self) -> SensorOutcome {
        match self.fetch().await {
            Ok(reading) => SensorOutcome::Reading(reading),
            Err(e) => {
                log::warn!("Device unavailable ({}): {}", self.url, e);
                SensorOutcome::Unavailable
            }
        }
    }

    async fn fetch(&self) -> Result<Reading> {
        let response = self
            .client
            .get(&self.url)
            .header(SERVICE_HEADER, &self.service)
            .header(SERVICE_PATH_HEADER, &self.service_path)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::Protocol(status));
        }

        let body = response.text().await?;
        let entity: Value = serde_json::from_str(&body)
            .map_err(|e| MonitorError::payload(format!("body is not JSON: {}", e)))?;

        parse_entity(&entity)
    }
}

/// Extract the three `<attribute>.value` fields from a broker entity.
pub fn parse_entity(entity: &Value) -> Result<Reading> {
    Ok(Reading::new(
        attribute_value(entity, Parameter::Temperature)?,
        attribute_value(entity, Parameter::Humidity)?,
        attribute_value(entity, Parameter::Luminosity)?,
    ))
}

fn attribute_value(entity: &Value, parameter: Parameter) -> Result<f64> {
    let raw = entity
        .get(parameter.key())
        .and_then(|attribute| attribute.get("value"))
        .ok_or_else(|| MonitorError::payload(format!("missing {}.value", parameter)))?;

    // IoT agents publish numbers either as JSON numbers or as numeric text
    let value = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| MonitorError::payload(format!("{}.value is not numeric: {}", parameter, raw)))
}
