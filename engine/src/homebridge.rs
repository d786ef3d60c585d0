use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const OUTLET_CATEGORY: i64 = 8;
// Some platforms report outlets as switches.
const SWITCH_CATEGORY: i64 = 1;

/// Controllable plug accessory, reduced to what the daemon needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct Accessory {
    uuid: String,
    #[serde(rename = "displayName")]
    display_name: String,
    category: i64,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

/// Client for the Homebridge UI REST API. A bearer token is fetched per
/// operation rather than cached, so an expired session never wedges the
/// daemon.
#[derive(Clone, Debug)]
pub struct Homebridge {
    base_url: String,
    username: String,
    password: String,
    client: reqwest::Client,
}

impl Homebridge {
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
            client,
        })
    }

    async fn token(&self) -> Result<String, String> {
        let resp = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&json!({ "username": self.username, "password": self.password }))
            .send()
            .await
            .map_err(|e| format!("login request failed: {e}"))?;
        if !resp.status().is_success() {
            return Err(format!("authentication failed: {}", resp.status()));
        }
        let auth: AuthResponse = resp
            .json()
            .await
            .map_err(|e| format!("bad login response: {e}"))?;
        Ok(auth.token)
    }

    pub async fn toggle_plug(&self, device_id: &str, on: bool) -> Result<(), String> {
        let token = self.token().await?;
        let resp = self
            .client
            .put(format!("{}/api/accessories/{device_id}", self.base_url))
            .bearer_auth(token)
            .json(&json!({ "characteristicType": "On", "value": on }))
            .send()
            .await
            .map_err(|e| format!("plug request failed: {e}"))?;
        if !resp.status().is_success() {
            return Err(format!("plug request returned {}", resp.status()));
        }
        debug!("plug {device_id} turned {}", if on { "on" } else { "off" });
        Ok(())
    }

    pub async fn list_devices(&self) -> Result<Vec<Device>, String> {
        let token = self.token().await?;
        let resp = self
            .client
            .get(format!("{}/api/accessories", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| format!("accessories request failed: {e}"))?;
        if !resp.status().is_success() {
            return Err(format!("accessories request returned {}", resp.status()));
        }
        let accessories: Vec<Accessory> = resp
            .json()
            .await
            .map_err(|e| format!("bad accessories response: {e}"))?;
        Ok(plug_devices(accessories))
    }
}

fn plug_devices(accessories: Vec<Accessory>) -> Vec<Device> {
    accessories
        .into_iter()
        .filter(|a| a.category == OUTLET_CATEGORY || a.category == SWITCH_CATEGORY)
        .map(|a| Device {
            id: a.uuid,
            name: a.display_name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plug_devices_keeps_outlets_and_switches_only() {
        let accessories: Vec<Accessory> = serde_json::from_str(
            r#"[
                {"uuid": "a", "displayName": "Amp Plug", "category": 8},
                {"uuid": "b", "displayName": "Ceiling Light", "category": 5},
                {"uuid": "c", "displayName": "Desk Switch", "category": 1}
            ]"#,
        )
        .unwrap();
        let devices = plug_devices(accessories);
        assert_eq!(
            devices,
            vec![
                Device {
                    id: "a".to_string(),
                    name: "Amp Plug".to_string(),
                },
                Device {
                    id: "c".to_string(),
                    name: "Desk Switch".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let hb = Homebridge::new("http://homebridge.local:8581/", "u", "p").unwrap();
        assert_eq!(hb.base_url, "http://homebridge.local:8581");
    }
}
