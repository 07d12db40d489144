use anyhow::Result;
use indexmap::{indexmap, IndexMap};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Headers attached to every outgoing request.
pub static DEFAULT_HEADERS: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    indexmap! {
        "Content-Type" => "application/json",
    }
});

#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub data: Value,
}

impl Response {
    /// Decode the body into a concrete type.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.data)?)
    }
}

pub struct Client {
    inner: reqwest::blocking::Client,
}

impl Client {
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder().build()?;
        Ok(Self { inner })
    }

    /// Send a single GET request to `url` and decode the body as JSON.
    ///
    /// The status code is captured but not checked before decoding: a non-2xx
    /// response whose body is valid JSON comes back like any other.
    pub fn get(&self, url: &str) -> Result<Response> {
        let mut request = self.inner.get(url);
        for (name, value) in DEFAULT_HEADERS.iter() {
            request = request.header(*name, *value);
        }
        let response = request.send()?;
        let status = response.status().as_u16();
        let data = response.json()?;
        Ok(Response { status, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_default_headers() {
        assert_eq!(DEFAULT_HEADERS.len(), 1);
        assert_eq!(DEFAULT_HEADERS.get("Content-Type"), Some(&"application/json"));
    }

    #[test]
    fn test_decode_typed() {
        #[derive(Deserialize)]
        struct Record {
            id: u64,
            name: String,
        }

        let response = Response {
            status: 200,
            data: json!({"id": 7, "name": "alpha"}),
        };
        let record: Record = response.decode().unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "alpha");
    }

    #[test]
    fn test_decode_mismatch() {
        #[derive(Deserialize)]
        struct Record {
            id: u64,
        }

        let response = Response {
            status: 200,
            data: json!({"id": "not-a-number"}),
        };
        assert!(response.decode::<Record>().is_err());
    }
}
