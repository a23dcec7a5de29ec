//! Mock BLE transport for testing
//!
//! This module provides a mock transport that can be used to test device
//! interaction without requiring actual hardware. Advertisements and endpoint
//! read values are queued up front; every write is journaled per endpoint so
//! tests can assert on the exact bytes sent.

use crate::ble::transport::{Advertisement, BleTransport};
use crate::error::DgError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock BLE transport with shared, inspectable state.
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Advertisements returned by the next discover call
    pub advertisements: Arc<Mutex<Vec<Advertisement>>>,
    /// Values returned by reads, keyed by endpoint
    pub read_values: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    /// Journal of writes: (endpoint, payload) in call order
    pub writes: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    /// Connected peripheral address, if any
    pub connected: Arc<Mutex<Option<String>>>,
    /// Error to return on the next read or write, one-shot
    pub next_error: Arc<Mutex<Option<String>>>,
    /// Endpoint whose writes always fail, for partial-failure tests
    pub failing_endpoint: Arc<Mutex<Option<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an advertisement to be returned by discover.
    pub fn queue_advertisement(&self, address: &str, local_name: Option<&str>, rssi: i16) {
        self.advertisements.lock().unwrap().push(Advertisement {
            address: address.to_string(),
            local_name: local_name.map(str::to_string),
            rssi,
        });
    }

    /// Set the value returned by reads of the given endpoint.
    pub fn set_read_value(&self, endpoint: &str, value: &[u8]) {
        self.read_values
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), value.to_vec());
    }

    /// Get the write journal.
    pub fn written(&self) -> Vec<(String, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }

    /// Set an error to be returned by the next read or write.
    pub fn set_next_error(&self, message: &str) {
        *self.next_error.lock().unwrap() = Some(message.to_string());
    }

    /// Make every write to the given endpoint fail.
    pub fn fail_writes_to(&self, endpoint: &str) {
        *self.failing_endpoint.lock().unwrap() = Some(endpoint.to_string());
    }

    fn take_error(&self) -> Option<DgError> {
        self.next_error.lock().unwrap().take().map(DgError::Transport)
    }
}

#[async_trait::async_trait]
impl BleTransport for MockTransport {
    async fn discover(&mut self, _timeout: Duration) -> Result<Vec<Advertisement>, DgError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        Ok(self.advertisements.lock().unwrap().clone())
    }

    async fn connect(&mut self, address: &str) -> Result<(), DgError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        *self.connected.lock().unwrap() = Some(address.to_string());
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), DgError> {
        *self.connected.lock().unwrap() = None;
        Ok(())
    }

    async fn read(&mut self, endpoint: &str) -> Result<Vec<u8>, DgError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        self.read_values
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .ok_or_else(|| DgError::Transport(format!("no value for endpoint {endpoint}")))
    }

    async fn write(&mut self, endpoint: &str, payload: &[u8]) -> Result<(), DgError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        if self.failing_endpoint.lock().unwrap().as_deref() == Some(endpoint) {
            return Err(DgError::Transport(format!("write to {endpoint} failed")));
        }
        self.writes
            .lock()
            .unwrap()
            .push((endpoint.to_string(), payload.to_vec()));
        Ok(())
    }
}
