//! Gateway state shared across all handlers

use std::sync::Arc;

use ads_core::DeviceClient;

/// The gateway: one device client shared by every route.
///
/// Holds nothing mutable; cloning only bumps the reference count.
pub struct Gateway<D> {
    device: Arc<D>,
}

impl<D: DeviceClient> Gateway<D> {
    /// Create a gateway that owns the given device client
    pub fn new(device: D) -> Self {
        Self {
            device: Arc::new(device),
        }
    }

    /// Create a gateway over a device client that is shared elsewhere
    pub fn from_arc(device: Arc<D>) -> Self {
        Self { device }
    }

    /// Get the device client
    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D> Clone for Gateway<D> {
    fn clone(&self) -> Self {
        Self {
            device: self.device.clone(),
        }
    }
}
