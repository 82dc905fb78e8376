use crate::device_camera::interface::{
    CameraError, CameraSession, DeviceCamera, FacingMode, RawFrame,
};
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

struct FakeCameraState {
    next_id: u64,
    active: HashSet<u64>,
}

/// In-memory camera that hands out noise frames. Tracks active sessions so
/// tests can assert that no device handle leaks across a switch.
pub struct FakeCamera {
    logger: Arc<dyn Logger + Send + Sync>,
    device_count: usize,
    frame_width: u32,
    frame_height: u32,
    deny_access: bool,
    state: Mutex<FakeCameraState>,
}

impl FakeCamera {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            device_count: 2,
            frame_width: 1280,
            frame_height: 720,
            deny_access: false,
            state: Mutex::new(FakeCameraState {
                next_id: 0,
                active: HashSet::new(),
            }),
        }
    }

    #[allow(dead_code)]
    pub fn with_device_count(mut self, count: usize) -> Self {
        self.device_count = count;
        self
    }

    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    #[allow(dead_code)]
    pub fn with_access_denied(mut self) -> Self {
        self.deny_access = true;
        self
    }

    #[allow(dead_code)]
    pub fn active_sessions(&self) -> usize {
        self.state.lock().unwrap().active.len()
    }
}

impl DeviceCamera for FakeCamera {
    fn acquire(&self, facing: FacingMode) -> Result<CameraSession, CameraError> {
        if self.deny_access {
            return Err(CameraError::PermissionDenied);
        }
        if self.device_count == 0 {
            return Err(CameraError::NoDevice);
        }

        let mut state = self.state.lock().unwrap();
        if !state.active.is_empty() {
            return Err(CameraError::Device(
                "a session is already active".to_string(),
            ));
        }

        let id = state.next_id;
        state.next_id += 1;
        state.active.insert(id);

        let _ = self.logger.info(&format!("Acquired {:?} camera", facing));
        Ok(CameraSession { id, facing })
    }

    fn read_frame(&self, session: &CameraSession) -> Result<RawFrame, CameraError> {
        let state = self.state.lock().unwrap();
        if !state.active.contains(&session.id) {
            return Err(CameraError::Device("session is not active".to_string()));
        }

        let mut data = vec![0u8; (self.frame_width * self.frame_height * 3) as usize];
        rand::rng().fill(&mut data[..]);

        Ok(RawFrame {
            width: self.frame_width,
            height: self.frame_height,
            data,
        })
    }

    fn release(&self, session: &CameraSession) -> Result<(), CameraError> {
        let mut state = self.state.lock().unwrap();
        if !state.active.remove(&session.id) {
            return Err(CameraError::Device(
                "session was already released".to_string(),
            ));
        }

        let _ = self.logger.info(&format!("Released session {}", session.id));
        Ok(())
    }

    fn list_cameras(&self) -> Result<usize, CameraError> {
        Ok(self.device_count)
    }
}
