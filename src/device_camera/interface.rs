use thiserror::Error;

/// Which physical camera is requested: front ("user") or back ("environment").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    User,
    Environment,
}

impl FacingMode {
    pub fn flipped(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }
}

/// Token for one live camera acquisition. The device implementation owns the
/// underlying handle and keys it by id; at most one session is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraSession {
    pub id: u64,
    pub facing: FacingMode,
}

/// One frame read from the live session, tightly packed RGB8.
#[derive(Clone)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("camera access denied")]
    PermissionDenied,
    #[error("no matching camera device")]
    NoDevice,
    #[error("camera device error: {0}")]
    Device(String),
}

pub trait DeviceCamera: Send + Sync {
    /// Requests camera access with the given facing mode at the device's
    /// configured ideal resolution, video only.
    fn acquire(&self, facing: FacingMode) -> Result<CameraSession, CameraError>;

    /// Reads the current frame from an active session.
    fn read_frame(&self, session: &CameraSession) -> Result<RawFrame, CameraError>;

    /// Stops the session and frees the device handle.
    fn release(&self, session: &CameraSession) -> Result<(), CameraError>;

    /// Number of video input devices. A count of one or less means the
    /// switch-camera control stays hidden.
    fn list_cameras(&self) -> Result<usize, CameraError>;

    /// Releases the session, then re-acquires with the flipped facing mode.
    /// The release happens first so two device handles are never held at once.
    fn switch(&self, session: CameraSession) -> Result<CameraSession, CameraError> {
        self.release(&session)?;
        self.acquire(session.facing.flipped())
    }
}
