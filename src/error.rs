// One error type for the whole garden.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the frame buffer to the window failed
    #[error("Surface alloc error: cannot allocate a {width}x{height} surface")]
    SurfaceAlloc { width: u32, height: u32 }, // Zero-sized or oversized surface
    #[error("Surface error: no surfaces allocated for the current viewport")]
    SurfaceUnavailable, // Frame skipped until the next successful (re)allocation
    #[error("Invalid color: {0}")]
    InvalidColor(String), // Background color could not be parsed
}
