//! Error types for WSF.
//!
//! Only the windowing and GPU setup can fail. The simulation itself has no
//! error paths: a full particle pool is a normal condition, not an error.

use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,
    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    #[error("GPU surface has no supported texture format")]
    NoSurfaceFormat,
}

/// Errors that can occur when running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Failed to create or run the event loop.
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization or rendering failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}
