//! Terminal rendering: framebuffer, diff renderer, frame limiter, page view.

pub mod fb;
pub mod frame_limiter;
pub mod page_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_limiter::FrameLimiter;
pub use page_view::{PageView, Viewport};
pub use renderer::TerminalRenderer;
