pub mod ansi;
pub mod frame;
pub mod renderer;
pub mod widget;
pub mod window;

pub use ansi::AnsiRenderer;
pub use frame::{Frame, WindowTheme};
pub use renderer::{RendererError, RowRenderer};
pub use widget::{CodeWindow, InlineRenderer};
pub use window::RowWindow;
