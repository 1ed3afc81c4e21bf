mod color_dialog;
mod tool_button;

pub use color_dialog::{ColorDialog, DialogOutcome, GRADIENT_HEIGHT, GRADIENT_WIDTH};
pub use tool_button::ToolButton;
