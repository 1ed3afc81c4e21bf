#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{CanvasResponse, DrawingCanvas};
pub use command::{Command, CommandContext, CommandError};
pub use config::StudioConfig;
pub use error::{StudioError, StudioResult};
pub use history::{History, MAX_UNDO_STEPS};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use shape::{Shape, ShapeKind};
pub use state::EditorState;
pub use tools::{Tool, ToolSettings};
