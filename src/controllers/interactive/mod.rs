//! Interactive controller for progressive fractal rendering.
//!
//! The controller is the application layer for exploration: it turns view
//! changes and pointer gestures into render generations and drives the
//! cooperative task queue those generations run on.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: view states, query strings and `PointerEvent`s
//! - **Output**: rows land on a `RasterSurface`; lifecycle events go to a `RenderEventPort`
//! - **Core**: row rendering and scheduling come from the domain actions in `core/`

mod controller;
pub mod task_queue;

pub use controller::ViewerController;
pub use task_queue::TaskQueue;
