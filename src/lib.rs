pub mod app;
pub mod event_source;
pub mod geometry;
pub mod page;
pub mod panic_handler;
pub mod selector;
pub mod settings;
pub mod theme;
pub mod viewport;
pub mod widget;
pub mod word_layer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app::{App, AppAction, SelectionReport, run_app_with_event_source};
pub use geometry::{PixelRect, Point, SelectionRect, Word};
pub use page::{Page, PageError};
pub use selector::{Gesture, PointerEvent, Selector, inside_area};
pub use word_layer::WordRegion;
