//! Admin panel services.

pub mod menu;
pub mod order_board;
pub mod session;
pub mod theme;

pub use menu::Menu;
pub use order_board::OrderBoard;
pub use session::AdminSession;
pub use theme::{ThemePreview, ThemeStudio};
