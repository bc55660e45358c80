// Leaf building blocks
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod info_list;
pub mod loading;

// Page chrome and overlays
pub mod modal;
pub mod slide_panel;
pub mod sticky_header;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use info_list::*;
pub use loading::*;
pub use modal::*;
pub use slide_panel::*;
pub use sticky_header::*;
