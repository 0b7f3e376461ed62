pub mod background;
pub mod banner;
pub mod canvas;
pub mod card;
pub mod table;
pub mod theme;

pub use background::FeltWidget;
pub use banner::BannerWidget;
pub use card::{BoxArt, CardArt, CardWidget};
pub use table::TableWidget;
pub use theme::Theme;
