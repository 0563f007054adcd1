pub mod button;
pub mod page_header;

pub use button::*;
pub use page_header::*;
