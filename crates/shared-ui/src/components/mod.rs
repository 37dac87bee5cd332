pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod dialog;
pub mod form;
pub mod form_select;
pub mod input;
pub mod label;
pub mod navbar;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;
pub mod textarea;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use dialog::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use search_bar::*;
pub use skeleton::*;
pub use textarea::*;
