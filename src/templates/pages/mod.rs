pub mod confirmation;
pub mod home;
pub mod receipt;
pub mod room;

pub use confirmation::confirmation_page;
pub use home::home_page;
pub use receipt::receipt_page;
pub use room::{room_page, RoomPageVm};
