pub mod room;
pub mod hotel;

pub use room::{Room, RoomError, RoomHandle, RoomKind};
pub use hotel::{Hotel, HotelError, RoomListing};
pub use lodge_shared::Date;
