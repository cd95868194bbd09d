use crate::room::{Room, RoomError, RoomHandle, RoomKind};
use lodge_shared::Date;
use serde::Serialize;

/// One line of a room listing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoomListing {
    pub id: usize,
    pub kind: RoomKind,
    pub label: &'static str,
    pub reserved_count: usize,
}

/// In-memory registry of rooms.
///
/// A room id is the room's current position. Ids are not stable: removing
/// a room shifts every later room down by one. Use [`RoomHandle`] with
/// [`Hotel::position_of`] to follow a room across removals.
#[derive(Debug, Default)]
pub struct Hotel {
    rooms: Vec<Room>,
}

impl Hotel {
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room currently at position `id`
    pub fn room(&self, id: usize) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Current position of the room with this handle, if it is still here
    pub fn position_of(&self, handle: RoomHandle) -> Option<usize> {
        self.rooms.iter().position(|room| room.handle() == handle)
    }

    /// Append a room; it gets id `len() - 1`
    pub fn add_room(&mut self, room: Room) -> RoomHandle {
        let handle = room.handle();
        tracing::debug!(room = %handle, kind = ?room.kind(), id = self.rooms.len(), "room added");
        self.rooms.push(room);
        handle
    }

    /// Remove the room at `id` and hand it back. Later rooms move down one id.
    pub fn remove_room(&mut self, id: usize) -> Result<Room, HotelError> {
        self.check_id(id)?;

        let room = self.rooms.remove(id);
        tracing::info!(room = %room.handle(), id, remaining = self.rooms.len(), "room removed");

        Ok(room)
    }

    /// Reserve `date` on the room at `id`
    pub fn reserve_room(&mut self, id: usize, date: Date) -> Result<(), HotelError> {
        self.check_id(id)?;

        let room = &mut self.rooms[id];
        if room.is_reserved(&date) {
            tracing::warn!(id, %date, "date already reserved for room");
            return Err(HotelError::AlreadyReservedForRoom { id, date });
        }

        room.reserve(date)?;
        Ok(())
    }

    /// Snapshot of every room in id order
    pub fn list_rooms(&self) -> Vec<RoomListing> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(id, room)| RoomListing {
                id,
                kind: room.kind(),
                label: room.describe(),
                reserved_count: room.reserved_count(),
            })
            .collect()
    }

    fn check_id(&self, id: usize) -> Result<(), HotelError> {
        if id >= self.rooms.len() {
            tracing::warn!(id, rooms = self.rooms.len(), "invalid room id");
            return Err(HotelError::InvalidRoomId(id));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotelError {
    #[error("Invalid room ID")]
    InvalidRoomId(usize),

    #[error("Date already reserved for this room.")]
    AlreadyReservedForRoom { id: usize, date: Date },

    #[error(transparent)]
    Room(#[from] RoomError),
}
