use lodge_shared::Date;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Room kinds offered by the hotel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomKind {
    Standard,
    Premium,
}

impl RoomKind {
    /// Human-readable label shown in room listings
    pub const fn label(self) -> &'static str {
        match self {
            RoomKind::Standard => "Standard Room",
            RoomKind::Premium => "Premium Suite",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable identity of a room, unaffected by removals of other rooms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RoomHandle(pub Uuid);

impl RoomHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RoomHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A bookable room and the dates already reserved on it
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "RoomRecord")]
pub struct Room {
    handle: RoomHandle,
    kind: RoomKind,
    reserved_dates: Vec<Date>,
}

/// A copy is a different room and gets its own handle.
impl Clone for Room {
    fn clone(&self) -> Self {
        Self {
            handle: RoomHandle::new(),
            kind: self.kind,
            reserved_dates: self.reserved_dates.clone(),
        }
    }
}

/// Serialized form of a room, checked before it becomes a [`Room`]
#[derive(Deserialize)]
struct RoomRecord {
    handle: RoomHandle,
    kind: RoomKind,
    reserved_dates: Vec<Date>,
}

impl TryFrom<RoomRecord> for Room {
    type Error = RoomError;

    fn try_from(record: RoomRecord) -> Result<Self, Self::Error> {
        let mut room = Self {
            handle: record.handle,
            kind: record.kind,
            reserved_dates: Vec::with_capacity(record.reserved_dates.len()),
        };
        for date in record.reserved_dates {
            room.reserve(date)?;
        }
        Ok(room)
    }
}

impl Room {
    pub fn new(kind: RoomKind) -> Self {
        Self {
            handle: RoomHandle::new(),
            kind,
            reserved_dates: Vec::new(),
        }
    }

    pub fn standard() -> Self {
        Self::new(RoomKind::Standard)
    }

    pub fn premium() -> Self {
        Self::new(RoomKind::Premium)
    }

    pub fn handle(&self) -> RoomHandle {
        self.handle
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Label of the room kind ("Standard Room" / "Premium Suite")
    pub fn describe(&self) -> &'static str {
        self.kind.label()
    }

    /// Dates reserved so far, in the order they were accepted
    pub fn reserved_dates(&self) -> &[Date] {
        &self.reserved_dates
    }

    pub fn reserved_count(&self) -> usize {
        self.reserved_dates.len()
    }

    /// Check whether `date` is already taken on this room
    pub fn is_reserved(&self, date: &Date) -> bool {
        self.reserved_dates.iter().any(|reserved| reserved == date)
    }

    /// Reserve a date. A date that is already taken leaves the room untouched.
    pub fn reserve(&mut self, date: Date) -> Result<(), RoomError> {
        if self.is_reserved(&date) {
            tracing::warn!(room = %self.handle, %date, "date already reserved");
            return Err(RoomError::AlreadyReserved(date));
        }

        self.reserved_dates.push(date);
        tracing::debug!(
            room = %self.handle,
            %date,
            total = self.reserved_dates.len(),
            "date reserved"
        );

        Ok(())
    }
}

/// Room-level reservation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    #[error("Date already reserved.")]
    AlreadyReserved(Date),
}
