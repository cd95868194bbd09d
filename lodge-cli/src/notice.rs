use crate::app_config::OutputFormat;
use lodge_catalog::{HotelError, RoomError, RoomListing};
use lodge_shared::Date;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// A status line produced while driving the hotel.
///
/// `Display` renders the exact legacy text; the JSON form is tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    Reserved { date: Date },
    AlreadyReserved { date: Date },
    AlreadyReservedForRoom { id: usize, date: Date },
    InvalidRoomId { id: usize },
    Room { id: usize, label: &'static str },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Reserved { date } => write!(f, "Reserved date: {}", date),
            Notice::AlreadyReserved { .. } => f.write_str("Date already reserved."),
            Notice::AlreadyReservedForRoom { .. } => {
                f.write_str("Date already reserved for this room.")
            }
            Notice::InvalidRoomId { .. } => f.write_str("Invalid room ID"),
            Notice::Room { id, label } => write!(f, "Room {}: {}", id, label),
        }
    }
}

impl From<&RoomError> for Notice {
    fn from(err: &RoomError) -> Self {
        match err {
            RoomError::AlreadyReserved(date) => Notice::AlreadyReserved { date: *date },
        }
    }
}

impl From<&HotelError> for Notice {
    fn from(err: &HotelError) -> Self {
        match err {
            HotelError::InvalidRoomId(id) => Notice::InvalidRoomId { id: *id },
            HotelError::AlreadyReservedForRoom { id, date } => Notice::AlreadyReservedForRoom {
                id: *id,
                date: *date,
            },
            HotelError::Room(e) => e.into(),
        }
    }
}

impl From<&RoomListing> for Notice {
    fn from(listing: &RoomListing) -> Self {
        Notice::Room {
            id: listing.id,
            label: listing.label,
        }
    }
}

/// Writes one notice per line in the configured format
pub struct NoticeWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> NoticeWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn emit(&mut self, notice: &Notice) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", notice),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, notice)?;
                writeln!(self.out)
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
