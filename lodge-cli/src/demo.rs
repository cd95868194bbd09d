//! The fixed two-room walkthrough run by the `lodge` binary.

use crate::notice::{Notice, NoticeWriter};
use lodge_catalog::{Hotel, Room};
use lodge_shared::Date;
use std::io::{self, Write};

/// Reserve `date` on room `id`, reporting the outcome
pub fn reserve<W: Write>(
    hotel: &mut Hotel,
    out: &mut NoticeWriter<W>,
    id: usize,
    date: Date,
) -> io::Result<()> {
    let notice = match hotel.reserve_room(id, date) {
        Ok(()) => Notice::Reserved { date },
        Err(e) => Notice::from(&e),
    };
    out.emit(&notice)
}

/// Remove room `id`; only a failure produces a notice
pub fn remove<W: Write>(
    hotel: &mut Hotel,
    out: &mut NoticeWriter<W>,
    id: usize,
) -> io::Result<()> {
    if let Err(e) = hotel.remove_room(id) {
        out.emit(&Notice::from(&e))?;
    }
    Ok(())
}

pub fn print_rooms<W: Write>(hotel: &Hotel, out: &mut NoticeWriter<W>) -> io::Result<()> {
    for listing in hotel.list_rooms() {
        out.emit(&Notice::from(&listing))?;
    }
    Ok(())
}

/// Run the walkthrough and return the hotel in its final state
pub fn run<W: Write>(out: &mut NoticeWriter<W>) -> io::Result<Hotel> {
    let mut hotel = Hotel::new();
    hotel.add_room(Room::standard());
    hotel.add_room(Room::premium());

    let d1 = Date::new(15, 6, 2025);
    let d2 = Date::new(16, 6, 2025);

    print_rooms(&hotel, out)?;
    reserve(&mut hotel, out, 0, d1)?;
    reserve(&mut hotel, out, 1, d1)?;
    reserve(&mut hotel, out, 1, d2)?;
    // Duplicate on room 0
    reserve(&mut hotel, out, 0, d1)?;

    remove(&mut hotel, out, 0)?;
    print_rooms(&hotel, out)?;

    Ok(hotel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::OutputFormat;

    #[test]
    fn test_remove_invalid_id_emits_notice() {
        let mut hotel = Hotel::new();
        let mut out = NoticeWriter::new(Vec::new(), OutputFormat::Text);

        remove(&mut hotel, &mut out, 0).unwrap();

        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "Invalid room ID\n");
    }

    #[test]
    fn test_successful_remove_is_silent() {
        let mut hotel = Hotel::new();
        hotel.add_room(Room::standard());
        let mut out = NoticeWriter::new(Vec::new(), OutputFormat::Text);

        remove(&mut hotel, &mut out, 0).unwrap();

        assert!(hotel.is_empty());
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn test_reserve_on_missing_room() {
        let mut hotel = Hotel::new();
        let mut out = NoticeWriter::new(Vec::new(), OutputFormat::Text);

        reserve(&mut hotel, &mut out, 2, Date::new(1, 1, 2025)).unwrap();

        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "Invalid room ID\n");
    }
}
