use lodge_catalog::{Date, Hotel, HotelError, Room, RoomKind};

#[test]
fn test_two_room_booking_scenario() {
    let mut hotel = Hotel::new();
    hotel.add_room(Room::standard());
    let premium = hotel.add_room(Room::premium());

    let d1 = Date::new(15, 6, 2025);
    let d2 = Date::new(16, 6, 2025);

    assert_eq!(hotel.reserve_room(0, d1), Ok(()));
    // Same date on a different room is allowed
    assert_eq!(hotel.reserve_room(1, d1), Ok(()));
    assert_eq!(hotel.reserve_room(1, d2), Ok(()));
    assert_eq!(
        hotel.reserve_room(0, d1),
        Err(HotelError::AlreadyReservedForRoom { id: 0, date: d1 })
    );
    assert_eq!(hotel.room(0).unwrap().reserved_count(), 1);

    let removed = hotel.remove_room(0).unwrap();
    assert_eq!(removed.kind(), RoomKind::Standard);

    assert_eq!(hotel.position_of(premium), Some(0));
    let remaining = hotel.room(0).unwrap();
    assert_eq!(remaining.describe(), "Premium Suite");
    assert_eq!(remaining.reserved_dates(), &[d1, d2]);

    let listing = hotel.list_rooms();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, 0);
    assert_eq!(listing[0].label, "Premium Suite");
    assert_eq!(listing[0].reserved_count, 2);
}

#[test]
fn test_invalid_ids_never_mutate() {
    let mut hotel = Hotel::new();
    let date = Date::new(1, 1, 2025);

    assert_eq!(hotel.reserve_room(0, date), Err(HotelError::InvalidRoomId(0)));
    assert!(hotel.remove_room(0).is_err());

    hotel.add_room(Room::standard());
    hotel.reserve_room(0, date).unwrap();

    let before = hotel.room(0).unwrap().reserved_dates().to_vec();
    assert!(hotel.reserve_room(1, Date::new(2, 1, 2025)).is_err());
    assert!(hotel.reserve_room(usize::MAX, Date::new(2, 1, 2025)).is_err());
    assert_eq!(hotel.room(0).unwrap().reserved_dates(), before.as_slice());
}

#[test]
fn test_calendar_free_dates_are_distinct_keys() {
    let mut hotel = Hotel::new();
    hotel.add_room(Room::premium());

    hotel.reserve_room(0, Date::new(40, 6, 2025)).unwrap();
    hotel.reserve_room(0, Date::new(10, 6, 2025)).unwrap();

    assert_eq!(hotel.room(0).unwrap().reserved_count(), 2);
}
