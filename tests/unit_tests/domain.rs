#[path = "domain/recording_status_test.rs"]
mod recording_status_test;
#[path = "domain/room_test.rs"]
mod room_test;
