use sea_orm::Set;
use uuid::Uuid;

use crate::entities::{reservation, reservations_tags};

pub fn reservation() -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: Set(Uuid::now_v7()),
        schema_version: Set(reservation::SCHEMA_VERSION),
        date: Set("2024-06-01".to_string()),
        time: Set("18:00".to_string()),
        seats: Set(2),
        phone_number: Set("5550100".to_string()),
        name: Set("jane doe".to_string()),
        notes: Set(None),
        status: Set(None),
        deleted: Set(false),
        allow_sms: Set(None),
    }
}

pub fn reservation_tag(reservation_id: Uuid, tag_id: Uuid) -> reservations_tags::ActiveModel {
    reservations_tags::ActiveModel {
        reservation_id: Set(reservation_id),
        tag_id: Set(tag_id),
    }
}

pub trait ReservationFactory {
    fn date(self, date: &str) -> reservation::ActiveModel;
    fn time(self, time: &str) -> reservation::ActiveModel;
    fn seats(self, seats: i32) -> reservation::ActiveModel;
    fn phone_number(self, phone_number: &str) -> reservation::ActiveModel;
    fn name(self, name: &str) -> reservation::ActiveModel;
    fn notes(self, notes: Option<&str>) -> reservation::ActiveModel;
    fn allow_sms(self, allow_sms: Option<bool>) -> reservation::ActiveModel;
    fn deleted(self, deleted: bool) -> reservation::ActiveModel;
}

impl ReservationFactory for reservation::ActiveModel {
    fn date(mut self, date: &str) -> reservation::ActiveModel {
        self.date = Set(date.to_string());
        self
    }

    fn time(mut self, time: &str) -> reservation::ActiveModel {
        self.time = Set(time.to_string());
        self
    }

    fn seats(mut self, seats: i32) -> reservation::ActiveModel {
        self.seats = Set(seats);
        self
    }

    fn phone_number(mut self, phone_number: &str) -> reservation::ActiveModel {
        self.phone_number = Set(phone_number.to_string());
        self
    }

    fn name(mut self, name: &str) -> reservation::ActiveModel {
        self.name = Set(name.to_string());
        self
    }

    fn notes(mut self, notes: Option<&str>) -> reservation::ActiveModel {
        self.notes = Set(notes.map(str::to_string));
        self
    }

    fn allow_sms(mut self, allow_sms: Option<bool>) -> reservation::ActiveModel {
        self.allow_sms = Set(allow_sms);
        self
    }

    fn deleted(mut self, deleted: bool) -> reservation::ActiveModel {
        self.deleted = Set(deleted);
        self
    }
}
