#![allow(dead_code)]

use chrono::{DateTime, Months, TimeZone, Utc};
use motorpool_domain::{Car, Manufacturer, Owner};

pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub fn months_ago(reference: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    reference.checked_sub_months(Months::new(months)).unwrap()
}

pub fn make_manufacturer(id: i64, siret: i64) -> Manufacturer {
    let mut manufacturer = Manufacturer::new(&format!("Manufacturer {}", id), siret, "0102030405");
    manufacturer.id = Some(id);
    manufacturer
}

pub fn make_owner(id: i64, name: &str) -> Owner {
    let mut owner = Owner::new(name, utc(2022, 1, 10));
    owner.id = Some(id);
    owner
}

pub struct CarBuilder {
    id: Option<i64>,
    manufacturer: Manufacturer,
    price: f64,
    first_registration_date: DateTime<Utc>,
    owners: Vec<Owner>,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            manufacturer: make_manufacturer(1, 123_456_789),
            price: 10_000.0,
            first_registration_date: utc(2024, 1, 1),
            owners: Vec::new(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn registered(mut self, date: DateTime<Utc>) -> Self {
        self.first_registration_date = date;
        self
    }

    pub fn manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturer = manufacturer;
        self
    }

    pub fn owner(mut self, owner: Owner) -> Self {
        self.owners.push(owner);
        self
    }

    pub fn build(self) -> Car {
        Car {
            id: self.id,
            manufacturer: self.manufacturer,
            price: self.price,
            first_registration_date: self.first_registration_date,
            owners: self.owners,
        }
    }
}
