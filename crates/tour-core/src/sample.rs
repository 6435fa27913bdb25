//! The bundled five-scene office tour.

use crate::error::Result;
use crate::tour::Tour;

pub static OFFICE_TOUR_JSON: &str = include_str!("../data/office_tour.json");

pub fn office_tour() -> Result<Tour> {
    Tour::from_json(OFFICE_TOUR_JSON)
}
