//! Daily rental price estimation.

use chrono::{Datelike, Local};

const BASE_PRICE_PER_DAY: f64 = 50.0;
/// Additional rate per unit of city fuel efficiency.
const MILEAGE_FACTOR: f64 = 0.1;
/// Additional rate per year of vehicle age.
const AGE_FACTOR: f64 = 0.05;

/// Estimate a daily rental rate in whole dollars, returned as its decimal
/// string representation.
///
/// The vehicle's age is taken against the local calendar year at call time.
/// Inputs are not validated: a negative `city_mpg` or a `year` in the future
/// flow through the arithmetic (a future year lowers the price).
pub fn calculate_rental_rate(city_mpg: f64, year: i32) -> String {
    let current_year = Local::now().year();

    let mileage_rate = city_mpg * MILEAGE_FACTOR;
    let age_rate = f64::from(current_year - year) * AGE_FACTOR;

    let rate_per_day = BASE_PRICE_PER_DAY + mileage_rate + age_rate;
    (rate_per_day.round() as i64).to_string()
}
