//! Image URL construction for the car-image CDN.

use url::form_urlencoded;

use crate::config::ImageCdnConfig;
use crate::types::VehicleRecord;

const IMAGE_CDN_ENDPOINT: &str = "https://cdn.imagin.studio/getimage";

/// Build the CDN URL for a rendered image of `car`.
///
/// Only constructs the URL; nothing is fetched. `modelFamily` is the first
/// space-delimited token of the model name. A missing `angle` is serialized
/// as the literal string `undefined`.
pub fn generate_car_image_url(
    config: &ImageCdnConfig,
    car: &VehicleRecord,
    angle: Option<&str>,
) -> String {
    let model_family = car.model.split(' ').next().unwrap_or_default();

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("customer", &config.customer_key)
        .append_pair("make", &car.make)
        .append_pair("modelFamily", model_family)
        .append_pair("zoomType", "fullscreen")
        .append_pair("modelYear", &car.year.to_string())
        .append_pair("angle", angle.unwrap_or("undefined"))
        .finish();

    format!("{IMAGE_CDN_ENDPOINT}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(make: &str, model: &str, year: u32) -> VehicleRecord {
        VehicleRecord {
            make: make.to_string(),
            model: model.to_string(),
            year,
            ..VehicleRecord::default()
        }
    }

    #[test]
    fn missing_angle_serializes_the_undefined_literal() {
        let url = generate_car_image_url(
            &ImageCdnConfig::default(),
            &car("Toyota", "Corolla LE", 2021),
            None,
        );
        assert_eq!(
            url,
            "https://cdn.imagin.studio/getimage?customer=&make=Toyota&modelFamily=Corolla&zoomType=fullscreen&modelYear=2021&angle=undefined"
        );
    }

    #[test]
    fn angle_and_customer_key_are_passed_through() {
        let config = ImageCdnConfig {
            customer_key: "img-key".to_string(),
        };
        let url = generate_car_image_url(&config, &car("Honda", "Civic", 2019), Some("29"));
        assert!(url.contains("customer=img-key"));
        assert!(url.ends_with("angle=29"));
    }

    #[test]
    fn model_family_is_the_first_token() {
        let url = generate_car_image_url(
            &ImageCdnConfig::default(),
            &car("Jeep", "Grand Cherokee L", 2022),
            None,
        );
        assert!(url.contains("modelFamily=Grand"));
    }

    #[test]
    fn values_are_form_encoded() {
        let url = generate_car_image_url(
            &ImageCdnConfig::default(),
            &car("Land Rover", "Defender", 2023),
            None,
        );
        assert!(url.contains("make=Land+Rover"));
    }
}
