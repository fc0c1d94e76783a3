use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CAR_IMAGE: &str = "images/cars/default-car.jpg";
pub const FEATURE_NOT_AVAILABLE: &str = "Feature not available";

/// Car photo as the backend sends it: a ready `data:` URL, a base64 string or
/// the raw bytes of a JPEG. Bytes may arrive signed and wrap into `0..=255`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CarImage {
    Encoded(String),
    Bytes(Vec<i16>),
}

impl CarImage {
    /// Browser-ready `src`, or `None` when the payload is unusable.
    pub fn to_src(&self) -> Option<String> {
        match self {
            CarImage::Encoded(value) if value.starts_with("data:image") => Some(value.clone()),
            CarImage::Encoded(value) => {
                let value = value.trim();
                (!value.is_empty() && STANDARD.decode(value).is_ok())
                    .then(|| format!("data:image/jpeg;base64,{value}"))
            }
            CarImage::Bytes(bytes) if bytes.is_empty() => None,
            CarImage::Bytes(bytes) => {
                let bytes: Vec<u8> = bytes.iter().map(|byte| *byte as u8).collect();
                Some(format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes)))
            }
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// Older records carry the brand here instead of in `name`.
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, rename = "type")]
    pub car_type: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_per_day: Option<f64>,
    #[serde(default)]
    pub booked: Option<bool>,
    #[serde(default)]
    pub feature1: Option<String>,
    #[serde(default)]
    pub feature2: Option<String>,
    #[serde(default)]
    pub feature3: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub image: Option<CarImage>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

impl Car {
    /// Brand from `name`, else `make`.
    pub fn brand(&self) -> Option<&str> {
        non_blank(&self.name).or_else(|| non_blank(&self.make))
    }

    pub fn display_name(&self) -> &str {
        self.brand().unwrap_or("Unknown")
    }

    pub fn model_label(&self) -> &str {
        non_blank(&self.model).unwrap_or("")
    }

    pub fn type_label(&self) -> &str {
        non_blank(&self.car_type).unwrap_or("Other")
    }

    /// `"{name} {model}"` as shown in booking tables.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.display_name(), self.model_label())
            .trim()
            .to_string()
    }

    /// Daily rate from `price`, else `pricePerDay`.
    pub fn rate(&self) -> Option<f64> {
        self.price.or(self.price_per_day)
    }

    pub fn daily_price(&self) -> f64 {
        self.rate().unwrap_or(0.0)
    }

    /// `full_name` followed by the model year when the record has one.
    pub fn full_name_with_year(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({year})", self.full_name()),
            None => self.full_name(),
        }
    }

    pub fn is_booked(&self) -> bool {
        self.booked.unwrap_or(false)
    }

    pub fn features(&self) -> [String; 3] {
        [&self.feature1, &self.feature2, &self.feature3].map(|feature| {
            non_blank(feature)
                .unwrap_or(FEATURE_NOT_AVAILABLE)
                .to_string()
        })
    }

    /// Image source in order of preference: embedded image, `imageUrl`, the
    /// bundled placeholder.
    pub fn image_src(&self) -> String {
        self.image
            .as_ref()
            .and_then(CarImage::to_src)
            .or_else(|| non_blank(&self.image_url).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_CAR_IMAGE.to_string())
    }

    pub fn rent_label(&self) -> &'static str {
        if self.is_booked() {
            "Currently Unavailable"
        } else {
            "Rent Now"
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_booked() { "Rented" } else { "Available" }
    }
}

/// Body for creating or updating a car from the admin form.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarRequest {
    pub name: String,
    pub model: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub price: f64,
    pub booked: bool,
    pub feature1: String,
    pub feature2: String,
    pub feature3: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn car(value: serde_json::Value) -> Car {
        serde_json::from_value(value).expect("car")
    }

    #[test]
    fn aliases_fill_name_and_price() {
        let car = car(json!({"id": 1, "make": "Volvo", "model": "XC60", "pricePerDay": 899.0}));
        assert_eq!(car.display_name(), "Volvo");
        assert_eq!(car.full_name(), "Volvo XC60");
        assert_eq!(car.daily_price(), 899.0);
    }

    #[test]
    fn both_spellings_in_one_record_decode() {
        let cars: Vec<Car> = serde_json::from_str(
            r#"[{"id":1,"name":"Volvo","make":"Saab","price":500,"pricePerDay":450}]"#,
        )
        .expect("cars");
        assert_eq!(cars[0].display_name(), "Volvo");
        assert_eq!(cars[0].daily_price(), 500.0);

        let blank_name = car(json!({"id": 2, "name": " ", "make": "Saab"}));
        assert_eq!(blank_name.display_name(), "Saab");
    }

    #[test]
    fn year_follows_the_name_when_known() {
        let dated = car(json!({"id": 9, "name": "Volvo", "model": "V70", "year": 2021}));
        assert_eq!(dated.full_name_with_year(), "Volvo V70 (2021)");
        let undated = car(json!({"id": 10, "name": "Volvo", "model": "V70"}));
        assert_eq!(undated.full_name_with_year(), "Volvo V70");
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let car = car(json!({"id": 2, "feature2": "GPS"}));
        assert_eq!(car.display_name(), "Unknown");
        assert_eq!(car.type_label(), "Other");
        assert_eq!(
            car.features(),
            [
                FEATURE_NOT_AVAILABLE.to_string(),
                "GPS".to_string(),
                FEATURE_NOT_AVAILABLE.to_string()
            ]
        );
        assert_eq!(car.rent_label(), "Rent Now");
        assert_eq!(car.status_label(), "Available");
    }

    #[test]
    fn image_source_prefers_embedded_data() {
        let data_url = car(json!({"id": 3, "image": "data:image/png;base64,AAAA"}));
        assert_eq!(data_url.image_src(), "data:image/png;base64,AAAA");

        let bytes = car(json!({"id": 4, "image": [1, 2, 3]}));
        assert_eq!(bytes.image_src(), "data:image/jpeg;base64,AQID");

        let signed = car(json!({"id": 8, "image": [-1]}));
        assert_eq!(signed.image_src(), "data:image/jpeg;base64,/w==");

        let url = car(json!({"id": 5, "imageUrl": "https://cdn.example/volvo.jpg"}));
        assert_eq!(url.image_src(), "https://cdn.example/volvo.jpg");

        let none = car(json!({"id": 6, "image": "not base64!"}));
        assert_eq!(none.image_src(), DEFAULT_CAR_IMAGE);
    }

    #[test]
    fn booked_cars_cannot_be_rented() {
        let car = car(json!({"id": 7, "booked": true}));
        assert!(car.is_booked());
        assert_eq!(car.rent_label(), "Currently Unavailable");
        assert_eq!(car.status_label(), "Rented");
    }

    #[test]
    fn car_request_omits_empty_image_url() {
        let request = CarRequest {
            name: "Saab".to_string(),
            car_type: "Sedan".to_string(),
            price: 500.0,
            ..CarRequest::default()
        };
        let value = serde_json::to_value(request).expect("serialize");
        assert_eq!(value["type"], "Sedan");
        assert!(value.get("imageUrl").is_none());
    }
}
