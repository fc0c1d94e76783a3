//! Search, type filter and price sort for the car list, plus validation of
//! the admin car form.

use crate::features::cars::types::{Car, CarRequest};
use url::Url;

pub const NO_CARS: &str = "No cars are currently available.";
pub const NO_MATCHES: &str = "No cars match your search/filter criteria.";
pub const LOAD_FAILED: &str = "Failed to load cars. Please try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub fn from_value(value: &str) -> Self {
        match value {
            "price-desc" => SortOrder::PriceDesc,
            _ => SortOrder::PriceAsc,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }
}

/// What the visitor typed and picked above the car grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarQuery {
    pub search: String,
    /// Empty means every type.
    pub car_type: String,
    pub sort: SortOrder,
}

impl CarQuery {
    pub fn is_default(&self) -> bool {
        self == &CarQuery::default()
    }

    pub fn matches(&self, car: &Car) -> bool {
        matches_search(car, &self.search) && matches_type(car, &self.car_type)
    }

    /// Filters and sorts; the input order is kept among equal prices.
    pub fn apply(&self, cars: &[Car]) -> Vec<Car> {
        let mut visible: Vec<Car> = cars.iter().filter(|car| self.matches(car)).cloned().collect();
        visible.sort_by(|a, b| {
            let ordering = a.daily_price().total_cmp(&b.daily_price());
            match self.sort {
                SortOrder::PriceAsc => ordering,
                SortOrder::PriceDesc => ordering.reverse(),
            }
        });
        visible
    }
}

/// Case-insensitive substring match on name, model and type.
pub fn matches_search(car: &Car, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [car.display_name(), car.model_label(), car.type_label()]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

pub fn matches_type(car: &Car, car_type: &str) -> bool {
    let wanted = car_type.trim();
    wanted.is_empty() || car.type_label().eq_ignore_ascii_case(wanted)
}

/// Distinct car types for the filter dropdown, sorted alphabetically.
pub fn car_types(cars: &[Car]) -> Vec<String> {
    let mut types: Vec<String> = cars.iter().map(|car| car.type_label().to_string()).collect();
    types.sort_by_key(|car_type| car_type.to_lowercase());
    types.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    types
}

/// Raw admin form input for a car.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarForm {
    pub name: String,
    pub model: String,
    pub car_type: String,
    pub price: String,
    pub feature1: String,
    pub feature2: String,
    pub feature3: String,
    pub image_url: String,
}

impl CarForm {
    pub fn from_car(car: &Car) -> Self {
        Self {
            name: car.brand().unwrap_or_default().to_string(),
            model: car.model.clone().unwrap_or_default(),
            car_type: car.car_type.clone().unwrap_or_default(),
            price: car.rate().map(|price| price.to_string()).unwrap_or_default(),
            feature1: car.feature1.clone().unwrap_or_default(),
            feature2: car.feature2.clone().unwrap_or_default(),
            feature3: car.feature3.clone().unwrap_or_default(),
            image_url: car.image_url.clone().unwrap_or_default(),
        }
    }

    /// Builds the request body, keeping the rental flag of an edited car.
    ///
    /// # Errors
    ///
    /// Returns the message to show in the car modal.
    pub fn to_request(&self, booked: bool) -> Result<CarRequest, &'static str> {
        let name = self.name.trim();
        let model = self.model.trim();
        let car_type = self.car_type.trim();
        if name.is_empty() || model.is_empty() || car_type.is_empty() {
            return Err("Name, model and type are required.");
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or("Please enter a valid price.")?;

        Ok(CarRequest {
            name: name.to_string(),
            model: model.to_string(),
            car_type: car_type.to_string(),
            price,
            booked,
            feature1: self.feature1.trim().to_string(),
            feature2: self.feature2.trim().to_string(),
            feature3: self.feature3.trim().to_string(),
            image_url: normalize_image_url(&self.image_url)?,
        })
    }
}

/// Accepts absolute http(s) URLs and site-relative paths; blank means none.
///
/// # Errors
///
/// Returns a message for anything else.
pub fn normalize_image_url(value: &str) -> Result<Option<String>, &'static str> {
    const INVALID: &str = "Please enter a valid image URL.";
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(url.to_string())),
        Ok(_) => Err(INVALID),
        Err(url::ParseError::RelativeUrlWithoutBase) if !value.contains(char::is_whitespace) => {
            Ok(Some(value.to_string()))
        }
        Err(_) => Err(INVALID),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i64, name: &str, model: &str, car_type: &str, price: f64) -> Car {
        Car {
            id,
            name: Some(name.to_string()),
            model: Some(model.to_string()),
            car_type: Some(car_type.to_string()),
            price: Some(price),
            ..Car::default()
        }
    }

    fn fleet() -> Vec<Car> {
        vec![
            car(1, "Volvo", "XC60", "SUV", 900.0),
            car(2, "Saab", "9-3", "Sedan", 500.0),
            car(3, "Tesla", "Model 3", "Electric", 1200.0),
            car(4, "Volvo", "V70", "Wagon", 500.0),
        ]
    }

    fn ids(cars: &[Car]) -> Vec<i64> {
        cars.iter().map(|car| car.id).collect()
    }

    #[test]
    fn default_query_sorts_by_price_ascending() {
        assert_eq!(ids(&CarQuery::default().apply(&fleet())), vec![2, 4, 1, 3]);
    }

    #[test]
    fn descending_sort_reverses_prices() {
        let query = CarQuery {
            sort: SortOrder::from_value("price-desc"),
            ..CarQuery::default()
        };
        assert_eq!(ids(&query.apply(&fleet())), vec![3, 1, 2, 4]);
    }

    #[test]
    fn search_matches_name_model_and_type() {
        let by_name = CarQuery {
            search: "  volvo ".to_string(),
            ..CarQuery::default()
        };
        assert_eq!(ids(&by_name.apply(&fleet())), vec![4, 1]);

        let by_type = CarQuery {
            search: "ELECTRIC".to_string(),
            ..CarQuery::default()
        };
        assert_eq!(ids(&by_type.apply(&fleet())), vec![3]);

        let by_model = CarQuery {
            search: "9-3".to_string(),
            ..CarQuery::default()
        };
        assert_eq!(ids(&by_model.apply(&fleet())), vec![2]);
    }

    #[test]
    fn type_filter_is_exact_and_case_insensitive() {
        let query = CarQuery {
            car_type: "suv".to_string(),
            ..CarQuery::default()
        };
        assert_eq!(ids(&query.apply(&fleet())), vec![1]);

        let partial = CarQuery {
            car_type: "su".to_string(),
            ..CarQuery::default()
        };
        assert!(partial.apply(&fleet()).is_empty());
    }

    #[test]
    fn car_types_are_distinct() {
        let mut cars = fleet();
        cars.push(car(5, "Kia", "Sportage", "suv", 700.0));
        assert_eq!(car_types(&cars), vec!["Electric", "Sedan", "SUV", "Wagon"]);
    }

    #[test]
    fn car_form_validates_required_fields_and_price() {
        let mut form = CarForm {
            name: "Saab".to_string(),
            model: "9-5".to_string(),
            car_type: "Sedan".to_string(),
            price: "abc".to_string(),
            ..CarForm::default()
        };
        assert_eq!(form.to_request(false), Err("Please enter a valid price."));

        form.price = " 650 ".to_string();
        let request = form.to_request(true).expect("valid form");
        assert_eq!(request.price, 650.0);
        assert!(request.booked);
        assert_eq!(request.image_url, None);

        form.model = " ".to_string();
        assert_eq!(form.to_request(false), Err("Name, model and type are required."));
    }

    #[test]
    fn image_urls_are_checked() {
        assert_eq!(normalize_image_url(""), Ok(None));
        assert_eq!(
            normalize_image_url("https://cdn.example/saab.jpg"),
            Ok(Some("https://cdn.example/saab.jpg".to_string()))
        );
        assert_eq!(
            normalize_image_url("images/cars/saab.jpg"),
            Ok(Some("images/cars/saab.jpg".to_string()))
        );
        assert!(normalize_image_url("javascript:alert(1)").is_err());
        assert!(normalize_image_url("not a url").is_err());
    }
}
