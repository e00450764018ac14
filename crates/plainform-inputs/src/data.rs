//! Curated base lists for the priority inputs
//!
//! Country names double as label and value. Time zones pair the bare
//! zone name (the value) with its GMT-offset display label.

pub const COUNTRIES: &[&str] = &[
	"Afghanistan",
	"Albania",
	"Algeria",
	"Argentina",
	"Australia",
	"Austria",
	"Bangladesh",
	"Belgium",
	"Bolivia",
	"Brazil",
	"Bulgaria",
	"Cambodia",
	"Cameroon",
	"Canada",
	"Chile",
	"China",
	"Colombia",
	"Costa Rica",
	"Croatia",
	"Cuba",
	"Czech Republic",
	"Denmark",
	"Dominican Republic",
	"Ecuador",
	"Egypt",
	"El Salvador",
	"Estonia",
	"Ethiopia",
	"Finland",
	"France",
	"Germany",
	"Ghana",
	"Greece",
	"Guatemala",
	"Haiti",
	"Honduras",
	"Hungary",
	"Iceland",
	"India",
	"Indonesia",
	"Iran",
	"Iraq",
	"Ireland",
	"Israel",
	"Italy",
	"Jamaica",
	"Japan",
	"Jordan",
	"Kenya",
	"Kuwait",
	"Latvia",
	"Lebanon",
	"Lithuania",
	"Luxembourg",
	"Malaysia",
	"Mexico",
	"Morocco",
	"Nepal",
	"Netherlands",
	"New Zealand",
	"Nicaragua",
	"Nigeria",
	"Norway",
	"Pakistan",
	"Panama",
	"Paraguay",
	"Peru",
	"Philippines",
	"Poland",
	"Portugal",
	"Qatar",
	"Romania",
	"Russia",
	"Saudi Arabia",
	"Senegal",
	"Serbia",
	"Singapore",
	"Slovakia",
	"Slovenia",
	"South Africa",
	"South Korea",
	"Spain",
	"Sri Lanka",
	"Sweden",
	"Switzerland",
	"Taiwan",
	"Tanzania",
	"Thailand",
	"Tunisia",
	"Turkey",
	"Uganda",
	"Ukraine",
	"United Arab Emirates",
	"United Kingdom",
	"United States",
	"Uruguay",
	"Venezuela",
	"Vietnam",
	"Zimbabwe",
];

/// (value, label) pairs, ordered west to east
pub const TIME_ZONES: &[(&str, &str)] = &[
	("Midway Island", "(GMT-11:00) Midway Island"),
	("Hawaii", "(GMT-10:00) Hawaii"),
	("Alaska", "(GMT-09:00) Alaska"),
	("Pacific Time (US & Canada)", "(GMT-08:00) Pacific Time (US & Canada)"),
	("Tijuana", "(GMT-08:00) Tijuana"),
	("Arizona", "(GMT-07:00) Arizona"),
	("Mountain Time (US & Canada)", "(GMT-07:00) Mountain Time (US & Canada)"),
	("Central America", "(GMT-06:00) Central America"),
	("Central Time (US & Canada)", "(GMT-06:00) Central Time (US & Canada)"),
	("Mexico City", "(GMT-06:00) Mexico City"),
	("Bogota", "(GMT-05:00) Bogota"),
	("Eastern Time (US & Canada)", "(GMT-05:00) Eastern Time (US & Canada)"),
	("Lima", "(GMT-05:00) Lima"),
	("Caracas", "(GMT-04:30) Caracas"),
	("Atlantic Time (Canada)", "(GMT-04:00) Atlantic Time (Canada)"),
	("La Paz", "(GMT-04:00) La Paz"),
	("Santiago", "(GMT-04:00) Santiago"),
	("Newfoundland", "(GMT-03:30) Newfoundland"),
	("Brasilia", "(GMT-03:00) Brasilia"),
	("Buenos Aires", "(GMT-03:00) Buenos Aires"),
	("Greenland", "(GMT-03:00) Greenland"),
	("Mid-Atlantic", "(GMT-02:00) Mid-Atlantic"),
	("Azores", "(GMT-01:00) Azores"),
	("Cape Verde Is.", "(GMT-01:00) Cape Verde Is."),
	("Casablanca", "(GMT+00:00) Casablanca"),
	("Dublin", "(GMT+00:00) Dublin"),
	("Lisbon", "(GMT+00:00) Lisbon"),
	("London", "(GMT+00:00) London"),
	("UTC", "(GMT+00:00) UTC"),
	("Amsterdam", "(GMT+01:00) Amsterdam"),
	("Berlin", "(GMT+01:00) Berlin"),
	("Madrid", "(GMT+01:00) Madrid"),
	("Paris", "(GMT+01:00) Paris"),
	("Rome", "(GMT+01:00) Rome"),
	("Warsaw", "(GMT+01:00) Warsaw"),
	("Athens", "(GMT+02:00) Athens"),
	("Cairo", "(GMT+02:00) Cairo"),
	("Helsinki", "(GMT+02:00) Helsinki"),
	("Jerusalem", "(GMT+02:00) Jerusalem"),
	("Kyiv", "(GMT+02:00) Kyiv"),
	("Baghdad", "(GMT+03:00) Baghdad"),
	("Istanbul", "(GMT+03:00) Istanbul"),
	("Moscow", "(GMT+03:00) Moscow"),
	("Nairobi", "(GMT+03:00) Nairobi"),
	("Riyadh", "(GMT+03:00) Riyadh"),
	("Tehran", "(GMT+03:30) Tehran"),
	("Abu Dhabi", "(GMT+04:00) Abu Dhabi"),
	("Baku", "(GMT+04:00) Baku"),
	("Kabul", "(GMT+04:30) Kabul"),
	("Karachi", "(GMT+05:00) Karachi"),
	("Mumbai", "(GMT+05:30) Mumbai"),
	("New Delhi", "(GMT+05:30) New Delhi"),
	("Kathmandu", "(GMT+05:45) Kathmandu"),
	("Dhaka", "(GMT+06:00) Dhaka"),
	("Rangoon", "(GMT+06:30) Rangoon"),
	("Bangkok", "(GMT+07:00) Bangkok"),
	("Jakarta", "(GMT+07:00) Jakarta"),
	("Beijing", "(GMT+08:00) Beijing"),
	("Hong Kong", "(GMT+08:00) Hong Kong"),
	("Kuala Lumpur", "(GMT+08:00) Kuala Lumpur"),
	("Perth", "(GMT+08:00) Perth"),
	("Singapore", "(GMT+08:00) Singapore"),
	("Taipei", "(GMT+08:00) Taipei"),
	("Osaka", "(GMT+09:00) Osaka"),
	("Seoul", "(GMT+09:00) Seoul"),
	("Tokyo", "(GMT+09:00) Tokyo"),
	("Adelaide", "(GMT+09:30) Adelaide"),
	("Darwin", "(GMT+09:30) Darwin"),
	("Brisbane", "(GMT+10:00) Brisbane"),
	("Guam", "(GMT+10:00) Guam"),
	("Melbourne", "(GMT+10:00) Melbourne"),
	("Sydney", "(GMT+10:00) Sydney"),
	("New Caledonia", "(GMT+11:00) New Caledonia"),
	("Auckland", "(GMT+12:00) Auckland"),
	("Fiji", "(GMT+12:00) Fiji"),
	("Wellington", "(GMT+12:00) Wellington"),
	("Nuku'alofa", "(GMT+13:00) Nuku'alofa"),
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_base_lists_are_present() {
		assert!(COUNTRIES.contains(&"Brazil"));
		assert!(TIME_ZONES.iter().any(|(value, _)| *value == "Brasilia"));
	}

	#[test]
	fn test_time_zone_labels_carry_offsets() {
		for (value, label) in TIME_ZONES {
			assert!(label.starts_with("(GMT"), "bad label for {value}");
			assert!(label.ends_with(value), "label/value mismatch for {value}");
		}
	}
}
