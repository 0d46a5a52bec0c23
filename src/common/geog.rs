/// Display name for a 2-digit state FIPS code (50 states, DC and Puerto Rico).
pub fn state_fips_to_name(fips: &str) -> Option<&'static str> {
    match fips {
        "01" => Some("Alabama"),
        "02" => Some("Alaska"),
        "04" => Some("Arizona"),
        "05" => Some("Arkansas"),
        "06" => Some("California"),
        "08" => Some("Colorado"),
        "09" => Some("Connecticut"),
        "10" => Some("Delaware"),
        "11" => Some("District of Columbia"),
        "12" => Some("Florida"),
        "13" => Some("Georgia"),
        "15" => Some("Hawaii"),
        "16" => Some("Idaho"),
        "17" => Some("Illinois"),
        "18" => Some("Indiana"),
        "19" => Some("Iowa"),
        "20" => Some("Kansas"),
        "21" => Some("Kentucky"),
        "22" => Some("Louisiana"),
        "23" => Some("Maine"),
        "24" => Some("Maryland"),
        "25" => Some("Massachusetts"),
        "26" => Some("Michigan"),
        "27" => Some("Minnesota"),
        "28" => Some("Mississippi"),
        "29" => Some("Missouri"),
        "30" => Some("Montana"),
        "31" => Some("Nebraska"),
        "32" => Some("Nevada"),
        "33" => Some("New Hampshire"),
        "34" => Some("New Jersey"),
        "35" => Some("New Mexico"),
        "36" => Some("New York"),
        "37" => Some("North Carolina"),
        "38" => Some("North Dakota"),
        "39" => Some("Ohio"),
        "40" => Some("Oklahoma"),
        "41" => Some("Oregon"),
        "42" => Some("Pennsylvania"),
        "44" => Some("Rhode Island"),
        "45" => Some("South Carolina"),
        "46" => Some("South Dakota"),
        "47" => Some("Tennessee"),
        "48" => Some("Texas"),
        "49" => Some("Utah"),
        "50" => Some("Vermont"),
        "51" => Some("Virginia"),
        "53" => Some("Washington"),
        "54" => Some("West Virginia"),
        "55" => Some("Wisconsin"),
        "56" => Some("Wyoming"),
        "72" => Some("Puerto Rico"),
        _ => None,
    }
}

/// State name for a state code, "Unknown" when the code is not in the table.
pub fn state_name_or_unknown(fips: &str) -> &'static str {
    state_fips_to_name(fips).unwrap_or(crate::types::UNKNOWN_NAME)
}
