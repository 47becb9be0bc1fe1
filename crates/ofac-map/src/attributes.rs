//! Attribute classes that decide how a dynamic attribute is resolved.

use ofac_model::attributes::OTHER_ID_COUNTRY;

const DATE_ATTRIBUTES: [&str; 8] = [
    "DATE_OF_BIRTH",
    "REGISTRATION_DATE",
    "SANCTIONS_DATE",
    "EO_14024_D2_LISTING_DATE",
    "EO_14024_D2_EFFECTIVE_DATE",
    "EO_14024_D3_LISTING_DATE",
    "EO_14024_D3_EFFECTIVE_DATE",
    "AIRCRAFT_MANUFACTURE_DATE",
];

const COUNTRY_ATTRIBUTES: [&str; 7] = [
    "CITIZENSHIP",
    "NATIONALITY",
    "REGISTRATION_COUNTRY",
    "PASSPORT_COUNTRY",
    "TAX_ID_COUNTRY",
    "NATIONAL_ID_COUNTRY",
    OTHER_ID_COUNTRY,
];

const EMAIL_ATTRIBUTES: [&str; 1] = ["EMAIL_ADDRESS"];

const ADDRESS_ATTRIBUTE: &str = "ADDR_FULL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Normalized date.
    Date,
    /// ISO2 country code resolved through the country table.
    Country,
    /// Lower-cased free text.
    Email,
    /// Joined location parts, or free text.
    Address,
    /// Free text, verbatim.
    Text,
}

impl AttributeKind {
    pub fn of(attribute: &str) -> Self {
        if DATE_ATTRIBUTES.contains(&attribute) {
            Self::Date
        } else if COUNTRY_ATTRIBUTES.contains(&attribute) {
            Self::Country
        } else if EMAIL_ATTRIBUTES.contains(&attribute) {
            Self::Email
        } else if attribute == ADDRESS_ATTRIBUTE {
            Self::Address
        } else {
            Self::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_attributes() {
        assert_eq!(AttributeKind::of("DATE_OF_BIRTH"), AttributeKind::Date);
        assert_eq!(AttributeKind::of("PASSPORT_COUNTRY"), AttributeKind::Country);
        assert_eq!(AttributeKind::of("EMAIL_ADDRESS"), AttributeKind::Email);
        assert_eq!(AttributeKind::of("ADDR_FULL"), AttributeKind::Address);
        assert_eq!(AttributeKind::of("PASSPORT_NUMBER"), AttributeKind::Text);
        assert_eq!(AttributeKind::of("ADDR_COUNTRY"), AttributeKind::Text);
    }
}
