//! Feature type mappings.
//!
//! One entry per known `FeatureTypeID`. Entries targeting a record payload
//! describe the party rather than identify it (vessel particulars, program
//! notes, directive dates) and are merged as top-level scalars.

use super::{FeatureMapping, constant, dynamic, feature, payload};

pub(crate) static FEATURE_MAPPINGS: &[FeatureMapping] = &[
    // Vessels
    feature(
        1,
        "Vessel Call Sign",
        &[
            constant("OTHER_ID_TYPE", "CALL_SIGN"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    payload(2, "Vessel Type", &[dynamic("VESSEL_TYPE")]),
    payload(3, "Vessel Flag", &[dynamic("VESSEL_FLAG")]),
    payload(4, "Vessel Owner", &[dynamic("VESSEL_OWNER")]),
    payload(5, "Vessel Tonnage", &[dynamic("VESSEL_TONNAGE")]),
    payload(6, "Vessel Gross Registered Tonnage", &[dynamic("VESSEL_TONNAGE")]),
    payload(24, "Former Vessel Flag", &[dynamic("FORMER_VESSEL_FLAG")]),
    payload(26, "Other Vessel Flag", &[dynamic("OTHER_VESSEL_FLAG")]),
    payload(27, "Other Vessel Type", &[dynamic("OTHER_VESSEL_TYPE")]),
    feature(
        28,
        "Other Vessel Call Sign",
        &[
            constant("OTHER_ID_TYPE", "CALL_SIGN"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        29,
        "Vessel Registration Identification",
        &[
            constant("OTHER_ID_TYPE", "IMO"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(30, "MMSI", &[constant("OTHER_ID_TYPE", "MMSI"), dynamic("OTHER_ID_NUMBER")]),
    // Individuals
    feature(8, "Birthdate", &[dynamic("DATE_OF_BIRTH")]),
    feature(9, "Place of Birth", &[dynamic("PLACE_OF_BIRTH")]),
    feature(10, "Nationality Country", &[dynamic("NATIONALITY")]),
    feature(11, "Citizenship Country", &[dynamic("CITIZENSHIP")]),
    payload(13, "Title", &[dynamic("TITLE")]),
    feature(224, "Gender", &[dynamic("GENDER")]),
    feature(91264, "Passport", &[dynamic("PASSPORT_NUMBER"), dynamic("PASSPORT_COUNTRY")]),
    feature(
        91265,
        "National ID No.",
        &[
            constant("NATIONAL_ID_TYPE", "NATIONAL_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
        ],
    ),
    feature(91266, "Tax ID No.", &[constant("TAX_ID_TYPE", "TAX_ID"), dynamic("TAX_ID_NUMBER")]),
    // Contact and location
    feature(14, "Website", &[dynamic("WEBSITE_ADDRESS")]),
    feature(21, "Email Address", &[dynamic("EMAIL_ADDRESS")]),
    feature(25, "Location", &[dynamic("ADDR_FULL")]),
    feature(264, "Phone Number", &[dynamic("PHONE_NUMBER")]),
    feature(265, "Fax", &[constant("PHONE_TYPE", "FAX"), dynamic("PHONE_NUMBER")]),
    // Organizations
    feature(365, "Nationality of Registration", &[dynamic("REGISTRATION_COUNTRY")]),
    feature(504, "Organization Established Date", &[dynamic("REGISTRATION_DATE")]),
    payload(524, "Organization Type:", &[dynamic("ORGANIZATION_TYPE")]),
    payload(525, "Target Type", &[dynamic("TARGET_TYPE")]),
    feature(
        526,
        "D-U-N-S Number",
        &[
            constant("OTHER_ID_TYPE", "DUNS"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        527,
        "SWIFT/BIC",
        &[
            constant("OTHER_ID_TYPE", "SWIFT_BIC"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        528,
        "Legal Entity Number",
        &[
            constant("OTHER_ID_TYPE", "LEI"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        529,
        "UK Company Number",
        &[
            constant("OTHER_ID_TYPE", "UK_COMPANY_NUMBER"),
            dynamic("OTHER_ID_NUMBER"),
            constant("OTHER_ID_COUNTRY", "GB"),
        ],
    ),
    feature(
        530,
        "Registration Number",
        &[
            constant("OTHER_ID_TYPE", "REGISTRATION_NUMBER"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(531, "Registration Country", &[dynamic("REGISTRATION_COUNTRY")]),
    feature(
        566,
        "Equity Ticker",
        &[
            constant("OTHER_ID_TYPE", "EQUITY_TICKER"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(567, "ISIN", &[constant("OTHER_ID_TYPE", "ISIN"), dynamic("OTHER_ID_NUMBER")]),
    // Aircraft
    feature(
        91,
        "Aircraft Construction Number (also called L/N or S/N or F/N)",
        &[
            constant("OTHER_ID_TYPE", "AIRCRAFT_CONSTRUCTION_NUMBER"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    payload(92, "Aircraft Manufacture Date", &[dynamic("AIRCRAFT_MANUFACTURE_DATE")]),
    payload(93, "Aircraft Model", &[dynamic("AIRCRAFT_MODEL")]),
    payload(94, "Aircraft Operator", &[dynamic("AIRCRAFT_OPERATOR")]),
    feature(
        95,
        "Aircraft Manufacturer's Serial Number (MSN)",
        &[
            constant("OTHER_ID_TYPE", "AIRCRAFT_MSN"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        96,
        "Aircraft Tail Number",
        &[
            constant("OTHER_ID_TYPE", "AIRCRAFT_TAIL_NUMBER"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    payload(97, "Previous Aircraft Tail Number", &[dynamic("PREVIOUS_AIRCRAFT_TAIL_NUMBER")]),
    // Digital currency addresses
    feature(
        344,
        "Digital Currency Address - XBT",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_XBT"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        345,
        "Digital Currency Address - ETH",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_ETH"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        444,
        "Digital Currency Address - XMR",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_XMR"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        445,
        "Digital Currency Address - LTC",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_LTC"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        686,
        "Digital Currency Address - ZEC",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_ZEC"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        687,
        "Digital Currency Address - DASH",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_DASH"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        688,
        "Digital Currency Address - BTG",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_BTG"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        689,
        "Digital Currency Address - ETC",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_ETC"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        706,
        "Digital Currency Address - BSV",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_BSV"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        726,
        "Digital Currency Address - BCH",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_BCH"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        746,
        "Digital Currency Address - XVG",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_XVG"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        887,
        "Digital Currency Address - USDT",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_USDT"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        907,
        "Digital Currency Address - XRP",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_XRP"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        947,
        "Digital Currency Address - TRX",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_TRX"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    feature(
        987,
        "Digital Currency Address - USDC",
        &[
            constant("OTHER_ID_TYPE", "DIGITAL_CURRENCY_USDC"),
            dynamic("OTHER_ID_NUMBER"),
        ],
    ),
    // Program information
    payload(125, "Additional Sanctions Information -", &[dynamic("ADDITIONAL_SANCTIONS_INFO")]),
    payload(126, "Secondary sanctions risk:", &[dynamic("SECONDARY_SANCTIONS_RISK")]),
    payload(
        127,
        "Transactions Prohibited For Persons Owned or Controlled By U.S. Financial Institutions:",
        &[
            dynamic("TRANSACTIONS_PROHIBITED"),
        ],
    ),
    payload(
        128,
        "Executive Order 13662 Directive Determination -",
        &[
            dynamic("EO_13662_DIRECTIVE"),
        ],
    ),
    payload(129, "Executive Order 13846 information:", &[dynamic("EO_13846_INFO")]),
    payload(130, "CAATSA Section 235 Information:", &[dynamic("CAATSA_235_INFO")]),
    payload(131, "IFCA Determination -", &[dynamic("IFCA_DETERMINATION")]),
    payload(132, "Listing Date (CMIC)", &[dynamic("SANCTIONS_DATE")]),
    payload(134, "Listing Date (EO 14024 Directive 2):", &[dynamic("EO_14024_D2_LISTING_DATE")]),
    payload(
        135,
        "Effective Date (EO 14024 Directive 2):",
        &[
            dynamic("EO_14024_D2_EFFECTIVE_DATE"),
        ],
    ),
    payload(136, "Listing Date (EO 14024 Directive 3):", &[dynamic("EO_14024_D3_LISTING_DATE")]),
    payload(
        137,
        "Effective Date (EO 14024 Directive 3):",
        &[
            dynamic("EO_14024_D3_EFFECTIVE_DATE"),
        ],
    ),
];
