//! Identity document type mappings, keyed by `IDRegDocTypeID`.

use super::DocumentGroup::{Account, Business, Direct, National, Other, Tax};
use super::{DocumentMapping, constant, document, dynamic};

pub(crate) static DOCUMENT_MAPPINGS: &[DocumentMapping] = &[
    document(
        1236,
        "Afghan Money Service Provider License Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "AFGHAN_MSP"),
            dynamic("OTHER_ID_NUMBER"),
            constant("OTHER_ID_COUNTRY", "AF"),
        ],
    ),
    document(
        1264,
        "MMSI",
        Other,
        &[
            constant("OTHER_ID_TYPE", "MMSI"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1412,
        "Company Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "COMPANY_NUMBER"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1475,
        "Public Registration Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "PUB_REG_NUM"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1478,
        "N.I.F.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "NIF"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(1481, "RTN", Account, &[dynamic("ACCOUNT_NUMBER"), constant("ACCOUNT_DOMAIN", "RTN")]),
    document(
        1482,
        "Numero de Identidad",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "NUMERO_IDENTIDAD"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1484,
        "SRE Permit No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "SRE_PERMIT"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1492,
        "Tazkira National ID Card",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "TAZKIRA"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "AF"),
        ],
    ),
    document(
        1504,
        "License",
        Other,
        &[
            constant("OTHER_ID_TYPE", "LICENSE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1508,
        "Chinese Commercial Code",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "CHINESE_COMMERCIAL"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "CN"),
        ],
    ),
    document(
        1570,
        "Cedula No.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "CEDULA"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(1571, "Passport", Direct, &[dynamic("PASSPORT_NUMBER"), dynamic("PASSPORT_COUNTRY")]),
    document(1572, "SSN", Direct, &[dynamic("SSN_NUMBER")]),
    document(
        1573,
        "R.F.C.",
        Tax,
        &[
            constant("TAX_ID_TYPE", "RFC"),
            dynamic("TAX_ID_NUMBER"),
            dynamic("TAX_ID_COUNTRY"),
        ],
    ),
    document(
        1574,
        "D.N.I.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "DNI"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1575,
        "NIT #",
        Account,
        &[
            dynamic("ACCOUNT_NUMBER"),
            constant("ACCOUNT_DOMAIN", "NIT"),
        ],
    ),
    document(
        1576,
        "US FEIN",
        Tax,
        &[
            constant("TAX_ID_TYPE", "FEIN"),
            dynamic("TAX_ID_NUMBER"),
            constant("TAX_ID_COUNTRY", "US"),
        ],
    ),
    document(
        1577,
        "Driver's License No.",
        Direct,
        &[
            dynamic("DRIVERS_LICENSE_NUMBER"),
            dynamic("DRIVERS_LICENSE_STATE"),
        ],
    ),
    document(
        1578,
        "RUC #",
        Account,
        &[
            dynamic("ACCOUNT_NUMBER"),
            constant("ACCOUNT_DOMAIN", "RUC"),
        ],
    ),
    document(
        1579,
        "N.I.E.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "NIE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1580,
        "C.I.F.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "CIF"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1581,
        "Business Registration Document #",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "BUS_REG"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1582,
        "RIF #",
        Account,
        &[
            dynamic("ACCOUNT_NUMBER"),
            constant("ACCOUNT_DOMAIN", "RIF"),
        ],
    ),
    document(
        1584,
        "National ID No.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "NATIONAL_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1585,
        "Registration ID",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "REG_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1586,
        "LE Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "LE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1587,
        "Bosnian Personal ID No.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "PERSONAL_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "BA"),
        ],
    ),
    document(
        1588,
        "Registered Charity No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "CHARITY"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1589,
        "V.A.T. Number",
        Tax,
        &[
            constant("TAX_ID_TYPE", "VAT"),
            dynamic("TAX_ID_NUMBER"),
            dynamic("TAX_ID_COUNTRY"),
        ],
    ),
    document(
        1590,
        "Credencial electoral",
        Other,
        &[
            constant("OTHER_ID_TYPE", "ELECTORAL"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1591,
        "Kenyan ID No.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "NATIONAL_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "KE"),
        ],
    ),
    document(
        1592,
        "Italian Fiscal Code",
        Tax,
        &[
            constant("TAX_ID_TYPE", "FISCAL_CODE"),
            dynamic("TAX_ID_NUMBER"),
            constant("TAX_ID_COUNTRY", "IT"),
        ],
    ),
    document(
        1593,
        "Serial No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "SERIAL"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1594,
        "C.I.N.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "CIN"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1595,
        "C.U.I.T.",
        Account,
        &[
            dynamic("ACCOUNT_NUMBER"),
            constant("ACCOUNT_DOMAIN", "CUIT"),
        ],
    ),
    document(
        1596,
        "Tax ID No.",
        Tax,
        &[
            constant("TAX_ID_TYPE", "TIN"),
            dynamic("TAX_ID_NUMBER"),
            dynamic("TAX_ID_COUNTRY"),
        ],
    ),
    document(
        1597,
        "Moroccan Personal ID No.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "PERSONAL_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "MA"),
        ],
    ),
    document(
        1598,
        "Public Security and Immigration No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "PSI"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1600,
        "C.U.R.P.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "CURP"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "MX"),
        ],
    ),
    document(
        1601,
        "British National Overseas Passport",
        Direct,
        &[
            dynamic("PASSPORT_NUMBER"),
            constant("PASSPORT_COUNTRY", "UK"),
        ],
    ),
    document(
        1602,
        "C.R. No.",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "CR"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1603,
        "UK Company Number",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "UK_COMPANY"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "UK"),
        ],
    ),
    document(
        1604,
        "Immigration No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "IMMIGRATION"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1605,
        "Travel Document Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "TRAVEL_DOC"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1607,
        "Electoral Registry No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "ELECTORAL_REG"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1608,
        "Identification Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "IDENTIFICATION"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1609,
        "Paraguayan tax identification number",
        Tax,
        &[
            constant("TAX_ID_TYPE", "TAX_ID"),
            dynamic("TAX_ID_NUMBER"),
            constant("TAX_ID_COUNTRY", "PY"),
        ],
    ),
    document(
        1611,
        "National Foreign ID Number",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "FOREIGN_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1612,
        "RFC",
        Tax,
        &[
            constant("TAX_ID_TYPE", "RFC"),
            dynamic("TAX_ID_NUMBER"),
            dynamic("TAX_ID_COUNTRY"),
        ],
    ),
    document(
        1613,
        "Diplomatic Passport",
        Direct,
        &[
            dynamic("PASSPORT_NUMBER"),
            dynamic("PASSPORT_COUNTRY"),
        ],
    ),
    document(
        1614,
        "Dubai Chamber of Commerce Membership No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "DUBAI_CHAMBER"),
            dynamic("OTHER_ID_NUMBER"),
            constant("OTHER_ID_COUNTRY", "AE"),
        ],
    ),
    document(
        1615,
        "Trade License No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "TRADE_LICENSE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1619,
        "Commercial Registry Number",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "COMMERCIAL_REG"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1620,
        "Certificate of Incorporation Number",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "INCORPORATION"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1621,
        "Tourism License No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "TOURISM_LICENSE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1623,
        "Aircraft Serial Identification",
        Other,
        &[
            constant("OTHER_ID_TYPE", "AIRCRAFT_SERIAL"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1624,
        "Cartilla de Servicio Militar Nacional",
        Other,
        &[
            constant("OTHER_ID_TYPE", "MILITARY_SERVICE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1625,
        "C.U.I.P.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "CUIP"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1626,
        "Vessel Registration Identification",
        Other,
        &[
            constant("OTHER_ID_TYPE", "VESSEL_REG"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1627,
        "Personal ID Card",
        Other,
        &[
            constant("OTHER_ID_TYPE", "PERSONAL_ID_CARD"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1628,
        "Federal ID Card",
        Other,
        &[
            constant("OTHER_ID_TYPE", "FEDERAL_ID_CARD"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1629,
        "Registration Certificate Number (Dubai)",
        Other,
        &[
            constant("OTHER_ID_TYPE", "DUBAI_REG_CERT"),
            dynamic("OTHER_ID_NUMBER"),
            constant("OTHER_ID_COUNTRY", "AE"),
        ],
    ),
    document(
        1630,
        "VisaNumberID",
        Other,
        &[
            constant("OTHER_ID_TYPE", "VISA"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1631,
        "Matricula Mercantil No",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "MATRICULA"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1632,
        "Residency Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "RESIDENCY"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1633,
        "Numero Unico de Identificacao Tributaria (NUIT)",
        Account,
        &[
            dynamic("ACCOUNT_NUMBER"),
            constant("ACCOUNT_DOMAIN", "NUIT"),
        ],
    ),
    document(
        1634,
        "CNP (Personal Numerical Code)",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "CNP"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1635,
        "Romanian Permanent Resident",
        Other,
        &[
            constant("OTHER_ID_TYPE", "ROM_PERM_RES"),
            dynamic("OTHER_ID_NUMBER"),
            constant("OTHER_ID_COUNTRY", "RO"),
        ],
    ),
    document(
        1636,
        "Government Gazette Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "GOVT_GAZETTE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1638,
        "Fiscal Code",
        Tax,
        &[
            constant("TAX_ID_TYPE", "FISCAL_CODE"),
            dynamic("TAX_ID_NUMBER"),
            dynamic("TAX_ID_COUNTRY"),
        ],
    ),
    document(
        1639,
        "Pilot License Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "PILOT_LICENSE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1642,
        "Romanian C.R.",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "ROMANIAN_CR"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "RO"),
        ],
    ),
    document(
        1643,
        "Folio Mercantil No.",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "FOLIO"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1644,
        "Istanbul Chamber of Comm. No.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "ISTANBUL_CHAMBER"),
            dynamic("OTHER_ID_NUMBER"),
            constant("OTHER_ID_COUNTRY", "TR"),
        ],
    ),
    document(
        1645,
        "Turkish Identification Number",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "TURKISH_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "TR"),
        ],
    ),
    document(
        1646,
        "Romanian Tax Registration",
        Tax,
        &[
            constant("TAX_ID_TYPE", "TAX_REG"),
            dynamic("TAX_ID_NUMBER"),
            constant("TAX_ID_COUNTRY", "RO"),
        ],
    ),
    document(
        1647,
        "Stateless Person Passport",
        Direct,
        &[
            dynamic("PASSPORT_NUMBER"),
            dynamic("PASSPORT_COUNTRY"),
        ],
    ),
    document(
        1648,
        "Stateless Person ID Card",
        Other,
        &[
            constant("OTHER_ID_TYPE", "STATELESS_ID"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1649,
        "Refugee ID Card",
        Other,
        &[
            constant("OTHER_ID_TYPE", "REFUGEE_ID"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1712,
        "I.F.E.",
        Other,
        &[
            constant("OTHER_ID_TYPE", "IFE"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1719,
        "Branch Unit Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "BRANCH_UNIT"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1720,
        "Enterprise Number",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "ENTERPRISE"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1721,
        "Organization Code",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "ORG_CODE"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1739,
        "Citizen's Card Number",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "CITIZEN_CARD"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1740,
        "UAE Identification",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "UAE_ID"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "AE"),
        ],
    ),
    document(
        1747,
        "United Social Credit Code Certificate (USCCC)",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "USCCC"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "CN"),
        ],
    ),
    document(
        1751,
        "Chamber of Commerce Number",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "CHAMBER_COMMERCE"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1752,
        "Legal Entity Number",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "LEGAL_ENTITY"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1753,
        "Business Number",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "BUSINESS_NUMBER"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1759,
        "Birth Certificate Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "BIRTH_CERT"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1760,
        "Business Registration Number",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "BUS_REG_NUM"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1761,
        "Registration Number",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "REG_NUMBER"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1812,
        "MSB Registration Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "MSB_REG"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1835,
        "File Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "FILE_NUMBER"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        1854,
        "C.U.I.",
        National,
        &[
            constant("NATIONAL_ID_TYPE", "CUI"),
            dynamic("NATIONAL_ID_NUMBER"),
            dynamic("NATIONAL_ID_COUNTRY"),
        ],
    ),
    document(
        1891,
        "Seafarer's Identification Document",
        Other,
        &[
            constant("OTHER_ID_TYPE", "SEAFARER_ID"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        2001,
        "Unified Social Credit Code (USCC)",
        Business,
        &[
            constant("NATIONAL_ID_TYPE", "USCC"),
            dynamic("NATIONAL_ID_NUMBER"),
            constant("NATIONAL_ID_COUNTRY", "CN"),
        ],
    ),
    document(
        2067,
        "Central Registration System Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "CENTRAL_REG"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        2121,
        "Economic Register Number (CBLS)",
        Other,
        &[
            constant("OTHER_ID_TYPE", "ECON_REG_CBLS"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        2158,
        "Trademark number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "TRADEMARK"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        2159,
        "Permit Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "PERMIT"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        2728,
        "Military Registration Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "MILITARY_REG"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
    document(
        2772,
        "Russian State Individual Business Registration Number Pattern (OGRNIP)",
        Other,
        &[
            constant("OTHER_ID_TYPE", "OGRNIP"),
            dynamic("OTHER_ID_NUMBER"),
            constant("OTHER_ID_COUNTRY", "RU"),
        ],
    ),
    document(
        2790,
        "Global Intermediary Identification Number",
        Other,
        &[
            constant("OTHER_ID_TYPE", "GIIN"),
            dynamic("OTHER_ID_NUMBER"),
            dynamic("OTHER_ID_COUNTRY"),
        ],
    ),
];
