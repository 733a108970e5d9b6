use serde::{Deserialize, Serialize};

/// A North Carolina municipality and its FTTX right-of-way permitting rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Municipality {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MunicipalityKind,
    pub permit_expiration: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub turnaround_days: u32,
    pub permit_fee: String,
    pub requirements: String,
    pub gis_link: String,
    pub permit_portal_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MunicipalityKind {
    City,
    County,
}

impl MunicipalityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MunicipalityKind::City => "City",
            MunicipalityKind::County => "County",
        }
    }
}

/// The builtin dataset. Constructed once at startup and never mutated;
/// iteration order is the order below and is shared by the HTML and JSON views.
pub fn builtin_dataset() -> Vec<Municipality> {
    vec![
        Municipality {
            id: 1,
            name: "Raleigh".into(),
            kind: MunicipalityKind::City,
            permit_expiration: "6 months".into(),
            contact_email: "permits@raleighnc.gov".into(),
            contact_phone: "(919) 996-3000".into(),
            turnaround_days: 14,
            permit_fee: "$150.00".into(),
            requirements: "Right-of-way permit required for all FTTX installations. \
                           Traffic control plan mandatory for major thoroughfares."
                .into(),
            gis_link: "https://maps.raleighnc.gov/iMAPS/".into(),
            permit_portal_link: "https://raleighnc.gov/permits-and-development".into(),
        },
        Municipality {
            id: 2,
            name: "Charlotte".into(),
            kind: MunicipalityKind::City,
            permit_expiration: "6 months".into(),
            contact_email: "rowpermit@charlottenc.gov".into(),
            contact_phone: "(704) 336-2891".into(),
            turnaround_days: 21,
            permit_fee: "$200.00".into(),
            requirements: "Comprehensive utility coordination required. \
                           Environmental impact assessment for sensitive areas."
                .into(),
            gis_link: "https://maps.charlotte.gov/".into(),
            permit_portal_link:
                "https://charlottenc.gov/Transportation/Programs/Pages/Right-of-Way-Permitting.aspx"
                    .into(),
        },
        Municipality {
            id: 3,
            name: "Durham".into(),
            kind: MunicipalityKind::City,
            permit_expiration: "3 months".into(),
            contact_email: "publicworks@durhamnc.gov".into(),
            contact_phone: "(919) 560-4326".into(),
            turnaround_days: 10,
            permit_fee: "$125.00".into(),
            requirements: "Standard ROW application with fiber route plans. \
                           Coordination with Duke Energy required."
                .into(),
            gis_link: "https://durhamnc.maps.arcgis.com/apps/webappviewer/index.html".into(),
            permit_portal_link: "https://durhamnc.gov/1329/Right-of-Way-Permits".into(),
        },
        Municipality {
            id: 4,
            name: "Wake County".into(),
            kind: MunicipalityKind::County,
            permit_expiration: "12 months".into(),
            contact_email: "row@wakegov.com".into(),
            contact_phone: "(919) 856-6100".into(),
            turnaround_days: 18,
            permit_fee: "$175.00".into(),
            requirements: "County-wide coordination required. \
                           Special provisions for unincorporated areas."
                .into(),
            gis_link: "https://maps.wakegov.com/".into(),
            permit_portal_link:
                "https://www.wakegov.com/departments-government/public-works/right-way-permits"
                    .into(),
        },
    ]
}
