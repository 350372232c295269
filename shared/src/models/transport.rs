//! Airport transfers and private drivers

use serde::{Deserialize, Serialize};

use super::fields::{CONTACT_FIELDS, FieldSpec};
use super::kind::Kind;
use super::record::{RequestMeta, ServiceRecord, or_na};

pub const FIELDS: &[FieldSpec] = &[
    CONTACT_FIELDS[0],
    CONTACT_FIELDS[1],
    FieldSpec::text("phone", "phone").required(),
    FieldSpec::text("serviceType", "service_type").required(),
    FieldSpec::text("pickupLocation", "pickup_location").required(),
    FieldSpec::text("pickupDateTime", "pickup_date_time").required(),
    FieldSpec::text("dropoffLocation", "dropoff_location").required(),
    FieldSpec::integer("passengers", "passengers").required(),
    FieldSpec::text("luggage", "luggage"),
    FieldSpec::text("vehiclePreference", "vehicle_preference"),
    FieldSpec::text("flightDetails", "flight_details"),
    FieldSpec::text("specialRequests", "special_requests"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TransportRequest {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub meta: RequestMeta,
    pub phone: Option<String>,
    pub service_type: String,
    pub pickup_location: String,
    pub pickup_date_time: String,
    pub dropoff_location: String,
    pub passengers: i64,
    pub luggage: Option<String>,
    pub vehicle_preference: Option<String>,
    pub flight_details: Option<String>,
    pub special_requests: Option<String>,
}

impl ServiceRecord for TransportRequest {
    const KIND: Kind = Kind::Transport;

    fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RequestMeta {
        &mut self.meta
    }

    fn search_extras(&self) -> Vec<&str> {
        vec![self.pickup_location.as_str(), self.dropoff_location.as_str()]
    }

    fn csv_extra_header() -> &'static [&'static str] {
        &[
            "Phone",
            "Service Type",
            "Pickup",
            "Dropoff",
            "Date/Time",
            "Passengers",
        ]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        vec![
            or_na(&self.phone),
            self.service_type.clone(),
            self.pickup_location.clone(),
            self.dropoff_location.clone(),
            self.pickup_date_time.clone(),
            self.passengers.to_string(),
        ]
    }
}
