//! Request kinds
//!
//! One table and one endpoint family per kind; all of them share the same
//! lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::FieldSpec;
use super::status::RequestStatus;
use super::{
    booking, business, contact, food_experience, general_service, survey, tour, transport,
    waitlist, wellness,
};

/// Discriminator of the ten request categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Booking,
    Tour,
    Transport,
    FoodExperience,
    Wellness,
    Business,
    GeneralService,
    Contact,
    Survey,
    Waitlist,
}

const OPERATIONAL_STATUSES: &[RequestStatus] = &[
    RequestStatus::Pending,
    RequestStatus::Confirmed,
    RequestStatus::Completed,
    RequestStatus::Cancelled,
];

impl Kind {
    pub const ALL: [Kind; 10] = [
        Kind::Booking,
        Kind::Tour,
        Kind::Transport,
        Kind::FoodExperience,
        Kind::Wellness,
        Kind::Business,
        Kind::GeneralService,
        Kind::Contact,
        Kind::Survey,
        Kind::Waitlist,
    ];

    /// Path segment under `/api/`
    pub const fn slug(&self) -> &'static str {
        match self {
            Kind::Booking => "booking",
            Kind::Tour => "tours",
            Kind::Transport => "transport",
            Kind::FoodExperience => "food-experiences",
            Kind::Wellness => "wellness",
            Kind::Business => "business",
            Kind::GeneralService => "general-services",
            Kind::Contact => "contact",
            Kind::Survey => "surveys",
            Kind::Waitlist => "waitlist",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn base_path(&self) -> String {
        format!("/api/{}", self.slug())
    }

    pub const fn table(&self) -> &'static str {
        match self {
            Kind::Booking => "booking_requests",
            Kind::Tour => "tour_bookings",
            Kind::Transport => "transport_requests",
            Kind::FoodExperience => "food_experiences",
            Kind::Wellness => "wellness_requests",
            Kind::Business => "business_collaborations",
            Kind::GeneralService => "general_service_requests",
            Kind::Contact => "contact_messages",
            Kind::Survey => "survey_responses",
            Kind::Waitlist => "waitlist_entries",
        }
    }

    /// Human label, used in log lines and error messages
    pub const fn label(&self) -> &'static str {
        match self {
            Kind::Booking => "booking request",
            Kind::Tour => "tour booking",
            Kind::Transport => "transport request",
            Kind::FoodExperience => "food experience",
            Kind::Wellness => "wellness request",
            Kind::Business => "business collaboration",
            Kind::GeneralService => "general service request",
            Kind::Contact => "contact message",
            Kind::Survey => "survey response",
            Kind::Waitlist => "waitlist entry",
        }
    }

    /// Form fields, in declaration order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Kind::Booking => booking::FIELDS,
            Kind::Tour => tour::FIELDS,
            Kind::Transport => transport::FIELDS,
            Kind::FoodExperience => food_experience::FIELDS,
            Kind::Wellness => wellness::FIELDS,
            Kind::Business => business::FIELDS,
            Kind::GeneralService => general_service::FIELDS,
            Kind::Contact => contact::FIELDS,
            Kind::Survey => survey::FIELDS,
            Kind::Waitlist => waitlist::FIELDS,
        }
    }

    /// Statuses the triage UI may set. `Pending` is always first: it is the
    /// implicit state of a fresh record.
    pub fn statuses(&self) -> &'static [RequestStatus] {
        match self {
            Kind::Contact => &[
                RequestStatus::Pending,
                RequestStatus::Unread,
                RequestStatus::Read,
            ],
            Kind::Survey => &[
                RequestStatus::Pending,
                RequestStatus::Reviewed,
                RequestStatus::Contacted,
            ],
            Kind::Waitlist => &[
                RequestStatus::Pending,
                RequestStatus::Contacted,
                RequestStatus::Approved,
            ],
            _ => OPERATIONAL_STATUSES,
        }
    }

    pub fn allows(&self, status: RequestStatus) -> bool {
        self.statuses().contains(&status)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Dashboard counters for one kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStats {
    pub total: i64,
    /// Records whose effective status is pending
    pub pending: i64,
}
