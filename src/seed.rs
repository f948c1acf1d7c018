//! The deterministic dataset the local stores start from.

use crate::model::{
    Activity, ActivityPartner, Event, EventStatus, Partner, PartnerPoc, PartnerType, Registration,
    Volunteer,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Initial records for every family store.
///
/// [`Dataset::default`] is the standard demo seed. Tests swap individual
/// collections with the `with_*` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub events: Vec<Event>,
    pub partners: Vec<Partner>,
    pub activities: Vec<Activity>,
    pub volunteers: Vec<Volunteer>,
    pub partner_pocs: Vec<PartnerPoc>,
    pub activity_partners: Vec<ActivityPartner>,
    pub registrations: Vec<Registration>,
}

impl Dataset {
    /// No records in any family.
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            partners: Vec::new(),
            activities: Vec::new(),
            volunteers: Vec::new(),
            partner_pocs: Vec::new(),
            activity_partners: Vec::new(),
            registrations: Vec::new(),
        }
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn with_partners(mut self, partners: Vec<Partner>) -> Self {
        self.partners = partners;
        self
    }

    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = activities;
        self
    }

    pub fn with_volunteers(mut self, volunteers: Vec<Volunteer>) -> Self {
        self.volunteers = volunteers;
        self
    }

    pub fn with_partner_pocs(mut self, partner_pocs: Vec<PartnerPoc>) -> Self {
        self.partner_pocs = partner_pocs;
        self
    }

    pub fn with_activity_partners(mut self, activity_partners: Vec<ActivityPartner>) -> Self {
        self.activity_partners = activity_partners;
        self
    }

    pub fn with_registrations(mut self, registrations: Vec<Registration>) -> Self {
        self.registrations = registrations;
        self
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            events: seed_events(),
            partners: seed_partners(),
            activities: seed_activities(),
            volunteers: seed_volunteers(),
            partner_pocs: Vec::new(),
            activity_partners: seed_activity_partners(),
            registrations: Vec::new(),
        }
    }
}

fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "Community Garden Revitalization".into(),
            description: "Join us in transforming the downtown community garden into a thriving \
                          green space. We'll be planting native species, building raised beds, \
                          and creating educational signage."
                .into(),
            start_date: day(2024, 8, 15),
            start_time: "09:00".into(),
            end_date: day(2024, 8, 15),
            end_time: "15:00".into(),
            location: "Downtown Community Garden".into(),
            address: "123 Green Street, Riverside District".into(),
            registered_volunteers: 45,
            max_volunteers: 60,
            status: EventStatus::Active,
            category: "Environment".into(),
            host_id: "host1".into(),
            host_name: "Sarah Chen".into(),
            partner_id: Some("partner1".into()),
            partner_name: Some("Green Future Foundation".into()),
            created_at: at("2024-07-01T10:00:00Z"),
            updated_at: at("2024-07-20T14:30:00Z"),
            image_url: Some("/api/placeholder/400/300".into()),
            requirements: strings(&[
                "Comfortable working outdoors",
                "Able to lift 25lbs",
                "Wear closed-toe shoes",
            ]),
            tags: strings(&["gardening", "environment", "community", "outdoors"]),
        },
        Event {
            id: "2".into(),
            title: "Food Bank Distribution Drive".into(),
            description: "Help distribute essential food packages to families in need. \
                          Volunteers will sort donations, pack boxes, and assist with \
                          distribution to community members."
                .into(),
            start_date: day(2024, 8, 20),
            start_time: "08:00".into(),
            end_date: day(2024, 8, 20),
            end_time: "14:00".into(),
            location: "Central Food Bank".into(),
            address: "456 Hope Avenue, Downtown".into(),
            registered_volunteers: 127,
            max_volunteers: 150,
            status: EventStatus::Active,
            category: "Community Service".into(),
            host_id: "host2".into(),
            host_name: "Michael Rodriguez".into(),
            partner_id: Some("partner2".into()),
            partner_name: Some("City Food Alliance".into()),
            created_at: at("2024-07-05T09:00:00Z"),
            updated_at: at("2024-07-25T11:15:00Z"),
            image_url: None,
            requirements: strings(&[
                "Able to stand for extended periods",
                "Comfortable lifting 30lbs",
                "Food safety training preferred",
            ]),
            tags: strings(&["food", "distribution", "community", "families"]),
        },
        Event {
            id: "3".into(),
            title: "Beach Cleanup & Marine Conservation".into(),
            description: "Protect our marine ecosystem by removing debris from Sunset Beach. \
                          We'll also conduct water quality testing and educate visitors about \
                          ocean conservation."
                .into(),
            start_date: day(2024, 8, 25),
            start_time: "07:00".into(),
            end_date: day(2024, 8, 25),
            end_time: "12:00".into(),
            location: "Sunset Beach".into(),
            address: "Ocean Drive, Coastal District".into(),
            registered_volunteers: 89,
            max_volunteers: 100,
            status: EventStatus::Active,
            category: "Environment".into(),
            host_id: "host3".into(),
            host_name: "Dr. Amanda Foster".into(),
            partner_id: Some("partner3".into()),
            partner_name: Some("Ocean Conservation Society".into()),
            created_at: at("2024-07-10T16:00:00Z"),
            updated_at: at("2024-07-28T09:45:00Z"),
            image_url: None,
            requirements: strings(&[
                "Comfortable walking on sand",
                "Sun protection recommended",
                "Swimming ability not required",
            ]),
            tags: strings(&["beach", "cleanup", "marine", "conservation", "environment"]),
        },
    ]
}

pub fn seed_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: "partner1".into(),
            name: "Green Future Foundation".into(),
            partner_type: PartnerType::NonProfit,
            description: "Dedicated to environmental sustainability and community green spaces."
                .into(),
            contact_email: "contact@greenfuture.org".into(),
            contact_phone: "(555) 123-4567".into(),
            website: Some("https://greenfuture.org".into()),
            address: "100 Eco Drive, Green District".into(),
            events_hosted: 24,
            volunteers_engaged: 850,
            focus_areas: strings(&["Environment", "Sustainability", "Education"]),
            is_active: true,
            created_at: at("2023-01-15T00:00:00Z"),
            logo_url: Some("/api/placeholder/150/150".into()),
        },
        Partner {
            id: "partner2".into(),
            name: "TechCorp Industries".into(),
            partner_type: PartnerType::Corporate,
            description: "Technology company committed to community development and digital \
                          inclusion."
                .into(),
            contact_email: "community@techcorp.com".into(),
            contact_phone: "(555) 987-6543".into(),
            website: Some("https://techcorp.com/community".into()),
            address: "500 Innovation Boulevard, Tech Hub".into(),
            events_hosted: 18,
            volunteers_engaged: 650,
            focus_areas: strings(&["Education", "Technology", "Youth Development"]),
            is_active: true,
            created_at: at("2023-03-20T00:00:00Z"),
            logo_url: Some("/api/placeholder/150/150".into()),
        },
        Partner {
            id: "partner3".into(),
            name: "Ocean Conservation Society".into(),
            partner_type: PartnerType::NonProfit,
            description: "Protecting marine ecosystems through community action and education."
                .into(),
            contact_email: "info@oceanconservation.org".into(),
            contact_phone: "(555) 456-7890".into(),
            website: Some("https://oceanconservation.org".into()),
            address: "25 Marine Way, Coastal Area".into(),
            events_hosted: 32,
            volunteers_engaged: 1200,
            focus_areas: strings(&["Environment", "Marine Conservation", "Education"]),
            is_active: true,
            created_at: at("2022-06-10T00:00:00Z"),
            logo_url: None,
        },
        Partner {
            id: "partner4".into(),
            name: "City University".into(),
            partner_type: PartnerType::Educational,
            description: "Public university with strong community engagement programs.".into(),
            contact_email: "outreach@cityuni.edu".into(),
            contact_phone: "(555) 321-0987".into(),
            website: Some("https://cityuni.edu/community".into()),
            address: "1000 University Drive, Academic District".into(),
            events_hosted: 45,
            volunteers_engaged: 2100,
            focus_areas: strings(&["Education", "Research", "Community Development"]),
            is_active: true,
            created_at: at("2020-01-01T00:00:00Z"),
            logo_url: None,
        },
    ]
}

pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "activity1".into(),
            title: "Environmental Cleanup".into(),
            description: "General cleanup activities for parks, beaches, and community spaces."
                .into(),
            category: "Environment".into(),
            duration: 240,
            min_participants: 5,
            max_participants: 50,
            skills_required: strings(&["Physical fitness", "Teamwork"]),
            materials: strings(&["Gloves", "Trash bags", "Safety equipment"]),
            is_active: true,
            created_at: at("2024-01-01T00:00:00Z"),
            updated_at: at("2024-07-01T00:00:00Z"),
        },
        Activity {
            id: "activity2".into(),
            title: "Food Service & Distribution".into(),
            description: "Preparing and distributing meals to community members in need.".into(),
            category: "Community Service".into(),
            duration: 180,
            min_participants: 10,
            max_participants: 30,
            skills_required: strings(&["Food safety knowledge", "Customer service"]),
            materials: strings(&["Hairnets", "Gloves", "Serving utensils"]),
            is_active: true,
            created_at: at("2024-01-01T00:00:00Z"),
            updated_at: at("2024-07-01T00:00:00Z"),
        },
    ]
}

pub fn seed_volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: "vol1".into(),
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            email: "sarah.johnson@email.com".into(),
            phone: "(555) 111-2222".into(),
            skills: strings(&["Event Planning", "Community Outreach", "Public Speaking"]),
            availability: strings(&["Weekends", "Evenings"]),
            events_attended: 15,
            hours_contributed: 120,
            rating: 4.8,
            is_active: true,
            created_at: at("2023-06-15T00:00:00Z"),
            profile_image_url: None,
        },
        Volunteer {
            id: "vol2".into(),
            first_name: "Michael".into(),
            last_name: "Chen".into(),
            email: "mike.chen@email.com".into(),
            phone: "(555) 333-4444".into(),
            skills: strings(&["Photography", "Social Media", "Graphic Design"]),
            availability: strings(&["Weekends", "Flexible"]),
            events_attended: 8,
            hours_contributed: 64,
            rating: 4.9,
            is_active: true,
            created_at: at("2023-09-20T00:00:00Z"),
            profile_image_url: None,
        },
    ]
}

pub fn seed_activity_partners() -> Vec<ActivityPartner> {
    vec![ActivityPartner {
        id: "activity_partner1".into(),
        activity_id: "activity1".into(),
        partner_id: "partner1".into(),
        name: "Green Future Foundation".into(),
        is_active: true,
        created_at: at("2024-07-01T00:00:00Z"),
        updated_at: at("2024-07-01T00:00:00Z"),
    }]
}
