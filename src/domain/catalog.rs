//! Static page content: company details, services, hubs, testimonials, jobs.

pub struct Company {
    pub name: &'static str,
    pub legal_name: &'static str,
    pub url: &'static str,
    pub phone_display: &'static str,
    pub phone_e164: &'static str,
    pub email: &'static str,
    pub street: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
    pub founded: u16,
}

pub const COMPANY: Company = Company {
    name: "TYRAS",
    legal_name: "TYRAS Group",
    url: "https://tyrasgroup.com",
    phone_display: "1-800-123-4567",
    phone_e164: "+1-800-123-4567",
    email: "info@tyrasgroup.com",
    street: "123 Transport Way, Suite 400",
    locality: "Toronto",
    region: "ON",
    postal_code: "M5V 2K7",
    country: "CA",
    founded: 2010,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub teaser: &'static str,
    pub details: [&'static str; 4],
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "🚚",
        title: "Open Carrier Transport",
        teaser: "Cost-effective multi-vehicle transport across borders.",
        details: [
            "Up to 10 vehicles per load",
            "Daily departures from major hubs",
            "Real-time GPS tracking",
            "Door-to-door service",
        ],
    },
    Service {
        icon: "🚗",
        title: "Enclosed Premium",
        teaser: "White-glove service for luxury and classic vehicles.",
        details: [
            "Climate-controlled trailers",
            "Soft-tie securing system",
            "Dedicated single-vehicle option",
            "Insurance up to $1M per vehicle",
        ],
    },
    Service {
        icon: "🚆",
        title: "Rail + Road Combo",
        teaser: "Hybrid solutions for long-distance economy.",
        details: [
            "Coast-to-coast coverage",
            "30% cost savings vs. road only",
            "Weekly scheduled departures",
            "Intermodal tracking",
        ],
    },
    Service {
        icon: "🚢",
        title: "Container Shipping",
        teaser: "Ocean-ready solutions for overseas exports.",
        details: [
            "FCL and LCL options",
            "Port-to-port coordination",
            "Export documentation support",
            "Customs pre-clearance",
        ],
    },
    Service {
        icon: "📋",
        title: "Customs Brokerage",
        teaser: "Seamless border clearance, fully compliant.",
        details: [
            "Licensed customs brokers",
            "USMCA compliance",
            "RIV processing (Canada)",
            "EPA/DOT documentation",
        ],
    },
    Service {
        icon: "🏭",
        title: "Secure Storage",
        teaser: "Bonded warehouses on both sides of the border.",
        details: [
            "24/7 security surveillance",
            "Climate-controlled options",
            "Short and long-term rates",
            "Inspection facilities on-site",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        icon: "📅",
        title: "Book Online or Call",
        description: "Get an instant quote and schedule your pickup in minutes. Our team is available 24/7 to assist you.",
    },
    Step {
        icon: "🔍",
        title: "Vehicle Pickup & Inspection",
        description: "Professional drivers conduct a thorough inspection and photo documentation before loading.",
    },
    Step {
        icon: "🛃",
        title: "Customs Clearance",
        description: "Our bonded brokers handle all CBSA and CBP documentation. Zero hassle border crossing.",
    },
    Step {
        icon: "🚚",
        title: "24-Hour Delivery Window",
        description: "Track your vehicle in real-time and receive it within a precise delivery window.",
    },
];

/// A hub on the coverage map; `x`/`y` are percentages of the map box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hub {
    pub city: &'static str,
    pub country: &'static str,
    pub x: f32,
    pub y: f32,
    pub transit: &'static str,
    pub departures: &'static str,
}

pub const HUBS: [Hub; 8] = [
    Hub { city: "Toronto", country: "CA", x: 73.0, y: 52.0, transit: "1-2 days", departures: "Daily" },
    Hub { city: "Montréal", country: "CA", x: 78.0, y: 48.0, transit: "1-2 days", departures: "Daily" },
    Hub { city: "Calgary", country: "CA", x: 38.0, y: 42.0, transit: "2-3 days", departures: "3x weekly" },
    Hub { city: "Vancouver", country: "CA", x: 22.0, y: 45.0, transit: "3-4 days", departures: "Daily" },
    Hub { city: "Chicago", country: "US", x: 62.0, y: 58.0, transit: "1-2 days", departures: "Daily" },
    Hub { city: "Miami", country: "US", x: 74.0, y: 82.0, transit: "3-4 days", departures: "4x weekly" },
    Hub { city: "Houston", country: "US", x: 52.0, y: 78.0, transit: "2-3 days", departures: "5x weekly" },
    Hub { city: "New York", country: "US", x: 80.0, y: 55.0, transit: "1-2 days", departures: "Daily" },
];

/// Lanes drawn between hubs, as indices into [`HUBS`].
pub const HUB_LANES: [(usize, usize); 7] = [(0, 1), (0, 4), (4, 6), (4, 7), (7, 5), (2, 3), (2, 4)];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub vehicle: &'static str,
    pub route: &'static str,
    pub date: &'static str,
    pub rating: u8,
    pub comment: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Michael Chen",
        company: "AutoMax Dealership",
        vehicle: "2024 BMW X5",
        route: "Toronto → Miami",
        date: "January 2024",
        rating: 5,
        comment: "Flawless cross-border delivery. The customs process was completely handled for us. Vehicle arrived in perfect condition.",
    },
    Testimonial {
        name: "Sarah Thompson",
        company: "Premium Motors Inc.",
        vehicle: "2023 Mercedes S-Class",
        route: "Vancouver → Los Angeles",
        date: "December 2023",
        rating: 5,
        comment: "We ship 50+ vehicles monthly with TYRAS. Their enclosed transport service is unmatched for luxury vehicles.",
    },
    Testimonial {
        name: "Jean-Pierre Dubois",
        company: "Québec Auto Imports",
        vehicle: "2023 Porsche 911",
        route: "New York → Montréal",
        date: "January 2024",
        rating: 5,
        comment: "Service bilingue impeccable! The RIV paperwork was handled seamlessly. Our go-to for US imports.",
    },
    Testimonial {
        name: "David Martinez",
        company: "Texas Car Auctions",
        vehicle: "Fleet of 8 vehicles",
        route: "Calgary → Houston",
        date: "November 2023",
        rating: 5,
        comment: "Moved our entire fleet in under a week. Competitive pricing and excellent communication throughout.",
    },
    Testimonial {
        name: "Emily Watson",
        company: "Classic Car Collector",
        vehicle: "1967 Mustang Shelby",
        route: "Detroit → Toronto",
        date: "October 2023",
        rating: 5,
        comment: "Trusted them with my prized classic. The enclosed transport and extra care they provided was worth every penny.",
    },
];

/// Moves a carousel position one card forward or back, wrapping at both ends.
pub fn step_carousel(current: usize, forward: bool, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current % len;
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: f64,
    pub suffix: &'static str,
    pub decimals: usize,
    pub label: &'static str,
    pub description: &'static str,
}

impl Stat {
    pub fn display(&self) -> String {
        format!("{:.*}{}", self.decimals, self.value, self.suffix)
    }
}

pub const SAFETY_STATS: [Stat; 3] = [
    Stat {
        icon: "🛡️",
        value: 12.0,
        suffix: "M+",
        decimals: 0,
        label: "Miles Driven Safely",
        description: "Accident-free miles across North America",
    },
    Stat {
        icon: "⏱️",
        value: 98.7,
        suffix: "%",
        decimals: 1,
        label: "On-Time Delivery",
        description: "Arriving within the promised window",
    },
    Stat {
        icon: "🏅",
        value: 0.0,
        suffix: "",
        decimals: 2,
        label: "DOT Reportable Accidents",
        description: "Zero incidents. Zero compromises.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub name: &'static str,
    pub description: &'static str,
}

pub const TRUST_BADGES: [Badge; 4] = [
    Badge { name: "C-TPAT", description: "Customs-Trade Partnership Against Terrorism" },
    Badge { name: "CBSA", description: "Canada Border Services Agency Approved" },
    Badge { name: "FMCSA", description: "Federal Motor Carrier Safety Administration" },
    Badge { name: "A+ BBB", description: "Better Business Bureau A+ Rating" },
];

pub const COMPLIANCE_BADGES: [Badge; 4] = [
    Badge { name: "C-TPAT", description: "Customs-Trade Partnership Against Terrorism" },
    Badge { name: "PIP", description: "Partners in Protection (Canada)" },
    Badge { name: "FAST", description: "Free and Secure Trade" },
    Badge { name: "SCAC", description: "Standard Carrier Alpha Code" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub salary: &'static str,
    pub department: &'static str,
    pub description: &'static str,
}

impl Job {
    pub fn is_full_time(&self) -> bool {
        self.kind == "Full-time"
    }
}

pub const JOBS: [Job; 4] = [
    Job {
        id: 1,
        title: "CDL-A Driver",
        location: "Toronto, ON",
        kind: "Full-time",
        salary: "$65,000 - $85,000/yr",
        department: "Operations",
        description: "Join our fleet of professional drivers transporting vehicles across North America.",
    },
    Job {
        id: 2,
        title: "Dispatcher",
        location: "Calgary, AB",
        kind: "Full-time",
        salary: "$50,000 - $65,000/yr",
        department: "Logistics",
        description: "Coordinate fleet movements and ensure on-time deliveries across routes.",
    },
    Job {
        id: 3,
        title: "Customs Broker Intern",
        location: "Montréal, QC",
        kind: "Internship",
        salary: "$22 - $28/hr",
        department: "Compliance",
        description: "Learn cross-border customs procedures under licensed broker supervision.",
    },
    Job {
        id: 4,
        title: "Fleet Maintenance Technician",
        location: "Detroit, MI",
        kind: "Full-time",
        salary: "$55,000 - $70,000/yr",
        department: "Maintenance",
        description: "Maintain our fleet of car carriers to DOT standards.",
    },
];

pub const ALL_DEPARTMENTS: &str = "All";

pub const DEPARTMENTS: [&str; 5] = [ALL_DEPARTMENTS, "Operations", "Logistics", "Compliance", "Maintenance"];

pub const BENEFITS: [&str; 4] = ["Competitive pay", "Health benefits", "401(k) matching", "Paid time off"];

pub fn jobs_in(department: &str) -> Vec<&'static Job> {
    JOBS.iter()
        .filter(|job| department == ALL_DEPARTMENTS || job.department == department)
        .collect()
}

/// Message prefilled into the contact form when "Apply" is pressed on a job card.
pub fn application_message(job: &Job) -> String {
    format!("I'd like to apply for the {} position ({}).", job.title, job.location)
}
