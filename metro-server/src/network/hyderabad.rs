//! The Hyderabad Metro Rail network.
//!
//! Three corridors in running order with published platform coordinates,
//! and the interchanges between them.

use chrono::Duration;

use super::corridor::{LineCorridor, NetworkDefinition};

pub const RED_LINE: &str = "Red Line";
pub const BLUE_LINE: &str = "Blue Line";
pub const GREEN_LINE: &str = "Green Line";

/// Walking time between platforms at every interchange.
const INTERCHANGE_MINUTES: i64 = 2;

/// Build the Hyderabad Metro network definition.
///
/// Interchanges: Ameerpet (Red/Blue), MG Bus Station (Red/Green), and the
/// walkway from Parade Ground (Blue) to JBS Parade Ground (Green).
pub fn hyderabad_metro() -> NetworkDefinition {
    let penalty = Duration::minutes(INTERCHANGE_MINUTES);

    NetworkDefinition::new()
        .line(red_line())
        .line(blue_line())
        .line(green_line())
        .interchange(("Ameerpet", RED_LINE), ("Ameerpet", BLUE_LINE), penalty)
        .interchange(
            ("MG Bus Station", RED_LINE),
            ("MG Bus Station", GREEN_LINE),
            penalty,
        )
        .interchange(
            ("Parade Ground", BLUE_LINE),
            ("JBS Parade Ground", GREEN_LINE),
            penalty,
        )
}

/// Miyapur to LB Nagar.
fn red_line() -> LineCorridor {
    LineCorridor::new(RED_LINE, "#E41E26")
        .stop("Miyapur", 17.4948, 78.3973)
        .stop("JNTU College", 17.4895, 78.4029)
        .stop("KPHB Colony", 17.4842, 78.4087)
        .stop("Kukatpally", 17.4789, 78.4144)
        .stop("Balanagar", 17.4736, 78.4201)
        .stop("Moosapet", 17.4684, 78.4258)
        .stop("Bharat Nagar", 17.4631, 78.4315)
        .stop("Erragadda", 17.4578, 78.4371)
        .stop("ESI Hospital", 17.4525, 78.4428)
        .stop("SR Nagar", 17.4472, 78.4485)
        .stop("Ameerpet", 17.43782, 78.446865)
        .stop("Punjagutta", 17.4366, 78.4599)
        .stop("Irrum Manzil", 17.4314, 78.4656)
        .stop("Khairatabad", 17.4261, 78.4713)
        .stop("Lakdi-ka-pul", 17.4208, 78.4770)
        .stop("Assembly", 17.4155, 78.4827)
        .stop("Nampally", 17.4102, 78.4884)
        .stop("Gandhi Bhavan", 17.4050, 78.4941)
        .stop("Osmania Medical College", 17.3997, 78.4998)
        .stop("MG Bus Station", 17.38594, 78.48125)
        .stop("Malakpet", 17.3891, 78.5111)
        .stop("New Market", 17.3838, 78.5168)
        .stop("Musarambagh", 17.3785, 78.5225)
        .stop("Dilsukhnagar", 17.3733, 78.5282)
        .stop("Chaitanyapuri", 17.3680, 78.5339)
        .stop("Victoria Memorial", 17.3627, 78.5396)
        .stop("LB Nagar", 17.3540, 78.5451)
}

/// Nagole to Raidurg.
fn blue_line() -> LineCorridor {
    LineCorridor::new(BLUE_LINE, "#0078C1")
        .stop("Nagole", 17.3892, 78.5504)
        .stop("Uppal", 17.4030, 78.5590)
        .stop("Survey of India", 17.4020, 78.5475)
        .stop("NGRI", 17.4027, 78.5395)
        .stop("Habsiguda", 17.4073, 78.5330)
        .stop("Tarnaka", 17.4222, 78.5325)
        .stop("Mettuguda", 17.4339, 78.5205)
        .stop("Secunderabad East", 17.4390, 78.5076)
        .stop("Parade Ground", 17.4466, 78.5013)
        .stop("Paradise", 17.4442, 78.4872)
        .stop("Rasoolpura", 17.4406, 78.4783)
        .stop("Prakash Nagar", 17.4365, 78.4691)
        .stop("Begumpet", 17.4349, 78.4597)
        .stop("Ameerpet", 17.43782, 78.446865)
        .stop("Madhura Nagar", 17.4371, 78.4370)
        .stop("Yousufguda", 17.4333, 78.4300)
        .stop("Jubilee Hills Check Post", 17.4350, 78.4209)
        .stop("Peddamma Gudi", 17.4374, 78.4140)
        .stop("Madhapur", 17.4415, 78.4029)
        .stop("Durgam Cheruvu", 17.4426, 78.3958)
        .stop("Hitec City", 17.4455, 78.3877)
        .stop("Raidurg", 17.4408, 78.3816)
}

/// JBS Parade Ground to MG Bus Station.
fn green_line() -> LineCorridor {
    LineCorridor::new(GREEN_LINE, "#008B45")
        .stop("JBS Parade Ground", 17.4466, 78.5013)
        .stop("Secunderabad West", 17.4451, 78.4988)
        .stop("Gandhi Hospital", 17.4380, 78.4937)
        .stop("Musheerabad", 17.4303, 78.4921)
        .stop("RTC X Roads", 17.4213, 78.4896)
        .stop("Chikkadpally", 17.4130, 78.4882)
        .stop("Narayanguda", 17.4049, 78.4871)
        .stop("Sultan Bazar", 17.3965, 78.4852)
        .stop("MG Bus Station", 17.38594, 78.48125)
}
