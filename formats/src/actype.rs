//! Aircraft type designator lookup.
//!
//! Static table mapping the ICAO type designators seen in the watch area to a readable
//! description.  Unknown codes pass through unchanged, never an error.
//!

/// Description for a type designator, if known.
///
pub fn describe(code: &str) -> Option<&'static str> {
    let desc = match code {
        "A20N" => "Airbus A320neo",
        "A21N" => "Airbus A321neo",
        "A319" => "Airbus A319",
        "A321" => "Airbus A321",
        "AA5" => "Grumman AA-5",
        "AS50" => "Eurocopter AS50",
        "B06" => "Bell 206 JetRanger",
        "B38M" => "Boeing 737 MAX 8",
        "B737" => "Boeing 737",
        "B738" => "Boeing 737-800",
        "B739" => "Boeing 737-900",
        "B772" => "Boeing 777",
        "B77W" => "Boeing 777-300ER",
        "BE20" => "Beechcraft King Air",
        "BE36" => "Beechcraft Bonanza",
        "BT36" => "Pilatus PC-6 Porter",
        "C150" => "Cessna 150",
        "C152" => "Cessna 152",
        "C17" => "C-17 Globemaster III",
        "C172" => "Cessna 172 Skyhawk",
        "C182" => "Cessna 182 Skylane",
        "C206" => "Cessna 206 Stationair",
        "C208" => "Cessna 208 Caravan",
        "C310" => "Cessna 310",
        "C750" => "Cessna Citation X",
        "COZY" => "Rutan Cozy",
        "DA40" => "Diamond DA40",
        "E295" => "Embraer E195-E2",
        "E550" => "Embraer Phenom 300",
        "E75L" => "Embraer E175",
        "EC20" => "Eurocopter EC120",
        "EC30" => "Eurocopter EC130",
        "EV97" => "EV-97 Eurostar",
        "GALX" => "Gulfstream G650/G700",
        "GLEX" => "Bombardier Global Express",
        "GLF4" => "Gulfstream IV",
        "GLST" => "Gulfstream Aerospace",
        "J3" => "Piper Cub",
        "J328" => "Fairchild 328JET",
        "K35R" => "KC-135 Stratotanker",
        "M20P" => "Mooney M20",
        "MM16" => "Mitsubishi MU-2",
        "P32R" => "Piper Saratoga",
        "PA28" => "Piper Cherokee",
        "PA32" => "Piper PA-32 Cherokee",
        "PA34" => "Piper Seneca",
        "PC12" => "Pilatus PC-12",
        "PC24" => "Pilatus PC-24",
        "R44" => "Robinson R44",
        "S22T" => "Cirrus SR22T",
        "S2T" => "Grumman S-2 Tracker",
        "T210" => "Cessna 210 Centurion",
        "V10" => "Valmet L-70 Vinka",
        _ => return None,
    };
    Some(desc)
}

/// Resolve a code into its description, passing unknown codes through.
///
pub fn resolve_type(code: &str) -> String {
    describe(code)
        .map(str::to_owned)
        .unwrap_or_else(|| code.to_owned())
}
