use comfy_table::Table;
use rendezvous_directory::venue::Venue;
use rendezvous_matrix_providers::travel_time_matrix::TravelTimeMatrix;

pub fn ranking_table(venues: &[Venue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Venue", "City", "Postcode", "Score"]);

    for (rank, venue) in venues.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            venue.name.clone(),
            venue.city.clone().unwrap_or_default(),
            venue.postcode.clone().unwrap_or_default(),
            venue
                .score
                .map(|score| format!("{:.1}", score))
                .unwrap_or_default(),
        ]);
    }

    table
}

pub fn venues_table(venues: &[Venue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Venue", "Address", "City", "Postcode", "Coordinates"]);

    for venue in venues {
        table.add_row(vec![
            venue.name.clone(),
            venue.address1.clone().unwrap_or_default(),
            venue.city.clone().unwrap_or_default(),
            venue.postcode.clone().unwrap_or_default(),
            venue.coord_string(),
        ]);
    }

    table
}

/// Minutes, one row per origin.
pub fn matrix_table(origins: &[String], destinations: &[String], matrix: &TravelTimeMatrix) -> Table {
    let mut table = Table::new();

    let mut header = vec![String::new()];
    header.extend(destinations.iter().cloned());
    table.set_header(header);

    for (i, origin) in origins.iter().enumerate() {
        let mut row = vec![origin.clone()];
        row.extend(matrix.row(i).iter().map(|minutes| format!("{:.1}", minutes)));
        table.add_row(row);
    }

    table
}
