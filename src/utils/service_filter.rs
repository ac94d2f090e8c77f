use serde_json::Value;

/// Destination name the arrivals boards filter for.
pub const WEST_HORNDON_NAME: &str = "West Horndon";

/// Cap on the number of services an arrivals board shows.
pub const MAX_ARRIVAL_SERVICES: usize = 5;

/// Keeps only the `trainServices` entries calling at `destination`, capped at
/// `max_services`, preserving upstream order. A board without a
/// `trainServices` array is left untouched. Field names are never changed.
///
/// The match is a case-sensitive substring test against each listed
/// destination's `locationName`.
pub fn filter_train_services(board: &mut Value, destination: &str, max_services: usize) {
    let Some(services) = board.get_mut("trainServices").and_then(Value::as_array_mut) else {
        return;
    };

    services.retain(|service| calls_at(service, destination));
    services.truncate(max_services);
}

fn calls_at(service: &Value, destination: &str) -> bool {
    service
        .get("destination")
        .and_then(Value::as_array)
        .is_some_and(|locations| {
            locations.iter().any(|location| {
                location
                    .get("locationName")
                    .and_then(Value::as_str)
                    .is_some_and(|name| name.contains(destination))
            })
        })
}
