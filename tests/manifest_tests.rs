//! Car placement tests
//!
//! Cars must always be ordered by how far along the route their
//! destination is, whatever order they were added in.

use train_yard::simulation::{CarError, CarManifest, RouteTrack};

fn route(stations: &[(&str, f64)]) -> RouteTrack {
    let mut route = RouteTrack::new();
    for (name, distance) in stations {
        route.add_station(*name, *distance).unwrap();
    }
    route
}

fn four_stop_route() -> RouteTrack {
    route(&[("Home", 0.0), ("A", 5.0), ("B", 10.0), ("C", 20.0), ("D", 35.0)])
}

fn order(manifest: &CarManifest) -> Vec<(String, String)> {
    manifest
        .iter()
        .map(|car| (car.content.clone(), car.destination.clone()))
        .collect()
}

fn destinations(manifest: &CarManifest) -> Vec<String> {
    manifest.iter().map(|car| car.destination.clone()).collect()
}

fn assert_route_ordered(route: &RouteTrack, manifest: &CarManifest) {
    let positions: Vec<f64> = manifest
        .iter()
        .map(|car| route.find(&car.destination).unwrap().distance.into_inner())
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] <= pair[1]),
        "manifest out of route order: {:?}",
        destinations(manifest)
    );
}

#[test]
fn test_add_car_without_route() {
    let route = RouteTrack::new();
    let mut manifest = CarManifest::new();
    assert_eq!(manifest.add_car(&route, "Coal", "A"), Err(CarError::NoRoute));
    assert!(manifest.is_empty());
}

#[test]
fn test_add_car_to_home_rejected() {
    let route = route(&[("Home", 0.0), ("B", 10.0)]);
    let mut manifest = CarManifest::new();

    manifest.add_car(&route, "Widgets", "B").unwrap();
    assert_eq!(
        manifest.add_car(&route, "Gadgets", "Home"),
        Err(CarError::DestinationIsHome {
            home: "Home".to_string()
        })
    );
    assert_eq!(manifest.len(), 1);
}

#[test]
fn test_add_car_to_unknown_station_rejected() {
    let mut route = route(&[("Home", 0.0), ("B", 10.0)]);
    let mut manifest = CarManifest::new();

    assert_eq!(
        manifest.add_car(&route, "X", "Z"),
        Err(CarError::UnknownStation {
            name: "Z".to_string()
        })
    );
    assert!(manifest.is_empty());

    route.add_station("Z", 20.0).unwrap();
    manifest.add_car(&route, "X", "Z").unwrap();
    assert_eq!(destinations(&manifest), vec!["Z"]);
}

#[test]
fn test_first_car_becomes_head() {
    let route = four_stop_route();
    let mut manifest = CarManifest::new();
    manifest.add_car(&route, "Steel", "C").unwrap();
    assert_eq!(manifest.front().map(|car| car.content.as_str()), Some("Steel"));
}

#[test]
fn test_reverse_insertion_is_sorted() {
    let route = four_stop_route();
    let mut manifest = CarManifest::new();
    for destination in ["D", "C", "B", "A"] {
        manifest.add_car(&route, "Cargo", destination).unwrap();
        assert_route_ordered(&route, &manifest);
    }
    assert_eq!(destinations(&manifest), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_car_for_last_station_goes_to_tail() {
    let route = four_stop_route();
    let mut manifest = CarManifest::new();
    manifest.add_car(&route, "one", "A").unwrap();
    manifest.add_car(&route, "two", "B").unwrap();
    manifest.add_car(&route, "three", "B").unwrap();
    manifest.add_car(&route, "four", "C").unwrap();

    manifest.add_car(&route, "last", "D").unwrap();
    assert_eq!(destinations(&manifest), vec!["A", "B", "B", "C", "D"]);
    assert_route_ordered(&route, &manifest);
}

#[test]
fn test_multiple_cars_per_station_before_later_car() {
    // Two cars for B already present; a car for C must land after both
    let route = four_stop_route();
    let mut manifest = CarManifest::new();
    manifest.add_car(&route, "b1", "B").unwrap();
    manifest.add_car(&route, "b2", "B").unwrap();
    manifest.add_car(&route, "c1", "C").unwrap();

    assert_eq!(destinations(&manifest), vec!["B", "B", "C"]);
}

#[test]
fn test_new_car_goes_before_cars_for_same_station() {
    let route = four_stop_route();
    let mut manifest = CarManifest::new();
    manifest.add_car(&route, "first", "B").unwrap();
    manifest.add_car(&route, "far", "D").unwrap();
    manifest.add_car(&route, "second", "B").unwrap();

    assert_eq!(
        order(&manifest),
        vec![
            ("second".to_string(), "B".to_string()),
            ("first".to_string(), "B".to_string()),
            ("far".to_string(), "D".to_string()),
        ]
    );
}

#[test]
fn test_mixed_insertions_keep_route_order() {
    let route = four_stop_route();
    let mut manifest = CarManifest::new();
    let plan = ["C", "A", "D", "B", "C", "A", "D", "D", "B", "A"];
    for (i, destination) in plan.iter().enumerate() {
        manifest
            .add_car(&route, format!("car{}", i), *destination)
            .unwrap();
        assert_route_ordered(&route, &manifest);
    }
    assert_eq!(manifest.len(), plan.len());
    assert_eq!(
        destinations(&manifest),
        vec!["A", "A", "A", "B", "B", "C", "C", "D", "D", "D"]
    );
}

#[test]
fn test_skipped_stations_do_not_confuse_placement() {
    // No cars for A or C; only the stations that have cars matter
    let route = four_stop_route();
    let mut manifest = CarManifest::new();
    manifest.add_car(&route, "d", "D").unwrap();
    manifest.add_car(&route, "b", "B").unwrap();
    manifest.add_car(&route, "c", "C").unwrap();
    assert_eq!(destinations(&manifest), vec!["B", "C", "D"]);
}

#[test]
fn test_render_and_pop_front() {
    let route = four_stop_route();
    let mut manifest = CarManifest::new();
    manifest.add_car(&route, "Milk", "B").unwrap();
    manifest.add_car(&route, "Eggs", "A").unwrap();

    let rendered: Vec<String> = manifest.render().iter().map(|car| car.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "Contents: Eggs , Destination: A",
            "Contents: Milk , Destination: B"
        ]
    );

    assert_eq!(manifest.pop_front().unwrap().content, "Eggs");
    assert_eq!(manifest.pop_front().unwrap().content, "Milk");
    assert_eq!(manifest.pop_front(), Err(CarError::EmptyManifest));
}
