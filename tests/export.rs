use std::fs;

use orch_client::Appliance;
use sdwan_status::export;

#[test]
fn export_round_trips_content_and_order() {
    let appliances: Vec<Appliance> = serde_json::from_value(serde_json::json!([
        {
            "hostName": "edge-branch-1",
            "nePk": "77.NE",
            "model": "EC-XS",
            "serial": "00-11-22",
            "state": "Up",
            "reachability": "reachable",
            "softwareVersion": "9.3.2",
            "site": "Branch-1",
            "group": "Default",
            "uptime": 86400,
        },
        {
            "hostName": "edge-hub-1",
            "nePk": "3.NE",
            "managementIP": "10.0.0.2",
        },
        {},
    ]))
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appliances.json");
    export::to_json(&appliances, &path);

    let parsed: Vec<Appliance> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, appliances);
}

#[test]
fn export_uses_two_space_indent() {
    let appliances: Vec<Appliance> =
        serde_json::from_value(serde_json::json!([{"hostName": "edge-1"}])).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appliances.json");
    export::to_json(&appliances, &path);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("[\n  {\n    \"hostName\""));
}

#[test]
fn export_empty_list_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appliances.json");
    export::to_json(&[], &path);

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}
