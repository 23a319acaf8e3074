// SPDX-FileCopyrightText: 2026 sdwan-status contributors
//
// SPDX-License-Identifier: MPL-2.0

use std::env;

fn main() {
    let mut args = env::args().skip(1);
    let url = args.next().expect("usage: status URL API_KEY");
    let api_key = args.next().expect("usage: status URL API_KEY");

    let mut orch = orch_client::Orchestrator::new(&url, true).unwrap();
    orch.api_key = Some(api_key);

    println!("{:#?}", orch.get_orchestrator_server_info().unwrap());
    for appliance in orch.get_appliances().unwrap() {
        println!("{:#?}", appliance);
    }
}
