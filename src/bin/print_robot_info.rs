extern crate nao_description;

use std::env;
use std::process;
use std::str::FromStr;
use nao_description::robot_modules::robot_description_module::RobotDescriptionModule;
use nao_description::utils::utils_console::print_error;
use nao_description::utils::utils_robot::robot_variant::RobotVariant;
use nao_description::utils::utils_traits::{SaveAndLoadable, ToAndFromRonString};

fn main () {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        print_error("usage: print_robot_info <with_hand|no_hand> [ron|json]");
        process::exit(2);
    }

    let variant = match RobotVariant::from_str(&args[1]) {
        Ok(v) => { v }
        Err(_) => {
            print_error(&format!("unknown variant {}, expected with_hand or no_hand", args[1]));
            process::exit(2);
        }
    };

    // load the given variant, the model root comes from NAO_DESCRIPTION_PATH
    let robot = match RobotDescriptionModule::new_default(variant) {
        Ok(r) => { r }
        Err(e) => {
            print_error(e.message());
            process::exit(1);
        }
    };

    robot.print_summary();

    let dump = match args.get(2).map(|s| s.as_str()) {
        None => { return; }
        Some("ron") => { robot.convert_to_ron_string() }
        Some("json") => { robot.get_serialization_string() }
        Some(other) => {
            print_error(&format!("unknown output format {}", other));
            process::exit(2);
        }
    };
    match dump {
        Ok(s) => { println!("{}", s); }
        Err(e) => {
            print_error(e.message());
            process::exit(1);
        }
    }
}
