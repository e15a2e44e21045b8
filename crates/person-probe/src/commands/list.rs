use person_probe_core::CheckSuite;

/// Print every check id with its description.
pub fn run() {
    for id in CheckSuite::all().checks() {
        println!("{:<24}{}", id.to_string(), id.description());
    }
}
