use symcheck::{ean13_check_digit, validate, Symbology};

fn main() {
    env_logger::init();

    // Complete a 12 digit payload before checking it
    let payload = "400638133393";
    let digit = ean13_check_digit(payload).expect("12 digit payload");
    let code = format!("{payload}{digit}");

    for (value, id) in [(code.as_str(), "EAN13"), ("12345", "UPCE"), ("123", "ITF"), ("2", "Pharmacode")] {
        let res = validate(value, id);
        match res.error {
            None => println!("{id:<12} {value:<15} ok"),
            Some(err) => println!("{id:<12} {value:<15} {err}"),
        }
    }

    println!();
    for s in Symbology::ALL {
        println!("{:<16} {}", s.display_name(), s.rule().description);
    }
}
