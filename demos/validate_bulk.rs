use std::error::Error;

use symcheck::{validate_bulk, BulkError, Limits};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let text = "5901234123457\nbad\n\n4006381333931\n5901234123458\n12\n34\n";
    let limits = Limits::default();

    match validate_bulk(text, "EAN13", &limits) {
        Ok(items) => println!("{} item(s) ready", items.len()),
        Err(BulkError::InvalidItems(report)) => {
            println!("{report}");
            println!("\nAs JSON: {}", serde_json::to_string_pretty(&report.failures)?);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
