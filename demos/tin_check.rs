use tin_check::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Offline Portuguese NIF validation (no network required)
    println!("=== Portuguese NIF Format ===\n");

    for nif in ["129792659", "129792658", "999999990", "400000000"] {
        match validate_taxpayer_nif_pt(nif) {
            Ok(()) => println!("  {nif} => valid taxpayer NIF"),
            Err(e) => println!("  {nif} => INVALID: {e}"),
        }
    }

    // Remote check against the EU TIN service
    println!("\n=== EU TIN Service ===\n");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (country, tin) = match args.as_slice() {
        [country, tin] => (country.as_str(), tin.as_str()),
        _ => ("BE", "00012511119"),
    };

    match check(country, tin) {
        Ok(result) if result.is_fault => match &result.fault {
            Some(fault) => println!("  {country} {tin} => fault {fault} (kind={})", fault.kind()),
            None => println!("  {country} {tin} => unrecognized response"),
        },
        Ok(result) => {
            println!(
                "  {country} {tin} => syntax={}, structure={}, date={}",
                result.valid_syntax,
                result.valid_structure,
                result
                    .request_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into())
            );
        }
        Err(e) => println!("  {country} {tin} => ERROR: {e}"),
    }
}
