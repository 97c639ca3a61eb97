use chrono::NaiveDate;
use heliomet::{ArrayType, HeliometError, LatLon, SolcastClient};
use std::env;

fn main() -> Result<(), HeliometError> {
    configure_polars_display();
    // Reads SOLCAST_API_KEY once, here.
    let client = SolcastClient::from_env()?;

    let payload = client
        .fetch()
        .location(LatLon(-33.8679, 151.2073))
        .start(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
        .end(NaiveDate::from_ymd_opt(2022, 1, 7).unwrap())
        .output_parameters(&["air_temp", "dni", "ghi"])
        .azimuth(30.0)
        .tilt(10.0)
        .array_type(ArrayType::Fixed)
        .call()?;

    if let Some(frame) = payload.as_table() {
        println!("{}", frame.head(Some(5)));
    }

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
